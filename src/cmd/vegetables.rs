use anstream::{print, println};
use anyhow::Result;
use clap::Args;
use kitchen_recipe::Vegetable;
use owo_colors::OwoColorize;

#[derive(Debug, Args)]
pub struct VegetablesArgs {
    /// Show the alternative names accepted for each vegetable
    #[arg(short, long)]
    long: bool,

    /// Show vegetable count only
    #[arg(short = 'n', long, conflicts_with = "long")]
    count: bool,

    /// Writes all vegetables in json format, one per line
    #[arg(long, exclusive = true)]
    dump: bool,
}

pub fn run(args: VegetablesArgs) -> Result<()> {
    if args.dump {
        for vegetable in Vegetable::known() {
            let value = serde_json::json!({
                "name": vegetable.name(),
                "aliases": vegetable.aliases(),
            });
            println!("{}", serde_json::to_string(&value)?);
        }
        return Ok(());
    }

    if args.count {
        println!("{}", Vegetable::known().count());
        return Ok(());
    }

    let mut table = if args.long {
        tabular::Table::new("{:<}  {:<}")
    } else {
        tabular::Table::new("{:<}")
    };
    for vegetable in Vegetable::known() {
        let mut row = tabular::Row::new().with_cell(vegetable.name());
        if args.long {
            row.add_ansi_cell(display_aliases(vegetable.aliases()));
        }
        table.add_row(row);
    }
    print!("{table}");
    Ok(())
}

fn display_aliases(aliases: &[&str]) -> String {
    if aliases.is_empty() {
        "-".dimmed().to_string()
    } else {
        aliases.join(", ").italic().to_string()
    }
}
