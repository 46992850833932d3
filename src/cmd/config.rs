use anstream::{print, println};
use anyhow::Result;
use clap::Args;
use owo_colors::OwoColorize;

use crate::{
    config::{global_file_path, CONFIG_FILE},
    Context,
};

#[derive(Debug, Args)]
pub struct ConfigArgs {
    /// Only display the path of the global config file
    #[arg(long)]
    path: bool,
}

pub fn run(ctx: &Context, args: ConfigArgs) -> Result<()> {
    let global = global_file_path(CONFIG_FILE)?;
    if args.path {
        println!("{global}");
        return Ok(());
    }

    print!("{} {} ", global, "--".dimmed());
    if global.is_file() {
        println!("{}", "found".green());
    } else {
        println!("{}", "not found".red());
    }
    println!();
    print!("{}", toml::to_string_pretty(&ctx.config)?);
    Ok(())
}
