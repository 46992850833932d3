use std::io::Write;

use anstream::{eprintln, println};
use anyhow::{bail, Context as _, Result};
use camino::{Utf8Path, Utf8PathBuf};
use clap::{Args, ValueEnum};
use kitchen_recipe::{Recipe, Vegetable};
use owo_colors::OwoColorize;
use serde::{Deserialize, Serialize};

use crate::{
    util::{write_to_output, Input},
    Context,
};

#[derive(Debug, Args)]
pub struct RecipeArgs {
    /// Input recipe document, none or `-` for stdin
    #[arg(value_hint = clap::ValueHint::FilePath)]
    input: Option<Utf8PathBuf>,

    /// Format of the input document
    ///
    /// Tries to infer it from the input file extension. Defaults to TOML.
    #[arg(short, long, value_enum)]
    input_format: Option<DocumentFormat>,

    /// Output file, none for stdout.
    #[arg(short, long)]
    output: Option<Utf8PathBuf>,

    /// Output format
    ///
    /// Tries to infer it from output file extension. Defaults to the
    /// configured format.
    #[arg(short, long, value_enum)]
    format: Option<OutputFormat>,

    /// Pretty output format, if available
    #[arg(long)]
    pretty: bool,

    /// Only check the recipe is valid
    #[arg(long, conflicts_with_all = ["output", "format", "pretty"])]
    check: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum DocumentFormat {
    Toml,
    Json,
}

#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Human,
    Json,
    Toml,
}

pub fn run(ctx: &Context, args: RecipeArgs) -> Result<()> {
    let input = Input::read(args.input.as_deref())?;
    let format = args
        .input_format
        .or_else(|| input.path().and_then(document_format_from_path))
        .unwrap_or(DocumentFormat::Toml);

    let recipe = parse(&input, format, ctx.config.strict_vegetables);

    if args.check {
        return match recipe {
            Ok(recipe) => {
                println!("{}: {}", input.file_name(), "OK".green().bold());
                tracing::info!(vegetables = recipe.len(), "'{}' is valid", recipe.name());
                Ok(())
            }
            Err(e) => {
                eprintln!("{}: {}", input.file_name(), "invalid".red().bold());
                Err(e)
            }
        };
    }
    let recipe = recipe?;

    let format = args
        .format
        .or_else(|| args.output.as_deref().and_then(output_format_from_path))
        .unwrap_or(ctx.config.default_format);
    let pretty = args.pretty || ctx.config.pretty;

    write_to_output(args.output.as_deref(), |mut writer| {
        match format {
            OutputFormat::Human => kitchen_to_human::print_human(&recipe, writer)?,
            OutputFormat::Json => {
                writeln!(writer, "{}", recipe.to_json_string(pretty)?)?;
            }
            OutputFormat::Toml => write!(writer, "{}", recipe.to_toml_string()?)?,
        }
        Ok(())
    })
}

#[tracing::instrument(level = "debug", skip(input), fields(file = input.file_name()))]
fn parse(input: &Input, format: DocumentFormat, strict: bool) -> Result<Recipe> {
    let recipe = match format {
        DocumentFormat::Toml => Recipe::from_toml_str(input.text()),
        DocumentFormat::Json => Recipe::from_json_str(input.text()),
    }
    .with_context(|| format!("Invalid recipe: {}", input.file_name()))?;

    if strict {
        check_known_vegetables(&recipe)?;
    }
    Ok(recipe)
}

fn check_known_vegetables(recipe: &Recipe) -> Result<()> {
    let unknown = recipe
        .vegetables()
        .keys()
        .filter(|v| v.is_other())
        .map(Vegetable::name)
        .collect::<Vec<_>>();
    if !unknown.is_empty() {
        bail!(
            "Unknown vegetables in '{}': {}. Run `vegetables` to see the known list",
            recipe.name(),
            unknown.join(", ")
        );
    }
    Ok(())
}

fn document_format_from_path(path: &Utf8Path) -> Option<DocumentFormat> {
    match path.extension()? {
        "toml" => Some(DocumentFormat::Toml),
        "json" => Some(DocumentFormat::Json),
        other => {
            tracing::debug!("Unknown recipe extension '{other}'");
            None
        }
    }
}

fn output_format_from_path(path: &Utf8Path) -> Option<OutputFormat> {
    match path.extension()? {
        "toml" => Some(OutputFormat::Toml),
        "json" => Some(OutputFormat::Json),
        "txt" => Some(OutputFormat::Human),
        _ => None,
    }
}
