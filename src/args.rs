use camino::Utf8PathBuf;
use clap::{Args, Parser, Subcommand};

use crate::cmd::{config, generate_completions, recipe, vegetables};

#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Command,

    #[command(flatten)]
    pub global_args: GlobalArgs,
}

#[derive(Debug, Subcommand, strum::Display)]
pub enum Command {
    /// Read a recipe document
    #[command(alias = "read", visible_alias = "r")]
    Recipe(recipe::RecipeArgs),
    /// List the known vegetables
    #[command(visible_alias = "veg")]
    Vegetables(vegetables::VegetablesArgs),
    /// See loaded configuration
    Config(config::ConfigArgs),
    /// Generate shell completions
    GenerateCompletions(generate_completions::GenerateCompletionsArgs),
}

#[derive(Debug, Args)]
pub struct GlobalArgs {
    /// Use this config file instead of the global one
    #[arg(long, value_name = "FILE", value_hint = clap::ValueHint::FilePath, global = true)]
    pub config_file: Option<Utf8PathBuf>,

    /// Reject recipes with vegetables that are not in the known list
    #[arg(long, hide_short_help = true, global = true)]
    pub strict_vegetables: bool,

    #[command(flatten)]
    pub color: colorchoice_clap::Color,

    #[arg(long, hide_short_help = true, global = true)]
    pub debug_trace: bool,
}
