use anstream::ColorChoice;
use anyhow::{Context as _, Result};
use args::{CliArgs, Command, GlobalArgs};
use clap::Parser;
use config::Config;
use tracing_subscriber::{filter::LevelFilter, EnvFilter};

// commands
mod cmd;

// other modules
mod args;
mod config;
mod util;

const APP_NAME: &str = "kitchen-manual";
const UTF8_PATH_PANIC: &str = "kitchen only supports UTF-8 paths. If this is problem for you, file an issue in the kitchen-manual repository";

pub fn main() -> Result<()> {
    let args = CliArgs::parse();

    let color_ctx = init_color(args.global_args.color);
    if args.global_args.debug_trace {
        tracing_subscriber::FmtSubscriber::builder()
            .compact()
            .with_max_level(tracing::Level::TRACE)
            .with_span_events(
                tracing_subscriber::fmt::format::FmtSpan::CLOSE
                    | tracing_subscriber::fmt::format::FmtSpan::NEW,
            )
            .with_ansi(color_ctx.color_stderr)
            .init();
    } else {
        tracing_subscriber::FmtSubscriber::builder()
            .compact()
            .with_target(false)
            .with_env_filter(
                EnvFilter::builder()
                    .with_default_directive(LevelFilter::WARN.into())
                    .from_env_lossy(),
            )
            .with_ansi(color_ctx.color_stderr)
            .init();
    }

    if let Command::GenerateCompletions(args) = args.command {
        return cmd::generate_completions::run(args);
    }

    let ctx = configure_context(&args.global_args)?;

    match args.command {
        Command::Recipe(args) => cmd::recipe::run(&ctx, args),
        Command::Vegetables(args) => cmd::vegetables::run(args),
        Command::Config(args) => cmd::config::run(&ctx, args),
        Command::GenerateCompletions(_) => unreachable!(),
    }
}

struct ColorContext {
    color_stderr: bool,
}

fn init_color(color: colorchoice_clap::Color) -> ColorContext {
    color.write_global();
    let color_stderr = anstream::AutoStream::choice(&std::io::stderr()) != ColorChoice::Never;

    ColorContext { color_stderr }
}

pub struct Context {
    config: Config,
}

#[tracing::instrument(level = "debug", skip_all)]
fn configure_context(args: &GlobalArgs) -> Result<Context> {
    let mut config = if let Some(file) = &args.config_file {
        Config::read(file)?
    } else {
        Config::read_global().context("Error loading global config file")?
    };
    config.override_with_args(args);
    tracing::debug!(?config, "configuration loaded");

    Ok(Context { config })
}
