//! Command-line shell for the emoji mixer.

mod commands;
mod host;

use std::io::IsTerminal;
use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use em_session::ReadySignal;

#[derive(Parser)]
#[command(
    name = "emix",
    about = "Emoji Mixer — pick two emojis, get a third",
    version,
    propagate_version = true
)]
struct Cli {
    /// JSON config file with catalog, recipes, and surprise pool (default: built-in tables)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Override the mixing delay in milliseconds
    #[arg(long, global = true)]
    delay_ms: Option<u64>,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Combine two emojis (by symbol or catalog number)
    Mix {
        /// First emoji
        left: String,

        /// Second emoji
        right: String,
    },

    /// List the selectable emojis
    Catalog,

    /// Show the curated recipes
    Recipes,

    /// Show the result of every catalog pair
    Grid,

    /// Validate the configuration and summarise it
    Check,

    /// Start an interactive mixing session
    Play,
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(std::io::stderr().is_terminal()),
        )
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    ReadySignal::new().signal(&host::TerminalHost);

    let result = commands::load_mixer(cli.config.as_deref(), cli.delay_ms).and_then(|mixer| {
        match cli.command {
            Commands::Mix { left, right } => commands::mix::run(&mixer, &left, &right),
            Commands::Catalog => commands::catalog::run(&mixer),
            Commands::Recipes => commands::recipes::run(&mixer),
            Commands::Grid => commands::grid::run(&mixer),
            Commands::Check => commands::check::run(&mixer),
            Commands::Play => commands::play::run(&mixer),
        }
    });

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
