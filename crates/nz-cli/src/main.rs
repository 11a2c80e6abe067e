//! Terminal frontend for the Nachtzug text adventure.

mod commands;
mod terminal;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "nachtzug",
    about = "Nachtzug: a two-chapter text adventure on a night train",
    version,
    propagate_version = true
)]
struct Cli {
    /// Log filter, e.g. `debug` or `nz_engine=trace` (overrides RUST_LOG)
    #[arg(long, global = true)]
    log: Option<String>,

    /// Disable coloured output
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play interactively on the terminal
    Play {
        /// Print every line at once instead of typing it out
        #[arg(long)]
        instant: bool,

        /// Typing delay per character in milliseconds
        #[arg(long, default_value = "15")]
        delay: u64,

        /// Disable the terminal bell
        #[arg(long)]
        mute: bool,

        /// Starting background volume between 0.0 and 1.0
        #[arg(long, default_value = "0.4")]
        volume: f32,
    },

    /// Replay a script of commands and print the transcript
    Run {
        /// File with one command per line (`#` starts a comment)
        script: PathBuf,

        /// Print the final game state as JSON
        #[arg(long)]
        state_json: bool,

        /// Print a table of everything collected during the run
        #[arg(long)]
        report: bool,

        /// Fail unless the run ends at this scene key (e.g. `gate-area`)
        #[arg(long, value_name = "SCENE")]
        expect_scene: Option<String>,
    },
}

fn init_tracing(filter: Option<&str>) {
    let filter = match filter {
        Some(directives) => EnvFilter::new(directives),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();
}

fn main() {
    let cli = Cli::parse();

    init_tracing(cli.log.as_deref());
    if cli.no_color {
        colored::control::set_override(false);
    }

    let result = match cli.command {
        Commands::Play {
            instant,
            delay,
            mute,
            volume,
        } => commands::play::run(instant, delay, mute, volume),
        Commands::Run {
            script,
            state_json,
            report,
            expect_scene,
        } => commands::run::run(&script, state_json, report, expect_scene.as_deref()),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
