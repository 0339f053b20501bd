use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "monthly", version, about = "Monthly CLI")]
struct Cli {
    /// Config file (defaults to ~/.config/monthly/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Day-by-day table of the month
    Show {
        #[command(flatten)]
        month: commands::month::MonthArgs,
        /// Print the whole month model as JSON
        #[arg(long)]
        json: bool,
    },
    /// Days, weeks and workdays progress
    Summary {
        #[command(flatten)]
        month: commands::month::MonthArgs,
    },
    /// Activities of the month grouped by type
    Planner {
        #[command(flatten)]
        month: commands::month::MonthArgs,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env("MONTHLY_LOG").unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = cli.config.as_deref();
    let result = match cli.command {
        Commands::Show { month, json } => commands::month::show(config, &month, json),
        Commands::Summary { month } => commands::month::summary(config, &month),
        Commands::Planner { month } => commands::month::planner(config, &month),
        Commands::Config { action } => commands::config::run(config, action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
