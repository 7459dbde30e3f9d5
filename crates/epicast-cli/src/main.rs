// Rust guideline compliant 2026-10-16

//! Epicast CLI Application
//!
//! Command-line interface for epic burndown reports and forecasts.

use clap::Parser;
use epicast_cli::logging::init_tracing;
use epicast_cli::{commands, create_formatter, get_terminal_width, should_use_color};
use epicast_core::{GrowthFactor, SprintWindow};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "epicast",
    version,
    about = "Epicast: sprint reports and burndown forecasts for Jira epics",
    long_about = "Epicast reads Jira epic snapshots, summarizes every sprint the epic's issues touched and projects how many sprints remain until the backlog is closed.",
    after_help = "Examples:\n  epicast report PRJ-5\n  epicast report PRJ-5 PAY-1 --window 3 --growth-factor 1/3\n  epicast epics --snapshots ./snapshots\n  epicast options\n  epicast config --write epicast.toml\n"
)]
struct Cli {
    /// Enable JSON output
    #[arg(long, global = true)]
    json: bool,

    /// Output format
    #[arg(long, value_enum, global = true)]
    format: Option<OutputFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    /// Custom config file path
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log level (error, warn, info, debug)
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Write JSON logs to this file instead of stderr
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Clone, clap::ValueEnum)]
enum OutputFormat {
    Json,
    Table,
    Plain,
}

#[derive(Debug, clap::Subcommand)]
enum Commands {
    /// Build the report for one or more epics
    Report {
        /// Epic keys to merge into one report
        #[arg(required = true)]
        keys: Vec<String>,

        /// Snapshot directory
        #[arg(long)]
        snapshots: Option<PathBuf>,

        /// Closed sprints used for velocity (all, 3, 6)
        #[arg(long)]
        window: Option<SprintWindow>,

        /// Projected backlog growth (0, 1/5, 1/3, 1/2)
        #[arg(long)]
        growth_factor: Option<GrowthFactor>,
    },

    /// List epics with a snapshot
    Epics {
        /// Snapshot directory
        #[arg(long)]
        snapshots: Option<PathBuf>,
    },

    /// Show selectable windows and growth factors
    Options,

    /// Show the effective configuration
    Config {
        /// Save the configuration to this path
        #[arg(long)]
        write: Option<PathBuf>,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = commands::config::load(cli.config.as_deref())?;

    let log_level = cli.log_level.as_deref().unwrap_or(&config.log_level);
    let _log_guard = init_tracing(log_level, cli.log_file.as_deref())?;

    // Flag beats --json beats the config file
    let use_color = !cli.no_color && should_use_color();
    let format = match cli.format {
        Some(OutputFormat::Json) => "json",
        Some(OutputFormat::Table) => "table",
        Some(OutputFormat::Plain) => "plain",
        None => {
            if cli.json {
                "json"
            } else {
                match config.output_format {
                    epicast_core::OutputFormat::Json => "json",
                    epicast_core::OutputFormat::Table => "table",
                    epicast_core::OutputFormat::Plain => "plain",
                }
            }
        }
    };
    let formatter = create_formatter(format, use_color, get_terminal_width());

    match cli.command {
        Some(Commands::Report {
            keys,
            snapshots,
            window,
            growth_factor,
        }) => {
            let snapshot_dir = snapshots.unwrap_or_else(|| config.snapshot_dir.clone());
            commands::report::execute(
                keys,
                &snapshot_dir,
                window.unwrap_or(config.sprint_window),
                growth_factor.unwrap_or(config.growth_factor),
                format == "json",
                formatter.as_ref(),
            )?;
        }
        Some(Commands::Epics { snapshots }) => {
            let snapshot_dir = snapshots.unwrap_or_else(|| config.snapshot_dir.clone());
            commands::epics::execute(&snapshot_dir, formatter.as_ref())?;
        }
        Some(Commands::Options) => {
            commands::options::execute(&config, formatter.as_ref())?;
        }
        Some(Commands::Config { write, force }) => {
            commands::config::execute(&config, write.as_deref(), force, formatter.as_ref())?;
        }
        None => {
            println!("Use --help for usage information");
        }
    }

    Ok(())
}
