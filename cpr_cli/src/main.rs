//! # CPR Inspection CLI
//!
//! Loads policy report documents from disk, recomputes summaries and
//! resolves result priorities through an optional mapping config.

mod config;
mod error;
mod loader;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use cpr_core::Priority;

use config::{parse_priority_label, CliConfig};
use error::CliError;
use loader::ReportDocument;

#[derive(Parser)]
#[command(name = "cpr", version, about = "Inspect cluster policy report documents")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Recompute and print the per-status summary of a report document
    Summary {
        /// Report document (JSON)
        file: PathBuf,

        /// Emit the summary as JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// List results with their resolved priorities
    Results {
        /// Report document (JSON)
        file: PathBuf,

        /// Only show results at or above this priority label
        #[arg(long)]
        min_priority: Option<String>,

        /// Priority mapping config (TOML)
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

fn main() {
    env_logger::init();

    if let Err(error) = run(Cli::parse()) {
        eprintln!("error: {}", error);
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Command::Summary { file, json } => run_summary(&file, json),
        Command::Results {
            file,
            min_priority,
            config,
        } => run_results(&file, min_priority.as_deref(), config.as_deref()),
    }
}

fn run_summary(file: &std::path::Path, json: bool) -> Result<(), CliError> {
    let document = ReportDocument::load(file)?;
    log::info!("loaded {}", document.describe());

    let summary = document.summary();

    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    println!("=== {} ===", document.describe());
    println!("Pass:  {}", summary.pass);
    println!("Fail:  {}", summary.fail);
    println!("Warn:  {}", summary.warn);
    println!("Error: {}", summary.error);
    println!("Skip:  {}", summary.skip);
    println!("Total: {}", summary.total());

    Ok(())
}

fn run_results(
    file: &std::path::Path,
    min_priority: Option<&str>,
    config_path: Option<&std::path::Path>,
) -> Result<(), CliError> {
    let document = ReportDocument::load(file)?;
    log::info!("loaded {}", document.describe());

    let config = match config_path {
        Some(path) => CliConfig::load(path)?,
        None => CliConfig::default(),
    };

    let floor = match min_priority {
        Some(label) => parse_priority_label(label, "--min-priority")?,
        None => Priority::Default,
    };

    let mut shown = 0;
    for result in document.results() {
        let priority = config.resolve(result);
        if priority < floor {
            continue;
        }
        shown += 1;

        let status = result
            .result
            .map(|status| status.label())
            .unwrap_or("none");

        println!(
            "{:<20} {:<8} {:<5} {:<30} {}",
            result.id(),
            priority,
            status,
            result.policy,
            result.message
        );
    }

    log::debug!(
        "{} of {} results at or above '{}'",
        shown,
        document.results().len(),
        floor
    );

    Ok(())
}
