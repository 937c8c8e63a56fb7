//! # PackCheck CLI
//!
//! Runs scripted verification sessions and lists the product catalog.
//!
//! ## Usage
//! ```bash
//! # Replay a scenario and save its report next to the config's output dir
//! packcheck run scenario.toml
//!
//! # Use a specific config and report location (file or directory)
//! packcheck run scenario.toml --config ./station.toml --out ./reports/
//!
//! # List products and their tag prefixes
//! packcheck catalog
//! ```
//!
//! ## Startup Sequence
//! 1. Initialize tracing (logging to stderr)
//! 2. Load configuration (explicit file, else platform config dir, else defaults)
//! 3. Build the station
//! 4. Replay the scenario and finalize
//! 5. Print the summary and save the report

use std::env;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use packcheck_station::commands::{order, report};
use packcheck_station::{init_tracing, scenario, Station, StationConfig};
use tracing::info;

const USAGE: &str = "\
PackCheck - RFID package verification

Usage:
  packcheck run <SCENARIO> [--config <FILE>] [--out <FILE|DIR>]
  packcheck catalog [--config <FILE>]

Options:
  -c, --config <FILE>   Station config (default: packcheck.toml in the config dir)
  -o, --out <PATH>      Report file or directory (default: report.output_dir)
  -h, --help            Show this help message";

#[derive(Debug, Default)]
struct Args {
    command: Option<String>,
    scenario: Option<PathBuf>,
    config: Option<PathBuf>,
    out: Option<PathBuf>,
    help: bool,
}

fn parse_args() -> Result<Args> {
    let args: Vec<String> = env::args().skip(1).collect();
    let mut parsed = Args::default();

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--config" | "-c" => {
                i += 1;
                let value = args.get(i).context("--config needs a file path")?;
                parsed.config = Some(PathBuf::from(value));
            }
            "--out" | "-o" => {
                i += 1;
                let value = args.get(i).context("--out needs a path")?;
                parsed.out = Some(PathBuf::from(value));
            }
            "--help" | "-h" => parsed.help = true,
            other if other.starts_with('-') => bail!("Unknown option: {}\n\n{}", other, USAGE),
            other if parsed.command.is_none() => parsed.command = Some(other.to_string()),
            other if parsed.scenario.is_none() => parsed.scenario = Some(PathBuf::from(other)),
            other => bail!("Unexpected argument: {}\n\n{}", other, USAGE),
        }
        i += 1;
    }

    Ok(parsed)
}

fn load_config(args: &Args) -> Result<StationConfig> {
    match &args.config {
        Some(path) => StationConfig::load(Some(path.as_path()))
            .with_context(|| format!("Could not load config {}", path.display())),
        None => Ok(StationConfig::load_or_default(None)),
    }
}

fn main() -> Result<()> {
    let args = parse_args()?;
    if args.help || args.command.is_none() {
        println!("{}", USAGE);
        return Ok(());
    }

    init_tracing();

    let config = load_config(&args)?;
    let mut station = Station::new(config).context("Could not start the station")?;

    match args.command.as_deref() {
        Some("catalog") => {
            for product in order::get_catalog(&station) {
                println!("{:<24} {}", product.name, product.base_prefix);
            }
        }
        Some("run") => {
            let path = args.scenario.as_deref().context("run needs a scenario file")?;
            let scenario = scenario::Scenario::from_file(path)?;
            info!(path = %path.display(), "Running scenario");

            let response = scenario::run(&mut station, &scenario)?;
            let verified = &response.report;

            println!("Order:    {}", verified.order_id);
            println!("Status:   {}", verified.verification_status);
            println!("Duration: {}s", verified.scan_duration_seconds);
            println!();
            println!("{}", response.summary);

            let saved = report::export_report(&station, args.out.as_deref())?;
            println!();
            println!("Report saved to {}", saved.path);
        }
        Some(other) => bail!("Unknown command: {}\n\n{}", other, USAGE),
        None => unreachable!("command checked above"),
    }

    Ok(())
}
