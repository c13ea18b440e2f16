use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use env_logger::Builder;
use log::{LevelFilter, info};

use lte_network_planner::report::render_report;
use lte_network_planner::{Scenario, plan_network};

#[derive(Debug, Parser)]
#[command(author, version, about = "LTE radio network dimensioning tool")]
struct Cli {
    /// Path to the scenario TOML file (runs the built-in example scenario
    /// when omitted)
    #[arg(long)]
    scenario: Option<PathBuf>,

    /// Override the maximum allowed path loss (dB)
    #[arg(long)]
    max_path_loss: Option<f64>,

    /// Write the computed plan (sizing figures and site positions) as JSON
    #[arg(long)]
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    Builder::new()
        .filter_level(LevelFilter::Info)
        .filter(Some("lte_network_planner"), LevelFilter::Debug)
        .init();

    let cli = Cli::parse();

    let mut scenario = match &cli.scenario {
        Some(path) => Scenario::load(path)
            .with_context(|| format!("failed to load scenario {}", path.display()))?,
        None => Scenario::example(),
    };
    if let Some(max_path_loss_db) = cli.max_path_loss {
        scenario.network.max_path_loss_db = max_path_loss_db;
    }

    let plan = plan_network(&scenario)?;
    print!("{}", render_report(&scenario, &plan));

    if let Some(path) = &cli.output {
        let json = serde_json::to_string_pretty(&plan)?;
        fs::write(path, json)
            .with_context(|| format!("failed to write plan to {}", path.display()))?;
        info!("wrote plan to {}", path.display());
    }

    Ok(())
}
