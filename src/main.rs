//! Hazard Loss CLI
//!
//! Runs the projected and estimated loss models over one building portfolio

use anyhow::Context;
use clap::{Parser, ValueEnum};
use hazard_loss::building::{load_buildings, DEFAULT_DATA_PATH};
use hazard_loss::report::{
    write_breakdown_csv, write_estimated_report, write_projected_report, PortfolioSummary,
};
use std::io::{self, Write};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "hazard_loss", version, about = "Projected hazard loss estimates for a building portfolio")]
struct Cli {
    #[arg(long, default_value = DEFAULT_DATA_PATH, help = "Building portfolio JSON file")]
    data: PathBuf,
    #[arg(long, value_enum, default_value_t = ModelChoice::Both, help = "Loss model(s) to run")]
    model: ModelChoice,
    #[arg(long, help = "Output machine-readable JSON")]
    json: bool,
    #[arg(long, value_name = "CSV", help = "Also write per-building intermediates to this CSV file")]
    breakdown: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum ModelChoice {
    Projected,
    Estimated,
    Both,
}

impl ModelChoice {
    fn projected(self) -> bool {
        matches!(self, ModelChoice::Projected | ModelChoice::Both)
    }

    fn estimated(self) -> bool {
        matches!(self, ModelChoice::Estimated | ModelChoice::Both)
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let buildings = load_buildings(&cli.data).context("failed to load building portfolio")?;

    if let Some(path) = &cli.breakdown {
        write_breakdown_csv(path, &buildings)
            .with_context(|| format!("failed to write breakdown to {}", path.display()))?;
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if cli.json {
        let summary = PortfolioSummary::build(&buildings, cli.model.projected(), cli.model.estimated())?;
        serde_json::to_writer_pretty(&mut out, &summary)?;
        writeln!(out)?;
        return Ok(());
    }

    if cli.model.projected() {
        write_projected_report(&mut out, &buildings)?;
    }
    if cli.model.estimated() {
        write_estimated_report(&mut out, &buildings)?;
    }

    Ok(())
}
