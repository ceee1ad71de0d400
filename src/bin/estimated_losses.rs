//! Per-building estimated losses and portfolio total
//!
//! Each building line shows the running total before that building is added.
//!
//! Usage: cargo run --bin estimated_losses [-- --data data.json]

use anyhow::Context;
use clap::Parser;
use hazard_loss::building::{load_buildings, DEFAULT_DATA_PATH};
use hazard_loss::report::write_estimated_report;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(about = "Closed-form estimated loss per building over 10 years")]
struct Args {
    #[arg(long, default_value = DEFAULT_DATA_PATH, help = "Building portfolio JSON file")]
    data: PathBuf,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let buildings = load_buildings(&args.data).context("failed to load building portfolio")?;
    write_estimated_report(&mut std::io::stdout().lock(), &buildings)?;

    Ok(())
}
