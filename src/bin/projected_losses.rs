//! Total projected loss for the building portfolio
//!
//! Usage: cargo run --bin projected_losses [-- --data data.json]

use anyhow::Context;
use clap::Parser;
use hazard_loss::building::{load_buildings, DEFAULT_DATA_PATH};
use hazard_loss::report::write_projected_report;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(about = "Present value of risk-adjusted loss plus maintenance over 10 years")]
struct Args {
    #[arg(long, default_value = DEFAULT_DATA_PATH, help = "Building portfolio JSON file")]
    data: PathBuf,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let buildings = load_buildings(&args.data).context("failed to load building portfolio")?;
    write_projected_report(&mut std::io::stdout().lock(), &buildings)?;

    Ok(())
}
