//! Report output for the loss models
//!
//! Text lines keep the fixed formats `Total Projected Loss: $x`,
//! `Estimated Loss for $<id>: $x` and `Total Estimated Loss: $x`, with two
//! decimals. The JSON summary and CSV breakdown are additional views over the
//! same figures.

use crate::building::BuildingRecord;
use crate::error::Result;
use crate::models::{
    EstimatedLossLine, EstimatedLossModel, LossModel, ProjectedLossModel, DISCOUNT_RATE,
    HORIZON_YEARS,
};
use log::info;
use serde::Serialize;
use std::io::Write;
use std::path::Path;

/// Format an amount as `$1234.57` (negative amounts as `$-1234.57`)
pub fn format_currency(amount: f64) -> String {
    format!("${:.2}", amount)
}

pub fn projected_total_line(total: f64) -> String {
    format!("Total Projected Loss: {}", format_currency(total))
}

/// Per-building line; the amount shown is the running total before this building
pub fn estimated_building_line(line: &EstimatedLossLine) -> String {
    format!(
        "Estimated Loss for ${}: {}",
        line.building_id,
        format_currency(line.displayed_amount)
    )
}

pub fn estimated_total_line(total: f64) -> String {
    format!("Total Estimated Loss: {}", format_currency(total))
}

/// Run the projected loss model and write its single total line
pub fn write_projected_report<W: Write>(out: &mut W, buildings: &[BuildingRecord]) -> Result<f64> {
    let total = ProjectedLossModel::default().total(buildings);
    info!("Projected loss over {} buildings: {:.6}", buildings.len(), total);

    writeln!(out, "{}", projected_total_line(total))?;
    Ok(total)
}

/// Run the estimated loss model, writing each building line as it is reached
/// and the total at the end
///
/// On error, lines already written stay written and no total is printed.
pub fn write_estimated_report<W: Write>(out: &mut W, buildings: &[BuildingRecord]) -> Result<f64> {
    let total = EstimatedLossModel::default().estimate_portfolio(buildings, |line| {
        writeln!(out, "{}", estimated_building_line(line))?;
        Ok(())
    })?;
    info!("Estimated loss over {} buildings: {:.6}", buildings.len(), total);

    writeln!(out, "{}", estimated_total_line(total))?;
    Ok(total)
}

/// Estimated model section of the JSON summary
#[derive(Debug, Clone, Serialize)]
pub struct EstimatedSummary {
    pub total: f64,
    pub buildings: Vec<EstimatedLossLine>,
}

/// Machine-readable summary of one run
#[derive(Debug, Clone, Serialize)]
pub struct PortfolioSummary {
    pub building_count: usize,
    pub horizon_years: u32,
    pub discount_rate: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub projected_total: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated: Option<EstimatedSummary>,
}

impl PortfolioSummary {
    /// Compute the requested model results for a portfolio
    pub fn build(buildings: &[BuildingRecord], projected: bool, estimated: bool) -> Result<Self> {
        let projected_total = projected.then(|| ProjectedLossModel::default().total(buildings));

        let estimated = if estimated {
            let (lines, total) = EstimatedLossModel::default().report_lines(buildings)?;
            Some(EstimatedSummary {
                total,
                buildings: lines,
            })
        } else {
            None
        };

        Ok(Self {
            building_count: buildings.len(),
            horizon_years: HORIZON_YEARS,
            discount_rate: DISCOUNT_RATE,
            projected_total,
            estimated,
        })
    }
}

/// One CSV row of per-building intermediates from both models
#[derive(Debug, Serialize)]
struct BreakdownRow {
    building_id: String,
    floor_area: f64,
    construction_cost: f64,
    hazard_probability: f64,
    inflation_rate: f64,
    initial_cost: f64,
    future_cost: f64,
    hazard_over_years: f64,
    risk_adjusted_loss: f64,
    present_value_loss: f64,
    maintenance_cost: f64,
    present_value_maintenance: f64,
    projected_loss: f64,
    inflation_over_years: f64,
    estimated_loss: f64,
}

/// Write per-building intermediates of both models to any writer as CSV
pub fn write_breakdown<W: Write>(writer: W, buildings: &[BuildingRecord]) -> Result<()> {
    let projected_model = ProjectedLossModel::default();
    let estimated_model = EstimatedLossModel::default();
    let mut csv_writer = csv::Writer::from_writer(writer);

    for building in buildings {
        let projected = projected_model.breakdown(building);
        let estimated = estimated_model.breakdown(building);

        csv_writer.serialize(BreakdownRow {
            building_id: building
                .building_id
                .as_ref()
                .map(|id| id.to_string())
                .unwrap_or_default(),
            floor_area: building.floor_area,
            construction_cost: building.construction_cost,
            hazard_probability: building.hazard_probability,
            inflation_rate: building.inflation_rate,
            initial_cost: projected.initial_cost,
            future_cost: projected.future_cost,
            hazard_over_years: projected.hazard_over_years,
            risk_adjusted_loss: projected.risk_adjusted_loss,
            present_value_loss: projected.present_value_loss,
            maintenance_cost: projected.maintenance_cost,
            present_value_maintenance: projected.present_value_maintenance,
            projected_loss: projected.total(),
            inflation_over_years: estimated.inflation_over_years,
            estimated_loss: estimated.estimated_loss,
        })?;
    }

    csv_writer.flush()?;
    Ok(())
}

/// Write the per-building breakdown CSV to a file
pub fn write_breakdown_csv<P: AsRef<Path>>(path: P, buildings: &[BuildingRecord]) -> Result<()> {
    let file = std::fs::File::create(path.as_ref())?;
    write_breakdown(file, buildings)?;
    info!("Breakdown for {} buildings written to {}", buildings.len(), path.as_ref().display());
    Ok(())
}
