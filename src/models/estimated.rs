//! Estimated loss: exponential closed form per building
//!
//! The inflation term is `1 - (1 + rate) ^ years`, which is negative for any
//! positive inflation rate, so the exponential damps rather than grows the
//! construction cost. The formula is kept exactly as defined.
//!
//! # Report quirk
//!
//! Each per-building report line displays the running portfolio total
//! *before* that building's own loss is added, so the first line always
//! shows zero and the last building's loss only appears in the final total.
//! [`EstimatedLossLine`] carries both the displayed amount and the building's
//! own loss.

use super::discount::{growth_factor, hazard_over_years, DiscountCurve};
use super::{LossModel, AREA_SCALE, HORIZON_YEARS};
use crate::building::{BuildingId, BuildingRecord};
use crate::error::{LossError, Result};
use log::debug;
use serde::Serialize;

/// Closed-form loss estimate
///
/// `construction_cost * exp(inflation_factor * floor_area / 1000) * hazard_probability / (1 + discount_rate) ^ years`
pub fn loss_estimate(
    construction_cost: f64,
    floor_area: f64,
    inflation_factor: f64,
    hazard_probability: f64,
    discount_rate: f64,
    years: u32,
) -> f64 {
    (construction_cost * (inflation_factor * floor_area / AREA_SCALE).exp() * hazard_probability)
        / growth_factor(discount_rate, years)
}

/// Intermediate values of the estimated loss for one building
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EstimatedLossBreakdown {
    pub hazard_over_years: f64,
    /// Construction cost per m² times floor area
    pub construction_cost_total: f64,
    /// `1 - (1 + inflation_rate) ^ years`
    pub inflation_over_years: f64,
    pub estimated_loss: f64,
}

/// One per-building line of the estimated loss report
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EstimatedLossLine {
    pub building_id: BuildingId,
    /// Amount shown on the line: running total before this building
    pub displayed_amount: f64,
    /// This building's own estimated loss
    pub estimated_loss: f64,
}

/// Per-building closed-form loss model
#[derive(Debug, Clone)]
pub struct EstimatedLossModel {
    /// Projection horizon in years
    pub years: u32,
    pub discount: DiscountCurve,
}

impl Default for EstimatedLossModel {
    fn default() -> Self {
        Self {
            years: HORIZON_YEARS,
            discount: DiscountCurve::default(),
        }
    }
}

impl EstimatedLossModel {
    /// Walk the portfolio in order, handing each report line to `on_line`
    /// before that building's loss is added to the total.
    ///
    /// Fails at the first building without an identifier; lines already
    /// handed out stay handed out and no total is returned.
    pub fn estimate_portfolio<F>(&self, buildings: &[BuildingRecord], mut on_line: F) -> Result<f64>
    where
        F: FnMut(&EstimatedLossLine) -> Result<()>,
    {
        let mut total = 0.0;

        for (index, building) in buildings.iter().enumerate() {
            let building_id = building
                .building_id
                .clone()
                .ok_or(LossError::MissingBuildingId { index })?;
            let estimated_loss = self.building_loss(building);

            on_line(&EstimatedLossLine {
                building_id,
                displayed_amount: total,
                estimated_loss,
            })?;

            total += estimated_loss;
        }

        Ok(total)
    }

    /// Collect every report line along with the portfolio total
    pub fn report_lines(&self, buildings: &[BuildingRecord]) -> Result<(Vec<EstimatedLossLine>, f64)> {
        let mut lines = Vec::with_capacity(buildings.len());
        let total = self.estimate_portfolio(buildings, |line| {
            lines.push(line.clone());
            Ok(())
        })?;
        Ok((lines, total))
    }
}

impl LossModel for EstimatedLossModel {
    type Breakdown = EstimatedLossBreakdown;

    fn breakdown(&self, building: &BuildingRecord) -> EstimatedLossBreakdown {
        let years = self.years;

        let hazard_over_years = hazard_over_years(building.hazard_probability, years);
        let construction_cost_total = building.initial_cost();
        let inflation_over_years = 1.0 - growth_factor(building.inflation_rate, years);

        let estimated_loss = loss_estimate(
            construction_cost_total,
            building.floor_area,
            inflation_over_years,
            hazard_over_years,
            self.discount.annual_rate,
            years,
        );

        EstimatedLossBreakdown {
            hazard_over_years,
            construction_cost_total,
            inflation_over_years,
            estimated_loss,
        }
    }

    fn building_loss(&self, building: &BuildingRecord) -> f64 {
        let breakdown = self.breakdown(building);
        debug!(
            "Estimated loss: {:.6} inflation_over_years={:.6} (id={:?})",
            breakdown.estimated_loss, breakdown.inflation_over_years, building.building_id
        );
        breakdown.estimated_loss
    }
}
