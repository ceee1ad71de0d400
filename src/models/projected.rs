//! Projected loss: present value of risk-adjusted rebuild cost plus maintenance

use super::discount::{growth_factor, hazard_over_years, DiscountCurve};
use super::{LossModel, HORIZON_YEARS, MAINTENANCE_RATE_PER_SQM};
use crate::building::BuildingRecord;
use log::debug;
use serde::Serialize;

/// Intermediate values of the projected loss for one building
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ProjectedLossBreakdown {
    /// Construction cost per m² times floor area
    pub initial_cost: f64,
    /// Initial cost inflated over the horizon
    pub future_cost: f64,
    /// Probability of the hazard occurring at least once over the horizon
    pub hazard_over_years: f64,
    /// Future cost weighted by the horizon hazard probability
    pub risk_adjusted_loss: f64,
    pub present_value_loss: f64,
    /// Undiscounted flat-rate maintenance over the horizon
    pub maintenance_cost: f64,
    pub present_value_maintenance: f64,
}

impl ProjectedLossBreakdown {
    /// Contribution of this building to the portfolio total
    pub fn total(&self) -> f64 {
        self.present_value_loss + self.present_value_maintenance
    }
}

/// Aggregate present-value loss model
#[derive(Debug, Clone)]
pub struct ProjectedLossModel {
    /// Projection horizon in years
    pub years: u32,
    /// Curve used to discount both loss and maintenance
    pub discount: DiscountCurve,
    /// Maintenance cost per m² per year
    pub maintenance_rate: f64,
}

impl ProjectedLossModel {
    /// Model over a given horizon with the standard 5% discount and maintenance rate
    pub fn new(years: u32) -> Self {
        Self {
            years,
            discount: DiscountCurve::default(),
            maintenance_rate: MAINTENANCE_RATE_PER_SQM,
        }
    }
}

impl Default for ProjectedLossModel {
    fn default() -> Self {
        Self::new(HORIZON_YEARS)
    }
}

impl LossModel for ProjectedLossModel {
    type Breakdown = ProjectedLossBreakdown;

    fn breakdown(&self, building: &BuildingRecord) -> ProjectedLossBreakdown {
        let years = self.years;

        let initial_cost = building.initial_cost();
        let future_cost = initial_cost * growth_factor(building.inflation_rate, years);
        let hazard_over_years = hazard_over_years(building.hazard_probability, years);
        let risk_adjusted_loss = future_cost * hazard_over_years;
        let present_value_loss = self.discount.present_value(risk_adjusted_loss, years);

        let maintenance_cost = building.floor_area * self.maintenance_rate * years as f64;
        let present_value_maintenance = self.discount.present_value(maintenance_cost, years);

        ProjectedLossBreakdown {
            initial_cost,
            future_cost,
            hazard_over_years,
            risk_adjusted_loss,
            present_value_loss,
            maintenance_cost,
            present_value_maintenance,
        }
    }

    fn building_loss(&self, building: &BuildingRecord) -> f64 {
        let breakdown = self.breakdown(building);
        debug!(
            "Projected loss: pv_loss={:.6} pv_maintenance={:.6} (id={:?})",
            breakdown.present_value_loss, breakdown.present_value_maintenance, building.building_id
        );
        breakdown.total()
    }
}

/// Total projected loss across all buildings over `years`
pub fn calculate_projected_losses(buildings: &[BuildingRecord], years: u32) -> f64 {
    ProjectedLossModel::new(years).total(buildings)
}
