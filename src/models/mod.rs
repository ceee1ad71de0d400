//! Loss models for hazard-exposed building portfolios
//!
//! Two independent closed-form estimators run over the same records:
//! - **Projected** ([`ProjectedLossModel`]): present value of the risk-adjusted
//!   future rebuild cost plus discounted maintenance, summed over the portfolio
//! - **Estimated** ([`EstimatedLossModel`]): exponential closed form per building
//!   with a running portfolio total
//!
//! The two formulas are not expected to agree. Both are evaluated in the
//! literal operation order so totals are reproducible to the bit.

mod discount;
mod estimated;
mod projected;

use crate::building::BuildingRecord;

pub use discount::{growth_factor, hazard_over_years, DiscountCurve};
pub use estimated::{loss_estimate, EstimatedLossBreakdown, EstimatedLossLine, EstimatedLossModel};
pub use projected::{calculate_projected_losses, ProjectedLossBreakdown, ProjectedLossModel};

/// Projection horizon in years
pub const HORIZON_YEARS: u32 = 10;

/// Annual discount rate for present values (5%)
pub const DISCOUNT_RATE: f64 = 0.05;

/// Flat maintenance cost per square meter per year
pub const MAINTENANCE_RATE_PER_SQM: f64 = 50.0;

/// Floor area divisor inside the estimated-loss exponent
pub const AREA_SCALE: f64 = 1000.0;

/// Common interface for per-building loss models
pub trait LossModel {
    /// Intermediate values for one building
    type Breakdown;

    /// Compute every intermediate value for one building
    fn breakdown(&self, building: &BuildingRecord) -> Self::Breakdown;

    /// Loss attributed to one building
    fn building_loss(&self, building: &BuildingRecord) -> f64;

    /// Portfolio total, summed in input order starting from zero
    fn total(&self, buildings: &[BuildingRecord]) -> f64 {
        let mut total = 0.0;
        for building in buildings {
            total += self.building_loss(building);
        }
        total
    }
}
