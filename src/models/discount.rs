//! Annual compounding and discounting
//!
//! All factors use `powf` so an integer horizon is raised exactly like a
//! floating-point exponent, matching plain IEEE-754 `pow`.

use serde::Serialize;

/// Growth factor `(1 + rate) ^ years`
pub fn growth_factor(annual_rate: f64, years: u32) -> f64 {
    (1.0 + annual_rate).powf(years as f64)
}

/// Probability of at least one occurrence over the horizon: `1 - (1 - p) ^ years`
pub fn hazard_over_years(annual_probability: f64, years: u32) -> f64 {
    1.0 - (1.0 - annual_probability).powf(years as f64)
}

/// Single-rate annual discount curve
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DiscountCurve {
    /// Annual discount rate
    pub annual_rate: f64,
}

impl DiscountCurve {
    /// Create a curve with a single annual rate
    pub fn single_rate(annual_rate: f64) -> Self {
        Self { annual_rate }
    }

    /// Accumulation factor to a given year: `(1 + rate) ^ years`
    pub fn accumulation_factor(&self, years: u32) -> f64 {
        growth_factor(self.annual_rate, years)
    }

    /// Present value of an amount due at the end of the horizon
    ///
    /// Divides by the accumulation factor rather than multiplying by its
    /// inverse; the two differ in the last bit.
    pub fn present_value(&self, amount: f64, years: u32) -> f64 {
        amount / self.accumulation_factor(years)
    }
}

impl Default for DiscountCurve {
    fn default() -> Self {
        Self::single_rate(super::DISCOUNT_RATE)
    }
}
