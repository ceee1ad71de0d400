//! Hazard Loss - projected loss estimates for hazard-exposed building portfolios
//!
//! This library provides:
//! - Building portfolio loading from JSON
//! - Projected loss: present value of risk-adjusted rebuild cost plus maintenance
//! - Estimated loss: per-building exponential closed form with a running total
//! - Text, JSON and CSV reporting of both

pub mod building;
pub mod error;
pub mod models;
pub mod report;

// Re-export commonly used types
pub use building::{BuildingId, BuildingRecord};
pub use error::LossError;
pub use models::{EstimatedLossModel, LossModel, ProjectedLossModel, calculate_projected_losses};
