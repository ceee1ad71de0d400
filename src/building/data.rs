//! Building record structures matching the portfolio JSON format

use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque building identifier, kept exactly as it appears in the input
///
/// Only used for display, so any JSON value is accepted. Strings display
/// without quotes; everything else displays in its compact JSON form, so
/// floats use serde_json's shortest form (`1e-7`, not `1e-07`) and booleans
/// print as `true`/`false`. A JSON `null` id counts as absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BuildingId(serde_json::Value);

impl fmt::Display for BuildingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            serde_json::Value::String(text) => f.write_str(text),
            other => write!(f, "{}", other),
        }
    }
}

impl From<&str> for BuildingId {
    fn from(value: &str) -> Self {
        BuildingId(value.into())
    }
}

impl From<u64> for BuildingId {
    fn from(value: u64) -> Self {
        BuildingId(value.into())
    }
}

/// A single building in the exposed portfolio
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuildingRecord {
    /// Display identifier (required by the estimated loss report only)
    #[serde(rename = "buildingId", default, skip_serializing_if = "Option::is_none")]
    pub building_id: Option<BuildingId>,

    /// Floor area in square meters
    pub floor_area: f64,

    /// Construction cost per square meter
    pub construction_cost: f64,

    /// Annual probability of the hazard occurring
    pub hazard_probability: f64,

    /// Annual fractional cost escalation (may be negative)
    pub inflation_rate: f64,
}

impl BuildingRecord {
    /// Create a record without an identifier
    pub fn new(
        floor_area: f64,
        construction_cost: f64,
        hazard_probability: f64,
        inflation_rate: f64,
    ) -> Self {
        Self {
            building_id: None,
            floor_area,
            construction_cost,
            hazard_probability,
            inflation_rate,
        }
    }

    /// Attach a display identifier
    pub fn with_id(mut self, building_id: impl Into<BuildingId>) -> Self {
        self.building_id = Some(building_id.into());
        self
    }

    /// Total construction cost today: cost per m² times floor area
    pub fn initial_cost(&self) -> f64 {
        self.construction_cost * self.floor_area
    }
}
