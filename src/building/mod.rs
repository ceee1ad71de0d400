//! Building records and portfolio loading

mod data;
pub mod loader;

pub use data::{BuildingId, BuildingRecord};
pub use loader::{load_buildings, load_buildings_from_reader, DEFAULT_DATA_PATH};
