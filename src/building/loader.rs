//! Load building portfolios from JSON

use super::BuildingRecord;
use crate::error::{LossError, Result};
use log::info;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Input file read when no path is given, relative to the working directory
pub const DEFAULT_DATA_PATH: &str = "data.json";

/// Load all buildings from a JSON array file
pub fn load_buildings<P: AsRef<Path>>(path: P) -> Result<Vec<BuildingRecord>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| LossError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let buildings = load_buildings_from_reader(BufReader::new(file))?;
    info!("Loaded {} buildings from {}", buildings.len(), path.display());

    Ok(buildings)
}

/// Load buildings from any reader (e.g., string buffer, stdin)
pub fn load_buildings_from_reader<R: Read>(reader: R) -> Result<Vec<BuildingRecord>> {
    let buildings: Vec<BuildingRecord> = serde_json::from_reader(reader)?;
    Ok(buildings)
}
