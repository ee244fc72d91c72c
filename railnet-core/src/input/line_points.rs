use crate::error::RailNetError;
use crate::input::read_ops;
use serde::Deserialize;
use std::path::Path;

pub const REQUIRED_COLUMNS: [&str; 4] = ["Name Haltestelle", "Linie", "KM", "BPUIC"];

/// a row of the line-to-operation-point mapping: one operation point's
/// kilometer position along a numbered line.
#[derive(Deserialize, Debug, Clone)]
pub struct LinePointRow {
    #[serde(rename = "Name Haltestelle")]
    pub stop_name: String,
    /// line number the operation point lies on
    #[serde(rename = "Linie")]
    pub line_id: u32,
    /// kilometer position along the line
    #[serde(rename = "KM")]
    pub km: f64,
    /// UIC number of the operation point
    #[serde(rename = "BPUIC")]
    pub bpuic: u32,
}

pub fn load_line_points(path: &Path) -> Result<Vec<LinePointRow>, RailNetError> {
    read_ops::read_rows(path, &REQUIRED_COLUMNS)
}
