use crate::error::RailNetError;
use crate::input::read_ops;
use serde::{Deserialize, Deserializer};
use std::collections::HashMap;
use std::path::Path;

/// thousands separator used by the published counts
const GROUPING_MARK: char = '’';

pub const REQUIRED_COLUMNS: [&str; 5] = [
    "UIC",
    "Jahr_Annee_Anno",
    "DTV_TJM_TGM",
    "DWV_TMJO_TFM",
    "DNWV_TMJNO_TMGNL",
];

/// a row of the passenger boarding/alighting survey (frequentia): average
/// daily traffic figures for one station and survey year.
#[derive(Deserialize, Debug, Clone)]
pub struct PassengerCountRow {
    /// UIC number of the surveyed station
    #[serde(rename = "UIC")]
    pub uic: u32,
    /// survey year
    #[serde(rename = "Jahr_Annee_Anno")]
    pub year: i32,
    #[serde(rename = "DTV_TJM_TGM", deserialize_with = "de_grouped_count")]
    pub avg_daily_traffic: Option<u64>,
    #[serde(rename = "DWV_TMJO_TFM", deserialize_with = "de_grouped_count")]
    pub avg_daily_traffic_weekdays: Option<u64>,
    #[serde(rename = "DNWV_TMJNO_TMGNL", deserialize_with = "de_grouped_count")]
    pub avg_daily_traffic_weekends: Option<u64>,
}

/// reads the survey table and keeps, per station, the row of the most
/// recent survey year. among rows sharing a year, the last one wins.
pub fn load_passenger_counts(
    path: &Path,
) -> Result<HashMap<u32, PassengerCountRow>, RailNetError> {
    let rows: Vec<PassengerCountRow> = read_ops::read_rows(path, &REQUIRED_COLUMNS)?;
    let mut latest: HashMap<u32, PassengerCountRow> = HashMap::new();
    for row in rows {
        match latest.get(&row.uic) {
            Some(existing) if existing.year > row.year => {}
            _ => {
                latest.insert(row.uic, row);
            }
        }
    }
    Ok(latest)
}

fn de_grouped_count<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = String::deserialize(deserializer)?;
    if value.is_empty() {
        return Ok(None);
    }
    value
        .replace(GROUPING_MARK, "")
        .parse::<u64>()
        .map(Some)
        .map_err(serde::de::Error::custom)
}
