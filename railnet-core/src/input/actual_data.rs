use crate::error::RailNetError;
use crate::input::read_ops;
use crate::model::{StopEvent, STATION_ALIASES};
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer};
use std::path::Path;

/// date format of `BETRIEBSTAG`
const OPERATING_DAY_FORMAT: &str = "%d.%m.%Y";

/// timestamp format of the scheduled arrival and departure columns
const SCHEDULE_TIME_FORMAT: &str = "%d.%m.%Y %H:%M";

/// product identifier of train runs
pub const PRODUCT_TRAIN: &str = "Zug";

/// line text of car-shuttle trains, which carry no passengers between stops
const LINE_CAR_SHUTTLE: &str = "ATZ";

pub const REQUIRED_COLUMNS: [&str; 9] = [
    "BETRIEBSTAG",
    "FAHRT_BEZEICHNER",
    "PRODUKT_ID",
    "LINIEN_TEXT",
    "FAELLT_AUS_TF",
    "BPUIC",
    "HALTESTELLEN_NAME",
    "ANKUNFTSZEIT",
    "ABFAHRTSZEIT",
];

/// a raw row of the actual data (istdaten) table: one recorded stop of a
/// train run on the operating day the table covers.
#[derive(Deserialize, Debug, Clone)]
pub struct ActualDataRow {
    #[serde(rename = "BETRIEBSTAG", deserialize_with = "de_operating_day")]
    pub operating_day: NaiveDate,
    #[serde(rename = "FAHRT_BEZEICHNER")]
    pub trip_id: String,
    #[serde(rename = "PRODUKT_ID")]
    pub product_id: String,
    #[serde(rename = "LINIEN_TEXT")]
    pub line_text: String,
    /// true when the run was cancelled
    #[serde(rename = "FAELLT_AUS_TF")]
    pub cancelled: bool,
    #[serde(rename = "BPUIC")]
    pub bpuic: u32,
    #[serde(rename = "HALTESTELLEN_NAME")]
    pub stop_name: String,
    #[serde(rename = "ANKUNFTSZEIT", deserialize_with = "de_schedule_time")]
    pub arrival: Option<NaiveDateTime>,
    #[serde(rename = "ABFAHRTSZEIT", deserialize_with = "de_schedule_time")]
    pub departure: Option<NaiveDateTime>,
}

/// reads the actual data table and applies the cleaning rules: keep train
/// runs only, drop cancelled runs and car-shuttle lines, and fold satellite
/// stations onto their main station.
pub fn load_stop_events(path: &Path) -> Result<Vec<StopEvent>, RailNetError> {
    let rows: Vec<ActualDataRow> = read_ops::read_rows(path, &REQUIRED_COLUMNS)?;
    let events = rows.into_iter().filter_map(clean_row).collect();
    Ok(events)
}

/// applies the per-row cleaning rules, returning None for rows that do not
/// describe a passenger train stop.
fn clean_row(mut row: ActualDataRow) -> Option<StopEvent> {
    // rows without a product identifier are train rows in the published data
    if row.product_id.is_empty() {
        row.product_id = PRODUCT_TRAIN.to_string();
    }
    if row.product_id != PRODUCT_TRAIN || row.cancelled || row.line_text == LINE_CAR_SHUTTLE {
        return None;
    }
    let (bpuic, stop_name) = match STATION_ALIASES
        .iter()
        .find(|alias| alias.alias_name == row.stop_name)
    {
        Some(alias) => (alias.bpuic, alias.canonical_name.to_string()),
        None => (row.bpuic, row.stop_name),
    };
    Some(StopEvent {
        operating_day: row.operating_day,
        trip_id: row.trip_id,
        bpuic,
        stop_name,
        arrival: row.arrival,
        departure: row.departure,
    })
}

fn de_operating_day<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    let value = String::deserialize(deserializer)?;
    NaiveDate::parse_from_str(&value, OPERATING_DAY_FORMAT).map_err(serde::de::Error::custom)
}

fn de_schedule_time<'de, D>(deserializer: D) -> Result<Option<NaiveDateTime>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = String::deserialize(deserializer)?;
    if value.is_empty() {
        return Ok(None);
    }
    NaiveDateTime::parse_from_str(&value, SCHEDULE_TIME_FORMAT)
        .map(Some)
        .map_err(serde::de::Error::custom)
}
