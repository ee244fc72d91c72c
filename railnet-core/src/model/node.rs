use serde::Serialize;

/// a railway operation point as written to the node list of every
/// representation. its unique identifier is the UIC number (`BPUIC`) from
/// the service point registry; passenger counts are joined in from the
/// frequentia survey where available.
///
/// the serialized column names define the node file header, which is
/// identical across all four representations.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Node {
    /// UIC number of the operation point, unique within the node set
    #[serde(rename = "BPUIC")]
    pub bpuic: u32,
    /// official designation from the service point registry
    #[serde(rename = "STATION_NAME")]
    pub station_name: String,
    #[serde(rename = "CANTON")]
    pub canton: String,
    #[serde(rename = "MUNICIPALITY")]
    pub municipality: String,
    /// business organisation operating the point
    #[serde(rename = "COMPANY")]
    pub company: String,
    #[serde(
        rename = "LONGITUDE",
        serialize_with = "crate::output::decimal::opt_f64_6"
    )]
    pub longitude: Option<f64>,
    #[serde(
        rename = "LATITUDE",
        serialize_with = "crate::output::decimal::opt_f64_6"
    )]
    pub latitude: Option<f64>,
    /// elevation in meters above sea level
    #[serde(
        rename = "ELEVATION",
        serialize_with = "crate::output::decimal::opt_f64_1"
    )]
    pub elevation: Option<f64>,
    /// average daily passenger traffic, most recent survey year
    #[serde(rename = "AVG_DAILY_TRAFFIC")]
    pub avg_daily_traffic: Option<u64>,
    #[serde(rename = "AVG_DAILY_TRAFFIC_WEEKDAYS")]
    pub avg_daily_traffic_weekdays: Option<u64>,
    #[serde(rename = "AVG_DAILY_TRAFFIC_WEEKENDS")]
    pub avg_daily_traffic_weekends: Option<u64>,
}
