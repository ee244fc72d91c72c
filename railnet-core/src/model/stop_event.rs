use chrono::{NaiveDate, NaiveDateTime};

/// one cleaned record of the actual data: a train run arriving at and/or
/// departing from an operation point on a given operating day. terminal
/// stops carry no departure time and initial stops no arrival time.
#[derive(Debug, Clone, PartialEq)]
pub struct StopEvent {
    /// operating day of the train run
    pub operating_day: NaiveDate,
    /// train run identifier (`FAHRT_BEZEICHNER`)
    pub trip_id: String,
    /// UIC number of the operation point, after alias folding
    pub bpuic: u32,
    /// stop name as recorded in the actual data, after alias folding
    pub stop_name: String,
    /// scheduled arrival time at this stop
    pub arrival: Option<NaiveDateTime>,
    /// scheduled departure time at this stop
    pub departure: Option<NaiveDateTime>,
}
