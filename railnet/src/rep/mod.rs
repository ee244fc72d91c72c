pub mod changes_ops;
pub mod flows_ops;
pub mod stations_ops;
pub mod stops_ops;

#[cfg(test)]
pub(crate) mod test_support {
    use chrono::{NaiveDate, NaiveDateTime};
    use railnet_core::model::StopEvent;
    use railnet_core::trip_ops::Trip;

    /// operating day shared by all fixture runs
    pub fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 5).expect("valid fixture date")
    }

    fn at(value: &str) -> NaiveDateTime {
        day().and_time(
            chrono::NaiveTime::parse_from_str(value, "%H:%M").expect("valid fixture time"),
        )
    }

    /// a stop event on the fixture operating day; times are `%H:%M`
    pub fn stop(bpuic: u32, arrival: Option<&str>, departure: Option<&str>) -> StopEvent {
        StopEvent {
            operating_day: day(),
            trip_id: String::new(),
            bpuic,
            stop_name: format!("stop-{bpuic}"),
            arrival: arrival.map(at),
            departure: departure.map(at),
        }
    }

    pub fn run(trip_id: &str, stops: Vec<StopEvent>) -> Trip {
        let stops = stops
            .into_iter()
            .map(|mut s| {
                s.trip_id = trip_id.to_string();
                s
            })
            .collect();
        Trip {
            trip_id: trip_id.to_string(),
            stops,
        }
    }
}
