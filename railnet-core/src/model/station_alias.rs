/// a satellite station recorded under its own stop name and code in the
/// actual data while belonging to the same physical station.
pub struct StationAlias {
    /// stop name as it appears in the actual data
    pub alias_name: &'static str,
    /// UIC number of the main station
    pub bpuic: u32,
    /// official designation of the main station
    pub canonical_name: &'static str,
}

/// stop events matching an alias are folded onto the main station before
/// any further processing, so each physical location keeps one code.
pub const STATION_ALIASES: [StationAlias; 3] = [
    StationAlias {
        alias_name: "Brig Bahnhofplatz",
        bpuic: 8501609,
        canonical_name: "Brig",
    },
    StationAlias {
        alias_name: "Lugano FLP",
        bpuic: 8505300,
        canonical_name: "Lugano",
    },
    StationAlias {
        alias_name: "Locarno FART",
        bpuic: 8505400,
        canonical_name: "Locarno",
    },
];
