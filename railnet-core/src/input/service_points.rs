use crate::error::RailNetError;
use crate::input::read_ops;
use serde::Deserialize;
use std::path::Path;

pub const REQUIRED_COLUMNS: [&str; 8] = [
    "number",
    "designationOfficial",
    "cantonName",
    "municipalityName",
    "businessOrganisationDescriptionEn",
    "wgs84East",
    "wgs84North",
    "height",
];

/// a row of the service point registry describing one operation point's
/// identity and location. coordinates and height can be absent for points
/// outside the surveyed network.
#[derive(Deserialize, Debug, Clone)]
pub struct ServicePointRow {
    /// UIC number of the operation point
    #[serde(rename = "number")]
    pub number: u32,
    #[serde(rename = "designationOfficial")]
    pub designation_official: String,
    #[serde(rename = "cantonName")]
    pub canton_name: String,
    #[serde(rename = "municipalityName")]
    pub municipality_name: String,
    #[serde(rename = "businessOrganisationDescriptionEn")]
    pub business_organisation: String,
    #[serde(rename = "wgs84East")]
    pub wgs84_east: Option<f64>,
    #[serde(rename = "wgs84North")]
    pub wgs84_north: Option<f64>,
    #[serde(rename = "height")]
    pub height: Option<f64>,
}

pub fn load_service_points(path: &Path) -> Result<Vec<ServicePointRow>, RailNetError> {
    read_ops::read_rows(path, &REQUIRED_COLUMNS)
}

#[cfg(test)]
mod test {
    use super::ServicePointRow;

    #[test]
    fn test_absent_coordinates_deserialize_as_none() {
        let data = "number;designationOfficial;cantonName;municipalityName;businessOrganisationDescriptionEn;wgs84East;wgs84North;height\n\
                    8507000;Bern;Bern;Bern;Swiss Federal Railways SBB;7.439122;46.948832;540.2\n\
                    8500001;Boncourt frontière;Jura;Boncourt;SNCF;;;\n";
        let rows = csv::ReaderBuilder::new()
            .delimiter(b';')
            .from_reader(data.as_bytes())
            .into_deserialize::<ServicePointRow>()
            .collect::<Result<Vec<_>, _>>()
            .expect("fixture rows should deserialize");
        assert_eq!(rows[0].number, 8507000);
        assert_eq!(rows[0].wgs84_east, Some(7.439122));
        assert!(rows[1].wgs84_east.is_none());
        assert!(rows[1].height.is_none());
    }
}
