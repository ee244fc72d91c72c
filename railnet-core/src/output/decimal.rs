//! fixed-precision field serializers. every float column is written with a
//! fixed number of decimals so reruns over identical input produce
//! byte-identical files. absent values serialize as empty fields.
use serde::Serializer;

pub fn f64_2<S>(value: &f64, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&format!("{value:.2}"))
}

pub fn f64_4<S>(value: &f64, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&format!("{value:.4}"))
}

pub fn opt_f64_1<S>(value: &Option<f64>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match value {
        Some(v) => serializer.serialize_str(&format!("{v:.1}")),
        None => serializer.serialize_str(""),
    }
}

pub fn opt_f64_4<S>(value: &Option<f64>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match value {
        Some(v) => serializer.serialize_str(&format!("{v:.4}")),
        None => serializer.serialize_str(""),
    }
}

pub fn opt_f64_6<S>(value: &Option<f64>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match value {
        Some(v) => serializer.serialize_str(&format!("{v:.6}")),
        None => serializer.serialize_str(""),
    }
}

#[cfg(test)]
mod test {
    use serde::Serialize;

    #[derive(Serialize)]
    struct Row {
        #[serde(serialize_with = "super::f64_2")]
        duration: f64,
        #[serde(serialize_with = "super::opt_f64_6")]
        longitude: Option<f64>,
        #[serde(serialize_with = "super::opt_f64_4")]
        distance: Option<f64>,
    }

    #[test]
    fn test_fixed_precision_and_empty_absent_fields() {
        let mut writer = csv::WriterBuilder::new()
            .delimiter(b';')
            .from_writer(Vec::new());
        writer
            .serialize(Row {
                duration: 7.0 / 3.0,
                longitude: Some(7.439122),
                distance: None,
            })
            .expect("row should serialize");
        let bytes = writer.into_inner().expect("writer should flush");
        let text = String::from_utf8(bytes).expect("valid utf-8");
        assert_eq!(text, "duration;longitude;distance\n2.33;7.439122;\n");
    }
}
