use crate::error::RailNetError;
use serde::de::DeserializeOwned;
use std::path::Path;

/// delimiter shared by all published source tables
pub const DELIMITER: u8 = b';';

/// reads all rows of a semicolon-delimited table into `T`, after confirming
/// that the expected columns are present in the header row. tables may carry
/// additional columns, which are ignored.
///
/// # Arguments
///
/// * `path` - location of the source table
/// * `required_columns` - publisher column names the caller deserializes
///
/// # Returns
///
/// * all rows of the table, or a fatal error naming the file and the
///   missing or malformed column
pub fn read_rows<T: DeserializeOwned>(
    path: &Path,
    required_columns: &[&str],
) -> Result<Vec<T>, RailNetError> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(DELIMITER)
        .from_path(path)
        .map_err(|source| RailNetError::DatasetRead {
            path: path.display().to_string(),
            source,
        })?;
    let headers = reader
        .headers()
        .map_err(|source| RailNetError::DatasetRead {
            path: path.display().to_string(),
            source,
        })?
        .clone();
    for column in required_columns {
        if !headers.iter().any(|header| header == *column) {
            return Err(RailNetError::DataFormat {
                path: path.display().to_string(),
                detail: format!("missing expected column '{column}'"),
            });
        }
    }
    reader
        .into_deserialize::<T>()
        .map(|row| {
            row.map_err(|e| RailNetError::DataFormat {
                path: path.display().to_string(),
                detail: format!("{e}"),
            })
        })
        .collect()
}
