#[derive(thiserror::Error, Debug)]
pub enum RailNetError {
    #[error("invalid data in '{path}': {detail}")]
    DataFormat { path: String, detail: String },
    #[error("failure reading '{path}': {source}")]
    DatasetRead { path: String, source: csv::Error },
    #[error("{0}")]
    Validation(String),
    #[error("failure reading or writing file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failure processing delimited data: {0}")]
    Csv(#[from] csv::Error),
}
