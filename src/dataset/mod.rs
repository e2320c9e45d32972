mod csv_loader;
mod json_loader;
#[cfg(test)]
mod tests;

use std::io;
use std::path::Path;

use thiserror::Error;

pub use csv_loader::load_csv;
pub use json_loader::load_json;

use crate::models::TransactionRecord;

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("Dataset error: {0}")]
    Io(#[from] io::Error),
    #[error("Dataset error: the file is not a JSON array of records: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Dataset error: unreadable CSV file: {0}")]
    Csv(#[from] csv::Error),
    #[error("Dataset error: cannot tell the format of '{0}', expected a .json or .csv extension")]
    UnknownFormat(String)
}

/// Loads a dataset file, picking the loader from the file extension.
pub fn load(path: &Path) -> Result<Vec<TransactionRecord>, DatasetError> {
    match path.extension().and_then(|extension| extension.to_str()) {
        Some(extension) if extension.eq_ignore_ascii_case("json") => load_json(path),
        Some(extension) if extension.eq_ignore_ascii_case("csv") => load_csv(path),
        _ => Err(DatasetError::UnknownFormat(path.display().to_string()))
    }
}
