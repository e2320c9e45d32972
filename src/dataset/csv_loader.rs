use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use csv::{ReaderBuilder, Trim};
use tracing::error;

use crate::dataset::DatasetError;
use crate::models::TransactionRecord;

/// Loads a headered CSV dataset with the same columns as the JSON layout
/// (`id,title,description,price,category,sold,dateOfSale,image`).
///
/// Rows that fail to deserialize are logged with their line number and
/// skipped, matching the JSON loader's invalid-record handling. Prices come
/// through serde's numeric path, so trailing zeros are not preserved
/// (900.50 loads as 900.5), the same as numeric prices in the JSON layout.
pub fn load_csv(path: &Path) -> Result<Vec<TransactionRecord>, DatasetError> {
    let file = File::open(path)?;

    let mut reader = ReaderBuilder::new()
        .trim(Trim::All)
        .from_reader(BufReader::new(file));

    // Forces the header read so an unreadable file fails the whole load
    // instead of looking like an empty dataset.
    reader.headers()?;

    let mut records = Vec::new();

    for result in reader.deserialize::<TransactionRecord>() {
        match result {
            Ok(record) => records.push(record),
            Err(row_error) => {
                let line = row_error.position().map(|position| position.line());

                match line {
                    Some(line) => error!("Skipping invalid record at line [{line}]: {row_error}"),
                    None => error!("Skipping invalid record: {row_error}")
                }
            }
        }
    }

    Ok(records)
}
