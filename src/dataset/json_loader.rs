use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde_json::Value;
use tracing::error;

use crate::dataset::DatasetError;
use crate::models::TransactionRecord;

/// Loads a JSON dataset: an array of record objects.
///
/// A missing file or a malformed document is a hard error. A record that
/// fails to deserialize (for example an unparseable `dateOfSale`) is logged
/// with its `id` and skipped, so one bad record never takes down the whole
/// dashboard.
pub fn load_json(path: &Path) -> Result<Vec<TransactionRecord>, DatasetError> {
    let file = File::open(path)?;
    let values: Vec<Value> = serde_json::from_reader(BufReader::new(file))?;

    let mut records = Vec::with_capacity(values.len());

    for (index, value) in values.into_iter().enumerate() {
        let id = value.get("id").and_then(Value::as_u64);

        match serde_json::from_value::<TransactionRecord>(value) {
            Ok(record) => records.push(record),
            Err(record_error) => match id {
                Some(id) => error!("Skipping invalid record [{id}]: {record_error}"),
                None => error!("Skipping invalid record at position [{index}]: {record_error}")
            }
        }
    }

    Ok(records)
}
