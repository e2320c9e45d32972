use chrono::{DateTime, FixedOffset};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::RecordId;

/// A single entry in the sales dataset.
///
/// Records are immutable once loaded; every dashboard view is recomputed
/// from the same record list. The `dateOfSale` field name and RFC 3339
/// timestamp format follow the dataset file layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionRecord {
    /// Unique identifier across the full dataset.
    pub id: RecordId,
    pub title: String,
    pub description: String,
    /// Non-negative sale price.
    pub price: Decimal,
    pub category: String,
    /// Whether the item actually sold.
    pub sold: bool,
    /// Sale timestamp; only its month component drives filtering.
    pub date_of_sale: DateTime<FixedOffset>,
    /// Opaque image reference, passed through to the table view untouched.
    pub image: String
}
