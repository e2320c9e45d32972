use std::borrow::Cow;
use std::num::NonZeroUsize;

use rust_decimal::Decimal;

use crate::aggregate::buckets::PRICE_BUCKETS;
use crate::models::TransactionRecord;
use crate::types::MonthFilter;

/// One histogram entry: a bucket label with the number of records priced
/// inside that bucket's range.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct HistogramBar {
    pub label: &'static str,
    pub count: usize
}

/// The summary statistics triple for a filtered record set.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Statistics {
    /// Sum of `price` over ALL records in the set, sold or not. Revenue has
    /// never been restricted to sold items; keep it that way.
    pub total_sale: Decimal,
    pub total_sold_items: usize,
    pub total_not_sold_items: usize
}

/// One page of a record list, plus the metadata the table footer needs.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<'a> {
    pub records: &'a [TransactionRecord],
    pub page_number: usize,
    pub total_pages: usize,
    pub total_records: usize
}

/// Keeps the order-preserving subsequence of records sold in the given month.
///
/// `All` hands the input back borrowed; no copy is made.
pub fn filter_by_month<'a>(
    records: &'a [TransactionRecord],
    month: MonthFilter
) -> Cow<'a, [TransactionRecord]> {
    if month == MonthFilter::All {
        return Cow::Borrowed(records);
    }

    let filtered = records
        .iter()
        .filter(|record| month.matches(&record.date_of_sale))
        .cloned()
        .collect();

    Cow::Owned(filtered)
}

/// String-keyed variant of [`filter_by_month`].
///
/// A name that is neither "All" nor a month matches no records and yields an
/// empty set; the dashboard treats that as a selection, not a fault.
pub fn filter_by_month_name<'a>(
    records: &'a [TransactionRecord],
    name: &str
) -> Cow<'a, [TransactionRecord]> {
    match MonthFilter::from_name(name) {
        Some(month) => filter_by_month(records, month),
        None => Cow::Owned(Vec::new())
    }
}

/// Counts records into the ten fixed price buckets, in display order.
///
/// Every bucket appears in the output even when its count is zero. Each
/// record is tested against every bucket's inclusive bounds independently
/// (see [`crate::aggregate::PriceBucket`] for the boundary rules).
pub fn bucket_histogram(records: &[TransactionRecord]) -> [HistogramBar; 10] {
    PRICE_BUCKETS.map(|bucket| HistogramBar {
        label: bucket.label,
        count: records.iter().filter(|record| bucket.contains(record.price)).count()
    })
}

/// Computes the statistics triple in a single pass.
///
/// No rounding happens here; the presentation layer rounds `total_sale` to
/// two decimals when it displays the value.
pub fn compute_statistics(records: &[TransactionRecord]) -> Statistics {
    let mut statistics = Statistics {
        total_sale: Decimal::ZERO,
        total_sold_items: 0,
        total_not_sold_items: 0
    };

    for record in records {
        statistics.total_sale += record.price;

        if record.sold {
            statistics.total_sold_items += 1;
        } else {
            statistics.total_not_sold_items += 1;
        }
    }

    statistics
}

/// Keeps records whose title, description, or price rendering contains the
/// query substring.
///
/// Title and description match case-insensitively; the price match compares
/// the raw query against the decimal rendering, so searching "49" finds a
/// 49.99 item. An empty query hands the input back borrowed.
pub fn search_filter<'a>(
    records: &'a [TransactionRecord],
    query: &str
) -> Cow<'a, [TransactionRecord]> {
    if query.is_empty() {
        return Cow::Borrowed(records);
    }

    let lowered = query.to_lowercase();

    let filtered = records
        .iter()
        .filter(|record| {
            record.title.to_lowercase().contains(&lowered)
                || record.description.to_lowercase().contains(&lowered)
                || record.price.to_string().contains(query)
        })
        .cloned()
        .collect();

    Cow::Owned(filtered)
}

/// Slices out one 1-indexed page of the record list.
///
/// The slice bounds are clipped to the list, so an out-of-range page number
/// yields an empty page rather than an error; the UI disables navigation
/// past `total_pages` instead of relying on errors here.
pub fn paginate(
    records: &[TransactionRecord],
    page_number: usize,
    page_size: NonZeroUsize
) -> Page<'_> {
    let size = page_size.get();
    let page_number = page_number.max(1);

    let start = (page_number - 1).saturating_mul(size).min(records.len());
    let end = start.saturating_add(size).min(records.len());

    Page {
        records: &records[start..end],
        page_number,
        total_pages: records.len().div_ceil(size),
        total_records: records.len()
    }
}
