use std::num::NonZeroUsize;

use crate::aggregate::aggregator::{
    bucket_histogram, compute_statistics, filter_by_month, paginate, search_filter, HistogramBar,
    Statistics
};
use crate::models::TransactionRecord;
use crate::types::MonthFilter;

/// The inputs of one table-view computation: the four transient UI
/// selections that are not the month-only chart and statistics views.
#[derive(Debug, Clone)]
pub struct TableQuery {
    pub month: MonthFilter,
    pub search: String,
    pub page_number: usize,
    pub page_size: NonZeroUsize
}

/// One rendered-ready table page.
///
/// `total_rows` counts the filtered set (month filter plus search) before
/// pagination, and `total_pages` is derived from it.
#[derive(Debug, Clone, PartialEq)]
pub struct TableView {
    pub rows: Vec<TransactionRecord>,
    pub page_number: usize,
    pub total_pages: usize,
    pub total_rows: usize
}

/// Owns the immutable dataset and derives the three dashboard views from it.
///
/// Every view call is a fresh pure computation over the same records, so any
/// number of independent dashboards can share a dataset by cloning it, and
/// changing a selection simply means calling the view again.
pub struct Dashboard {
    records: Vec<TransactionRecord>
}

impl Dashboard {
    pub fn new(records: Vec<TransactionRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[TransactionRecord] {
        &self.records
    }

    /// The histogram behind the bar, pie, and line renderings.
    pub fn chart_view(&self, month: MonthFilter) -> [HistogramBar; 10] {
        let filtered = filter_by_month(&self.records, month);

        bucket_histogram(&filtered)
    }

    /// The statistics triple for the given month selection.
    pub fn statistics_view(&self, month: MonthFilter) -> Statistics {
        let filtered = filter_by_month(&self.records, month);

        compute_statistics(&filtered)
    }

    /// The filtered, searched, paginated table page.
    ///
    /// Month filter first, then search, then pagination; that composition is
    /// what the rest of the dashboard calls the filtered set.
    pub fn table_view(&self, query: &TableQuery) -> TableView {
        let by_month = filter_by_month(&self.records, query.month);
        let filtered = search_filter(&by_month, &query.search);
        let page = paginate(&filtered, query.page_number, query.page_size);

        TableView {
            rows: page.records.to_vec(),
            page_number: page.page_number,
            total_pages: page.total_pages,
            total_rows: page.total_records
        }
    }
}
