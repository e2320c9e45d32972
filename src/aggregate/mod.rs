mod aggregator;
mod buckets;
mod dashboard;

pub use aggregator::{
    bucket_histogram, compute_statistics, filter_by_month, filter_by_month_name, paginate,
    search_filter, HistogramBar, Page, Statistics
};
pub use buckets::{PriceBucket, PRICE_BUCKETS};
pub use dashboard::{Dashboard, TableQuery, TableView};
