use thiserror::Error;

#[derive(Debug, Error)]
pub enum MonthFilterError {
    #[error("Month filter error: '{0}' is not 'All' or a month name")]
    UnknownMonth(String)
}
