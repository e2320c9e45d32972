mod errors;
mod month;

pub use errors::MonthFilterError;
pub use month::MonthFilter;

pub type RecordId = u32;
