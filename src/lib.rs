//! Core library for the sales dashboard: pure aggregation and filtering
//! over an immutable transaction dataset.
//!
//! The rendering layer (whatever draws the charts, the statistics cards, and
//! the table) stays outside this crate; it calls the [`aggregate`] views with
//! a loaded dataset and displays the results.

pub mod aggregate;
pub mod dataset;
pub mod models;
pub mod types;
