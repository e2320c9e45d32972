use std::fmt;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use chrono::{DateTime, Datelike, FixedOffset};

use crate::types::errors::MonthFilterError;

/// The month selection shared by every dashboard view.
///
/// The selector is a closed 13-value set: the sentinel `All` plus the twelve
/// canonical month names. Records are matched on the month component of their
/// sale date only; the year is ignored.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum MonthFilter {
    All,
    January,
    February,
    March,
    April,
    May,
    June,
    July,
    August,
    September,
    October,
    November,
    December
}

impl MonthFilter {
    /// The twelve month variants in calendar order, without the `All` sentinel.
    pub const MONTHS: [MonthFilter; 12] = [
        MonthFilter::January,
        MonthFilter::February,
        MonthFilter::March,
        MonthFilter::April,
        MonthFilter::May,
        MonthFilter::June,
        MonthFilter::July,
        MonthFilter::August,
        MonthFilter::September,
        MonthFilter::October,
        MonthFilter::November,
        MonthFilter::December
    ];

    /// The canonical display name ("All", "January", ...).
    pub fn name(self) -> &'static str {
        match self {
            MonthFilter::All => "All",
            MonthFilter::January => "January",
            MonthFilter::February => "February",
            MonthFilter::March => "March",
            MonthFilter::April => "April",
            MonthFilter::May => "May",
            MonthFilter::June => "June",
            MonthFilter::July => "July",
            MonthFilter::August => "August",
            MonthFilter::September => "September",
            MonthFilter::October => "October",
            MonthFilter::November => "November",
            MonthFilter::December => "December"
        }
    }

    /// The 1-based calendar month number, or `None` for `All`.
    pub fn month_number(self) -> Option<u32> {
        Self::MONTHS.iter().position(|month| *month == self).map(|index| index as u32 + 1)
    }

    /// Case-insensitive lookup over the 13 canonical names.
    ///
    /// Unknown names return `None`; callers that filter by raw strings treat
    /// that as a selection matching no records rather than an error.
    pub fn from_name(name: &str) -> Option<Self> {
        if name.eq_ignore_ascii_case("All") {
            return Some(MonthFilter::All);
        }

        Self::MONTHS.iter().copied().find(|month| month.name().eq_ignore_ascii_case(name))
    }

    /// Whether a sale date falls under this selection. `All` matches any date.
    pub fn matches(self, date: &DateTime<FixedOffset>) -> bool {
        match self.month_number() {
            None => true,
            Some(number) => date.month() == number
        }
    }
}

impl Display for MonthFilter {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.name())
    }
}

impl FromStr for MonthFilter {
    type Err = MonthFilterError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::from_name(value.trim()).ok_or_else(|| MonthFilterError::UnknownMonth(value.to_string()))
    }
}
