mod errors;
mod transaction;

use std::fmt;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

pub use errors::ChartKindError;
pub use transaction::TransactionRecord;

/// Which chart rendering(s) the presentation layer should draw.
///
/// Every kind is fed by the same histogram; the selection never changes what
/// is aggregated, only what gets drawn.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum ChartKind {
    All,
    Bar,
    Pie,
    Line
}

impl ChartKind {
    /// Whether a selection covers the given concrete chart kind.
    pub fn includes(self, kind: ChartKind) -> bool {
        self == ChartKind::All || self == kind
    }
}

impl Display for ChartKind {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        let name = match self {
            ChartKind::All => "all",
            ChartKind::Bar => "bar",
            ChartKind::Pie => "pie",
            ChartKind::Line => "line"
        };

        formatter.write_str(name)
    }
}

impl FromStr for ChartKind {
    type Err = ChartKindError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "all" => Ok(ChartKind::All),
            "bar" => Ok(ChartKind::Bar),
            "pie" => Ok(ChartKind::Pie),
            "line" => Ok(ChartKind::Line),
            _ => Err(ChartKindError::UnknownKind(value.to_string()))
        }
    }
}
