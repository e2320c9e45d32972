use rust_decimal::Decimal;

/// One of the fixed histogram price ranges.
///
/// Bounds are inclusive on both ends and step in whole numbers ("0-100" is
/// followed by "101-200"), exactly as the published bucket table reads. A
/// fractional price strictly between two buckets (e.g. 100.50) therefore
/// lands in no bucket. The dashboard has always counted that way; reshaping
/// the ranges would change the published histogram.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct PriceBucket {
    pub label: &'static str,
    pub min: u32,
    /// `None` marks the unbounded top bucket.
    pub max: Option<u32>
}

impl PriceBucket {
    pub fn contains(&self, price: Decimal) -> bool {
        if price < Decimal::from(self.min) {
            return false;
        }

        match self.max {
            Some(max) => price <= Decimal::from(max),
            None => true
        }
    }
}

/// The ten histogram buckets, in display order, covering `[0, +inf)`.
pub const PRICE_BUCKETS: [PriceBucket; 10] = [
    PriceBucket { label: "0-100", min: 0, max: Some(100) },
    PriceBucket { label: "101-200", min: 101, max: Some(200) },
    PriceBucket { label: "201-300", min: 201, max: Some(300) },
    PriceBucket { label: "301-400", min: 301, max: Some(400) },
    PriceBucket { label: "401-500", min: 401, max: Some(500) },
    PriceBucket { label: "501-600", min: 501, max: Some(600) },
    PriceBucket { label: "601-700", min: 601, max: Some(700) },
    PriceBucket { label: "701-800", min: 701, max: Some(800) },
    PriceBucket { label: "801-900", min: 801, max: Some(900) },
    PriceBucket { label: "901-above", min: 901, max: None }
];
