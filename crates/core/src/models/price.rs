use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single price data point (date → price).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    pub date: NaiveDate,
    pub price: f64,
}

impl PricePoint {
    pub fn new(date: NaiveDate, price: f64) -> Self {
        Self { date, price }
    }
}

/// A price point carrying an optional trailing moving average.
///
/// `moving_average` is `None` until enough earlier points exist in the
/// series to fill the averaging window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnnotatedPoint {
    pub date: NaiveDate,
    pub price: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub moving_average: Option<f64>,
}
