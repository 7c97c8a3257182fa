use serde::{Deserialize, Serialize};

use super::price::AnnotatedPoint;
use super::timeframe::Timeframe;

/// Y-axis bounds for a price chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceDomain {
    pub min: f64,
    pub max: f64,
}

/// Chart-ready data for one fund over one timeframe.
///
/// The core computes all the numbers. The frontend only renders.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FundChart {
    pub fund_id: String,

    pub timeframe: Timeframe,

    /// Currency label the prices are expressed in
    pub currency: String,

    /// Oldest-first price points with the moving-average overlay
    pub points: Vec<AnnotatedPoint>,

    /// Padded Y-axis domain, `None` for an empty series
    pub domain: Option<PriceDomain>,

    /// Latest price, drawn as a horizontal reference line
    pub reference_price: Option<f64>,
}

impl FundChart {
    /// Number of points carrying a moving-average value.
    #[must_use]
    pub fn averaged_points(&self) -> usize {
        self.points
            .iter()
            .filter(|p| p.moving_average.is_some())
            .count()
    }
}
