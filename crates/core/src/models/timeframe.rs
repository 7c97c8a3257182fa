use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::errors::CoreError;

/// Lookback window selectable on a fund chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Timeframe {
    #[serde(rename = "1W")]
    OneWeek,
    #[default]
    #[serde(rename = "1M")]
    OneMonth,
    #[serde(rename = "3M")]
    ThreeMonths,
    #[serde(rename = "6M")]
    SixMonths,
    #[serde(rename = "1Y")]
    OneYear,
    #[serde(rename = "Max")]
    Max,
}

impl Timeframe {
    /// Fixed day count of this window, or `None` for `Max` (whole series).
    #[must_use]
    pub fn days(&self) -> Option<usize> {
        match self {
            Timeframe::OneWeek => Some(7),
            Timeframe::OneMonth => Some(30),
            Timeframe::ThreeMonths => Some(90),
            Timeframe::SixMonths => Some(180),
            Timeframe::OneYear => Some(365),
            Timeframe::Max => None,
        }
    }

    /// Number of points this window keeps from a series of `len` points.
    #[must_use]
    pub fn point_count(&self, len: usize) -> usize {
        self.days().map_or(len, |d| d.min(len))
    }

    /// Slice the trailing points of an oldest-first series.
    ///
    /// Never reorders and never pads: a series shorter than the window is
    /// returned whole.
    #[must_use]
    pub fn window<'a, T>(&self, series: &'a [T]) -> &'a [T] {
        let count = self.point_count(series.len());
        &series[series.len() - count..]
    }

    /// Short label shown on the timeframe selector.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Timeframe::OneWeek => "1W",
            Timeframe::OneMonth => "1M",
            Timeframe::ThreeMonths => "3M",
            Timeframe::SixMonths => "6M",
            Timeframe::OneYear => "1Y",
            Timeframe::Max => "Max",
        }
    }

    /// All timeframes in selector order.
    #[must_use]
    pub fn all() -> &'static [Timeframe] {
        &[
            Timeframe::OneWeek,
            Timeframe::OneMonth,
            Timeframe::ThreeMonths,
            Timeframe::SixMonths,
            Timeframe::OneYear,
            Timeframe::Max,
        ]
    }
}

impl std::fmt::Display for Timeframe {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Timeframe {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Timeframe::all()
            .iter()
            .copied()
            .find(|tf| tf.label().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| {
                CoreError::ValidationError(format!(
                    "Unknown timeframe '{s}': expected one of 1W, 1M, 3M, 6M, 1Y, Max"
                ))
            })
    }
}
