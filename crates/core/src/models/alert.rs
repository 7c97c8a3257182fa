use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::CoreError;

/// Smallest accepted daily-change threshold, in percent.
pub const MIN_DAILY_CHANGE_THRESHOLD: f64 = 0.1;

/// Largest accepted daily-change threshold, in percent.
pub const MAX_DAILY_CHANGE_THRESHOLD: f64 = 20.0;

/// User notification preferences.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AlertSettings {
    /// Notify on significant daily price moves
    pub price_alerts: bool,

    /// Notify on news affecting held funds
    pub news_alerts: bool,

    /// Notify when new fund reports are published
    pub report_alerts: bool,

    /// Daily move (absolute, in percent) that triggers a price alert
    pub daily_change_threshold: f64,
}

impl Default for AlertSettings {
    fn default() -> Self {
        Self {
            price_alerts: true,
            news_alerts: true,
            report_alerts: false,
            daily_change_threshold: 5.0,
        }
    }
}

impl AlertSettings {
    /// Check that the daily-change threshold is a finite value within
    /// `MIN_DAILY_CHANGE_THRESHOLD..=MAX_DAILY_CHANGE_THRESHOLD`.
    pub fn validate(&self) -> Result<(), CoreError> {
        let t = self.daily_change_threshold;
        if !t.is_finite() || !(MIN_DAILY_CHANGE_THRESHOLD..=MAX_DAILY_CHANGE_THRESHOLD).contains(&t) {
            return Err(CoreError::ValidationError(format!(
                "Daily change threshold {t} must be between {MIN_DAILY_CHANGE_THRESHOLD} and {MAX_DAILY_CHANGE_THRESHOLD} percent"
            )));
        }
        Ok(())
    }
}

/// What triggered an alert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AlertKind {
    PriceMove,
    NewsImpact,
}

impl std::fmt::Display for AlertKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AlertKind::PriceMove => write!(f, "Price move"),
            AlertKind::NewsImpact => write!(f, "News impact"),
        }
    }
}

/// A triggered alert for one fund.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Alert {
    pub id: Uuid,
    pub kind: AlertKind,
    pub fund_id: String,
    pub message: String,
    /// The daily change (PriceMove) or impact score (NewsImpact) that fired
    pub value: f64,
}

impl Alert {
    pub fn new(
        kind: AlertKind,
        fund_id: impl Into<String>,
        message: impl Into<String>,
        value: f64,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind,
            fund_id: fund_id.into(),
            message: message.into(),
            value,
        }
    }
}
