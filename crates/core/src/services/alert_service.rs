use tracing::debug;

use crate::errors::CoreError;
use crate::models::alert::{Alert, AlertKind, AlertSettings};
use crate::models::fund::Fund;
use crate::models::news::NewsItem;

/// Validates alert preferences and evaluates them against the catalog.
///
/// Evaluation is a snapshot: alerts are derived from the funds' reported
/// daily changes and the current news feed, never stored.
pub struct AlertService;

impl AlertService {
    pub fn new() -> Self {
        Self
    }

    pub fn validate(&self, settings: &AlertSettings) -> Result<(), CoreError> {
        settings.validate()
    }

    /// Alerts triggered under `settings`, price moves first, then news.
    ///
    /// - Price: any fund whose |daily change| reaches the threshold.
    /// - News: one alert per (item, related fund) with a non-zero impact,
    ///   restricted to funds present in `funds`.
    /// - Reports: no report feed exists, so nothing is emitted.
    #[must_use]
    pub fn evaluate(
        &self,
        settings: &AlertSettings,
        funds: &[Fund],
        news: &[NewsItem],
    ) -> Vec<Alert> {
        let mut alerts = Vec::new();

        if settings.price_alerts {
            for fund in funds {
                let daily = fund.changes.daily;
                if daily.abs() >= settings.daily_change_threshold {
                    alerts.push(Alert::new(
                        AlertKind::PriceMove,
                        &fund.id,
                        format!("{} moved {daily:+.2}% today", fund.name),
                        daily,
                    ));
                }
            }
        }

        if settings.news_alerts {
            for item in news.iter().filter(|n| n.impact != 0) {
                for fund in funds.iter().filter(|f| item.affects(&f.id)) {
                    alerts.push(Alert::new(
                        AlertKind::NewsImpact,
                        &fund.id,
                        format!("{} ({:+} points): {}", item.title, item.impact, fund.name),
                        f64::from(item.impact),
                    ));
                }
            }
        }

        debug!(
            alerts = alerts.len(),
            threshold = settings.daily_change_threshold,
            "Evaluated alerts"
        );
        alerts
    }
}

impl Default for AlertService {
    fn default() -> Self {
        Self::new()
    }
}
