use serde::{Deserialize, Serialize};

use super::alert::AlertSettings;
use crate::errors::CoreError;
use crate::services::currency_service::{DEFAULT_DISPLAY_CURRENCY, DEFAULT_EXCHANGE_RATE};
use crate::services::indicators::DEFAULT_MOVING_AVERAGE_WINDOW;
use crate::services::series_service::{
    DEFAULT_MAX_LOOKBACK_DAYS, DEFAULT_NOISE_AMPLITUDE, MAX_LOOKBACK_DAYS,
};

/// Separators used when rendering amounts for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumberFormat {
    pub group_separator: char,
    pub decimal_separator: char,
}

impl Default for NumberFormat {
    fn default() -> Self {
        Self {
            group_separator: ',',
            decimal_separator: '.',
        }
    }
}

/// Process-wide configuration. Every field has a default, so a partial
/// JSON document is enough to override a single value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Label of the currency prices are converted into (e.g., "AED").
    pub display_currency: String,

    /// Display-currency units per base-currency unit (1 USD = 3.67 AED).
    pub exchange_rate: f64,

    pub number_format: NumberFormat,

    /// Trailing window of the chart's moving-average overlay, in points.
    pub moving_average_window: usize,

    /// Days of synthetic history generated per fund. The series holds one more point (today).
    pub max_lookback_days: usize,

    /// Half-width of the uniform noise added to each synthetic price.
    pub noise_amplitude: f64,

    /// Seed for reproducible synthetic series. `None` draws fresh noise on every call.
    pub seed: Option<u64>,

    pub alerts: AlertSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            display_currency: DEFAULT_DISPLAY_CURRENCY.to_string(),
            exchange_rate: DEFAULT_EXCHANGE_RATE,
            number_format: NumberFormat::default(),
            moving_average_window: DEFAULT_MOVING_AVERAGE_WINDOW,
            max_lookback_days: DEFAULT_MAX_LOOKBACK_DAYS,
            noise_amplitude: DEFAULT_NOISE_AMPLITUDE,
            seed: None,
            alerts: AlertSettings::default(),
        }
    }
}

impl Settings {
    /// Parse settings from JSON. Missing fields take their defaults.
    /// The result is validated before it is returned.
    pub fn from_json(json: &str) -> Result<Self, CoreError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), CoreError> {
        validate_exchange_rate(self.exchange_rate)?;
        if !(1..=MAX_LOOKBACK_DAYS).contains(&self.max_lookback_days) {
            return Err(CoreError::ValidationError(format!(
                "max_lookback_days {} must be between 1 and {MAX_LOOKBACK_DAYS}",
                self.max_lookback_days
            )));
        }
        if !self.noise_amplitude.is_finite() || self.noise_amplitude < 0.0 {
            return Err(CoreError::ValidationError(format!(
                "noise_amplitude {} must be a finite, non-negative number",
                self.noise_amplitude
            )));
        }
        if self.display_currency.trim().is_empty() {
            return Err(CoreError::ValidationError(
                "display_currency must not be empty".into(),
            ));
        }
        self.alerts.validate()
    }
}

/// Exchange rates must be finite and strictly positive.
pub(crate) fn validate_exchange_rate(rate: f64) -> Result<(), CoreError> {
    if !rate.is_finite() || rate <= 0.0 {
        return Err(CoreError::ValidationError(format!(
            "Exchange rate {rate} must be a finite number greater than zero"
        )));
    }
    Ok(())
}
