use crate::errors::CoreError;
use crate::models::price::PricePoint;
use crate::models::settings::{validate_exchange_rate, NumberFormat, Settings};

/// Display-currency units per base unit (1 USD = 3.67 AED).
pub const DEFAULT_EXCHANGE_RATE: f64 = 3.67;

pub const DEFAULT_DISPLAY_CURRENCY: &str = "AED";

/// Converts amounts into the display currency at a fixed rate and formats them.
///
/// The rate is handed in at construction rather than read from a global,
/// so tests and hosts can substitute their own. There is no rate lookup and
/// no time variance: one rate applies to every date.
///
/// E.g., with rate 3.67 and label "AED": `convert(100.0)` → `367.0`,
/// `format(1234.5)` → `"AED 1,234.50"`.
#[derive(Debug, Clone)]
pub struct CurrencyService {
    rate: f64,
    label: String,
    number_format: NumberFormat,
}

impl CurrencyService {
    /// Rate must be finite and greater than zero.
    pub fn new(rate: f64, label: impl Into<String>) -> Result<Self, CoreError> {
        validate_exchange_rate(rate)?;
        Ok(Self {
            rate,
            label: label.into(),
            number_format: NumberFormat::default(),
        })
    }

    pub fn from_settings(settings: &Settings) -> Result<Self, CoreError> {
        Ok(Self::new(settings.exchange_rate, settings.display_currency.clone())?
            .with_number_format(settings.number_format))
    }

    #[must_use]
    pub fn with_number_format(mut self, number_format: NumberFormat) -> Self {
        self.number_format = number_format;
        self
    }

    #[must_use]
    pub fn rate(&self) -> f64 {
        self.rate
    }

    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Scalar multiply by the fixed rate. Linear, and `convert(0.0) == 0.0`.
    #[must_use]
    pub fn convert(&self, amount: f64) -> f64 {
        amount * self.rate
    }

    /// Convert every price of a series, keeping dates and order.
    #[must_use]
    pub fn convert_series(&self, series: &[PricePoint]) -> Vec<PricePoint> {
        series
            .iter()
            .map(|p| PricePoint {
                date: p.date,
                price: self.convert(p.price),
            })
            .collect()
    }

    /// Format an amount with the display-currency label.
    #[must_use]
    pub fn format(&self, amount: f64) -> String {
        self.format_with(amount, &self.label)
    }

    /// Format an amount with an arbitrary currency label, always with two decimals.
    #[must_use]
    pub fn format_with(&self, amount: f64, label: &str) -> String {
        format!("{label} {}", format_amount(amount, self.number_format))
    }
}

impl Default for CurrencyService {
    fn default() -> Self {
        Self {
            rate: DEFAULT_EXCHANGE_RATE,
            label: DEFAULT_DISPLAY_CURRENCY.to_string(),
            number_format: NumberFormat::default(),
        }
    }
}

/// Render `amount` with grouped thousands and exactly two fraction digits.
///
/// Non-finite values are rendered as-is ("NaN", "inf") since they have no
/// digits to group.
#[must_use]
pub fn format_amount(amount: f64, number_format: NumberFormat) -> String {
    if !amount.is_finite() {
        return amount.to_string();
    }

    // Round half away from zero on the cent value, then split.
    let cents = (amount.abs() * 100.0).round();
    let negative = amount < 0.0 && cents > 0.0;
    let fixed = format!("{:.2}", cents / 100.0);
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(number_format.group_separator);
        }
        grouped.push(ch);
    }

    let sign = if negative { "-" } else { "" };
    format!(
        "{sign}{grouped}{}{frac_part}",
        number_format.decimal_separator
    )
}
