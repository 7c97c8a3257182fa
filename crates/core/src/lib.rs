pub mod errors;
pub mod models;
pub mod repository;
pub mod services;

use chrono::NaiveDate;
use models::{
    alert::{Alert, AlertSettings},
    analytics::{AllocationSlice, FundReturns, PortfolioTotals},
    chart::FundChart,
    fund::Fund,
    news::NewsItem,
    settings::Settings,
    timeframe::Timeframe,
};
use repository::{memory::InMemoryFundRepository, traits::FundRepository};
use services::{
    alert_service::AlertService, chart_service::ChartService,
    currency_service::CurrencyService, news_service::NewsService,
    portfolio_service::PortfolioService, return_service::ReturnService,
    series_service::SeriesService,
};
use tracing::{info, warn};

use errors::CoreError;

/// Main entry point for the Fund Tracker core library.
/// Holds the fund repository, the settings and all services needed to work on them.
#[must_use]
pub struct FundTracker {
    repository: Box<dyn FundRepository>,
    settings: Settings,
    return_service: ReturnService,
    portfolio_service: PortfolioService,
    chart_service: ChartService,
    currency_service: CurrencyService,
    news_service: NewsService,
    alert_service: AlertService,
}

impl std::fmt::Debug for FundTracker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FundTracker")
            .field("repository", &self.repository.name())
            .field("funds", &self.repository.funds().len())
            .field("news", &self.repository.news().len())
            .field("settings", &self.settings)
            .finish()
    }
}

impl FundTracker {
    /// Tracker over the seeded reference catalog with default settings.
    pub fn new() -> Self {
        Self::build(
            Box::new(InMemoryFundRepository::reference()),
            Settings::default(),
            CurrencyService::default(),
        )
    }

    /// Tracker over a caller-supplied repository. Settings are validated first.
    pub fn with_repository(
        repository: Box<dyn FundRepository>,
        settings: Settings,
    ) -> Result<Self, CoreError> {
        settings.validate()?;
        let currency_service = CurrencyService::from_settings(&settings)?;
        Ok(Self::build(repository, settings, currency_service))
    }

    // ── Funds ───────────────────────────────────────────────────────

    /// All funds, in catalog order.
    #[must_use]
    pub fn funds(&self) -> &[Fund] {
        self.repository.funds()
    }

    /// Look up a fund by id.
    /// Unknown ids return `CoreError::FundNotFound`.
    pub fn fund(&self, fund_id: &str) -> Result<&Fund, CoreError> {
        self.repository.find_fund(fund_id).ok_or_else(|| {
            warn!(fund_id, repository = self.repository.name(), "Fund not found");
            CoreError::FundNotFound(fund_id.to_string())
        })
    }

    // ── Returns & Portfolio ─────────────────────────────────────────

    /// Current value, profit and return percentage of one fund.
    pub fn fund_returns(&self, fund_id: &str) -> Result<FundReturns, CoreError> {
        let fund = self.fund(fund_id)?;
        Ok(self.return_service.fund_returns(fund))
    }

    /// Return figures for every fund, in catalog order.
    #[must_use]
    pub fn all_fund_returns(&self) -> Vec<FundReturns> {
        self.funds()
            .iter()
            .map(|f| self.return_service.fund_returns(f))
            .collect()
    }

    /// Portfolio totals, recomputed from the full fund list on every call.
    #[must_use]
    pub fn portfolio_totals(&self) -> PortfolioTotals {
        self.portfolio_service.totals(self.funds())
    }

    /// Investment share per fund, for the allocation pie.
    #[must_use]
    pub fn portfolio_allocation(&self) -> Vec<AllocationSlice> {
        self.portfolio_service.allocation(self.funds())
    }

    // ── Charts ──────────────────────────────────────────────────────

    /// Chart for a fund over a timeframe, ending today (UTC).
    ///
    /// With `convert` set, prices are expressed in the display currency.
    pub fn fund_chart(
        &self,
        fund_id: &str,
        timeframe: Timeframe,
        convert: bool,
    ) -> Result<FundChart, CoreError> {
        let today = chrono::Utc::now().date_naive();
        self.fund_chart_at(fund_id, timeframe, convert, today)
    }

    /// Chart for a fund over a timeframe, ending at `today`.
    ///
    /// Without a seed in the settings, every call draws fresh noise, so two
    /// calls for the same fund produce different paths.
    pub fn fund_chart_at(
        &self,
        fund_id: &str,
        timeframe: Timeframe,
        convert: bool,
        today: NaiveDate,
    ) -> Result<FundChart, CoreError> {
        let fund = self.fund(fund_id)?;
        let currency = convert.then_some(&self.currency_service);

        let chart = match self.settings.seed {
            Some(seed) => {
                let mut rng = SeriesService::seeded_rng(seed, &fund.id);
                self.chart_service
                    .fund_chart(fund, timeframe, currency, today, &mut rng)
            }
            None => {
                let mut rng = rand::thread_rng();
                self.chart_service
                    .fund_chart(fund, timeframe, currency, today, &mut rng)
            }
        };
        Ok(chart)
    }

    // ── Currency ────────────────────────────────────────────────────

    /// Convert an amount into the display currency at the configured rate.
    #[must_use]
    pub fn convert(&self, amount: f64) -> f64 {
        self.currency_service.convert(amount)
    }

    /// Format an amount with the display-currency label and two decimals.
    #[must_use]
    pub fn format_amount(&self, amount: f64) -> String {
        self.currency_service.format(amount)
    }

    // ── News ────────────────────────────────────────────────────────

    /// The full news feed, newest first.
    #[must_use]
    pub fn news_feed(&self) -> Vec<&NewsItem> {
        self.news_service.feed(self.repository.news())
    }

    /// News affecting one fund, newest first.
    pub fn news_for_fund(&self, fund_id: &str) -> Result<Vec<&NewsItem>, CoreError> {
        let fund = self.fund(fund_id)?;
        Ok(self.news_service.for_fund(self.repository.news(), &fund.id))
    }

    /// Sum of the impact scores of all news affecting one fund.
    pub fn net_news_impact(&self, fund_id: &str) -> Result<i32, CoreError> {
        let fund = self.fund(fund_id)?;
        Ok(self.news_service.net_impact(self.repository.news(), &fund.id))
    }

    // ── Alerts ──────────────────────────────────────────────────────

    #[must_use]
    pub fn alert_settings(&self) -> &AlertSettings {
        &self.settings.alerts
    }

    /// Replace the alert preferences. The threshold must be within 0.1..=20 percent.
    pub fn set_alert_settings(&mut self, alerts: AlertSettings) -> Result<(), CoreError> {
        if let Err(e) = self.alert_service.validate(&alerts) {
            warn!(threshold = alerts.daily_change_threshold, "Rejected alert settings");
            return Err(e);
        }
        info!(
            price = alerts.price_alerts,
            news = alerts.news_alerts,
            reports = alerts.report_alerts,
            threshold = alerts.daily_change_threshold,
            "Alert settings saved"
        );
        self.settings.alerts = alerts;
        Ok(())
    }

    /// Alerts triggered by the current catalog under the saved preferences.
    #[must_use]
    pub fn evaluate_alerts(&self) -> Vec<Alert> {
        self.alert_service.evaluate(
            &self.settings.alerts,
            self.repository.funds(),
            self.repository.news(),
        )
    }

    // ── Settings ────────────────────────────────────────────────────

    #[must_use]
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Change the display-currency exchange rate. Must be finite and > 0.
    pub fn set_exchange_rate(&mut self, rate: f64) -> Result<(), CoreError> {
        let currency_service = CurrencyService::new(rate, self.settings.display_currency.clone())
            .map_err(|e| {
                warn!(rate, "Rejected exchange rate");
                e
            })?
            .with_number_format(self.settings.number_format);
        self.settings.exchange_rate = rate;
        self.currency_service = currency_service;
        info!(rate, currency = %self.settings.display_currency, "Exchange rate updated");
        Ok(())
    }

    /// Change the moving-average window. Zero disables the overlay.
    pub fn set_moving_average_window(&mut self, window: usize) {
        self.settings.moving_average_window = window;
        self.chart_service = Self::chart_service_for(&self.settings);
        info!(window, "Moving-average window updated");
    }

    /// Seed synthetic series for reproducible charts, or `None` for fresh noise per call.
    pub fn set_seed(&mut self, seed: Option<u64>) {
        self.settings.seed = seed;
    }

    // ── Export ──────────────────────────────────────────────────────

    /// Export the fund catalog as a JSON string.
    pub fn funds_to_json(&self) -> Result<String, CoreError> {
        serde_json::to_string_pretty(self.funds())
            .map_err(|e| CoreError::Serialization(format!("Failed to serialize funds to JSON: {e}")))
    }

    /// Serialize a chart for a web-view frontend.
    pub fn chart_to_json(chart: &FundChart) -> Result<String, CoreError> {
        serde_json::to_string(chart)
            .map_err(|e| CoreError::Serialization(format!("Failed to serialize chart: {e}")))
    }

    // ── Internal ────────────────────────────────────────────────────

    fn chart_service_for(settings: &Settings) -> ChartService {
        ChartService::new(
            SeriesService::new(settings.max_lookback_days, settings.noise_amplitude),
            settings.moving_average_window,
        )
    }

    fn build(
        repository: Box<dyn FundRepository>,
        settings: Settings,
        currency_service: CurrencyService,
    ) -> Self {
        let chart_service = Self::chart_service_for(&settings);

        Self {
            repository,
            settings,
            return_service: ReturnService::new(),
            portfolio_service: PortfolioService::new(),
            chart_service,
            currency_service,
            news_service: NewsService::new(),
            alert_service: AlertService::new(),
        }
    }
}

impl Default for FundTracker {
    fn default() -> Self {
        Self::new()
    }
}
