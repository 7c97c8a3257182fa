use chrono::NaiveDate;
use rand::Rng;
use tracing::debug;

use crate::models::chart::{FundChart, PriceDomain};
use crate::models::fund::Fund;
use crate::models::price::PricePoint;
use crate::models::timeframe::Timeframe;
use crate::services::currency_service::CurrencyService;
use crate::services::indicators;
use crate::services::series_service::SeriesService;

/// Padding applied below the lowest and above the highest price on the Y axis.
const DOMAIN_PADDING: f64 = 0.02;

/// Generates chart-ready data sets for a single fund.
///
/// The pipeline per request:
/// 1. Synthesize the full daily series
/// 2. Keep the trailing points of the selected timeframe
/// 3. Optionally convert prices into the display currency
/// 4. Overlay the trailing moving average on the windowed series
/// 5. Compute the padded Y-axis domain
///
/// Nothing is cached: every call regenerates from the fund record.
pub struct ChartService {
    series_service: SeriesService,
    moving_average_window: usize,
}

impl ChartService {
    pub fn new(series_service: SeriesService, moving_average_window: usize) -> Self {
        Self {
            series_service,
            moving_average_window,
        }
    }

    #[must_use]
    pub fn moving_average_window(&self) -> usize {
        self.moving_average_window
    }

    /// Build the chart for `fund` over `timeframe`, ending at `today`.
    ///
    /// When `currency` is given, prices are converted and the chart is
    /// labelled with its display currency; otherwise the fund's own
    /// currency is kept.
    pub fn fund_chart<R: Rng + ?Sized>(
        &self,
        fund: &Fund,
        timeframe: Timeframe,
        currency: Option<&CurrencyService>,
        today: NaiveDate,
        rng: &mut R,
    ) -> FundChart {
        let series = self.series_service.generate(fund, today, rng);
        let windowed = timeframe.window(&series);

        let (prices, label) = match currency {
            Some(cs) => (cs.convert_series(windowed), cs.label().to_string()),
            None => (windowed.to_vec(), fund.currency.clone()),
        };

        let points = indicators::annotate(&prices, self.moving_average_window);
        let domain = Self::price_domain(&prices);
        let reference_price = prices.last().map(|p| p.price);

        debug!(
            fund = %fund.id,
            timeframe = %timeframe,
            points = points.len(),
            currency = %label,
            "Built fund chart"
        );

        FundChart {
            fund_id: fund.id.clone(),
            timeframe,
            currency: label,
            points,
            domain,
            reference_price,
        }
    }

    /// Y-axis domain `[min * 0.98, max * 1.02]`, or `None` for an empty series.
    #[must_use]
    pub fn price_domain(series: &[PricePoint]) -> Option<PriceDomain> {
        let first = series.first()?.price;
        let (min, max) = series
            .iter()
            .fold((first, first), |(lo, hi), p| (lo.min(p.price), hi.max(p.price)));

        Some(PriceDomain {
            min: min * (1.0 - DOMAIN_PADDING),
            max: max * (1.0 + DOMAIN_PADDING),
        })
    }
}

impl Default for ChartService {
    fn default() -> Self {
        Self::new(
            SeriesService::default(),
            indicators::DEFAULT_MOVING_AVERAGE_WINDOW,
        )
    }
}
