use chrono::{Days, NaiveDate};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::models::fund::Fund;
use crate::models::price::PricePoint;

/// Default lookback of a generated series, in days.
pub const DEFAULT_MAX_LOOKBACK_DAYS: usize = 730;

/// Default half-width of the per-point noise, in price units.
pub const DEFAULT_NOISE_AMPLITUDE: f64 = 2.5;

/// Longest accepted lookback: one hundred years of daily points.
pub const MAX_LOOKBACK_DAYS: usize = 36_500;

const FNV_OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;
const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

/// Synthesizes a daily price history for a fund from its summary statistics.
///
/// The model is a linear trend from a back-computed start price up to about
/// the current NAV, plus independent uniform noise on every point. It has no
/// autocorrelation or volatility clustering. It is a chart placeholder, not a
/// price model.
pub struct SeriesService {
    max_lookback: usize,
    noise_amplitude: f64,
}

impl SeriesService {
    /// Lookbacks above `MAX_LOOKBACK_DAYS` are clamped to it.
    pub fn new(max_lookback: usize, noise_amplitude: f64) -> Self {
        Self {
            max_lookback: max_lookback.min(MAX_LOOKBACK_DAYS),
            noise_amplitude,
        }
    }

    #[must_use]
    pub fn max_lookback(&self) -> usize {
        self.max_lookback
    }

    /// Price the trend starts from, such that the yearly change lands on the NAV.
    #[must_use]
    pub fn start_price(fund: &Fund) -> f64 {
        fund.current_nav - fund.current_nav * (fund.changes.yearly / 100.0)
    }

    /// Trend value (no noise) at `progress` ∈ [0, 1].
    #[must_use]
    pub fn trend_price(fund: &Fund, progress: f64) -> f64 {
        Self::start_price(fund) * (1.0 + progress * fund.changes.yearly / 100.0)
    }

    /// Generate `max_lookback + 1` daily points, oldest first, ending at `today`.
    /// Points that would fall before `NaiveDate::MIN` are left out.
    ///
    /// Noise is drawn from `rng`, one independent draw per point.
    pub fn generate<R: Rng + ?Sized>(
        &self,
        fund: &Fund,
        today: NaiveDate,
        rng: &mut R,
    ) -> Vec<PricePoint> {
        let mut series = Vec::with_capacity(self.max_lookback + 1);

        for i in (0..=self.max_lookback).rev() {
            let progress = if self.max_lookback == 0 {
                1.0
            } else {
                1.0 - (i as f64 / self.max_lookback as f64)
            };
            let noise = (rng.gen::<f64>() - 0.5) * 2.0 * self.noise_amplitude;

            // Days before the earliest representable date are skipped.
            let Some(date) = today.checked_sub_days(Days::new(i as u64)) else {
                continue;
            };

            series.push(PricePoint {
                date,
                price: Self::trend_price(fund, progress) + noise,
            });
        }

        debug!(
            fund = %fund.id,
            points = series.len(),
            start_price = Self::start_price(fund),
            "Generated synthetic series"
        );
        series
    }

    /// Deterministic generator for `fund`, derived from a session seed.
    ///
    /// Mixing in the fund id keeps two funds from sharing a noise path under
    /// the same seed.
    #[must_use]
    pub fn seeded_rng(seed: u64, fund_id: &str) -> StdRng {
        StdRng::seed_from_u64(Self::fund_seed(seed, fund_id))
    }

    /// `seed` XOR the 64-bit FNV-1a hash of the fund id. Stable across
    /// platforms and toolchains.
    #[must_use]
    pub fn fund_seed(seed: u64, fund_id: &str) -> u64 {
        let hash = fund_id.bytes().fold(FNV_OFFSET_BASIS, |acc, b| {
            (acc ^ u64::from(b)).wrapping_mul(FNV_PRIME)
        });
        seed ^ hash
    }
}

impl Default for SeriesService {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_LOOKBACK_DAYS, DEFAULT_NOISE_AMPLITUDE)
    }
}
