use crate::models::price::{AnnotatedPoint, PricePoint};

/// Default window of the chart's moving-average overlay.
pub const DEFAULT_MOVING_AVERAGE_WINDOW: usize = 50;

/// Simple trailing moving average.
///
/// Returns a vector aligned with `values`:
/// - `None` for the first `window - 1` entries
/// - `Some(mean of values[i + 1 - window..=i])` afterwards
///
/// A zero window, or a series shorter than the window, yields all `None`.
/// Each window is summed on its own, so a non-finite value only affects
/// the averages whose window contains it.
#[must_use]
pub fn moving_average(values: &[f64], window: usize) -> Vec<Option<f64>> {
    let mut averages = vec![None; values.len()];
    if window == 0 || window > values.len() {
        return averages;
    }

    for (slot, chunk) in averages[window - 1..]
        .iter_mut()
        .zip(values.windows(window))
    {
        *slot = Some(chunk.iter().sum::<f64>() / window as f64);
    }
    averages
}

/// Attach a trailing moving average to every point of an oldest-first series.
///
/// Dates are not inspected; the series is assumed contiguous.
#[must_use]
pub fn annotate(series: &[PricePoint], window: usize) -> Vec<AnnotatedPoint> {
    let prices: Vec<f64> = series.iter().map(|p| p.price).collect();

    series
        .iter()
        .zip(moving_average(&prices, window))
        .map(|(p, ma)| AnnotatedPoint {
            date: p.date,
            price: p.price,
            moving_average: ma,
        })
        .collect()
}
