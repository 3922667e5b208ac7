// Trailing simple moving average with percent distance of the close from it
use crate::data::Series;
use crate::error::{EngineError, Result};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MaResult {
    pub average: f64,
    /// `100 * (close - average) / average`; positive when the close is above
    /// the average. NaN when the average is exactly zero.
    pub distance_percent: f64,
    /// Number of closes that went into the average.
    pub samples: usize,
}

/// Average of the closes in the window of `window` candles ending at `index`
/// (inclusive). Near the start of the series the window shrinks to the
/// `index + 1` candles available; there is no padding and no look-ahead.
///
/// `window` must be non-zero; `TrailingMa::new` is the checked entry point.
pub(crate) fn compute_ma(series: &Series, index: usize, window: usize) -> MaResult {
    debug_assert!(window > 0, "MA window must be greater than 0");
    let candles = series.candles();
    let samples = window.min(index + 1);
    let start = index + 1 - samples;

    // Summed newest first; the order affects the last bits of the average.
    let sum: f64 = candles[start..=index].iter().rev().map(|c| c.close).sum();
    let average = sum / samples as f64;
    let close = candles[index].close;

    let distance_percent = if average == 0.0 {
        tracing::debug!(index, window, "Moving average is zero; distance is undefined");
        f64::NAN
    } else {
        100.0 * (close - average) / average
    };

    MaResult {
        average,
        distance_percent,
        samples,
    }
}

/// A moving average of a fixed window size, e.g. `MA60`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TrailingMa {
    window: usize,
}

impl TrailingMa {
    pub fn new(window: usize) -> Result<Self> {
        if window == 0 {
            return Err(EngineError::ConfigError(
                "Moving average window cannot be 0".to_string(),
            ));
        }
        Ok(Self { window })
    }

    pub fn window(&self) -> usize {
        self.window
    }

    /// Panics if `index` is out of bounds, like indexing the series.
    pub fn compute(&self, series: &Series, index: usize) -> MaResult {
        compute_ma(series, index, self.window)
    }
}
