use crate::indicators::MaResult;
use crate::simulation::SellOutcome;

/// Hit/miss counts for one moving-average window.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PredictionBucket {
    pub hits: u64,
    pub misses: u64,
}

impl PredictionBucket {
    pub fn total(&self) -> u64 {
        self.hits + self.misses
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowBucket {
    pub window: usize,
    pub bucket: PredictionBucket,
}

/// Accumulates, over a run, how often "close is within the threshold of its
/// MA" coincided with a profitable forced sell.
///
/// A minute counts into a window's bucket only when it has a sell outcome and
/// that window's distance is `<= threshold` (signed, not absolute). Buckets
/// are independent: one minute may count into several of them.
#[derive(Debug, Clone)]
pub struct PredictionCorrelator {
    required_profit_percent: f64,
    ma_prediction_threshold: f64,
    buckets: Vec<WindowBucket>,
    profitable_minutes: u64,
    outcomes_present: u64,
}

impl PredictionCorrelator {
    pub fn new(windows: &[usize], required_profit_percent: f64, ma_prediction_threshold: f64) -> Self {
        Self {
            required_profit_percent,
            ma_prediction_threshold,
            buckets: windows
                .iter()
                .map(|&window| WindowBucket {
                    window,
                    bucket: PredictionBucket::default(),
                })
                .collect(),
            profitable_minutes: 0,
            outcomes_present: 0,
        }
    }

    pub fn is_profitable(&self, outcome: &SellOutcome) -> bool {
        outcome.profit_percent >= self.required_profit_percent
    }

    /// Records one minute. `ma_results` must be in the same order as the
    /// windows the correlator was built with. Returns whether the minute was
    /// profitable; minutes without an outcome are not counted anywhere.
    pub fn record(&mut self, outcome: Option<&SellOutcome>, ma_results: &[MaResult]) -> bool {
        debug_assert_eq!(ma_results.len(), self.buckets.len());
        let Some(outcome) = outcome else {
            return false;
        };

        self.outcomes_present += 1;
        let profitable = self.is_profitable(outcome);
        if profitable {
            self.profitable_minutes += 1;
        }

        for (entry, ma) in self.buckets.iter_mut().zip(ma_results) {
            // NaN distances compare false and never qualify
            if ma.distance_percent <= self.ma_prediction_threshold {
                if profitable {
                    entry.bucket.hits += 1;
                } else {
                    entry.bucket.misses += 1;
                }
            }
        }
        profitable
    }

    pub fn profitable_minutes(&self) -> u64 {
        self.profitable_minutes
    }

    pub fn outcomes_present(&self) -> u64 {
        self.outcomes_present
    }

    pub fn buckets(&self) -> &[WindowBucket] {
        &self.buckets
    }

    pub fn bucket(&self, window: usize) -> Option<PredictionBucket> {
        self.buckets
            .iter()
            .find(|entry| entry.window == window)
            .map(|entry| entry.bucket)
    }
}
