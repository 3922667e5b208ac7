// Single left-to-right pass over the series producing the signal report
use crate::analysis::{PredictionCorrelator, WindowBucket};
use crate::config::ReportSettings;
use crate::data::Series;
use crate::error::Result;
use crate::indicators::{MaResult, TrailingMa};
use crate::report::layout::{summary_lines, ReportRow};
use crate::simulation::simulate_sell;
use shared::utils::percent_change;
use std::io::Write;

/// Aggregates of a finished run.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportSummary {
    pub symbol: String,
    pub rows: usize,
    pub outcomes_present: u64,
    pub profitable_minutes: u64,
    pub buckets: Vec<WindowBucket>,
}

/// Mutable state of one run, owned by the driver for its duration.
struct ReportContext {
    last_close: f64,
    correlator: PredictionCorrelator,
    rows: usize,
    /// One flag per window, set once a zero average has been reported for it.
    zero_average_warned: Vec<bool>,
}

impl ReportContext {
    /// Warns about the first zero average of each window in this run.
    /// Returns the number of warnings emitted for `index`.
    fn warn_zero_averages(&mut self, index: usize, windows: &[usize], results: &[MaResult]) -> usize {
        let mut emitted = 0;
        for ((warned, &window), ma) in self.zero_average_warned.iter_mut().zip(windows).zip(results) {
            if *warned || ma.average != 0.0 {
                continue;
            }
            tracing::warn!(
                index,
                window,
                "Moving average is zero; distance is undefined (further occurrences for this window are not reported)"
            );
            *warned = true;
            emitted += 1;
        }
        emitted
    }
}

pub struct ReportDriver<'a> {
    settings: &'a ReportSettings,
    averages: Vec<TrailingMa>,
}

impl<'a> ReportDriver<'a> {
    pub fn new(settings: &'a ReportSettings) -> Result<Self> {
        settings.validate()?;
        let averages = settings
            .ma_windows
            .iter()
            .map(|&window| TrailingMa::new(window))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { settings, averages })
    }

    fn windows(&self) -> Vec<usize> {
        self.averages.iter().map(TrailingMa::window).collect()
    }

    /// Writes the symbol line, the column header, one row per candle and the
    /// summary block to `out`. Rows are written as they are computed and not
    /// kept; only the accumulators survive the loop.
    pub fn run<W: Write>(&self, series: &Series, out: &mut W) -> Result<ReportSummary> {
        let settings = self.settings;
        let format = settings.report_format;
        let windows = self.windows();
        tracing::info!(
            symbol = %settings.symbol,
            candles = series.len(),
            ?format,
            sell_window = settings.force_sell_window_minutes,
            scan = ?settings.sell_scan,
            "Generating report"
        );

        writeln!(out, "{}", settings.symbol)?;
        writeln!(out, "{}", format.header(&windows))?;

        let mut ctx = ReportContext {
            last_close: series.first().close,
            correlator: PredictionCorrelator::new(
                &windows,
                settings.required_profit_percent,
                settings.ma_prediction_threshold,
            ),
            rows: 0,
            zero_average_warned: vec![false; windows.len()],
        };
        let mut ma_results: Vec<MaResult> = Vec::with_capacity(self.averages.len());

        for (index, candle) in series.iter().enumerate() {
            ma_results.clear();
            ma_results.extend(self.averages.iter().map(|ma| ma.compute(series, index)));
            ctx.warn_zero_averages(index, &windows, &ma_results);

            let sell = simulate_sell(
                series,
                index,
                settings.force_sell_window_minutes,
                settings.sell_scan,
            );
            let profitable = ctx.correlator.record(sell.as_ref(), &ma_results);

            let row = ReportRow {
                candle,
                change_percent: percent_change(ctx.last_close, candle.close),
                high_low_percent: percent_change(candle.low, candle.high),
                ma_results: &ma_results,
                sell,
                profitable,
            };
            writeln!(out, "{}", format.format_row(&row, settings.highlight_profitable))?;

            ctx.last_close = candle.close;
            ctx.rows += 1;
        }

        let correlator = &ctx.correlator;
        for line in summary_lines(
            correlator.profitable_minutes(),
            series.len(),
            settings.force_sell_window_minutes,
            correlator.buckets(),
        ) {
            writeln!(out, "{}", line)?;
        }
        out.flush()?;

        let summary = ReportSummary {
            symbol: settings.symbol.clone(),
            rows: ctx.rows,
            outcomes_present: correlator.outcomes_present(),
            profitable_minutes: correlator.profitable_minutes(),
            buckets: correlator.buckets().to_vec(),
        };
        tracing::info!(
            symbol = %summary.symbol,
            rows = summary.rows,
            outcomes = summary.outcomes_present,
            profitable = summary.profitable_minutes,
            "Report complete"
        );
        Ok(summary)
    }
}
