// Best exit within a forced-sell window after buying at a candle's close
use crate::data::Series;
use clap::ValueEnum;
use serde::Deserialize;
use shared::utils::percent_change;

/// Which highs the simulator considers when looking for a better exit than
/// the close at the end of the window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum SellScan {
    /// Only the high of the final candle of the window. This is the
    /// historical behaviour of the report and the default, so that reports
    /// stay comparable with earlier runs.
    #[default]
    FixedIndex,
    /// The highs of every candle after the buy up to and including the
    /// final one. Fixes the fixed-index scan, which never looks inside the window.
    Sliding,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SellOutcome {
    pub sell_price: f64,
    pub profit_percent: f64,
}

/// Simulates buying at `series[index].close` and being forced to sell within
/// `window` minutes. Returns `None` when `index + window` is past the end of
/// the series; that is a boundary condition, not an error.
///
/// The exit starts at the close of candle `index + window` and is raised to
/// any scanned high that beats both the buy price and the current exit.
pub fn simulate_sell(series: &Series, index: usize, window: usize, scan: SellScan) -> Option<SellOutcome> {
    let exit_index = index.checked_add(window)?;
    if exit_index >= series.len() {
        return None;
    }

    let candles = series.candles();
    let buy_price = candles[index].close;
    let mut sell_price = candles[exit_index].close;

    let scanned = match scan {
        // Every step of the scan reads the same candle, so one read is enough,
        // but only when the window has any steps at all.
        SellScan::FixedIndex if window > 0 => &candles[exit_index..=exit_index],
        SellScan::FixedIndex => &candles[..0],
        SellScan::Sliding => &candles[index + 1..=exit_index],
    };
    for candle in scanned {
        if candle.high > buy_price && candle.high > sell_price {
            sell_price = candle.high;
        }
    }

    Some(SellOutcome {
        sell_price,
        profit_percent: percent_change(buy_price, sell_price),
    })
}
