// Column layouts of the report. Widths and precisions follow printf
// conventions so reports stay comparable across runs.
use crate::analysis::WindowBucket;
use crate::indicators::MaResult;
use crate::simulation::SellOutcome;
use clap::ValueEnum;
use colored::Colorize;
use serde::Deserialize;
use shared::models::Candle;
use shared::utils::{format_fixed, format_price, format_space_signed};

const DATE_FORMAT: &str = "%Y-%m-%d %H:%M";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum ReportFormat {
    /// Open/close/low/high, high-low spread and the first moving average.
    Basic,
    /// Close, change, volume and the distance to every moving average.
    #[default]
    MaSell,
}

/// Everything needed to print one minute. Built, formatted and dropped.
#[derive(Debug, Clone, Copy)]
pub struct ReportRow<'a> {
    pub candle: &'a Candle,
    pub change_percent: f64,
    pub high_low_percent: f64,
    /// One result per configured window, in configuration order.
    pub ma_results: &'a [MaResult],
    pub sell: Option<SellOutcome>,
    pub profitable: bool,
}

impl ReportFormat {
    pub fn header(&self, windows: &[usize]) -> String {
        match self {
            ReportFormat::Basic => "Date               Open         Close        Change  Low          \
                                    High          H-L    MA            C-MA     Sell"
                .to_string(),
            ReportFormat::MaSell => {
                let mut header = String::from("Date               Close        Change     Vol    ");
                for window in windows {
                    header.push_str(&format!("{:<9}", format!("MA{}", window)));
                }
                header.push_str("Sell");
                header
            }
        }
    }

    pub fn format_row(&self, row: &ReportRow<'_>, highlight_profitable: bool) -> String {
        let candle = row.candle;
        let date = candle.time.format(DATE_FORMAT);
        let change = format_space_signed(row.change_percent, 0, 2);
        let sell = format_sell(row, highlight_profitable);

        match self {
            ReportFormat::Basic => {
                let (ma_value, ma_distance) = match row.ma_results.first() {
                    Some(ma) => (format_price(ma.average), format_space_signed(ma.distance_percent, 6, 2)),
                    None => ("-".to_string(), "-".to_string()),
                };
                format!(
                    "{}   {}   {}  {}%   {}   {}   {}%   {}  {}%  {}",
                    date,
                    format_price(candle.open),
                    format_price(candle.close),
                    change,
                    format_price(candle.low),
                    format_price(candle.high),
                    format_fixed(row.high_low_percent, 4, 1),
                    ma_value,
                    ma_distance,
                    sell
                )
            }
            ReportFormat::MaSell => {
                let mut line = format!(
                    "{}   {}  {}%   {}",
                    date,
                    format_price(candle.close),
                    change,
                    format_fixed(candle.volume, 6, 1)
                );
                for ma in row.ma_results {
                    line.push_str(&format!("  {}%", format_space_signed(ma.distance_percent, 6, 2)));
                }
                line.push_str("  ");
                line.push_str(&sell);
                line
            }
        }
    }
}

fn format_sell(row: &ReportRow<'_>, highlight_profitable: bool) -> String {
    match row.sell {
        None => "-".to_string(),
        Some(outcome) => {
            let text = format!("{}%", format_space_signed(outcome.profit_percent, 6, 2));
            if highlight_profitable && row.profitable {
                text.bold().green().to_string()
            } else {
                text
            }
        }
    }
}

/// Closing block: profitable minutes and hit/miss counts per window.
pub fn summary_lines(
    profitable_minutes: u64,
    total_minutes: usize,
    force_sell_window_minutes: usize,
    buckets: &[WindowBucket],
) -> Vec<String> {
    let mut lines = Vec::with_capacity(buckets.len() + 2);
    lines.push(format!("Profitable minutes: {}/{}", profitable_minutes, total_minutes));
    lines.push(format!("MA Predictions with {}m sell window:", force_sell_window_minutes));
    for entry in buckets {
        lines.push(format!(
            "   {:<8}{} / {}",
            format!("MA{}:", entry.window),
            entry.bucket.hits,
            entry.bucket.misses
        ));
    }
    lines
}
