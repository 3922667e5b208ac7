// Command-line options of the `ma-report` binary
use crate::config::ReportSettings;
use crate::error::Result;
use crate::report::ReportFormat;
use crate::simulation::SellScan;
use clap::Parser;
use std::path::PathBuf;

/// Retrospective moving-average signal report over minute candlesticks.
///
/// Every option overrides the value from `--config`, which in turn overrides
/// the built-in defaults.
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// JSON settings file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Base asset, e.g. XMR
    #[arg(short, long)]
    pub symbol: Option<String>,

    /// Quote asset used in the data file name
    #[arg(long)]
    pub quote_asset: Option<String>,

    /// Directory holding candlesticks-<SYMBOL><QUOTE>.json
    #[arg(long)]
    pub data_dir: Option<PathBuf>,

    /// Explicit data file (.json or .csv)
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Forced sell window in minutes
    #[arg(short = 'w', long)]
    pub sell_window: Option<usize>,

    /// Profit in percent a sell must reach to count as profitable
    #[arg(short = 'p', long, allow_negative_numbers = true)]
    pub required_profit: Option<f64>,

    #[arg(short, long, value_enum)]
    pub format: Option<ReportFormat>,

    /// Distance to the MA in percent at or below which a minute is a prediction
    #[arg(short = 't', long, allow_negative_numbers = true)]
    pub ma_threshold: Option<f64>,

    /// Comma separated moving average windows in minutes
    #[arg(long, value_delimiter = ',')]
    pub ma_windows: Option<Vec<usize>>,

    #[arg(long, value_enum)]
    pub sell_scan: Option<SellScan>,

    /// Highlight profitable sells in bold green
    #[arg(long)]
    pub highlight: bool,

    /// Debug logging on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    pub fn into_settings(self) -> Result<ReportSettings> {
        let mut settings = match &self.config {
            Some(path) => ReportSettings::load_from_file(path)?,
            None => ReportSettings::default(),
        };

        if let Some(symbol) = self.symbol {
            settings.symbol = symbol;
        }
        if let Some(quote_asset) = self.quote_asset {
            settings.quote_asset = quote_asset;
        }
        if let Some(data_dir) = self.data_dir {
            settings.data_dir = data_dir;
        }
        if self.input.is_some() {
            settings.input = self.input;
        }
        if let Some(window) = self.sell_window {
            settings.force_sell_window_minutes = window;
        }
        if let Some(profit) = self.required_profit {
            settings.required_profit_percent = profit;
        }
        if let Some(format) = self.format {
            settings.report_format = format;
        }
        if let Some(threshold) = self.ma_threshold {
            settings.ma_prediction_threshold = threshold;
        }
        if let Some(windows) = self.ma_windows {
            settings.ma_windows = windows;
        }
        if let Some(scan) = self.sell_scan {
            settings.sell_scan = scan;
        }
        if self.highlight {
            settings.highlight_profitable = true;
        }

        settings.validate()?;
        Ok(settings)
    }
}
