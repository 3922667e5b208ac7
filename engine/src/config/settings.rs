// Report settings, loaded from defaults, an optional JSON file and the command line
use crate::error::{EngineError, Result};
use crate::report::ReportFormat;
use crate::simulation::SellScan;
use serde::Deserialize;
use std::path::{Path, PathBuf};

pub const DEFAULT_MA_WINDOWS: [usize; 4] = [60, 240, 720, 1440];

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct ReportSettings {
    /// Base asset, e.g. "XMR". Used for the data resource name and the report header.
    pub symbol: String,
    pub quote_asset: String,
    pub data_dir: PathBuf,
    /// Explicit data file; overrides the `<data_dir>/candlesticks-<SYMBOL><QUOTE>.json` lookup.
    pub input: Option<PathBuf>,
    pub force_sell_window_minutes: usize,
    pub required_profit_percent: f64,
    pub report_format: ReportFormat,
    pub ma_prediction_threshold: f64,
    pub ma_windows: Vec<usize>,
    pub sell_scan: SellScan,
    pub highlight_profitable: bool,
}

impl Default for ReportSettings {
    fn default() -> Self {
        ReportSettings {
            symbol: "XMR".to_string(),
            quote_asset: "BTC".to_string(),
            data_dir: PathBuf::from("."),
            input: None,
            force_sell_window_minutes: 240,
            required_profit_percent: 2.0,
            report_format: ReportFormat::MaSell,
            ma_prediction_threshold: -3.0,
            ma_windows: DEFAULT_MA_WINDOWS.to_vec(),
            sell_scan: SellScan::FixedIndex,
            highlight_profitable: false,
        }
    }
}

impl ReportSettings {
    /// Reads settings from a JSON file. Keys missing from the file keep their defaults.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| EngineError::io(path.display().to_string(), e))?;
        serde_json::from_str(&content).map_err(|e| {
            EngineError::ConfigError(format!("Invalid settings file '{}': {}", path.display(), e))
        })
    }

    pub fn validate(&self) -> Result<()> {
        if self.symbol.trim().is_empty() {
            return Err(EngineError::ConfigError("Symbol cannot be empty".to_string()));
        }
        if self.ma_windows.is_empty() {
            return Err(EngineError::ConfigError(
                "At least one moving average window is required".to_string(),
            ));
        }
        if self.ma_windows.contains(&0) {
            return Err(EngineError::ConfigError(
                "Moving average window cannot be 0".to_string(),
            ));
        }
        if !self.required_profit_percent.is_finite() {
            return Err(EngineError::ConfigError(format!(
                "Required profit percent must be finite, got {}",
                self.required_profit_percent
            )));
        }
        if !self.ma_prediction_threshold.is_finite() {
            return Err(EngineError::ConfigError(format!(
                "MA prediction threshold must be finite, got {}",
                self.ma_prediction_threshold
            )));
        }
        Ok(())
    }

    /// Location of the candlestick data for this run.
    pub fn data_path(&self) -> PathBuf {
        match &self.input {
            Some(path) => path.clone(),
            None => self.data_dir.join(format!(
                "candlesticks-{}{}.json",
                self.symbol, self.quote_asset
            )),
        }
    }
}
