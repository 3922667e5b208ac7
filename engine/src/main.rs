// Report binary entry point
use anyhow::{Context, Result};
use clap::Parser;
use engine::cli::Args;
use engine::data::CandlestickLoader;
use engine::report::ReportDriver;
use std::io::{self, BufWriter};
use tracing::{info, Level};

fn main() -> Result<()> {
    let args = Args::parse();

    // Logs go to stderr so stdout carries nothing but the report
    let level = if args.verbose { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_max_level(level)
        .init();

    let settings = args.into_settings().context("Invalid report settings")?;
    let driver = ReportDriver::new(&settings)?;

    // The whole series is loaded before anything is printed, so a bad input
    // never leaves a half-written report behind.
    let path = settings.data_path();
    info!(symbol = %settings.symbol, path = %path.display(), "Loading candlesticks");
    let series = CandlestickLoader::load_series(&path)
        .with_context(|| format!("Failed to load candlesticks from '{}'", path.display()))?;

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    driver.run(&series, &mut out).context("Failed to write report")?;

    Ok(())
}
