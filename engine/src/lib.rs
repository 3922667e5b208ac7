// Engine library root
// Moving-average signal report: series loading, indicators, forced-sell
// simulation, prediction correlation and report rendering.

pub mod analysis;
pub mod cli;
pub mod config;
pub mod data;
pub mod error;
pub mod indicators;
pub mod report;
pub mod simulation;

pub use error::{EngineError, Result};
