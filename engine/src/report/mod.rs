// Per-minute signal report: column layouts and the single-pass driver
pub mod driver;
pub mod layout;

pub use driver::{ReportDriver, ReportSummary};
pub use layout::{ReportFormat, ReportRow};
