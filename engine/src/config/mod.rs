// Report configuration: defaults, JSON file loading and validation.
pub mod settings;

pub use settings::ReportSettings;
