// Correlation of moving-average proximity with profitable forced sells
pub mod correlator;

pub use correlator::{PredictionBucket, PredictionCorrelator, WindowBucket};
