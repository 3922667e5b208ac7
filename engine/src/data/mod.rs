// Candlestick data: file loading and the parsed series
pub mod loader;
pub mod series;

pub use loader::{CandlestickLoader, DataEncoding};
pub use series::Series;
