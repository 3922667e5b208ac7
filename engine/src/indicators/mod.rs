// Technical indicators module
pub mod sma;

pub use sma::{MaResult, TrailingMa};
