// Forced-sell trade simulation over a forward window
pub mod forward_sell;

pub use forward_sell::{simulate_sell, SellOutcome, SellScan};
