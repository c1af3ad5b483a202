//! TradingManager implementation for order placement, lookup and cancellation.

pub mod manager;
mod error;
mod operations;
mod private;
mod snapshot;

pub use manager::TradingManager;
pub use error::TradingError;
pub use snapshot::TradingSnapshot;
