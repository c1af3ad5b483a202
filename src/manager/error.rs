//! Trading manager error types

use std::fmt;

/// Errors that can occur within the TradingManager.
///
/// Not-found messages are deterministic: a fixed prefix followed by the identifier, so a
/// caller holding the prefix template can reconstruct the exact text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TradingError {
    /// Placement request was invalid (zero quantity, zero limit price, empty symbol)
    PlaceOrder(String),

    /// No active limit order with the given identifier
    LimitOrderNotFound(u32),

    /// No active market order with the given identifier
    MarketOrderNotFound(u32),
}

impl fmt::Display for TradingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TradingError::PlaceOrder(reason) => write!(f, "Cannot place order: {}", reason),
            TradingError::LimitOrderNotFound(id) => write!(f, "Limit order not found: {}", id),
            TradingError::MarketOrderNotFound(id) => write!(f, "Market order not found: {}", id),
        }
    }
}

impl std::error::Error for TradingError {}
