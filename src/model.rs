//! Order model types shared by the trading manager and its clients

use serde::{Deserialize, Serialize};
use std::fmt;

/// The direction of an order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TransactionType {
    /// Buy the stock
    Buy,
    /// Sell the stock
    Sell,
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransactionType::Buy => write!(f, "BUY"),
            TransactionType::Sell => write!(f, "SELL"),
        }
    }
}

/// An order with a specified execution price. Immutable once placed; its lifecycle state is
/// membership in the manager's active set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LimitOrder {
    /// Identifier assigned by the manager on creation, unique and monotonic per kind
    pub id: u32,

    /// The stock holder (account) that placed the order
    pub stock_holder_id: u32,

    /// Whether this is a buy or a sell
    pub transaction_type: TransactionType,

    /// Number of shares
    pub quantity: u64,

    /// Symbol of the stock being traded
    pub stock_symbol: String,

    /// Execution price, in minor currency units
    pub price: u64,

    /// Creation time (milliseconds since epoch)
    pub timestamp: u64,
}

/// An order executed at the prevailing price. Same lifecycle as [`LimitOrder`], no price.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarketOrder {
    /// Identifier assigned by the manager on creation, unique and monotonic per kind
    pub id: u32,

    /// The stock holder (account) that placed the order
    pub stock_holder_id: u32,

    /// Whether this is a buy or a sell
    pub transaction_type: TransactionType,

    /// Number of shares
    pub quantity: u64,

    /// Symbol of the stock being traded
    pub stock_symbol: String,

    /// Creation time (milliseconds since epoch)
    pub timestamp: u64,
}
