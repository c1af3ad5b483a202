//! Point-in-time snapshot of the trading manager's active order set

use crate::model::{LimitOrder, MarketOrder};
use serde::{Deserialize, Serialize};
use tracing::trace;

/// A snapshot of the trading manager's state at a specific point in time.
///
/// Orders appear most-recent-first (descending identifier), matching the ordering of the
/// holder views.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TradingSnapshot {
    /// Timestamp when the snapshot was created (milliseconds since epoch)
    pub timestamp: u64,

    /// Active limit orders
    pub limit_orders: Vec<LimitOrder>,

    /// Active market orders
    pub market_orders: Vec<MarketOrder>,

    /// Lifetime count of limit orders placed
    pub limit_orders_placed: u64,

    /// Lifetime count of market orders placed
    pub market_orders_placed: u64,

    /// Lifetime count of limit orders cancelled
    pub limit_orders_cancelled: u64,

    /// Lifetime count of market orders cancelled
    pub market_orders_cancelled: u64,
}

impl TradingSnapshot {
    /// Total number of active orders across both kinds
    pub fn active_order_count(&self) -> usize {
        let count = self.limit_orders.len() + self.market_orders.len();
        trace!("active_order_count: {}", count);
        count
    }

    /// Active limit orders belonging to a stock holder
    pub fn limit_orders_for_holder(&self, stock_holder_id: u32) -> Vec<&LimitOrder> {
        self.limit_orders
            .iter()
            .filter(|order| order.stock_holder_id == stock_holder_id)
            .collect()
    }

    /// Active market orders belonging to a stock holder
    pub fn market_orders_for_holder(&self, stock_holder_id: u32) -> Vec<&MarketOrder> {
        self.market_orders
            .iter()
            .filter(|order| order.stock_holder_id == stock_holder_id)
            .collect()
    }

    /// Total quantity across all active limit orders
    pub fn total_limit_quantity(&self) -> u64 {
        let quantity = self.limit_orders.iter().map(|order| order.quantity).sum();
        trace!("total_limit_quantity: {:?}", quantity);
        quantity
    }

    /// Total quantity across all active market orders
    pub fn total_market_quantity(&self) -> u64 {
        let quantity = self.market_orders.iter().map(|order| order.quantity).sum();
        trace!("total_market_quantity: {:?}", quantity);
        quantity
    }

    /// Serialize the snapshot to a JSON string
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Deserialize a snapshot from a JSON string
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
