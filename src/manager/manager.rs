//! Core TradingManager implementation for managing active limit and market orders

use super::error::TradingError;
use super::snapshot::TradingSnapshot;
use crate::model::{LimitOrder, MarketOrder};
use crate::utils::current_time_millis;
use dashmap::DashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicU32, AtomicU64, Ordering};
use tracing::trace;

/// The TradingManager holds the active set of limit and market orders, keyed by the
/// identifiers it issues. It supports placing, viewing and cancelling orders with lock-free
/// operations where possible.
#[derive(Debug)]
pub struct TradingManager {
    /// Active limit orders keyed by identifier, stored in a concurrent map for lock-free
    /// access
    pub(super) limit_orders: DashMap<u32, Arc<LimitOrder>>,

    /// Active market orders keyed by identifier
    pub(super) market_orders: DashMap<u32, Arc<MarketOrder>>,

    /// Next limit order identifier. Identifiers are unique and dense per order kind.
    limit_order_id_seq: AtomicU32,

    /// Next market order identifier
    market_order_id_seq: AtomicU32,

    /// Lifetime count of limit orders placed
    pub(super) limit_orders_placed: AtomicU64,

    /// Lifetime count of market orders placed
    pub(super) market_orders_placed: AtomicU64,

    /// Lifetime count of limit orders cancelled
    pub(super) limit_orders_cancelled: AtomicU64,

    /// Lifetime count of market orders cancelled
    pub(super) market_orders_cancelled: AtomicU64,
}

impl TradingManager {
    /// Create a new manager with empty order sets. Identifier sequences start at 1.
    pub fn new() -> Self {
        Self {
            limit_orders: DashMap::new(),
            market_orders: DashMap::new(),
            limit_order_id_seq: AtomicU32::new(1),
            market_order_id_seq: AtomicU32::new(1),
            limit_orders_placed: AtomicU64::new(0),
            market_orders_placed: AtomicU64::new(0),
            limit_orders_cancelled: AtomicU64::new(0),
            market_orders_cancelled: AtomicU64::new(0),
        }
    }

    /// Reserve the next limit order identifier
    pub(super) fn next_limit_order_id(&self) -> u32 {
        self.limit_order_id_seq.fetch_add(1, Ordering::SeqCst)
    }

    /// Reserve the next market order identifier
    pub(super) fn next_market_order_id(&self) -> u32 {
        self.market_order_id_seq.fetch_add(1, Ordering::SeqCst)
    }

    /// Get a limit order by identifier
    pub fn view_limit_order(&self, order_id: u32) -> Result<Arc<LimitOrder>, TradingError> {
        trace!("Viewing limit order {}", order_id);
        self.limit_orders
            .get(&order_id)
            .map(|entry| Arc::clone(entry.value()))
            .ok_or(TradingError::LimitOrderNotFound(order_id))
    }

    /// Get a market order by identifier
    pub fn view_market_order(&self, order_id: u32) -> Result<Arc<MarketOrder>, TradingError> {
        trace!("Viewing market order {}", order_id);
        self.market_orders
            .get(&order_id)
            .map(|entry| Arc::clone(entry.value()))
            .ok_or(TradingError::MarketOrderNotFound(order_id))
    }

    /// Get a stock holder's active limit orders, most-recent-first, bounded by
    /// `max_results`. Never "null": a holder with no orders gets an empty vec.
    pub fn view_stock_holder_limit_orders(
        &self,
        stock_holder_id: u32,
        max_results: usize,
    ) -> Vec<Arc<LimitOrder>> {
        trace!(
            "Viewing up to {} limit orders for stock holder {}",
            max_results, stock_holder_id
        );
        let mut orders: Vec<Arc<LimitOrder>> = self
            .limit_orders
            .iter()
            .filter(|entry| entry.value().stock_holder_id == stock_holder_id)
            .map(|entry| Arc::clone(entry.value()))
            .collect();

        // Most-recent-first: identifiers are monotonic, so sort descending by id
        orders.sort_by(|a, b| b.id.cmp(&a.id));
        orders.truncate(max_results);

        orders
    }

    /// Get a stock holder's active market orders, most-recent-first, bounded by
    /// `max_results`
    pub fn view_stock_holder_market_orders(
        &self,
        stock_holder_id: u32,
        max_results: usize,
    ) -> Vec<Arc<MarketOrder>> {
        trace!(
            "Viewing up to {} market orders for stock holder {}",
            max_results, stock_holder_id
        );
        let mut orders: Vec<Arc<MarketOrder>> = self
            .market_orders
            .iter()
            .filter(|entry| entry.value().stock_holder_id == stock_holder_id)
            .map(|entry| Arc::clone(entry.value()))
            .collect();

        orders.sort_by(|a, b| b.id.cmp(&a.id));
        orders.truncate(max_results);

        orders
    }

    /// Number of limit orders currently active
    pub fn active_limit_order_count(&self) -> usize {
        self.limit_orders.len()
    }

    /// Number of market orders currently active
    pub fn active_market_order_count(&self) -> usize {
        self.market_orders.len()
    }

    /// Lifetime count of limit orders placed
    pub fn limit_orders_placed(&self) -> u64 {
        self.limit_orders_placed.load(Ordering::Relaxed)
    }

    /// Lifetime count of market orders placed
    pub fn market_orders_placed(&self) -> u64 {
        self.market_orders_placed.load(Ordering::Relaxed)
    }

    /// Lifetime count of limit orders cancelled
    pub fn limit_orders_cancelled(&self) -> u64 {
        self.limit_orders_cancelled.load(Ordering::Relaxed)
    }

    /// Lifetime count of market orders cancelled
    pub fn market_orders_cancelled(&self) -> u64 {
        self.market_orders_cancelled.load(Ordering::Relaxed)
    }

    /// Create a snapshot of the current active order set
    pub fn create_snapshot(&self) -> TradingSnapshot {
        // Collect and sort both sides descending by id so the snapshot ordering matches the
        // holder views
        let mut limit_orders: Vec<LimitOrder> = self
            .limit_orders
            .iter()
            .map(|entry| entry.value().as_ref().clone())
            .collect();
        limit_orders.sort_by(|a, b| b.id.cmp(&a.id));

        let mut market_orders: Vec<MarketOrder> = self
            .market_orders
            .iter()
            .map(|entry| entry.value().as_ref().clone())
            .collect();
        market_orders.sort_by(|a, b| b.id.cmp(&a.id));

        TradingSnapshot {
            timestamp: current_time_millis(),
            limit_orders,
            market_orders,
            limit_orders_placed: self.limit_orders_placed(),
            market_orders_placed: self.market_orders_placed(),
            limit_orders_cancelled: self.limit_orders_cancelled(),
            market_orders_cancelled: self.market_orders_cancelled(),
        }
    }
}

impl Default for TradingManager {
    fn default() -> Self {
        Self::new()
    }
}
