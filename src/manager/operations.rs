//! Trading manager operations for placing and cancelling orders

use super::error::TradingError;
use super::manager::TradingManager;
use crate::model::{LimitOrder, MarketOrder, TransactionType};
use crate::utils::current_time_millis;
use std::sync::Arc;
use std::sync::atomic::Ordering;
use tracing::trace;

impl TradingManager {
    /// Place a limit order and return its identifier
    pub fn place_limit_order(
        &self,
        stock_holder_id: u32,
        transaction_type: TransactionType,
        quantity: u64,
        stock_symbol: &str,
        price: u64,
    ) -> Result<u32, TradingError> {
        self.validate_placement(quantity, stock_symbol)?;
        if price == 0 {
            return Err(TradingError::PlaceOrder(
                "limit price must be positive".to_string(),
            ));
        }

        let id = self.next_limit_order_id();
        let order = LimitOrder {
            id,
            stock_holder_id,
            transaction_type,
            quantity,
            stock_symbol: stock_symbol.to_string(),
            price,
            timestamp: current_time_millis(),
        };
        trace!(
            "Placing limit order {} for holder {}: {} {} {} at {}",
            id, stock_holder_id, transaction_type, quantity, stock_symbol, price
        );

        self.limit_orders.insert(id, Arc::new(order));
        self.limit_orders_placed.fetch_add(1, Ordering::Relaxed);

        Ok(id)
    }

    /// Place a market order and return its identifier
    pub fn place_market_order(
        &self,
        stock_holder_id: u32,
        transaction_type: TransactionType,
        quantity: u64,
        stock_symbol: &str,
    ) -> Result<u32, TradingError> {
        self.validate_placement(quantity, stock_symbol)?;

        let id = self.next_market_order_id();
        let order = MarketOrder {
            id,
            stock_holder_id,
            transaction_type,
            quantity,
            stock_symbol: stock_symbol.to_string(),
            timestamp: current_time_millis(),
        };
        trace!(
            "Placing market order {} for holder {}: {} {} {}",
            id, stock_holder_id, transaction_type, quantity, stock_symbol
        );

        self.market_orders.insert(id, Arc::new(order));
        self.market_orders_placed.fetch_add(1, Ordering::Relaxed);

        Ok(id)
    }

    /// Cancel a limit order by identifier, removing it from the active set. A cancelled
    /// identifier cannot be cancelled again.
    pub fn cancel_limit_order(&self, order_id: u32) -> Result<(), TradingError> {
        trace!("Cancelling limit order {}", order_id);
        match self.limit_orders.remove(&order_id) {
            Some(_) => {
                self.limit_orders_cancelled.fetch_add(1, Ordering::Relaxed);
                Ok(())
            }
            None => Err(TradingError::LimitOrderNotFound(order_id)),
        }
    }

    /// Cancel a market order by identifier, removing it from the active set
    pub fn cancel_market_order(&self, order_id: u32) -> Result<(), TradingError> {
        trace!("Cancelling market order {}", order_id);
        match self.market_orders.remove(&order_id) {
            Some(_) => {
                self.market_orders_cancelled.fetch_add(1, Ordering::Relaxed);
                Ok(())
            }
            None => Err(TradingError::MarketOrderNotFound(order_id)),
        }
    }
}
