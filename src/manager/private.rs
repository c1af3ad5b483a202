use super::error::TradingError;
use super::manager::TradingManager;

impl TradingManager {
    /// Validate the fields common to both placement operations
    pub(super) fn validate_placement(
        &self,
        quantity: u64,
        stock_symbol: &str,
    ) -> Result<(), TradingError> {
        if quantity == 0 {
            return Err(TradingError::PlaceOrder(
                "quantity must be positive".to_string(),
            ));
        }

        if stock_symbol.trim().is_empty() {
            return Err(TradingError::PlaceOrder(
                "stock symbol must not be empty".to_string(),
            ));
        }

        Ok(())
    }
}
