//! Test-parameter provider for client harnesses
//!
//! The black-box client of the trading manager is driven by a set of externally supplied
//! parameters: the directory name of the manager, the stock holder and order fields to use,
//! the starting identifier counters, the maximum result counts for holder views, and the
//! templates of the cancel-failure messages. [`HarnessConfig`] carries those parameters and
//! can be parsed from JSON or built from the built-in fixture defaults.

use serde::{Deserialize, Serialize};

/// Parameters driving a trading manager client harness
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HarnessConfig {
    /// Directory name under which the trading manager is bound
    pub manager_name: String,

    /// Stock holder identifier used for placements and holder views
    pub stock_holder_id: u32,

    /// Quantity used for placements
    pub quantity: u64,

    /// Symbol used for placements
    pub stock_symbol: String,

    /// Limit price used for placements, in minor currency units
    pub price: u64,

    /// Expected starting value of the limit order identifier sequence
    pub limit_order_id_counter: u32,

    /// Expected starting value of the market order identifier sequence
    pub market_order_id_counter: u32,

    /// Maximum result count for limit order holder views
    pub max_limit_order_results: usize,

    /// Maximum result count for market order holder views
    pub max_market_order_results: usize,

    /// Template of the cancel-limit-order failure message, with a `{}` placeholder for the
    /// identifier
    pub cancel_limit_order_error_template: String,

    /// Template of the cancel-market-order failure message, with a `{}` placeholder for the
    /// identifier
    pub cancel_market_order_error_template: String,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            manager_name: "trading/TradingManager".to_string(),
            stock_holder_id: 1,
            quantity: 100,
            stock_symbol: "RHT".to_string(),
            price: 2500,
            limit_order_id_counter: 1,
            market_order_id_counter: 1,
            max_limit_order_results: 10,
            max_market_order_results: 10,
            cancel_limit_order_error_template: "Limit order not found: {}".to_string(),
            cancel_market_order_error_template: "Market order not found: {}".to_string(),
        }
    }
}

impl HarnessConfig {
    /// Parse a config from a JSON document. Missing fields take their default values.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Serialize the config to a JSON string
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

/// Render a message template by substituting the order identifier for the first `{}`
/// placeholder
pub fn render_template(template: &str, order_id: u32) -> String {
    template.replacen("{}", &order_id.to_string(), 1)
}
