//! # Trading Order Management Core
//!
//! A concurrent order management core for trading services, written in Rust. The crate
//! provides the service-side contract behind a remote "trading manager": placing limit and
//! market orders, looking them up by identifier or by stock holder, and cancelling them,
//! with typed not-found errors carrying deterministic messages.
//!
//! ## Key Features
//!
//! - **Two Order Kinds**: limit orders (with an execution price) and market orders (executed
//!   at the prevailing price), each with its own monotonic identifier sequence.
//!
//! - **Lock-Free Storage**: active orders live in concurrent maps and identifiers are issued
//!   from atomic counters, so placements, lookups and cancellations from multiple threads
//!   never block each other.
//!
//! - **Typed Failure Semantics**: every operation against a missing identifier fails with a
//!   not-found error whose message is a fixed prefix followed by the identifier, so clients
//!   holding the prefix template can assert the exact text.
//!
//! - **Holder-Scoped Views**: a stock holder's active orders can be listed most-recent-first,
//!   bounded by a caller-supplied maximum result count.
//!
//! - **Naming Directory**: a process-local registry resolves configured service names to
//!   shared trading manager handles, mirroring the directory lookup a remote client performs.
//!
//! - **Snapshots**: the full active order set can be captured as a serializable snapshot for
//!   inspection or transfer.
//!
//! ## Design Goals
//!
//! 1. **Correctness**: identifier sequences stay unique and dense per order kind even under
//!    concurrent placement, and a cancelled identifier can never be cancelled twice.
//! 2. **Determinism**: error messages and view ordering are stable so black-box clients can
//!    assert against them.
//! 3. **Concurrency**: all operations take `&self` and are safe to share behind an `Arc`.
//!
//! ## Example
//!
//! ```
//! use trading_manager::{TradingManager, TransactionType};
//!
//! let manager = TradingManager::new();
//!
//! let id = manager
//!     .place_limit_order(42, TransactionType::Buy, 100, "RHT", 2500)
//!     .unwrap();
//!
//! let order = manager.view_limit_order(id).unwrap();
//! assert_eq!(order.stock_holder_id, 42);
//!
//! manager.cancel_limit_order(id).unwrap();
//! assert!(manager.cancel_limit_order(id).is_err());
//! ```
//!
//! ## Scope
//!
//! Order matching, pricing and persistence are intentionally outside this crate; it models
//! the order lifecycle contract (place, view, cancel) that a fuller exchange would sit
//! behind.

pub mod config;
pub mod directory;
pub mod manager;
pub mod model;

mod utils;

pub use config::{HarnessConfig, render_template};
pub use directory::{Directory, NamingError};
pub use manager::{TradingError, TradingManager, TradingSnapshot};
pub use model::{LimitOrder, MarketOrder, TransactionType};
pub use utils::current_time_millis;
