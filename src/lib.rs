//! Ante guard for a Cosmos-style chain: message filters that reject
//! transactions before any of their messages are executed.
//! It includes modules for message types, bech32 addresses, the ante filter
//! chain, an admission pool, the check API, and configuration.

pub mod types; // Messages, transactions, execution context and filter errors.
pub mod address; // Bech32 account address decoding and format checks.
pub mod ante; // Message filter decorator and the IBC security filter.
pub mod pool; // Pool of transactions admitted by checkTx.
pub mod api; // JSON-RPC endpoint running transactions through the filters.
pub mod config; // Defines and loads service configuration.

// Re-export commonly used types and configurations for easier access.
pub use types::*;
pub use config::Config;
pub use ante::{AnteDecorator, MessageFilterDecorator};
