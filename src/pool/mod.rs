//! Transaction Pool Module
//! 
//! Holds transactions that passed the ante filters while checking for
//! mempool admission.

mod tx_pool;

pub use tx_pool::{PoolError, TransactionPool};
