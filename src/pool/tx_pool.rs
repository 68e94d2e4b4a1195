//! Transaction Pool Module
//! 
//! This module implements a pool for transactions admitted by `checkTx`.
//! Transactions are stored in a FIFO queue in admission order.

use crate::Tx;
use std::collections::VecDeque;
use thiserror::Error;
use tokio::sync::RwLock;

/// Reasons a transaction cannot be admitted to the pool
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PoolError {
    #[error("transaction pool is full (capacity {capacity})")]
    Full { capacity: usize },
}

/// Pool of admitted transactions
/// 
/// Uses VecDeque for efficient insertion at the back and removal from the front.
/// Protected by RwLock for concurrent access from request handlers.
/// Holds at most `capacity` transactions; admission fails once it is full.
pub struct TransactionPool {
    capacity: usize,
    transactions: RwLock<VecDeque<Tx>>,
}

impl TransactionPool {
    /// Creates a new empty transaction pool
    /// 
    /// # Arguments
    /// * `capacity` - Maximum number of transactions held at once
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            transactions: RwLock::new(VecDeque::new()),
        }
    }
    
    /// Add an admitted transaction to the back of the queue
    /// 
    /// # Returns
    /// * `Ok(())` if the transaction was queued
    /// * `Err(PoolError::Full)` if the pool already holds `capacity` transactions
    pub async fn add(&self, tx: Tx) -> Result<(), PoolError> {
        let mut txs = self.transactions.write().await;
        if txs.len() >= self.capacity {
            return Err(PoolError::Full {
                capacity: self.capacity,
            });
        }
        txs.push_back(tx);
        Ok(())
    }
    
    /// Removes and returns up to `max` transactions from the front of the queue
    pub async fn get_pending(&self, max: usize) -> Vec<Tx> {
        let mut txs = self.transactions.write().await;
        let len = txs.len();
        txs.drain(..max.min(len)).collect()
    }

    /// Number of transactions currently waiting
    pub async fn len(&self) -> usize {
        self.transactions.read().await.len()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{AnyMsg, Msg};

    fn opaque_tx(type_url: &str) -> Tx {
        Tx::new(vec![Msg::Other(AnyMsg {
            type_url: type_url.to_string(),
            value: Default::default(),
        })])
    }

    #[tokio::test]
    async fn test_pool_is_fifo() {
        let pool = TransactionPool::new(10);
        pool.add(opaque_tx("/a")).await.unwrap();
        pool.add(opaque_tx("/b")).await.unwrap();
        pool.add(opaque_tx("/c")).await.unwrap();
        assert_eq!(pool.len().await, 3);

        let pending = pool.get_pending(2).await;
        assert_eq!(pending.len(), 2);
        assert_eq!(pending[0].msgs()[0].type_url(), "/a");
        assert_eq!(pending[1].msgs()[0].type_url(), "/b");

        let rest = pool.get_pending(10).await;
        assert_eq!(rest.len(), 1);
        assert_eq!(pool.len().await, 0);
    }

    #[tokio::test]
    async fn test_pool_rejects_when_full() {
        let pool = TransactionPool::new(2);
        pool.add(opaque_tx("/a")).await.unwrap();
        pool.add(opaque_tx("/b")).await.unwrap();

        assert_eq!(
            pool.add(opaque_tx("/c")).await,
            Err(PoolError::Full { capacity: 2 })
        );
        assert_eq!(pool.len().await, 2);

        // draining frees room again
        assert_eq!(pool.get_pending(1).await.len(), 1);
        assert!(pool.add(opaque_tx("/c")).await.is_ok());
        assert_eq!(pool.len().await, 2);
    }
}
