//! In-memory store for demos and tests.

use super::{SmoothieStore, StoreError};
use crate::model::{FruitOption, Order};
use async_trait::async_trait;
use std::sync::Mutex;
use tracing::debug;

/// An in-process [`SmoothieStore`] holding seeded catalog rows and collecting
/// inserted orders.
///
/// Failure injection covers what a real source can do to the form: a failing
/// catalog read (fatal at session start) and rejected inserts (reported per
/// submission). Both are configured up front with the builder methods.
///
/// # Example
/// ```ignore
/// let store = MemoryStore::new(rows).reject_inserts("table ORDERS is locked");
/// ```
#[derive(Debug, Default)]
pub struct MemoryStore {
    rows: Vec<FruitOption>,
    orders: Mutex<Vec<Order>>,
    read_failure: Option<String>,
    write_failure: Option<String>,
}

impl MemoryStore {
    /// Creates a store seeded with catalog rows.
    pub fn new(rows: Vec<FruitOption>) -> Self {
        Self {
            rows,
            ..Self::default()
        }
    }

    /// Makes every catalog read fail with `message`.
    pub fn fail_catalog(mut self, message: impl Into<String>) -> Self {
        self.read_failure = Some(message.into());
        self
    }

    /// Makes every insert fail with `message`.
    pub fn reject_inserts(mut self, message: impl Into<String>) -> Self {
        self.write_failure = Some(message.into());
        self
    }

    /// Snapshot of the orders inserted so far, oldest first.
    pub fn orders(&self) -> Vec<Order> {
        self.orders.lock().unwrap().clone()
    }
}

#[async_trait]
impl SmoothieStore for MemoryStore {
    async fn fruit_options(&self) -> Result<Vec<FruitOption>, StoreError> {
        if let Some(message) = &self.read_failure {
            return Err(StoreError::Read(message.clone()));
        }
        Ok(self.rows.clone())
    }

    async fn insert_order(&self, order: &Order) -> Result<(), StoreError> {
        if let Some(message) = &self.write_failure {
            return Err(StoreError::Write(message.clone()));
        }
        let mut orders = self.orders.lock().unwrap();
        orders.push(order.clone());
        debug!(name_on_order = %order.name_on_order, total = orders.len(), "Order stored");
        Ok(())
    }
}
