//! # Store Seam
//!
//! The form talks to its relational source through [`SmoothieStore`]: one
//! read for the fruit catalog, one parameterized insert per submitted order.
//! [`MemoryStore`] is the in-process implementation used by the demo binary
//! and the test suites.

pub mod memory;

pub use memory::MemoryStore;

use crate::model::{FruitOption, Order};
use async_trait::async_trait;
use thiserror::Error;

/// Failure reported by the relational collaborator.
///
/// The message is carried verbatim so callers can surface it unchanged.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StoreError {
    /// The catalog read failed.
    #[error("{0}")]
    Read(String),
    /// The order insert was rejected.
    #[error("{0}")]
    Write(String),
}

/// The two statements the form issues against its relational source.
#[async_trait]
pub trait SmoothieStore: Send + Sync {
    /// All `(FRUIT_NAME, SEARCH_ON)` rows of `smoothies.public.fruit_options`,
    /// in source order. Duplicate names may occur; callers deduplicate.
    async fn fruit_options(&self) -> Result<Vec<FruitOption>, StoreError>;

    /// Inserts one row into `smoothies.public.orders` with the ingredient
    /// list and name bound as parameters.
    async fn insert_order(&self, order: &Order) -> Result<(), StoreError>;
}
