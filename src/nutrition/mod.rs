//! # Nutrition Lookups
//!
//! One lookup per valid search key: `GET {base}/api/fruit/{key}` against the
//! smoothiefroot service, decoded into a [`NutritionTable`]. The provider
//! trait keeps the session testable; [`mock::MockNutritionProvider`] scripts
//! responses without a server.
//!
//! [`NutritionTable`]: crate::model::NutritionTable

pub mod http;
pub mod mock;

pub use http::HttpNutritionProvider;

use crate::model::NutritionTable;
use async_trait::async_trait;
use thiserror::Error;

/// Failure modes of a single nutrition lookup.
///
/// None of them is fatal to the form; the session reports the failure
/// against the one fruit and moves on.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LookupError {
    /// The request never produced a response (connect failure, timeout).
    #[error("request failed: {0}")]
    Request(String),
    /// The service answered with a non-success status.
    #[error("service returned status {0}")]
    Status(u16),
    /// The body was not a JSON object or array of objects.
    #[error("unreadable payload: {0}")]
    Decode(String),
}

/// A source of nutrition data for one fruit search key.
///
/// Callers hand in a trimmed, non-empty key; key validation happens in the
/// session before a lookup is attempted.
#[async_trait]
pub trait NutritionProvider: Send + Sync {
    async fn fetch(&self, search_key: &str) -> Result<NutritionTable, LookupError>;
}
