//! # Catalog Loading
//!
//! Fetches the fruit options once at session start and folds them into a
//! [`FruitCatalog`]. A failing read is fatal: without options there is no
//! form to show.

use crate::model::FruitCatalog;
use crate::store::SmoothieStore;
use thiserror::Error;
use tracing::{debug, info};

/// Failure to produce a catalog. There is no recovery path; the session
/// cannot start without one.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CatalogError {
    /// The relational source could not be read. Carries the source's message.
    #[error("fruit catalog unavailable: {0}")]
    Unavailable(String),
}

/// Loads and deduplicates the fruit catalog.
///
/// Row order is preserved and the first row wins on duplicate names, so
/// loading the same source twice yields the same catalog.
pub async fn load(store: &dyn SmoothieStore) -> Result<FruitCatalog, CatalogError> {
    let rows = store
        .fruit_options()
        .await
        .map_err(|e| CatalogError::Unavailable(e.to_string()))?;

    let total = rows.len();
    let catalog = FruitCatalog::from_rows(rows);
    let dropped = total - catalog.len();
    if dropped > 0 {
        debug!(dropped, "Dropped duplicate catalog rows");
    }
    info!(fruits = catalog.len(), "Catalog loaded");

    Ok(catalog)
}
