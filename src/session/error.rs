//! Error types for the form session.

use crate::catalog::CatalogError;
use thiserror::Error;

/// Errors surfaced by the session plumbing itself.
///
/// Everything the form can recover from (skipped fruits, failed lookups,
/// rejected inserts) is reported inside the view instead.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SessionError {
    /// The session actor is gone; its channel is closed.
    #[error("form session closed")]
    SessionClosed,

    /// The session dropped the response channel mid-request.
    #[error("form session dropped the response")]
    SessionDropped,

    /// The catalog could not be loaded, so no session was started.
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}
