//! # System Lifecycle & Orchestration
//!
//! Starting the form is a fixed sequence: read the catalog, refuse to
//! continue when that fails, then spawn the session actor with its
//! collaborators injected. [`FormSystem`] owns that sequence plus graceful
//! shutdown; [`tracing::setup_tracing`] wires the log subscriber.

pub mod form_system;
pub mod tracing;

pub use form_system::FormSystem;
