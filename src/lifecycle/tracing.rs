//! # Observability & Tracing
//!
//! [`setup_tracing`] initializes structured logging for the whole process.
//!
//! The compact format hides the crate/module prefix (`with_target(false)`),
//! keeping log lines short while still carrying structured fields.
//!
//! ## Usage Examples
//!
//! ```bash
//! # Compact logs (default)
//! RUST_LOG=info cargo run
//!
//! # Show full form payloads at interaction entry points
//! RUST_LOG=debug cargo run
//! ```
//!
//! ## What Gets Traced
//!
//! - **Session lifecycle**: startup with catalog size, shutdown
//! - **Catalog loading**: row counts and dropped duplicates
//! - **Interactions**: the full form payload once at `debug`, then per-fruit
//!   skip warnings and lookup failures
//! - **Submissions**: accepted orders and rejected inserts
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false) // Don't show module paths
        .compact()
        .init();
}
