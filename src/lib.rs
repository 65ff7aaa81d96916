//! # Smoothie Order Form
//!
//! A customizable smoothie order form driven by message passing: a surface
//! sends the current form state in, the session answers with everything
//! there is to draw. The session is an actor, so interactions are processed
//! strictly one at a time.
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Data ([`model`])
//! Pure data structures: catalog rows, the deduplicated [`FruitCatalog`](model::FruitCatalog),
//! nutrition tables, and the order DTOs.
//!
//! ### 2. The Collaborators ([`store`], [`nutrition`])
//! Trait seams for the outside world.
//! - **Role**: One catalog read and one parameterized order insert go through
//!   [`SmoothieStore`](store::SmoothieStore); per-fruit nutrition lookups go through
//!   [`NutritionProvider`](nutrition::NutritionProvider).
//! - **Key items**: [`MemoryStore`](store::MemoryStore) for demos and tests,
//!   [`HttpNutritionProvider`](nutrition::HttpNutritionProvider) for the real service,
//!   [`mock::MockNutritionProvider`](nutrition::mock::MockNutritionProvider) for scripted tests.
//!
//! ### 3. The Controller ([`catalog`], [`submit`], [`session`])
//! The form itself.
//! - **Role**: [`catalog`] loads the options once at session start (fatal on
//!   failure); [`session`] handles each interaction from scratch and assembles a
//!   [`FormView`](session::FormView); [`submit`] renders the literal insert preview and
//!   executes the order insert.
//! - **Key items**: [`FormSession`](session::FormSession), [`SessionClient`](session::SessionClient).
//!
//! ### 4. The Orchestrator ([`lifecycle`])
//! - **Role**: Spins up a session with its collaborators wired in, in the
//!   right order, and shuts it down again.
//! - **Key items**: [`FormSystem`](lifecycle::FormSystem), [`setup_tracing`](lifecycle::tracing::setup_tracing).
//!
//! ## 🚀 Quick Start
//!
//! ### Running the Demo
//!
//! ```bash
//! # Run with info logs
//! RUST_LOG=info cargo run
//! ```
//!
//! ### Running Tests
//!
//! ```bash
//! cargo test
//! ```

pub mod catalog;
pub mod lifecycle;
pub mod model;
pub mod nutrition;
pub mod session;
pub mod store;
pub mod submit;
