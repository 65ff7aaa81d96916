//! # Form Session
//!
//! The order form controller, run as a session actor: requests arrive on a
//! channel and are processed one at a time, so no two interactions ever
//! overlap. The catalog is loaded once before the session starts and stays
//! fixed for the session's lifetime.
//!
//! ## Structure
//!
//! - [`actor`] - [`FormSession`], the server half owning catalog and mailbox
//! - [`client`] - [`SessionClient`], the cloneable handle a surface calls
//! - [`message`] - [`SessionRequest`], the mailbox protocol
//! - [`view`] - [`FormView`] and friends, the data a surface draws
//! - [`error`] - [`SessionError`] for channel and startup failures
//! - [`new()`] - factory that pairs an actor with its client
//!
//! ## Usage
//!
//! ```ignore
//! let catalog = catalog::load(store.as_ref()).await?;
//! let (actor, client) = session::new(catalog);
//! tokio::spawn(actor.run(SessionContext { store, nutrition }));
//!
//! let view = client.interact(OrderForm::default()).await?;
//! ```

pub mod actor;
pub mod client;
pub mod error;
pub mod message;
pub mod view;

mod handler;

pub use actor::{FormSession, SessionContext};
pub use client::SessionClient;
pub use error::SessionError;
pub use message::SessionRequest;
pub use view::{
    FormView, IngredientOutcome, IngredientView, Notice, Severity, SkipReason, SubmissionView,
};

use crate::model::FruitCatalog;

/// Creates a form session for a loaded catalog.
pub fn new(catalog: FruitCatalog) -> (FormSession, SessionClient) {
    FormSession::new(catalog, 32)
}
