//! # Form Session Actor
//!
//! The server half of the form session. It owns the catalog loaded at
//! session start and the receiving end of the request channel, and processes
//! messages sequentially.
//!
//! **Concurrency model**: one message at a time. A second interaction sent
//! while the first is still fetching nutrition data waits in the mailbox, so
//! two passes can never interleave their lookups or inserts.

use crate::model::FruitCatalog;
use crate::nutrition::NutritionProvider;
use crate::session::client::SessionClient;
use crate::session::handler;
use crate::session::message::SessionRequest;
use crate::store::SmoothieStore;
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{debug, info};

/// Collaborators injected into the session when it starts.
///
/// Injection happens at `run()` time rather than construction time, so a
/// system can create the actor and client first and wire providers later.
pub struct SessionContext {
    pub store: Arc<dyn SmoothieStore>,
    pub nutrition: Arc<dyn NutritionProvider>,
}

/// The form session actor.
///
/// Created in a pair with its [`SessionClient`]; runs until every client is
/// dropped.
pub struct FormSession {
    receiver: mpsc::Receiver<SessionRequest>,
    catalog: FruitCatalog,
}

impl FormSession {
    /// Creates a session for a loaded catalog and its associated client.
    ///
    /// # Arguments
    ///
    /// * `catalog` - The deduplicated fruit catalog, fixed for the session
    /// * `buffer_size` - Capacity of the request channel; senders wait when
    ///   it is full
    pub fn new(catalog: FruitCatalog, buffer_size: usize) -> (Self, SessionClient) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self { receiver, catalog };
        let client = SessionClient::new(sender);
        (actor, client)
    }

    /// Runs the session loop, processing requests until the channel closes.
    pub async fn run(mut self, context: SessionContext) {
        info!(fruits = self.catalog.len(), "Form session started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                SessionRequest::Options { respond_to } => {
                    debug!("Options");
                    let _ = respond_to.send(self.catalog.names());
                }
                SessionRequest::Interact { form, respond_to } => {
                    debug!(?form, "Interact");
                    let view = handler::interact(&form, &self.catalog, &context).await;
                    let _ = respond_to.send(view);
                }
            }
        }

        info!("Form session shut down");
    }
}
