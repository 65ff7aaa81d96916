use crate::catalog;
use crate::nutrition::NutritionProvider;
use crate::session::{self, SessionClient, SessionContext, SessionError};
use crate::store::SmoothieStore;
use std::sync::Arc;
use tracing::{error, info};

/// The runtime orchestrator for one form session.
///
/// `FormSystem` is responsible for:
/// - **Startup order**: the catalog must load before the session may start
/// - **Dependency wiring**: the store and nutrition provider are injected
///   into the session at spawn time
/// - **Lifecycle management**: graceful shutdown once the surface is done
///
/// # Example
///
/// ```ignore
/// let system = FormSystem::start(store, nutrition).await?;
///
/// let options = system.client.options().await?;
/// let view = system.client.interact(form).await?;
///
/// // Gracefully shut down when done
/// system.shutdown().await?;
/// ```
#[derive(Debug)]
pub struct FormSystem {
    /// Client for driving the form session.
    pub client: SessionClient,

    /// Task handle for the running session actor (used for graceful shutdown).
    handle: tokio::task::JoinHandle<()>,
}

impl FormSystem {
    /// Loads the catalog and starts the session actor.
    ///
    /// Fails without starting anything when the catalog cannot be read; a
    /// form with no options is not worth showing.
    pub async fn start(
        store: Arc<dyn SmoothieStore>,
        nutrition: Arc<dyn NutritionProvider>,
    ) -> Result<Self, SessionError> {
        let catalog = catalog::load(store.as_ref()).await?;

        let (actor, client) = session::new(catalog);
        let context = SessionContext { store, nutrition };
        let handle = tokio::spawn(actor.run(context));

        Ok(Self { client, handle })
    }

    /// Gracefully shuts the session down.
    ///
    /// Dropping the client closes the request channel; the session drains
    /// its mailbox and exits. Returns an error if the session task panicked.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down form system...");

        drop(self.client);

        if let Err(e) = self.handle.await {
            error!("Session task failed: {:?}", e);
            return Err(format!("Session task failed: {:?}", e));
        }

        info!("Form system shutdown complete.");
        Ok(())
    }
}
