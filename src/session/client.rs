//! Client half of the form session.
//!
//! Wraps the request channel in typed async methods, the only way surfaces
//! talk to a running [`FormSession`](crate::session::FormSession).

use crate::model::OrderForm;
use crate::session::error::SessionError;
use crate::session::message::SessionRequest;
use crate::session::view::FormView;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, instrument};

/// Cheap-to-clone handle for driving a form session.
#[derive(Clone, Debug)]
pub struct SessionClient {
    sender: mpsc::Sender<SessionRequest>,
}

impl SessionClient {
    pub(crate) fn new(sender: mpsc::Sender<SessionRequest>) -> Self {
        Self { sender }
    }

    /// Fruit names for the ingredient picker, in catalog order.
    #[instrument(skip(self))]
    pub async fn options(&self) -> Result<Vec<String>, SessionError> {
        debug!("Sending request");
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(SessionRequest::Options { respond_to })
            .await
            .map_err(|_| SessionError::SessionClosed)?;
        response.await.map_err(|_| SessionError::SessionDropped)
    }

    /// Runs one interaction through the session and returns the view to draw.
    #[instrument(skip(self, form))]
    pub async fn interact(&self, form: OrderForm) -> Result<FormView, SessionError> {
        debug!(?form, "Sending request");
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(SessionRequest::Interact { form, respond_to })
            .await
            .map_err(|_| SessionError::SessionClosed)?;
        response.await.map_err(|_| SessionError::SessionDropped)
    }
}
