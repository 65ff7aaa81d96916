//! Request messages accepted by the form session.

use crate::model::OrderForm;
use crate::session::view::FormView;
use tokio::sync::oneshot;

/// Messages the session processes one at a time, in arrival order.
///
/// Responses travel back over oneshot channels. They carry plain payloads;
/// recoverable per-ingredient and per-submission outcomes live inside the
/// [`FormView`] rather than in an error channel.
#[derive(Debug)]
pub enum SessionRequest {
    /// The fruit names to offer in the ingredient picker, in catalog order.
    Options {
        respond_to: oneshot::Sender<Vec<String>>,
    },
    /// One full pass over the form for one interaction.
    Interact {
        form: OrderForm,
        respond_to: oneshot::Sender<FormView>,
    },
}
