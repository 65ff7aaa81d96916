//! # Order Preview & Submission
//!
//! Renders the literal insert statement for user inspection and executes the
//! order insert through the store seam. The executed insert binds its values
//! as parameters; the quoted literal is display-only.

use crate::model::Order;
use crate::store::SmoothieStore;
use thiserror::Error;
use tracing::{info, warn};

/// The store rejected the order insert. Carries the store's message verbatim.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{0}")]
pub struct SubmissionError(pub String);

/// Doubles single quotes, the escaping rule for string literals in the
/// previewed statement.
pub fn escape_single_quotes(input: &str) -> String {
    input.replace('\'', "''")
}

/// The insert statement as shown to the customer before they confirm.
pub fn insert_preview(order: &Order) -> String {
    format!(
        "INSERT INTO smoothies.public.orders (ingredients, NAME_ON_ORDER) VALUES ('{}', '{}')",
        escape_single_quotes(&order.ingredients),
        escape_single_quotes(&order.name_on_order),
    )
}

/// Executes the order insert.
pub async fn submit_order(
    store: &dyn SmoothieStore,
    order: &Order,
) -> Result<(), SubmissionError> {
    match store.insert_order(order).await {
        Ok(()) => {
            info!(name_on_order = %order.name_on_order, "Order submitted");
            Ok(())
        }
        Err(e) => {
            warn!(error = %e, "Order insert rejected");
            Err(SubmissionError(e.to_string()))
        }
    }
}
