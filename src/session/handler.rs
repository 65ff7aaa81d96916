//! Per-interaction form logic.
//!
//! Each interaction is handled from scratch against the session catalog and
//! the injected collaborators; nothing carries over between passes.

use crate::model::{FruitCatalog, FruitOption, Order, OrderForm, DEFAULT_NAME_ON_ORDER};
use crate::session::actor::SessionContext;
use crate::session::view::{
    FormView, IngredientOutcome, IngredientView, SkipReason, SubmissionView,
};
use crate::submit;
use tracing::warn;

/// Runs one full pass over the form and assembles the view to draw.
pub(crate) async fn interact(
    form: &OrderForm,
    catalog: &FruitCatalog,
    context: &SessionContext,
) -> FormView {
    let name_on_order = form
        .name_on_order
        .clone()
        .unwrap_or_else(|| DEFAULT_NAME_ON_ORDER.to_string());
    let mut view = FormView::new(&name_on_order);

    // An empty picker means a bare form: no lookups, no preview, no insert.
    if form.selection.is_empty() {
        return view;
    }

    // The ingredient string covers every picked name, even ones whose
    // lookup is skipped below.
    let order = Order::new(name_on_order, &form.selection);

    for fruit in form.selection.names() {
        let outcome = ingredient_outcome(fruit, catalog, context).await;
        view.ingredients.push(IngredientView {
            name: fruit.clone(),
            outcome,
        });
    }

    view.order_preview = Some(submit::insert_preview(&order));

    if form.submit {
        let submission = match submit::submit_order(context.store.as_ref(), &order).await {
            Ok(()) => SubmissionView::Accepted,
            Err(e) => SubmissionView::Failed(e.to_string()),
        };
        view.submission = Some(submission);
    }

    view
}

async fn ingredient_outcome(
    fruit: &str,
    catalog: &FruitCatalog,
    context: &SessionContext,
) -> IngredientOutcome {
    let Some(option) = catalog.get(fruit) else {
        warn!(fruit, "Picked fruit missing from catalog");
        return IngredientOutcome::Skipped(SkipReason::NotInCatalog);
    };

    let key = match search_key(option) {
        Ok(key) => key,
        Err(reason) => {
            warn!(fruit, ?reason, "Skipping nutrition lookup");
            return IngredientOutcome::Skipped(reason);
        }
    };

    match context.nutrition.fetch(key).await {
        Ok(table) => IngredientOutcome::Table(table),
        Err(e) => {
            warn!(fruit, error = %e, "Nutrition lookup failed");
            IngredientOutcome::LookupFailed(e.to_string())
        }
    }
}

/// Validates a catalog row's search key for lookup use.
///
/// An absent key and the textual `"nan"` an upstream export writes for
/// missing values both count as missing; a key that trims to nothing is
/// rejected separately.
fn search_key(option: &FruitOption) -> Result<&str, SkipReason> {
    let raw = match option.search_on.as_deref() {
        Some(raw) => raw,
        None => return Err(SkipReason::MissingSearchKey),
    };
    let key = raw.trim();
    if key.eq_ignore_ascii_case("nan") {
        return Err(SkipReason::MissingSearchKey);
    }
    if key.is_empty() {
        return Err(SkipReason::EmptySearchKey);
    }
    Ok(key)
}
