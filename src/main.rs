//! Demo run of the smoothie order form.
//!
//! Seeds an in-memory catalog, starts the form system against the production
//! nutrition service, renders a preview pass, then confirms the order. When
//! run offline the lookups fail per fruit and the pass still completes.

use smoothie_form::lifecycle::tracing::setup_tracing;
use smoothie_form::lifecycle::FormSystem;
use smoothie_form::model::{FruitOption, OrderForm, Selection};
use smoothie_form::nutrition::HttpNutritionProvider;
use smoothie_form::session::{view, FormView, IngredientOutcome};
use smoothie_form::store::MemoryStore;
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), String> {
    // Setup tracing once for the entire application
    setup_tracing();

    info!("Starting smoothie order form");

    let store = Arc::new(MemoryStore::new(vec![
        FruitOption::new("Apple", Some("apple")),
        FruitOption::new("Blueberries", Some("blueberry")),
        FruitOption::new("Dragon Fruit", Some("dragonfruit")),
        FruitOption::new("Jackfruit", Some("jackfruit")),
        FruitOption::new("Raspberries", Some("raspberry")),
        FruitOption::new("Ximenia", None),
    ]));
    let nutrition = Arc::new(HttpNutritionProvider::new());

    let system = FormSystem::start(store.clone(), nutrition)
        .await
        .map_err(|e| e.to_string())?;

    let options = system.client.options().await.map_err(|e| e.to_string())?;
    println!("{}", view::TITLE);
    println!("{}", view::CAPTION);
    println!();
    println!("{} [{}]", view::INGREDIENTS_LABEL, options.join(", "));
    println!();

    let selection = Selection::of(&["Apple", "Raspberries"]).map_err(|e| e.to_string())?;

    // First pass: the picker is filled in, the order button not pressed yet.
    let preview = system
        .client
        .interact(OrderForm {
            name_on_order: None,
            selection: selection.clone(),
            submit: false,
        })
        .await
        .map_err(|e| e.to_string())?;
    render(&preview);

    // Second pass: same form with the order button pressed.
    let confirmed = system
        .client
        .interact(OrderForm {
            name_on_order: None,
            selection,
            submit: true,
        })
        .await
        .map_err(|e| e.to_string())?;
    render(&confirmed);

    info!(orders = store.orders().len(), "Orders stored");

    system.shutdown().await?;

    info!("Application completed successfully");
    Ok(())
}

/// Prints one form pass the way a text surface would draw it.
fn render(view: &FormView) {
    println!("{}", view.name_echo);
    for ingredient in &view.ingredients {
        if let IngredientOutcome::Table(table) = &ingredient.outcome {
            println!();
            println!("{}", ingredient.heading());
            print!("{}", table);
        }
    }
    if let Some(preview) = &view.order_preview {
        println!();
        println!("{}", preview);
    }
    for notice in view.notices() {
        println!("[{:?}] {}", notice.severity, notice.message);
    }
    println!();
}
