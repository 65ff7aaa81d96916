//! Order-side data: the bounded ingredient selection, the interaction DTO a
//! surface emits, and the finalized order row.

use thiserror::Error;

/// Name stamped on the order when the customer leaves the field untouched.
pub const DEFAULT_NAME_ON_ORDER: &str = "Life of Brian";

/// Upper bound on picked ingredients, enforced by the ingredient picker.
pub const MAX_INGREDIENTS: usize = 5;

/// The fruits picked for one smoothie, in pick order.
///
/// Construction enforces the five-ingredient cap, so every value of this
/// type is a valid selection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection(Vec<String>);

/// Rejections produced when building a [`Selection`].
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SelectionError {
    /// More ingredients were picked than a smoothie takes.
    #[error("too many ingredients: picked {0}, the limit is {MAX_INGREDIENTS}")]
    TooManyIngredients(usize),
}

impl Selection {
    /// Builds a selection from picked fruit names, newest last.
    pub fn new(names: Vec<String>) -> Result<Self, SelectionError> {
        if names.len() > MAX_INGREDIENTS {
            return Err(SelectionError::TooManyIngredients(names.len()));
        }
        Ok(Self(names))
    }

    /// Convenience constructor for string literals.
    pub fn of(names: &[&str]) -> Result<Self, SelectionError> {
        Self::new(names.iter().map(|n| n.to_string()).collect())
    }

    pub fn names(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The comma-separated ingredient list stored on the order.
    pub fn joined(&self) -> String {
        self.0.join(", ")
    }
}

/// What a surface emits for one interaction: the current state of the name
/// input and ingredient picker, plus whether the order button was pressed.
///
/// `name_on_order` is `None` while the field is untouched; the session then
/// falls back to [`DEFAULT_NAME_ON_ORDER`]. A field the customer explicitly
/// cleared arrives as `Some("")` and is kept verbatim.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderForm {
    pub name_on_order: Option<String>,
    pub selection: Selection,
    pub submit: bool,
}

/// A finalized order, ready for the insert statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Order {
    pub name_on_order: String,
    pub ingredients: String,
}

impl Order {
    /// Builds the order row for a named customer and their selection.
    pub fn new(name_on_order: impl Into<String>, selection: &Selection) -> Self {
        Self {
            name_on_order: name_on_order.into(),
            ingredients: selection.joined(),
        }
    }
}
