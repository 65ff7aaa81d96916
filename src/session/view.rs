//! What the rendering surface receives after each interaction.
//!
//! The session answers every [`OrderForm`](crate::model::OrderForm) with a
//! complete [`FormView`]; the surface draws it and keeps no other state.

use crate::model::NutritionTable;

/// Form title, rendered on every pass.
pub const TITLE: &str = "🥤 Customize Your Smoothie 🥤";

/// Byline under the title.
pub const CAPTION: &str = "Choose the fruits you want in your custom smoothie";

/// Label for the name input.
pub const NAME_INPUT_LABEL: &str = "Name on Smoothie";

/// Label for the ingredient picker.
pub const INGREDIENTS_LABEL: &str = "Choose up to 5 ingredients:";

/// One full pass of the form.
#[derive(Debug, Clone, PartialEq)]
pub struct FormView {
    /// Echo line confirming the name that will go on the order.
    pub name_echo: String,
    /// Per-ingredient outcomes, in pick order.
    pub ingredients: Vec<IngredientView>,
    /// The literal insert statement, present once at least one fruit is
    /// picked. Stays visible even when the submission fails.
    pub order_preview: Option<String>,
    /// Outcome of the insert, present only when the order button was pressed.
    pub submission: Option<SubmissionView>,
}

impl FormView {
    pub(crate) fn new(name_on_order: &str) -> Self {
        Self {
            name_echo: format!("The name on your smoothie will be: {name_on_order}"),
            ingredients: Vec::new(),
            order_preview: None,
            submission: None,
        }
    }

    /// Flattens the view into the flash messages a surface would show: skip
    /// warnings, lookup errors, and the submission outcome, in render order.
    pub fn notices(&self) -> Vec<Notice> {
        let mut notices = Vec::new();
        for ingredient in &self.ingredients {
            match &ingredient.outcome {
                IngredientOutcome::Table(_) => {}
                IngredientOutcome::Skipped(reason) => {
                    notices.push(Notice::warning(reason.message(&ingredient.name)));
                }
                IngredientOutcome::LookupFailed(message) => {
                    notices.push(Notice::error(format!(
                        "Failed to fetch nutrition for {}: {}",
                        ingredient.name, message
                    )));
                }
            }
        }
        match &self.submission {
            Some(SubmissionView::Accepted) => {
                notices.push(Notice::success("Your Smoothie is ordered!"));
            }
            Some(SubmissionView::Failed(message)) => {
                notices.push(Notice::error(format!("Insert failed: {message}")));
            }
            None => {}
        }
        notices
    }
}

/// Outcome of one picked fruit.
#[derive(Debug, Clone, PartialEq)]
pub struct IngredientView {
    pub name: String,
    pub outcome: IngredientOutcome,
}

impl IngredientView {
    /// Section heading above the nutrition table.
    pub fn heading(&self) -> String {
        format!("{} — Nutrition Information", self.name)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum IngredientOutcome {
    /// The lookup succeeded; the surface renders the table under a heading.
    Table(NutritionTable),
    /// The lookup was never attempted.
    Skipped(SkipReason),
    /// The lookup was attempted and failed. Carries the lookup error text.
    LookupFailed(String),
}

/// Why a picked fruit got no nutrition lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// The picked name is not in the catalog this session loaded.
    NotInCatalog,
    /// The catalog row has no usable search key.
    MissingSearchKey,
    /// The search key is empty once trimmed.
    EmptySearchKey,
}

impl SkipReason {
    /// The warning text the surface flashes for this skip.
    pub fn message(&self, fruit: &str) -> String {
        match self {
            Self::NotInCatalog => format!("'{fruit}' not found in options. Skipping."),
            Self::MissingSearchKey => {
                format!("No search key for '{fruit}'. Skipping nutrition lookup.")
            }
            Self::EmptySearchKey => format!("Empty search key for '{fruit}'. Skipping."),
        }
    }
}

/// Outcome of a confirmed order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionView {
    /// The insert went through.
    Accepted,
    /// The store rejected the insert. Carries the store's message verbatim.
    Failed(String),
}

/// A user-facing flash message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub severity: Severity,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Warning,
    Error,
}

impl Notice {
    fn success(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Success,
            message: message.into(),
        }
    }

    fn warning(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            message: message.into(),
        }
    }

    fn error(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_echo_line() {
        let view = FormView::new("Bob");
        assert_eq!(view.name_echo, "The name on your smoothie will be: Bob");
    }

    #[test]
    fn test_heading_names_the_fruit() {
        let ingredient = IngredientView {
            name: "Apple".to_string(),
            outcome: IngredientOutcome::Skipped(SkipReason::MissingSearchKey),
        };
        assert_eq!(ingredient.heading(), "Apple — Nutrition Information");
    }

    #[test]
    fn test_skip_messages() {
        assert_eq!(
            SkipReason::NotInCatalog.message("Zucchini"),
            "'Zucchini' not found in options. Skipping."
        );
        assert_eq!(
            SkipReason::MissingSearchKey.message("Banana"),
            "No search key for 'Banana'. Skipping nutrition lookup."
        );
        assert_eq!(
            SkipReason::EmptySearchKey.message("Cherry"),
            "Empty search key for 'Cherry'. Skipping."
        );
    }

    #[test]
    fn test_notices_collect_in_render_order() {
        let mut view = FormView::new("Bob");
        view.ingredients.push(IngredientView {
            name: "Apple".to_string(),
            outcome: IngredientOutcome::LookupFailed("service returned status 500".to_string()),
        });
        view.ingredients.push(IngredientView {
            name: "Banana".to_string(),
            outcome: IngredientOutcome::Skipped(SkipReason::MissingSearchKey),
        });
        view.submission = Some(SubmissionView::Failed("table ORDERS is locked".to_string()));

        let notices = view.notices();
        assert_eq!(notices.len(), 3);
        assert_eq!(notices[0].severity, Severity::Error);
        assert_eq!(
            notices[0].message,
            "Failed to fetch nutrition for Apple: service returned status 500"
        );
        assert_eq!(notices[1].severity, Severity::Warning);
        assert_eq!(notices[2].message, "Insert failed: table ORDERS is locked");
    }

    #[test]
    fn test_accepted_submission_is_a_success_notice() {
        let mut view = FormView::new("Bob");
        view.submission = Some(SubmissionView::Accepted);

        let notices = view.notices();
        assert_eq!(notices.len(), 1);
        assert_eq!(notices[0].severity, Severity::Success);
        assert_eq!(notices[0].message, "Your Smoothie is ordered!");
    }

    #[test]
    fn test_bare_view_has_no_notices() {
        assert!(FormView::new("Bob").notices().is_empty());
    }
}
