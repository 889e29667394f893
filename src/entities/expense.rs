// Expense Entity - a single recorded outflow

use serde::{Deserialize, Serialize};

/// Default category applied when a persisted expense predates categories.
///
/// Intentionally distinct from the "general" default the CLI applies when
/// recording a new expense; the two policies are separate.
fn default_category() -> String {
    "uncategorized".to_string()
}

/// A single spending record. Immutable once created.
///
/// No validation is applied to the amount: zero and negative amounts are
/// allowed (a negative amount models a refund).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    pub description: String,
    pub amount: f64,
    #[serde(default = "default_category")]
    pub category: String,
}

impl Expense {
    pub fn new(description: String, amount: f64, category: String) -> Self {
        Expense {
            description,
            amount,
            category,
        }
    }
}
