//! Step model definition and related functionality.

use serde::{Deserialize, Serialize};

/// A single step extracted from a plan document.
///
/// Steps are never stored on their own; they are always derived fresh from
/// the plan text and carry no position information beyond their order in the
/// sequence they were parsed into.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
pub struct ImplementationStep {
    /// Step number as written in the header (`Step 3` → `3`)
    pub id: u64,

    /// Single-line title following `Step N:`
    pub title: String,

    /// Text between this header and the next one, trimmed
    pub details: String,

    /// Whether the checkbox is ticked (`x` or `X`)
    pub completed: bool,
}

impl ImplementationStep {
    /// Get the completion state with an icon for display.
    ///
    /// ```rust
    /// use planmark_core::ImplementationStep;
    ///
    /// let step = ImplementationStep {
    ///     id: 1,
    ///     title: "Scaffold".to_string(),
    ///     details: String::new(),
    ///     completed: true,
    /// };
    /// assert_eq!(step.status_icon(), "✓ Done");
    /// ```
    pub fn status_icon(&self) -> &'static str {
        if self.completed {
            "✓ Done"
        } else {
            "○ Todo"
        }
    }

    /// Plain-text rendering used when handing a single step to another tool.
    ///
    /// The details block is appended after a blank line, and omitted entirely
    /// when empty.
    pub fn clipboard_text(&self) -> String {
        if self.details.is_empty() {
            format!("[{}] {}", self.id, self.title)
        } else {
            format!("[{}] {}\n\n{}", self.id, self.title, self.details)
        }
    }
}
