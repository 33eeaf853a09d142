//! Result wrapper types for displaying edit outcomes.
//!
//! These wrap the step an edit targeted so callers can print what changed
//! without re-reading the plan.

use std::fmt;

use serde::Serialize;

use crate::models::ImplementationStep;

/// Result of an edit that changed a step's checkbox.
///
/// `changes` is empty when the step already had the requested state and the
/// plan was left untouched.
///
/// # Examples
///
/// ```rust
/// use planmark_core::{display::UpdateResult, ImplementationStep};
///
/// let step = ImplementationStep {
///     id: 2,
///     title: "Add schema".to_string(),
///     details: String::new(),
///     completed: true,
/// };
/// let result = UpdateResult::with_changes(step, vec!["Marked step as complete".to_string()]);
/// let output = format!("{}", result);
/// assert!(output.contains("Updated step 2"));
/// assert!(output.contains("Marked step as complete"));
/// ```
#[derive(Debug, Clone, Serialize)]
pub struct UpdateResult<T> {
    pub resource: T,
    pub changes: Vec<String>,
}

impl<T> UpdateResult<T> {
    /// Create a new UpdateResult wrapper with no recorded changes.
    pub fn new(resource: T) -> Self {
        Self {
            resource,
            changes: Vec::new(),
        }
    }

    /// Create an UpdateResult with a list of changes made.
    pub fn with_changes(resource: T, changes: Vec<String>) -> Self {
        Self { resource, changes }
    }

    /// Whether the edit modified the plan.
    pub fn is_changed(&self) -> bool {
        !self.changes.is_empty()
    }
}

impl fmt::Display for UpdateResult<ImplementationStep> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.changes.is_empty() {
            writeln!(f, "Step {} already up to date", self.resource.id)?;
        } else {
            writeln!(f, "Updated step {}", self.resource.id)?;
            writeln!(f)?;
            writeln!(f, "Changes made:")?;
            for change in &self.changes {
                writeln!(f, "- {change}")?;
            }
        }

        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

/// Result of removing a step from a plan.
#[derive(Debug, Clone, Serialize)]
pub struct DeleteResult<T> {
    pub resource: T,
    /// Whether the detail block was removed along with the header
    pub with_details: bool,
}

impl<T> DeleteResult<T> {
    /// Create a new DeleteResult wrapper.
    pub fn new(resource: T, with_details: bool) -> Self {
        Self {
            resource,
            with_details,
        }
    }
}

impl fmt::Display for DeleteResult<ImplementationStep> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Deleted step '{}' (ID: {})",
            self.resource.title, self.resource.id
        )?;
        if !self.with_details && !self.resource.details.is_empty() {
            writeln!(f)?;
            writeln!(
                f,
                "Its details were kept and now follow the preceding step."
            )?;
        }
        Ok(())
    }
}
