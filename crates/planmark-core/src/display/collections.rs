//! Collection wrapper types for displaying groups of steps.

use std::{fmt, ops::Index};

use crate::models::ImplementationStep;

/// Newtype wrapper for displaying a list of parsed steps.
///
/// The full form prints every step with its details; [`Steps::checklist`]
/// gives a one-line-per-step overview. Empty collections print a notice.
///
/// # Examples
///
/// ```rust
/// use planmark_core::{display::Steps, parse_steps};
///
/// let steps = Steps(parse_steps("- [ ] Step 1: Setup\n  - run cargo new\n").collect());
/// let output = format!("{}", steps);
/// assert!(output.contains("### 1. Setup"));
/// assert!(format!("{}", steps.checklist()).contains("- [ ] 1. Setup"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Steps(pub Vec<ImplementationStep>);

impl Steps {
    /// Check if the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get the number of steps in the collection.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Get a reference to the step at the given index.
    pub fn get(&self, index: usize) -> Option<&ImplementationStep> {
        self.0.get(index)
    }

    /// Get an iterator over the steps.
    pub fn iter(&self) -> std::slice::Iter<'_, ImplementationStep> {
        self.0.iter()
    }

    /// Compact view: one checkbox line per step, with the next open step
    /// marked.
    pub fn checklist(&self) -> Checklist<'_> {
        Checklist(&self.0)
    }
}

impl FromIterator<ImplementationStep> for Steps {
    fn from_iter<I: IntoIterator<Item = ImplementationStep>>(iter: I) -> Self {
        Steps(iter.into_iter().collect())
    }
}

impl Index<usize> for Steps {
    type Output = ImplementationStep;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl IntoIterator for Steps {
    type Item = ImplementationStep;
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Steps {
    type Item = &'a ImplementationStep;
    type IntoIter = std::slice::Iter<'a, ImplementationStep>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for Steps {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            writeln!(f, "No steps found.")
        } else {
            for step in &self.0 {
                write!(f, "{}", step)?;
            }
            Ok(())
        }
    }
}

/// Borrowed one-line-per-step view of a [`Steps`] collection.
pub struct Checklist<'a>(&'a [ImplementationStep]);

impl fmt::Display for Checklist<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No steps found.");
        }

        let next = self.0.iter().position(|step| !step.completed);
        for (index, step) in self.0.iter().enumerate() {
            let mark = if step.completed { "x" } else { " " };
            let pointer = if Some(index) == next { " ← next" } else { "" };
            writeln!(f, "- [{mark}] {}. {}{pointer}", step.id, step.title)?;
        }
        Ok(())
    }
}
