//! Display implementations for domain models.
//!
//! Steps and progress summaries format as markdown so the CLI renderer can
//! style them.

use std::fmt;

use crate::models::{ImplementationStep, PlanProgress};

impl fmt::Display for ImplementationStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "### {}. {} ({})", self.id, self.title, self.status_icon())?;
        writeln!(f)?;

        if !self.details.is_empty() {
            writeln!(f, "{}", self.details)?;
            writeln!(f)?;
        }

        Ok(())
    }
}

impl fmt::Display for PlanProgress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.total == 0 {
            return writeln!(f, "No steps found.");
        }

        writeln!(f, "- **Progress**: {}/{}", self.completed, self.total)?;
        writeln!(f, "- **Pending**: {}", self.pending)?;
        match self.next_step {
            Some(id) => writeln!(f, "- **Next**: Step {id}"),
            None => writeln!(f, "- **Next**: all steps complete"),
        }
    }
}
