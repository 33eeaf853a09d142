//! Completion summary for a whole plan.

use serde::{Deserialize, Serialize};

use super::ImplementationStep;

/// Aggregated completion counts for the steps of a plan.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
pub struct PlanProgress {
    /// Number of recognised step headers
    pub total: usize,

    /// Steps whose checkbox is ticked
    pub completed: usize,

    /// Steps still open
    pub pending: usize,

    /// Id of the first open step in document order
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_step: Option<u64>,
}

impl PlanProgress {
    /// Summarise a list of steps.
    pub fn from_steps(steps: &[ImplementationStep]) -> Self {
        steps.iter().collect()
    }

    /// True when there is at least one step and every step is ticked.
    pub fn is_complete(&self) -> bool {
        self.total > 0 && self.pending == 0
    }
}

impl<'a> FromIterator<&'a ImplementationStep> for PlanProgress {
    fn from_iter<I: IntoIterator<Item = &'a ImplementationStep>>(iter: I) -> Self {
        let mut progress = PlanProgress::default();
        for step in iter {
            progress.total += 1;
            if step.completed {
                progress.completed += 1;
            } else {
                progress.pending += 1;
                if progress.next_step.is_none() {
                    progress.next_step = Some(step.id);
                }
            }
        }
        progress
    }
}
