//! Lazy step extraction.

use std::iter::{FusedIterator, Peekable};

use super::header::{headers, Headers};
use crate::models::ImplementationStep;

/// Lazy, restartable sequence of the steps in a plan.
///
/// Steps are produced in header order. Cloning the iterator (or calling
/// [`parse_steps`] again) starts an independent pass over the same text.
#[derive(Debug, Clone)]
pub struct StepIter<'a> {
    plan: &'a str,
    headers: Peekable<Headers<'a>>,
}

impl Iterator for StepIter<'_> {
    type Item = ImplementationStep;

    fn next(&mut self) -> Option<Self::Item> {
        let header = self.headers.next()?;
        let details_end = self
            .headers
            .peek()
            .map_or(self.plan.len(), |next| next.line.start);

        Some(ImplementationStep {
            id: header.number,
            title: header.title().to_string(),
            details: self.plan[header.line.end..details_end].trim().to_string(),
            completed: header.completed,
        })
    }
}

impl FusedIterator for StepIter<'_> {}

/// Parse the steps of a plan in document order.
///
/// Returns an empty sequence when the plan has no step headers.
///
/// ```rust
/// use planmark_core::parse_steps;
///
/// let plan = "- [ ] **Step 5: Title Here**\n  detail line\n";
/// let steps: Vec<_> = parse_steps(plan).collect();
///
/// assert_eq!(steps.len(), 1);
/// assert_eq!(steps[0].id, 5);
/// assert_eq!(steps[0].title, "Title Here");
/// assert_eq!(steps[0].details, "detail line");
/// ```
pub fn parse_steps(plan: &str) -> StepIter<'_> {
    StepIter {
        plan,
        headers: headers(plan).peekable(),
    }
}
