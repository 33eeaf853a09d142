//! Parameter types shared by the interfaces built on this crate.
//!
//! Step ids are plain `u64` inside the library, so negative or fractional
//! ids cannot reach the parser. Ids that arrive as text (command-line
//! arguments, request bodies) go through [`StepId`], which rejects anything
//! that is not a non-negative base-10 integer.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::PlanError;

/// Validated step number.
///
/// ```rust
/// use planmark_core::params::StepId;
///
/// let id: StepId = "007".parse().unwrap();
/// assert_eq!(id.get(), 7);
/// assert!("-3".parse::<StepId>().is_err());
/// assert!("2.5".parse::<StepId>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StepId(u64);

impl StepId {
    /// The numeric id.
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for StepId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for StepId {
    type Err = PlanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(PlanError::invalid_input("step id").with_reason("must not be empty"));
        }
        if !trimmed.bytes().all(|b| b.is_ascii_digit()) {
            return Err(PlanError::invalid_input("step id")
                .with_reason(format!("expected a non-negative integer, got '{trimmed}'")));
        }

        trimmed.parse::<u64>().map(Self).map_err(|e| {
            PlanError::invalid_input("step id").with_reason(format!("'{trimmed}' is out of range: {e}"))
        })
    }
}
