//! Parsing and editing of checkbox-style implementation plans.
//!
//! A plan is a Markdown document in which each step is a checkbox bullet
//! naming `Step <N>: <title>`, followed by free-form details:
//!
//! ```text
//! - [ ] Step 3: Implement Create/Fetch in Server Actions
//!   - Task:
//!     1. ...
//!   - Files:
//!     - ...
//! - [x] **Step 4: Add Tables for X & Y**
//!   ...
//! ```
//!
//! All functions here are pure: they take the plan text, hold no state
//! between calls, and either return data or a new string. Input that does
//! not look like a plan is never an error. Missing steps come back as an
//! empty sequence, an empty string, or the unchanged input.
//!
//! ## Submodules
//!
//! - [`header`]: recognition of step header lines
//! - [`steps`]: lazy extraction of [`ImplementationStep`] records
//! - [`details`]: detail lookup with a positional fallback
//! - [`edit`]: completion toggles and step removal
//!
//! # Examples
//!
//! ```rust
//! use planmark_core::parser::{delete_step, mark_step_complete, parse_steps, step_details};
//!
//! let plan = "\
//! Implementation plan
//!
//! - [ ] Step 1: Setup
//!   - run cargo new
//! - [ ] Step 2: Schema
//!   - add tables
//! ";
//!
//! let titles: Vec<String> = parse_steps(plan).map(|s| s.title).collect();
//! assert_eq!(titles, ["Setup", "Schema"]);
//! assert_eq!(step_details(plan, 2), "- add tables");
//!
//! let done = mark_step_complete(plan, 1);
//! assert!(done.contains("- [X] Step 1: Setup"));
//!
//! let trimmed = delete_step(&done, 2);
//! assert!(!trimmed.contains("Step 2"));
//! assert!(trimmed.contains("- add tables"));
//! ```

pub mod details;
pub mod edit;
pub mod header;
pub mod steps;


pub use details::step_details;
pub use edit::{delete_step, delete_step_with_details, mark_step_complete, mark_step_incomplete};
pub use header::{headers, Headers, StepHeader};
pub use steps::{parse_steps, StepIter};

use crate::models::{ImplementationStep, PlanProgress};

/// First step numbered `step_id`, in document order.
pub fn find_step(plan: &str, step_id: u64) -> Option<ImplementationStep> {
    parse_steps(plan).find(|step| step.id == step_id)
}

/// First step whose checkbox is still open.
pub fn next_step(plan: &str) -> Option<ImplementationStep> {
    parse_steps(plan).find(|step| !step.completed)
}

/// Completion counts for all steps of the plan.
pub fn plan_progress(plan: &str) -> PlanProgress {
    let steps: Vec<_> = parse_steps(plan).collect();
    PlanProgress::from_steps(&steps)
}
