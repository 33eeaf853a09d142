//! Core library for the Planmark plan tool.
//!
//! Planmark reads loosely structured Markdown implementation plans, the kind
//! a language model writes, and turns their checkbox step headers into
//! addressable records. It can also tick, untick, or remove a step while
//! leaving every other byte of the document as it was.
//!
//! # Architecture
//!
//! - **Parser** ([`parser`]): pure functions from plan text to steps or to a
//!   new plan text. No I/O, no shared state.
//! - **Models** ([`models`]): the [`ImplementationStep`] record and the
//!   [`PlanProgress`] summary.
//! - **Display** ([`display`]): markdown formatting for the CLI renderer.
//! - **Store** ([`store`]): file-backed handlers for applications that keep
//!   the plan on disk.
//!
//! # Quick Start
//!
//! ```rust
//! use planmark_core::{mark_step_complete, parse_steps, step_details};
//!
//! let plan = "\
//! - [ ] Step 1: A
//!   - detail a
//! - [x] Step 2: B
//!   - detail b
//! ";
//!
//! for step in parse_steps(plan) {
//!     println!("{} {}", step.id, step.title);
//! }
//!
//! assert_eq!(step_details(plan, 1), "- detail a");
//!
//! let updated = mark_step_complete(plan, 1);
//! assert!(updated.starts_with("- [X] Step 1: A\n"));
//! ```

pub mod display;
pub mod error;
pub mod models;
pub mod params;
pub mod parser;
pub mod store;

// Re-export commonly used types
pub use display::{DeleteResult, OperationStatus, Steps, UpdateResult};
pub use error::{PlanError, Result};
pub use models::{ImplementationStep, PlanProgress};
pub use params::StepId;
pub use parser::{
    delete_step, delete_step_with_details, find_step, mark_step_complete, mark_step_incomplete,
    next_step, parse_steps, plan_progress, step_details,
};
pub use store::{PlanStore, PlanStoreBuilder};
