//! Data models for parsed plans.
//!
//! The models here are plain value types produced by [`crate::parser`]. Their
//! markdown `Display` implementations live in [`crate::display`] so that the
//! data structures stay independent of presentation.
//!
//! # Examples
//!
//! ```rust
//! use planmark_core::models::{ImplementationStep, PlanProgress};
//!
//! let steps = vec![
//!     ImplementationStep {
//!         id: 1,
//!         title: "Set up project".to_string(),
//!         details: "- Task: run cargo new".to_string(),
//!         completed: true,
//!     },
//!     ImplementationStep {
//!         id: 2,
//!         title: "Add schema".to_string(),
//!         details: String::new(),
//!         completed: false,
//!     },
//! ];
//!
//! let progress = PlanProgress::from_steps(&steps);
//! assert_eq!(progress.completed, 1);
//! assert_eq!(progress.next_step, Some(2));
//! ```

pub mod progress;
pub mod step;


pub use progress::PlanProgress;
pub use step::ImplementationStep;
