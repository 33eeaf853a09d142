//! File-backed access to a single plan document.
//!
//! [`PlanStore`] is the thin persistence layer around the pure functions in
//! [`crate::parser`]: it reads the plan file, applies one operation, and
//! writes the result back only when the text actually changed.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │    Handlers     │    │     Parser      │    │    Plan file    │
//! │ (complete_step, │───▶│ (pure &str →    │───▶│  (read/write    │
//! │  delete_step)   │    │  String ops)    │    │   via std::fs)  │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! # Usage Examples
//!
//! ```rust,no_run
//! use planmark_core::PlanStoreBuilder;
//!
//! # fn example() -> planmark_core::Result<()> {
//! let store = PlanStoreBuilder::new()
//!     .with_plan_path(Some("docs/implementation-plan.md"))
//!     .build()?;
//!
//! if let Some(result) = store.complete_step(3)? {
//!     println!("{result}");
//! }
//! println!("{}", store.progress()?);
//! # Ok(())
//! # }
//! ```

use std::path::{Path, PathBuf};

pub mod builder;
mod handlers;


pub use builder::PlanStoreBuilder;

/// Handle to a plan file on disk.
#[derive(Debug, Clone)]
pub struct PlanStore {
    path: PathBuf,
}

impl PlanStore {
    /// Creates a store for the plan at `path`.
    pub(crate) fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Location of the plan file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}
