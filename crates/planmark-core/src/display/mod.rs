//! Display formatting functions and result types.
//!
//! Domain models implement [`std::fmt::Display`] directly (see [`models`]);
//! the wrappers here add context such as collection handling and edit
//! outcomes. Everything formats as markdown for the terminal renderer.
//!
//! ## Module Organization
//!
//! - [`collections`]: collection wrapper ([`Steps`]) and its checklist view
//! - [`results`]: edit outcomes ([`UpdateResult`], [`DeleteResult`])
//! - [`status`]: one-line confirmations ([`OperationStatus`])
//! - [`models`]: Display implementations for domain models
//!
//! ## Usage Examples
//!
//! ```rust
//! use planmark_core::display::OperationStatus;
//!
//! let status = OperationStatus::failure("Step 7 not found");
//! assert_eq!(format!("{}", status), "Error: Step 7 not found\n");
//! ```

pub mod collections;
pub mod models;
pub mod results;
pub mod status;

pub use collections::{Checklist, Steps};
pub use results::{DeleteResult, UpdateResult};
pub use status::OperationStatus;
