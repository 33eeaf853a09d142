//! Builder for creating and configuring PlanStore instances.

use std::path::{Path, PathBuf};

use super::PlanStore;
use crate::error::{PlanError, Result};

/// Builder for creating and configuring PlanStore instances.
#[derive(Debug, Clone, Default)]
pub struct PlanStoreBuilder {
    plan_path: Option<PathBuf>,
}

impl PlanStoreBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self { plan_path: None }
    }

    /// Sets a custom plan file path.
    ///
    /// If not specified, uses XDG Base Directory specification:
    /// `$XDG_DATA_HOME/planmark/plan.md` or `~/.local/share/planmark/plan.md`
    pub fn with_plan_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.plan_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Builds the configured store.
    ///
    /// The plan file itself is not touched; it only has to exist once a
    /// handler reads it.
    ///
    /// # Errors
    ///
    /// Returns `PlanError::XdgDirectory` if no path was given and the default
    /// data directory cannot be created.
    pub fn build(self) -> Result<PlanStore> {
        let path = match self.plan_path {
            Some(path) => path,
            None => Self::default_plan_path()?,
        };

        Ok(PlanStore::new(path))
    }

    /// Returns the default plan path following XDG Base Directory
    /// specification.
    fn default_plan_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("planmark")
            .place_data_file("plan.md")
            .map_err(|e| PlanError::XdgDirectory(e.to_string()))
    }
}
