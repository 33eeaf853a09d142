//! Store operations that load the plan, apply a parser function, and persist
//! the result.

use std::fs;

use log::{debug, info};

use super::PlanStore;
use crate::{
    display::{DeleteResult, Steps, UpdateResult},
    error::{FsResultExt, Result},
    models::{ImplementationStep, PlanProgress},
    parser,
};

impl PlanStore {
    /// Read the plan text.
    ///
    /// # Errors
    ///
    /// Returns `PlanError::FileSystem` if the file cannot be read.
    pub fn load(&self) -> Result<String> {
        debug!("loading plan from {}", self.path.display());
        fs::read_to_string(&self.path).fs_context(&self.path)
    }

    /// Overwrite the plan text.
    ///
    /// # Errors
    ///
    /// Returns `PlanError::FileSystem` if the file cannot be written.
    pub fn save(&self, plan: &str) -> Result<()> {
        info!("writing plan to {}", self.path.display());
        fs::write(&self.path, plan).fs_context(&self.path)
    }

    /// All steps of the plan in document order.
    pub fn steps(&self) -> Result<Steps> {
        let plan = self.load()?;
        Ok(parser::parse_steps(&plan).collect())
    }

    /// The first step numbered `step_id`, if any.
    pub fn step(&self, step_id: u64) -> Result<Option<ImplementationStep>> {
        let plan = self.load()?;
        Ok(parser::find_step(&plan, step_id))
    }

    /// Details of step `step_id`; empty when the step is unknown.
    pub fn details(&self, step_id: u64) -> Result<String> {
        let plan = self.load()?;
        Ok(parser::step_details(&plan, step_id))
    }

    /// First step that is not yet complete.
    pub fn next_step(&self) -> Result<Option<ImplementationStep>> {
        let plan = self.load()?;
        Ok(parser::next_step(&plan))
    }

    /// Completion counts for the plan.
    pub fn progress(&self) -> Result<PlanProgress> {
        let plan = self.load()?;
        Ok(parser::plan_progress(&plan))
    }

    /// Tick step `step_id`.
    ///
    /// Returns `None` when no header carries that id; the file is then left
    /// untouched.
    pub fn complete_step(&self, step_id: u64) -> Result<Option<UpdateResult<ImplementationStep>>> {
        self.update_marker(step_id, parser::mark_step_complete, "Marked step as complete")
    }

    /// Clear the checkbox of step `step_id`.
    pub fn reopen_step(&self, step_id: u64) -> Result<Option<UpdateResult<ImplementationStep>>> {
        self.update_marker(step_id, parser::mark_step_incomplete, "Marked step as incomplete")
    }

    /// Remove the header line of step `step_id`, keeping its details.
    pub fn delete_step(&self, step_id: u64) -> Result<Option<DeleteResult<ImplementationStep>>> {
        self.remove(step_id, false)
    }

    /// Remove step `step_id` together with its details.
    pub fn delete_step_with_details(
        &self,
        step_id: u64,
    ) -> Result<Option<DeleteResult<ImplementationStep>>> {
        self.remove(step_id, true)
    }

    fn update_marker(
        &self,
        step_id: u64,
        edit: fn(&str, u64) -> String,
        change: &str,
    ) -> Result<Option<UpdateResult<ImplementationStep>>> {
        let plan = self.load()?;
        if parser::find_step(&plan, step_id).is_none() {
            return Ok(None);
        }

        let updated = edit(&plan, step_id);
        let Some(step) = parser::find_step(&updated, step_id) else {
            return Ok(None);
        };

        if updated != plan {
            self.save(&updated)?;
        }

        // Rewriting `[x]` as `[X]` normalises the marker without changing state.
        if completion_states(&updated, step_id) == completion_states(&plan, step_id) {
            return Ok(Some(UpdateResult::new(step)));
        }
        Ok(Some(UpdateResult::with_changes(step, vec![change.to_string()])))
    }

    fn remove(
        &self,
        step_id: u64,
        with_details: bool,
    ) -> Result<Option<DeleteResult<ImplementationStep>>> {
        let plan = self.load()?;
        let Some(step) = parser::find_step(&plan, step_id) else {
            return Ok(None);
        };

        let updated = if with_details {
            parser::delete_step_with_details(&plan, step_id)
        } else {
            parser::delete_step(&plan, step_id)
        };
        self.save(&updated)?;

        Ok(Some(DeleteResult::new(step, with_details)))
    }
}

fn completion_states(plan: &str, step_id: u64) -> Vec<bool> {
    parser::parse_steps(plan)
        .filter(|step| step.id == step_id)
        .map(|step| step.completed)
        .collect()
}
