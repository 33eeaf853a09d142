//! Command handlers for the CLI.
//!
//! Each handler calls one store operation and prints the outcome, either as
//! markdown through the terminal renderer or as JSON with `--json`. Asking
//! for a step that is not in the plan is not an error: the plan is left
//! as it was and a notice is printed.

use anyhow::{Context, Result};
use log::debug;
use planmark_core::{display::OperationStatus, ImplementationStep, PlanStore, StepId};
use serde::Serialize;
use serde_json::json;

use crate::{
    args::{DeleteArgs, ListArgs, ShowArgs, StepArgs},
    renderer::TerminalRenderer,
};

pub struct Cli {
    store: PlanStore,
    renderer: TerminalRenderer,
    json: bool,
}

impl Cli {
    pub fn new(store: PlanStore, renderer: TerminalRenderer, json: bool) -> Self {
        Self {
            store,
            renderer,
            json,
        }
    }

    pub fn list(&self, args: &ListArgs) -> Result<()> {
        let steps = self.store.steps().context("Failed to read steps")?;
        if self.json {
            return print_json(&steps.0);
        }

        if args.full {
            self.renderer.render(&steps.to_string());
        } else {
            self.renderer.render(&steps.checklist().to_string());
        }
        Ok(())
    }

    pub fn show(&self, args: &ShowArgs) -> Result<()> {
        match self.store.step(args.id.get()).context("Failed to read step")? {
            Some(step) if self.json => print_json(&step),
            Some(step) if args.plain => {
                println!("{}", step.clipboard_text());
                Ok(())
            }
            Some(step) => {
                self.renderer.render(&step.to_string());
                Ok(())
            }
            None => self.not_found(args.id),
        }
    }

    pub fn details(&self, args: &StepArgs) -> Result<()> {
        let details = self
            .store
            .details(args.id.get())
            .context("Failed to read step details")?;

        // The fallback can find details for an id with no header of its own.
        let missing = details.is_empty()
            && self
                .store
                .step(args.id.get())
                .context("Failed to read step")?
                .is_none();
        if missing {
            return self.not_found(args.id);
        }
        if self.json {
            return print_json(&json!({ "id": args.id, "details": details }));
        }
        if !details.is_empty() {
            self.renderer.render(&format!("{details}\n"));
        }
        Ok(())
    }

    pub fn complete(&self, args: &StepArgs) -> Result<()> {
        match self
            .store
            .complete_step(args.id.get())
            .context("Failed to complete step")?
        {
            Some(result) if self.json => print_json(&result),
            Some(result) => {
                self.renderer.render(&result.to_string());
                Ok(())
            }
            None => self.not_found(args.id),
        }
    }

    pub fn reopen(&self, args: &StepArgs) -> Result<()> {
        match self
            .store
            .reopen_step(args.id.get())
            .context("Failed to reopen step")?
        {
            Some(result) if self.json => print_json(&result),
            Some(result) => {
                self.renderer.render(&result.to_string());
                Ok(())
            }
            None => self.not_found(args.id),
        }
    }

    pub fn delete(&self, args: &DeleteArgs) -> Result<()> {
        let removed = if args.with_details {
            self.store.delete_step_with_details(args.id.get())
        } else {
            self.store.delete_step(args.id.get())
        };

        match removed.context("Failed to delete step")? {
            Some(result) if self.json => print_json(&result),
            Some(result) => {
                self.renderer.render(&result.to_string());
                Ok(())
            }
            None => self.not_found(args.id),
        }
    }

    pub fn progress(&self) -> Result<()> {
        let progress = self.store.progress().context("Failed to read progress")?;
        if self.json {
            return print_json(&progress);
        }
        self.renderer.render(&progress.to_string());
        Ok(())
    }

    pub fn next(&self) -> Result<()> {
        match self.store.next_step().context("Failed to read next step")? {
            Some(step) if self.json => print_json(&step),
            Some(step) => {
                self.renderer.render(&step.to_string());
                Ok(())
            }
            None if self.json => print_json(&serde_json::Value::Null),
            None => {
                self.renderer
                    .render(&OperationStatus::success("All steps are complete").to_string());
                Ok(())
            }
        }
    }

    pub fn schema(&self) -> Result<()> {
        print_json(&schemars::schema_for!(ImplementationStep))
    }

    fn not_found(&self, id: StepId) -> Result<()> {
        debug!("step {id} not found in {}", self.store.path().display());
        if self.json {
            return print_json(&serde_json::Value::Null);
        }
        self.renderer
            .render(&OperationStatus::failure(format!("Step {id} not found")).to_string());
        Ok(())
    }
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    let output = serde_json::to_string_pretty(value).context("Failed to serialize output")?;
    println!("{output}");
    Ok(())
}
