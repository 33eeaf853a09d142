use std::path::PathBuf;

use clap::{Args as ClapArgs, Parser, Subcommand};
use planmark_core::StepId;

/// Inspect and edit Markdown implementation plans
///
/// Planmark reads a plan document made of checkbox step headers such as
/// `- [ ] Step 3: Add the schema`, lists its steps, prints their details, and
/// ticks or removes steps in place without touching the rest of the file.
#[derive(Parser)]
#[command(version, about, name = "planmark")]
pub struct Args {
    /// Path to the plan file. Defaults to $XDG_DATA_HOME/planmark/plan.md
    #[arg(long, global = true)]
    pub plan_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Print results as JSON instead of markdown
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the Planmark CLI
#[derive(Subcommand)]
pub enum Commands {
    /// List all steps as a checklist
    #[command(aliases = ["l", "ls"])]
    List(ListArgs),
    /// Show a single step with its details
    #[command(alias = "s")]
    Show(ShowArgs),
    /// Print only the details block of a step
    #[command(alias = "d")]
    Details(StepArgs),
    /// Mark a step as complete
    #[command(alias = "c")]
    Complete(StepArgs),
    /// Mark a step as not complete
    #[command(alias = "r")]
    Reopen(StepArgs),
    /// Remove a step header from the plan
    #[command(alias = "rm")]
    Delete(DeleteArgs),
    /// Show completion progress
    #[command(alias = "p")]
    Progress,
    /// Show the first step that is not complete
    #[command(alias = "n")]
    Next,
    /// Print the JSON schema of a step record
    Schema,
}

/// List steps in the plan
#[derive(ClapArgs, Default)]
pub struct ListArgs {
    /// Include each step's details
    #[arg(long)]
    pub full: bool,
}

/// Select a step by its number
#[derive(ClapArgs)]
pub struct StepArgs {
    /// Step number as written in the plan (`Step 3` → 3)
    #[arg(help = "Step number as written in the plan header")]
    pub id: StepId,
}

/// Show a single step
#[derive(ClapArgs)]
pub struct ShowArgs {
    #[arg(help = "Step number as written in the plan header")]
    pub id: StepId,
    /// Print the step as plain text (`[id] title` and details) for pasting elsewhere
    #[arg(long)]
    pub plain: bool,
}

/// Remove a step from the plan
///
/// By default only the header line is removed and the step's details stay in
/// place, ending up under the preceding step. Pass --with-details to remove
/// the details block as well.
#[derive(ClapArgs)]
pub struct DeleteArgs {
    #[arg(help = "Step number as written in the plan header")]
    pub id: StepId,
    /// Also remove the step's details block
    #[arg(long)]
    pub with_details: bool,
}
