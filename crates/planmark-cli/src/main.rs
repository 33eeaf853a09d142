//! Planmark CLI Application
//!
//! Command-line interface for inspecting and editing Markdown implementation
//! plans.

mod args;
mod cli;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands, ListArgs};
use clap::Parser;
use cli::Cli;
use log::info;
use planmark_core::PlanStoreBuilder;
use renderer::TerminalRenderer;
use Commands::*;

fn main() -> Result<()> {
    env_logger::init();

    let Args {
        plan_file,
        no_color,
        json,
        command,
    } = Args::parse();

    let store = PlanStoreBuilder::new()
        .with_plan_path(plan_file)
        .build()
        .context("Failed to initialize plan store")?;

    info!("Planmark started with plan {}", store.path().display());

    let cli = Cli::new(store, TerminalRenderer::new(!no_color), json);

    match command {
        Some(List(args)) => cli.list(&args),
        Some(Show(args)) => cli.show(&args),
        Some(Details(args)) => cli.details(&args),
        Some(Complete(args)) => cli.complete(&args),
        Some(Reopen(args)) => cli.reopen(&args),
        Some(Delete(args)) => cli.delete(&args),
        Some(Progress) => cli.progress(),
        Some(Next) => cli.next(),
        Some(Schema) => cli.schema(),
        None => cli.list(&ListArgs::default()),
    }
}
