use std::path::PathBuf;

use planmark_core::{PlanStore, PlanStoreBuilder};
use tempfile::TempDir;

/// Plan used across integration tests, shaped like model output.
pub const SAMPLE_PLAN: &str = "\
# Implementation Plan

## 1. Setup

- [ ] **Step 1: Establish Core Structure & Environment**
  - **Task**:
    1. Confirm the project structure.
  - **Step Dependencies**: None

## 2. Schema

- [x] **Step 2: Add Tables for `daily_compilations`**
  - **Task**:
    1. Add the table.
  - **Step Dependencies**: **Step 1**

- [ ] Step 3: Implement Create/Fetch in Server Actions
  - Task:
    1. Implement the actions.
  - Files:
    - `lib/actions/daily-compilations.ts`
";

/// Helper function to create a store over a temporary copy of `contents`
pub fn create_test_store(contents: &str) -> (TempDir, PathBuf, PlanStore) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let plan_path = temp_dir.path().join("plan.md");
    std::fs::write(&plan_path, contents).expect("Failed to write plan");
    let store = PlanStoreBuilder::new()
        .with_plan_path(Some(&plan_path))
        .build()
        .expect("Failed to create store");
    (temp_dir, plan_path, store)
}
