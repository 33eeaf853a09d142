//! Detail-block lookup for a single step.
//!
//! Lookup runs in two independent passes. The primary pass walks recognised
//! step headers and bounds the details at the next header. Only when no
//! header carries the requested id does the fallback pass run. It looks for a
//! checkbox bullet that mentions `Step <id>:` anywhere on the line, such as a
//! header whose title refers to an earlier step, and stops at the first later
//! checkbox bullet that mentions `Step <id + 1>:`. Prose never starts or ends
//! a fallback block.

use std::sync::LazyLock;

use log::debug;
use regex::Regex;

use super::steps::parse_steps;

static CHECKBOX_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[ \t]*-[ \t]*\[[xX ]\]").expect("checkbox pattern must compile")
});

static STEP_LABEL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Step ([0-9]+):").expect("step label pattern must compile"));

/// Details of the first step whose id is `step_id`, or an empty string.
///
/// ```rust
/// use planmark_core::step_details;
///
/// let plan = "- [ ] Step 3: Follow up on Step 1: setup\n  - run cargo new\n- [ ] Step 2: Build\n";
/// assert_eq!(step_details(plan, 3), "- run cargo new");
/// // No header is numbered 1, so the block under the bullet mentioning it is used.
/// assert_eq!(step_details(plan, 1), "- run cargo new");
/// assert_eq!(step_details(plan, 9), "");
/// ```
pub fn step_details(plan: &str, step_id: u64) -> String {
    primary_details(plan, step_id)
        .or_else(|| {
            debug!("no header for step {step_id}, trying positional fallback");
            fallback_details(plan, step_id)
        })
        .unwrap_or_default()
}

fn primary_details(plan: &str, step_id: u64) -> Option<String> {
    parse_steps(plan)
        .find(|step| step.id == step_id)
        .map(|step| step.details)
}

fn fallback_details(plan: &str, step_id: u64) -> Option<String> {
    let next_id = step_id.checked_add(1);
    let mut offset = 0;
    let mut start = None;

    for line in plan.split_inclusive('\n') {
        let line_start = offset;
        offset += line.len();

        match start {
            None if bullet_mentions_step(line, step_id) => start = Some(offset),
            Some(begin) if next_id.is_some_and(|next| bullet_mentions_step(line, next)) => {
                return Some(plan[begin..line_start].trim().to_string());
            }
            _ => {}
        }
    }

    start.map(|begin| plan[begin..].trim().to_string())
}

fn bullet_mentions_step(line: &str, step_id: u64) -> bool {
    CHECKBOX_RE
        .find(line)
        .is_some_and(|checkbox| mentions_step(&line[checkbox.end()..], step_id))
}

fn mentions_step(line: &str, step_id: u64) -> bool {
    STEP_LABEL_RE
        .captures_iter(line)
        .any(|caps| caps[1].parse::<u64>().ok() == Some(step_id))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_recovers_step_named_inside_another_header() {
        let plan = "\
- [ ] Step 0: Intro
- [ ] **Step 3: Wire after Step 1: setup**
  - wiring
- [ ] Step 2: Second
  - b
";
        assert_eq!(fallback_details(plan, 1).as_deref(), Some("- wiring"));
        assert_eq!(step_details(plan, 1), "- wiring");
    }

    #[test]
    fn test_fallback_ignores_prose_and_headings() {
        let plan = "\
Note: Step 4: will come later
More prose here.

## Step 5: Heading style
- install deps

- [ ] Step 1: A
  - body a
- [ ] Step 2: B
  - body b
";
        assert_eq!(fallback_details(plan, 4), None);
        assert_eq!(fallback_details(plan, 5), None);
        assert_eq!(step_details(plan, 4), "");
        assert_eq!(step_details(plan, 5), "");
    }

    #[test]
    fn test_fallback_skips_non_consecutive_labels() {
        // Only a checkbox bullet naming `Step id+1:` ends the block.
        let plan = "\
- [ ] Step 1: a
see Step 2: in prose
- [ ] Step 3: later
- [ ] Step 2: b
";
        assert_eq!(
            fallback_details(plan, 1).as_deref(),
            Some("see Step 2: in prose\n- [ ] Step 3: later")
        );
    }

    #[test]
    fn test_fallback_runs_to_end_at_max_id() {
        let plan = format!("- [ ] Step {}: last\ntail\n", u64::MAX);
        assert_eq!(fallback_details(&plan, u64::MAX).as_deref(), Some("tail"));
    }

    #[test]
    fn test_bullet_mentions_step_requires_checkbox() {
        assert!(bullet_mentions_step("  - [x] **Step 2: after Step 1: x**\n", 1));
        assert!(!bullet_mentions_step("- Step 1: no checkbox\n", 1));
        assert!(!bullet_mentions_step("Step 1: prose\n", 1));
    }

    #[test]
    fn test_mentions_step_normalises_zeros() {
        assert!(mentions_step("Step 007: x", 7));
        assert!(!mentions_step("Step 17: x", 7));
        assert!(!mentions_step("Step 7 without colon", 7));
    }

    #[test]
    fn test_primary_wins_over_fallback() {
        let plan = "Step 1: mentioned in prose\n- [ ] Step 1: Real\nreal details\n";
        assert_eq!(step_details(plan, 1), "real details");
    }
}
