//! In-place rewrites of plan text.
//!
//! Every edit copies the plan through untouched except for the exact byte
//! spans it targets. An id that matches no header returns the input as is.

use std::ops::Range;

use log::debug;

use super::header::headers;

/// Tick the checkbox of every header numbered `step_id`.
///
/// Only the marker character changes; prefix, title and the rest of the
/// document are copied byte for byte. Applying it twice is the same as once.
///
/// ```rust
/// use planmark_core::mark_step_complete;
///
/// let plan = "- [ ] Step 1: A\n- [ ] Step 2: B\n";
/// assert_eq!(mark_step_complete(plan, 2), "- [ ] Step 1: A\n- [X] Step 2: B\n");
/// ```
pub fn mark_step_complete(plan: &str, step_id: u64) -> String {
    set_marker(plan, step_id, 'X')
}

/// Clear the checkbox of every header numbered `step_id`.
pub fn mark_step_incomplete(plan: &str, step_id: u64) -> String {
    set_marker(plan, step_id, ' ')
}

/// Remove the header line of every step numbered `step_id`.
///
/// The detail block below a removed header stays in place and ends up under
/// whichever header now precedes it. Use [`delete_step_with_details`] to drop
/// the block as well.
pub fn delete_step(plan: &str, step_id: u64) -> String {
    let spans = headers(plan)
        .filter(|header| header.number == step_id)
        .map(|header| header.line);
    remove_spans(plan, spans, step_id)
}

/// Remove every step numbered `step_id` together with its detail block.
///
/// A step's block runs from its header line up to the next recognised header
/// or the end of the plan.
pub fn delete_step_with_details(plan: &str, step_id: u64) -> String {
    let mut all = headers(plan).peekable();
    let mut spans = Vec::new();

    while let Some(header) = all.next() {
        if header.number == step_id {
            let end = all.peek().map_or(plan.len(), |next| next.line.start);
            spans.push(header.line.start..end);
        }
    }

    remove_spans(plan, spans, step_id)
}

fn set_marker(plan: &str, step_id: u64, marker: char) -> String {
    let mut output = String::with_capacity(plan.len());
    let mut copied = 0;
    let mut matched = false;

    for header in headers(plan).filter(|header| header.number == step_id) {
        output.push_str(&plan[copied..header.marker]);
        output.push(marker);
        // Markers are single ASCII bytes.
        copied = header.marker + 1;
        matched = true;
    }

    if !matched {
        debug!("step {step_id} not found, plan left unchanged");
        return plan.to_string();
    }

    output.push_str(&plan[copied..]);
    output
}

fn remove_spans<I>(plan: &str, spans: I, step_id: u64) -> String
where
    I: IntoIterator<Item = Range<usize>>,
{
    let mut output = String::with_capacity(plan.len());
    let mut copied = 0;

    for span in spans {
        output.push_str(&plan[copied..span.start]);
        copied = span.end;
    }

    if copied == 0 {
        debug!("step {step_id} not found, plan left unchanged");
        return plan.to_string();
    }

    output.push_str(&plan[copied..]);
    output
}
