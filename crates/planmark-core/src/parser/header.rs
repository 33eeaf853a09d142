//! Step-header recognition.
//!
//! A header is a single checkbox bullet line that mentions `Step <N>: <title>`
//! somewhere after the checkbox. Anything between the closing bracket and the
//! `Step` keyword (bold markers, annotations) is kept as the prefix.

use std::{ops::Range, sync::LazyLock};

use regex::{Captures, Regex};

/// Matches one header line, including its terminating newline when present.
///
/// Leading indentation is restricted to spaces and tabs so a match never
/// reaches back into the previous line. The colon must be followed by a space
/// and a title with at least one visible character.
static HEADER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?m)^[ \t]*-[ \t]*\[(?P<mark>[xX ])\](?P<prefix>[^\n]*?)Step (?P<number>[0-9]+): (?P<title>[^\n]*\S[^\n]*)(?:\n|\z)",
    )
    .expect("step header pattern must compile")
});

/// A recognised step header and the byte spans it occupies in the plan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepHeader<'a> {
    /// Step number with leading zeros normalised away
    pub number: u64,

    /// Whether the checkbox holds `x` or `X`
    pub completed: bool,

    /// Text between the checkbox and the `Step` keyword, verbatim
    pub prefix: &'a str,

    /// Text after `: ` up to the end of the line, untrimmed
    pub raw_title: &'a str,

    /// Whole header line, including the trailing newline if there is one
    pub line: Range<usize>,

    /// Byte offset of the checkbox marker character
    pub marker: usize,
}

impl<'a> StepHeader<'a> {
    fn from_captures(caps: &Captures<'a>) -> Option<Self> {
        let line = caps.get(0)?;
        let mark = caps.name("mark")?;
        let number = caps.name("number")?.as_str().parse::<u64>().ok()?;

        Some(Self {
            number,
            completed: mark.as_str().eq_ignore_ascii_case("x"),
            prefix: caps.name("prefix")?.as_str(),
            raw_title: caps.name("title")?.as_str(),
            line: line.range(),
            marker: mark.start(),
        })
    }

    /// The title as reported to callers.
    ///
    /// Surrounding whitespace is trimmed, and when the prefix opened a bold
    /// span right before `Step`, the matching closing `**` is dropped.
    pub fn title(&self) -> &'a str {
        let title = self.raw_title.trim();
        if self.prefix.trim_end().ends_with("**") {
            title.strip_suffix("**").map_or(title, str::trim_end)
        } else {
            title
        }
    }
}

/// Iterator over the step headers of a plan, in document order.
///
/// Each iterator keeps its own scan position, so independent iterators over
/// the same text never interfere.
#[derive(Debug, Clone)]
pub struct Headers<'a> {
    plan: &'a str,
    cursor: usize,
}

impl<'a> Iterator for Headers<'a> {
    type Item = StepHeader<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if self.cursor >= self.plan.len() {
                return None;
            }
            let caps = HEADER_RE.captures_at(self.plan, self.cursor)?;
            let whole = caps.get(0)?;
            self.cursor = whole.end();

            // A step number too large for u64 leaves the line as body text.
            if let Some(header) = StepHeader::from_captures(&caps) {
                return Some(header);
            }
        }
    }
}

/// Scan `plan` for step headers.
pub fn headers(plan: &str) -> Headers<'_> {
    Headers { plan, cursor: 0 }
}
