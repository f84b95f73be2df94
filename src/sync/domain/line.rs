//! Line classification for card description bodies.
//!
//! Reconciliation treats a description as a sequence of lines and needs to
//! know, per line, whether it renders a task or is untouchable prose. The
//! classifier here is deliberately explicit rather than regex-driven so
//! each rule is independently testable.

use crate::plan::domain::TaskStatus;

/// Status glyph rendered in front of a task line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusGlyph {
    /// `📋`, queued work.
    Pending,
    /// `⚙️`, work underway.
    InProgress,
    /// `✅`, finished work.
    Completed,
}

impl StatusGlyph {
    /// Returns the glyph rendering a task status.
    #[must_use]
    pub const fn of(status: TaskStatus) -> Self {
        match status {
            TaskStatus::Pending => Self::Pending,
            TaskStatus::InProgress => Self::InProgress,
            TaskStatus::Completed => Self::Completed,
        }
    }

    /// Returns the glyph as rendered in descriptions.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "📋",
            Self::InProgress => "⚙️",
            Self::Completed => "✅",
        }
    }
}

/// Recognized glyph spellings. The gear is listed with its variant
/// selector first so the selector is consumed together with the base
/// character.
const GLYPH_SPELLINGS: [(&str, StatusGlyph); 4] = [
    ("✅", StatusGlyph::Completed),
    ("⚙\u{fe0f}", StatusGlyph::InProgress),
    ("⚙", StatusGlyph::InProgress),
    ("📋", StatusGlyph::Pending),
];

/// Splits a leading status glyph off a piece of text.
///
/// Returns the recognized glyph, if any, and the remaining text with
/// surrounding whitespace trimmed from its start.
#[must_use]
pub fn split_status_glyph(text: &str) -> (Option<StatusGlyph>, &str) {
    let trimmed = text.trim_start();
    for (spelling, glyph) in GLYPH_SPELLINGS {
        if let Some(rest) = trimmed.strip_prefix(spelling) {
            return (Some(glyph), rest.trim_start());
        }
    }
    (None, trimmed)
}

/// Removes a leading status glyph from a piece of text, if present.
#[must_use]
pub fn strip_status_glyph(text: &str) -> &str {
    split_status_glyph(text).1
}

/// Classification of one description line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind<'a> {
    /// Whitespace-only line.
    Blank,
    /// Any non-task line, passed through reconciliation verbatim.
    Prose(&'a str),
    /// A bulleted or checkbox line rendering one task.
    Task {
        /// Status glyph carried by the line, if any.
        glyph: Option<StatusGlyph>,
        /// Task text with list marker, checkbox, and glyph removed.
        content: &'a str,
    },
}

impl LineKind<'_> {
    /// Returns `true` for task lines.
    #[must_use]
    pub const fn is_task(&self) -> bool {
        matches!(self, Self::Task { .. })
    }
}

/// Classifies one line of a card description.
///
/// A line is a task line when it is a bulleted item (`-`, `*`, or `•`
/// followed by whitespace), or a checkbox item (`[ ]` or `[x]`), in either
/// case optionally carrying a status glyph before the task text.
#[must_use]
pub fn classify_line(line: &str) -> LineKind<'_> {
    let trimmed = line.trim_start();
    if trimmed.is_empty() {
        return LineKind::Blank;
    }
    if let Some(rest) = checkbox_text(trimmed) {
        return task_line(rest);
    }
    if let Some(rest) = bullet_text(trimmed) {
        return task_line(rest);
    }
    LineKind::Prose(line)
}

/// Returns the text after a list marker, or `None` when the line is not a
/// bulleted item. A bare marker with no following whitespace (`---`,
/// `*emphasis*`) does not count.
fn bullet_text(trimmed: &str) -> Option<&str> {
    let rest = trimmed
        .strip_prefix('-')
        .or_else(|| trimmed.strip_prefix('*'))
        .or_else(|| trimmed.strip_prefix('•'))?;
    rest.strip_prefix(' ')
        .or_else(|| rest.strip_prefix('\t'))
        .map(str::trim_start)
}

/// Returns the text after a checkbox marker, or `None` when the line does
/// not start with one.
fn checkbox_text(trimmed: &str) -> Option<&str> {
    let rest = trimmed
        .strip_prefix("[ ]")
        .or_else(|| trimmed.strip_prefix("[x]"))
        .or_else(|| trimmed.strip_prefix("[X]"))?;
    Some(rest.trim_start())
}

fn task_line(marker_text: &str) -> LineKind<'_> {
    // Bulleted checkboxes ("- [ ] task") carry the checkbox after the
    // list marker.
    let body = checkbox_text(marker_text).unwrap_or(marker_text);
    let (glyph, content) = split_status_glyph(body);
    LineKind::Task { glyph, content }
}
