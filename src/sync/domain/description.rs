//! Description body reconciliation.
//!
//! A card description may carry arbitrary prose plus at most one "task
//! block": a contiguous run of task lines rendering the tracked batch.
//! Reconciliation rewrites exactly that block from the latest batch and
//! passes every other line through untouched.

use super::line::{LineKind, StatusGlyph, classify_line, strip_status_glyph};
use crate::plan::domain::PlannedTask;

/// Heading emitted when a description has no task block yet.
pub const TASKS_HEADING: &str = "## Current Tasks";

/// Rewrites the task block of a card description from the given batch.
///
/// The first run of consecutive task lines is replaced in place with one
/// rendered line per task, in batch order. When the body has no task
/// lines, a [`TASKS_HEADING`] section is appended instead, separated from
/// prior content by a blank line. An empty batch removes an existing
/// block without replacement and leaves a block-less body untouched.
///
/// The function is idempotent: reconciling its own output with the same
/// batch returns the output unchanged.
#[must_use]
pub fn reconcile_description(body: &str, tasks: &[PlannedTask]) -> String {
    let lines: Vec<&str> = body.split('\n').collect();
    match find_task_run(&lines) {
        Some((start, end)) => replace_run(&lines, start, end, tasks),
        None if tasks.is_empty() => body.to_owned(),
        None => append_section(body, tasks),
    }
}

/// Renders one description line per task.
fn render_task_lines(tasks: &[PlannedTask]) -> impl Iterator<Item = String> {
    tasks.iter().map(|task| {
        format!(
            "- {} {}",
            StatusGlyph::of(task.status).as_str(),
            strip_status_glyph(&task.content).trim_end()
        )
    })
}

/// Finds the half-open line range of the first run of consecutive task
/// lines.
fn find_task_run(lines: &[&str]) -> Option<(usize, usize)> {
    let start = lines
        .iter()
        .position(|line| classify_line(line).is_task())?;
    let run_length = lines
        .iter()
        .skip(start)
        .take_while(|line| classify_line(line).is_task())
        .count();
    Some((start, start + run_length))
}

/// Replaces the line range `[start, end)` with the rendered batch.
fn replace_run(lines: &[&str], start: usize, end: usize, tasks: &[PlannedTask]) -> String {
    let mut rebuilt: Vec<String> = Vec::with_capacity(lines.len() + tasks.len());
    rebuilt.extend(lines.iter().take(start).map(|line| (*line).to_owned()));
    rebuilt.extend(render_task_lines(tasks));
    rebuilt.extend(lines.iter().skip(end).map(|line| (*line).to_owned()));
    rebuilt.join("\n")
}

/// Appends a fresh task section to a body without a task block.
fn append_section(body: &str, tasks: &[PlannedTask]) -> String {
    let rendered: Vec<String> = render_task_lines(tasks).collect();
    let section = format!("{TASKS_HEADING}\n{}", rendered.join("\n"));
    if body.trim().is_empty() {
        return section;
    }
    format!("{}\n\n{section}", body.trim_end())
}
