//! Comment templates for card lifecycle events.

use minijinja::Environment;
use serde_json::{Map, Value};
use thiserror::Error;

use crate::plan::domain::ProgressSummary;

const PICKUP_TEMPLATE: &str = r#"⚙️ Picked up "{{ card }}" and moved it to {{ list }}."#;

const COMPLETION_TEMPLATE: &str =
    r#"✅ Completed "{{ card }}" with {{ progress }}.{% if note %} Note: {{ note }}{% endif %}"#;

/// Error returned when a comment template fails to render.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("comment template render error: {0}")]
pub struct NoteRenderError(String);

/// Renders the comment posted when a card is picked up.
///
/// # Errors
///
/// Returns [`NoteRenderError`] when template rendering fails.
pub fn pickup_note(card_name: &str, list_name: &str) -> Result<String, NoteRenderError> {
    let mut context = Map::new();
    context.insert("card".to_owned(), Value::String(card_name.to_owned()));
    context.insert("list".to_owned(), Value::String(list_name.to_owned()));
    render(PICKUP_TEMPLATE, context)
}

/// Renders the comment posted when a card is completed.
///
/// # Errors
///
/// Returns [`NoteRenderError`] when template rendering fails.
pub fn completion_note(
    card_name: &str,
    progress: &ProgressSummary,
    note: Option<&str>,
) -> Result<String, NoteRenderError> {
    let mut context = Map::new();
    context.insert("card".to_owned(), Value::String(card_name.to_owned()));
    context.insert("progress".to_owned(), Value::String(progress.to_string()));
    context.insert(
        "note".to_owned(),
        note.map_or(Value::Null, |text| Value::String(text.to_owned())),
    );
    render(COMPLETION_TEMPLATE, context)
}

fn render(template: &str, context: Map<String, Value>) -> Result<String, NoteRenderError> {
    let environment = Environment::new();
    environment
        .render_str(template, context)
        .map_err(|error| NoteRenderError(error.to_string()))
}
