//! Initial Todo Data
//!
//! Static seed list consumed once when the widget mounts. The list lives
//! purely in memory afterwards; nothing is written back.

use crate::models::TodoItem;

const INITIAL_TODOS: &str = r#"[
    { "title": "Learn Leptos", "completed": true },
    { "title": "Build the todo widget", "completed": false },
    { "title": "Walk the dog", "completed": false }
]"#;

/// Decode the embedded seed document.
///
/// Falls back to an empty list if the document is malformed, so the
/// widget always mounts.
pub fn initial_todos() -> Vec<TodoItem> {
    match serde_json::from_str(INITIAL_TODOS) {
        Ok(todos) => todos,
        Err(err) => {
            web_sys::console::warn_1(&format!("[TODO] bad seed document: {}", err).into());
            Vec::new()
        }
    }
}
