//! Todo Row Component
//!
//! A single todo entry: checkbox, title, delete and edit controls.

use leptos::prelude::*;

use crate::models::TodoItem;
use crate::reducer::TodoAction;

/// One row of the list, addressed by its current position
#[component]
pub fn TodoRow(item: TodoItem, index: usize, dispatch: Callback<TodoAction>) -> impl IntoView {
    let completed = item.completed;
    let title = item.title.clone();
    let prompt_seed = item.title.clone();

    let edit_todo = move |_| {
        // Blocking modal prompt seeded with the current title.
        // Cancel dispatches nothing; an accepted empty string is kept.
        let Some(window) = web_sys::window() else {
            return;
        };
        match window.prompt_with_message_and_default("Edit todo:", &prompt_seed) {
            Ok(Some(title)) => dispatch.run(TodoAction::Edit { index, title }),
            Ok(None) | Err(_) => {}
        }
    };

    view! {
        <li class=if completed { "todo-row completed" } else { "todo-row" }>
            <input
                type="checkbox"
                checked=completed
                on:change=move |_| dispatch.run(TodoAction::Toggle(index))
            />

            <span class=if completed { "todo-title completed" } else { "todo-title" }>
                {title}
            </span>

            <button class="delete-btn" on:click=move |_| dispatch.run(TodoAction::Delete(index))>
                "Delete"
            </button>

            // Completed items keep toggle and delete but lose edit
            <button class="edit-btn" disabled=completed on:click=edit_todo>
                "Edit"
            </button>
        </li>
    }
}
