//! New Todo Form Component
//!
//! Input row for adding todos; owns the pending-text field.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::reducer::TodoAction;

/// Trim the pending text. Whitespace-only input yields no title.
pub fn trimmed_title(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Form for adding a new todo
#[component]
pub fn NewTodoForm(dispatch: Callback<TodoAction>) -> impl IntoView {
    let (pending, set_pending) = signal(String::new());

    let add_todo = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        // Whitespace-only input dispatches nothing and keeps the field as typed
        let Some(title) = trimmed_title(&pending.get()) else {
            return;
        };
        dispatch.run(TodoAction::Add {
            title,
            completed: false,
        });
        set_pending.set(String::new());
    };

    view! {
        <form class="add-todo" on:submit=add_todo>
            <input
                type="text"
                placeholder="Add new todo"
                prop:value=move || pending.get()
                on:input=move |ev| {
                    let target = ev.target().unwrap();
                    let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                    set_pending.set(input.value());
                }
            />
            <button type="submit">"Add"</button>
        </form>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trimmed_title() {
        assert_eq!(trimmed_title("  a b  "), Some("a b".to_string()));
        assert_eq!(trimmed_title("Buy milk"), Some("Buy milk".to_string()));
        assert_eq!(trimmed_title("   "), None);
        assert_eq!(trimmed_title(""), None);
    }
}
