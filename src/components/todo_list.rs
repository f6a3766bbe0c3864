//! Todo List Component
//!
//! Widget root: owns the list state, runs the reducer, renders the rows.

use leptos::prelude::*;

use crate::components::{NewTodoForm, TodoRow};
use crate::initial_state;
use crate::reducer::{todo_reducer, TodoAction};

/// The interactive todo-list widget
#[component]
pub fn TodoList() -> impl IntoView {
    let seed = initial_state::initial_todos();
    web_sys::console::log_1(&format!("[TODO] mounted with {} seed items", seed.len()).into());

    let (todos, set_todos) = signal(seed);

    // Single dispatch point: every list mutation flows through the reducer
    let dispatch = Callback::new(move |action: TodoAction| {
        set_todos.update(|todos| *todos = todo_reducer(todos, action));
    });

    view! {
        <div class="todo-list">
            <h2>"Todo List"</h2>

            <NewTodoForm dispatch=dispatch />

            <ul>
                <For
                    each=move || todos.get().into_iter().enumerate()
                    key=|(index, item)| {
                        // Position is the item identity; title and completed
                        // are included so in-place changes re-render the row
                        (*index, item.title.clone(), item.completed)
                    }
                    children=move |(index, item)| {
                        view! { <TodoRow item=item index=index dispatch=dispatch /> }
                    }
                />
            </ul>

            <p class="item-count">{move || format!("{} items", todos.get().len())}</p>
        </div>
    }
}
