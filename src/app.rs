//! Todo Frontend App
//!
//! Page shell around the todo-list widget.

use leptos::prelude::*;

use crate::components::TodoList;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <div class="app-layout">
            <main class="main-content">
                <TodoList />
            </main>
        </div>
    }
}
