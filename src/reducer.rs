//! Todo State Transitions
//!
//! Pure reducer over the todo list. Every action produces a fresh list;
//! an index that falls outside the list leaves it unchanged.

use crate::models::TodoItem;

/// State transition requested by a user gesture
///
/// Items are addressed by their current position in the list. There is no
/// stable id: an index refers to whatever sits at that position right now.
#[derive(Debug, Clone, PartialEq)]
pub enum TodoAction {
    /// Prepend a new item to the front of the list
    Add { title: String, completed: bool },
    /// Flip the completion flag of the item at this position
    Toggle(usize),
    /// Remove the item at this position
    Delete(usize),
    /// Replace the title of the item at this position
    Edit { index: usize, title: String },
}

/// Apply one action to the current list, producing the next list.
///
/// Never mutates its input. Out-of-bounds positions are silent no-ops
/// rather than errors.
pub fn todo_reducer(state: &[TodoItem], action: TodoAction) -> Vec<TodoItem> {
    match action {
        TodoAction::Add { title, completed } => {
            let mut next = Vec::with_capacity(state.len() + 1);
            next.push(TodoItem { title, completed });
            next.extend_from_slice(state);
            next
        }
        TodoAction::Toggle(index) => state
            .iter()
            .enumerate()
            .map(|(i, item)| {
                if i == index {
                    TodoItem {
                        completed: !item.completed,
                        ..item.clone()
                    }
                } else {
                    item.clone()
                }
            })
            .collect(),
        TodoAction::Delete(index) => state
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != index)
            .map(|(_, item)| item.clone())
            .collect(),
        TodoAction::Edit { index, title } => state
            .iter()
            .enumerate()
            .map(|(i, item)| {
                if i == index {
                    TodoItem {
                        title: title.clone(),
                        ..item.clone()
                    }
                } else {
                    item.clone()
                }
            })
            .collect(),
    }
}
