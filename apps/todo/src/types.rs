//! Domain types for the todo list.
//!
//! A todo list is an append-only sequence of records, each carrying nothing
//! but its text. Position in the sequence is the only ordering.

use serde::{Deserialize, Serialize};

/// A single todo record
///
/// This is also the shape of the creation form's buffer, which is dispatched
/// as a whole.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    /// Free text entered by the user (may be empty)
    pub text: String,
}

impl Todo {
    /// Creates a todo with the given text
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

/// State of the todo list
///
/// Records are kept in insertion order and are never edited or removed.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoState {
    /// All todos, oldest first
    pub todos: Vec<Todo>,
}

impl TodoState {
    /// Creates a new empty todo state
    #[must_use]
    pub const fn new() -> Self {
        Self { todos: Vec::new() }
    }

    /// Returns the number of todos
    #[must_use]
    pub fn count(&self) -> usize {
        self.todos.len()
    }

    /// Returns the texts of all todos, in order
    #[must_use]
    pub fn texts(&self) -> Vec<&str> {
        self.todos.iter().map(|todo| todo.text.as_str()).collect()
    }
}

/// Actions the todo store understands
///
/// Internally tagged, with the `type` field inside the object:
/// `{"type":"ADD_TODO","todo":{"text":"..."}}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum TodoAction {
    /// Append a todo to the end of the list
    #[serde(rename = "ADD_TODO")]
    AddTodo {
        /// The record to append
        todo: Todo,
    },
}

impl TodoAction {
    /// Shorthand for `AddTodo` with the given text
    #[must_use]
    pub fn add(text: impl Into<String>) -> Self {
        Self::AddTodo {
            todo: Todo::new(text),
        }
    }

    /// Wire name of the action
    #[must_use]
    pub const fn action_type(&self) -> &'static str {
        match self {
            Self::AddTodo { .. } => "ADD_TODO",
        }
    }
}
