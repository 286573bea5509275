//! Reducer logic for the todo list.
//!
//! The store only ever appends. There is no validation: whatever the form
//! dispatches, including an empty text, becomes a record.

use crate::types::{TodoAction, TodoState};
use composable_todo_core::{SmallVec, effect::Effect, reducer::Reducer, smallvec};
use composable_todo_runtime::{Store, StoreConfig};

/// Environment dependencies for the todo reducer
///
/// The todo list needs no injected services.
#[derive(Clone, Copy, Debug, Default)]
pub struct TodoEnvironment;

/// Reducer for the todo list
#[derive(Clone, Copy, Debug, Default)]
pub struct TodoReducer;

impl TodoReducer {
    /// Creates a new `TodoReducer`
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Reducer for TodoReducer {
    type State = TodoState;
    type Action = TodoAction;
    type Environment = TodoEnvironment;

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        _env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        match action {
            TodoAction::AddTodo { todo } => {
                tracing::debug!(position = state.todos.len(), "Appending todo");
                state.todos.push(todo);
            },
        }

        smallvec![Effect::None]
    }
}

/// The store type shared by the components
pub type TodoStore = Store<TodoState, TodoAction, TodoEnvironment, TodoReducer>;

/// Creates a store holding an empty todo list
#[must_use]
pub fn new_store() -> TodoStore {
    Store::new(TodoState::new(), TodoReducer::new(), TodoEnvironment)
}

/// Creates a store with the given initial state and configuration
#[must_use]
pub fn new_store_with(state: TodoState, config: StoreConfig) -> TodoStore {
    Store::with_config(state, TodoReducer::new(), TodoEnvironment, config)
}
