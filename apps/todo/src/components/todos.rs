//! The list view.
//!
//! Holds no state of its own: every render reads the store afresh.

use crate::reducer::TodoStore;

/// One rendered line of the list
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListItem {
    /// Stable identity of the line (position in the store)
    pub key: usize,
    /// The todo's text
    pub text: String,
}

/// The list view component
pub struct Todos {
    store: TodoStore,
}

impl Todos {
    /// Creates a list view reading from `store`
    #[must_use]
    pub const fn new(store: TodoStore) -> Self {
        Self { store }
    }

    /// Render one item per todo, in store order
    pub async fn render(&self) -> Vec<ListItem> {
        self.store
            .state(|state| {
                state
                    .todos
                    .iter()
                    .enumerate()
                    .map(|(key, todo)| ListItem {
                        key,
                        text: todo.text.clone(),
                    })
                    .collect()
            })
            .await
    }
}
