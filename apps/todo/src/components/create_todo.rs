//! The creation form.
//!
//! Collects one line of free text in a component-local buffer and, on
//! submit, asks the store to append the whole buffer as a new todo.

use crate::config::FormConfig;
use crate::events::{ChangeEvent, SubmitEvent};
use crate::reducer::TodoStore;
use crate::types::{Todo, TodoAction};
use composable_todo_runtime::StoreError;
use thiserror::Error;

/// Label shown next to the text field
pub const FIELD_LABEL: &str = "add todo";
/// Caption of the submit control
pub const SUBMIT_LABEL: &str = "Submit";

/// Recoverable submit failures
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    /// The store refused the dispatch
    #[error("Store unavailable: {0}")]
    StoreUnavailable(#[from] StoreError),

    /// The buffer was empty and the form is configured to reject that
    #[error("Cannot add an empty todo")]
    EmptyText,
}

/// What the form looks like for the current buffer
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormView {
    /// Field label
    pub label: &'static str,
    /// Current field value
    pub value: String,
    /// Submit control caption
    pub submit_label: &'static str,
    /// Buffer text rendered beneath the form, when echoing is enabled
    pub echo: Option<String>,
}

/// The creation form component
pub struct CreateTodo {
    store: TodoStore,
    config: FormConfig,
    buffer: Todo,
}

impl CreateTodo {
    /// Creates a form that dispatches to `store`, starting with an empty buffer
    #[must_use]
    pub fn new(store: TodoStore, config: FormConfig) -> Self {
        Self {
            store,
            config,
            buffer: Todo::default(),
        }
    }

    /// The component-local buffer
    #[must_use]
    pub const fn buffer(&self) -> &Todo {
        &self.buffer
    }

    /// Overwrite the buffer with the field's new value, verbatim
    pub fn on_change(&mut self, event: ChangeEvent) {
        tracing::trace!(len = event.value.len(), "Buffer changed");
        self.buffer.text = event.value;
    }

    /// Dispatch the buffer to the store
    ///
    /// The event's default action is always suppressed, even when the
    /// submit fails. The buffer is cleared only after a successful dispatch
    /// and only if `reset_on_submit` is set.
    ///
    /// # Errors
    ///
    /// - [`FormError::EmptyText`] if `reject_empty` is set and the buffer is empty.
    ///   Nothing is dispatched.
    /// - [`FormError::StoreUnavailable`] if the store rejects the action.
    pub async fn on_submit(&mut self, event: &mut SubmitEvent) -> Result<(), FormError> {
        event.prevent_default();

        if self.config.reject_empty && self.buffer.text.is_empty() {
            tracing::debug!("Rejected empty submission");
            return Err(FormError::EmptyText);
        }

        let action = TodoAction::AddTodo {
            todo: self.buffer.clone(),
        };
        tracing::debug!(action_type = action.action_type(), "Dispatching");

        if let Err(error) = self.store.send(action).await {
            tracing::warn!(%error, "Dispatch failed, keeping buffer");
            return Err(error.into());
        }

        if self.config.reset_on_submit {
            self.buffer = Todo::default();
        }

        Ok(())
    }

    /// Render the form for the current buffer
    #[must_use]
    pub fn render(&self) -> FormView {
        FormView {
            label: FIELD_LABEL,
            value: self.buffer.text.clone(),
            submit_label: SUBMIT_LABEL,
            echo: self
                .config
                .echo_buffer
                .then(|| self.buffer.text.clone()),
        }
    }
}
