//! UI components.
//!
//! Both components receive the store handle from whoever builds them; there
//! is no global store to look up.

pub mod create_todo;
pub mod todos;

pub use create_todo::{CreateTodo, FormError, FormView};
pub use todos::{ListItem, Todos};
