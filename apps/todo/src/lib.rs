//! Todo list UI built on Composable Todo.
//!
//! Two components share one store:
//!
//! - [`CreateTodo`] buffers a line of text and dispatches it as
//!   `ADD_TODO` on submit
//! - [`Todos`] renders the store's todos, one item per record, in order
//!
//! The store is handed to each component when it is built; data flows one
//! way, from dispatched action through the reducer to the next render.
//!
//! # Quick Start
//!
//! ```no_run
//! use composable_todo::{new_store, ChangeEvent, CreateTodo, FormConfig, SubmitEvent, Todos};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let store = new_store();
//! let mut form = CreateTodo::new(store.clone(), FormConfig::default());
//! let list = Todos::new(store);
//!
//! form.on_change(ChangeEvent::new("buy milk"));
//! form.on_submit(&mut SubmitEvent::new()).await?;
//!
//! for item in list.render().await {
//!     println!("{}: {}", item.key, item.text);
//! }
//! # Ok(())
//! # }
//! ```

pub mod components;
pub mod config;
pub mod events;
pub mod reducer;
pub mod terminal;
pub mod types;

// Re-export commonly used types
pub use components::{CreateTodo, FormError, FormView, ListItem, Todos};
pub use config::{ConfigError, FormConfig};
pub use events::{ChangeEvent, SubmitEvent};
pub use reducer::{TodoEnvironment, TodoReducer, TodoStore, new_store, new_store_with};
pub use types::{Todo, TodoAction, TodoState};
