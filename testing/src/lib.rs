//! # Composable Todo Testing
//!
//! Testing utilities and helpers for the Composable Todo architecture.
//!
//! This crate provides:
//! - [`ReducerTest`]: Given-When-Then harness for reducers
//! - [`assertions`]: Helpers for asserting on returned effects
//! - [`init_test_tracing`]: Opt-in log output for tests
//!
//! ## Example
//!
//! ```ignore
//! use composable_todo_testing::{ReducerTest, assertions};
//!
//! ReducerTest::new(TodoReducer)
//!     .with_env(TodoEnvironment)
//!     .given_state(TodoState::default())
//!     .when_action(TodoAction::add("buy milk"))
//!     .then_state(|state| assert_eq!(state.todos.len(), 1))
//!     .then_effects(assertions::assert_no_effects)
//!     .run();
//! ```


pub use reducer_test::{ReducerTest, assertions};

/// Install a `tracing` subscriber for tests
///
/// Output is captured by the test harness and honours `RUST_LOG`
/// (default `warn`). Safe to call from every test; only the first call
/// installs the subscriber.
pub fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_test_writer()
        .try_init();
}
