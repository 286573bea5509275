//! # Composable Todo Core
//!
//! Core traits and types for the Composable Todo architecture.
//!
//! This crate provides the abstractions the rest of the workspace is built on:
//!
//! - **State**: Domain state for a feature (plain owned data)
//! - **Action**: All possible inputs to a reducer
//! - **Reducer**: Pure function `(State, Action, Environment) → (State, Effects)`
//! - **Effect**: Side effect descriptions (not execution)
//! - **Environment**: Injected dependencies
//!
//! ## Architecture Principles
//!
//! - Unidirectional Data Flow
//! - Explicit Effects (no hidden I/O)
//! - Dependency Injection via Environment
//!
//! ## Example
//!
//! ```
//! use composable_todo_core::{SmallVec, effect::Effect, reducer::Reducer, smallvec};
//!
//! #[derive(Clone, Debug, Default)]
//! struct NotesState {
//!     notes: Vec<String>,
//! }
//!
//! #[derive(Clone, Debug)]
//! enum NotesAction {
//!     Add(String),
//! }
//!
//! struct NotesReducer;
//!
//! impl Reducer for NotesReducer {
//!     type State = NotesState;
//!     type Action = NotesAction;
//!     type Environment = ();
//!
//!     fn reduce(
//!         &self,
//!         state: &mut NotesState,
//!         action: NotesAction,
//!         _env: &(),
//!     ) -> SmallVec<[Effect<NotesAction>; 4]> {
//!         match action {
//!             NotesAction::Add(note) => state.notes.push(note),
//!         }
//!         smallvec![Effect::None]
//!     }
//! }
//!
//! let mut state = NotesState::default();
//! NotesReducer.reduce(&mut state, NotesAction::Add("hello".into()), &());
//! assert_eq!(state.notes, vec!["hello".to_string()]);
//! ```

pub use smallvec::{SmallVec, smallvec};

/// Reducer module - The core trait for business logic
///
/// Reducers are pure functions: `(State, Action, Environment) → (State, Effects)`
///
/// They contain all business logic and are deterministic and testable.
pub mod reducer {
    use super::effect::Effect;
    use super::SmallVec;

    /// The Reducer trait - core abstraction for business logic
    ///
    /// # Type Parameters
    ///
    /// - `State`: The domain state this reducer operates on
    /// - `Action`: The action type this reducer processes
    /// - `Environment`: The injected dependencies this reducer needs
    pub trait Reducer {
        /// The state type this reducer operates on
        type State;

        /// The action type this reducer processes
        type Action;

        /// The environment type with injected dependencies
        type Environment;

        /// Reduce an action into state changes and effects
        ///
        /// This is a pure function that:
        /// 1. Updates state in place
        /// 2. Returns effect descriptions to be executed
        ///
        /// Most reducers return at most a handful of effects, so the
        /// result is stack allocated up to four entries.
        fn reduce(
            &self,
            state: &mut Self::State,
            action: Self::Action,
            env: &Self::Environment,
        ) -> SmallVec<[Effect<Self::Action>; 4]>;
    }
}

/// Effect module - Side effect descriptions
///
/// Effects describe side effects to be performed by the runtime.
/// They are values (not execution).
pub mod effect {
    use futures::future::BoxFuture;
    use std::future::Future;

    /// Effect type - describes a side effect to be executed
    ///
    /// Effects are NOT executed immediately. They are descriptions of what should happen,
    /// returned from reducers and executed by the Store runtime.
    pub enum Effect<Action> {
        /// No-op effect
        None,

        /// Run effects in parallel
        Parallel(Vec<Effect<Action>>),

        /// Arbitrary async computation
        ///
        /// Returns `Option<Action>` - if Some, the action is fed back into the reducer
        Future(BoxFuture<'static, Option<Action>>),
    }

    // Manual Debug implementation since Future doesn't implement Debug
    impl<Action> std::fmt::Debug for Effect<Action>
    where
        Action: std::fmt::Debug,
    {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            match self {
                Effect::None => write!(f, "Effect::None"),
                Effect::Parallel(effects) => {
                    f.debug_tuple("Effect::Parallel").field(effects).finish()
                },
                Effect::Future(_) => write!(f, "Effect::Future(<future>)"),
            }
        }
    }

    impl<Action> Effect<Action> {
        /// Wrap an async computation as an effect
        pub fn future<F>(fut: F) -> Self
        where
            F: Future<Output = Option<Action>> + Send + 'static,
        {
            Effect::Future(Box::pin(fut))
        }

        /// Combine effects to run in parallel
        #[must_use]
        pub const fn merge(effects: Vec<Effect<Action>>) -> Effect<Action> {
            Effect::Parallel(effects)
        }

        /// Returns true if executing this effect does nothing
        #[must_use]
        pub fn is_none(&self) -> bool {
            match self {
                Effect::None => true,
                Effect::Parallel(effects) => effects.iter().all(Effect::is_none),
                Effect::Future(_) => false,
            }
        }
    }
}
