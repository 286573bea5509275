//! # Composable Todo Runtime
//!
//! Runtime implementation for the Composable Todo architecture.
//!
//! This crate provides the Store runtime that coordinates reducer execution,
//! observer notification and effect handling.
//!
//! ## Core Components
//!
//! - **Store**: Owns state, runs the reducer for every dispatched action
//! - **Action Broadcast**: Notifies observers (views) after each reduction
//! - **Effect Executor**: Executes effect descriptions and feeds actions back
//!
//! ## Example
//!
//! ```ignore
//! use composable_todo_runtime::Store;
//!
//! let store = Store::new(initial_state, my_reducer, environment);
//!
//! // Dispatch an action
//! store.send(Action::DoSomething).await?;
//!
//! // Read state
//! let value = store.state(|s| s.some_field).await;
//! ```

use composable_todo_core::{effect::Effect, reducer::Reducer};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::time::Duration;
use tokio::sync::RwLock;

/// Error types for the Store runtime
pub mod error {
    use thiserror::Error;

    /// Errors that can occur during Store operations
    #[derive(Error, Debug, Clone, PartialEq, Eq)]
    pub enum StoreError {
        /// Store is shutting down and not accepting new actions
        ///
        /// This error is returned when `send()` is called after shutdown initiated.
        #[error("Store is shutting down")]
        ShutdownInProgress,

        /// Shutdown timed out waiting for effects to complete
        ///
        /// Some effects were still running when the timeout elapsed.
        #[error("Shutdown timed out with {0} effects still running")]
        ShutdownTimeout(usize),
    }
}

pub use error::StoreError;

/// Configuration for Store instances
///
/// # Example
///
/// ```
/// use composable_todo_runtime::StoreConfig;
/// use std::time::Duration;
///
/// let config = StoreConfig::default()
///     .with_broadcast_capacity(64)
///     .with_shutdown_timeout(Duration::from_secs(1));
///
/// assert_eq!(config.broadcast_capacity, 64);
/// ```
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Number of actions buffered for each observer before it starts lagging
    pub broadcast_capacity: usize,
    /// Default timeout for graceful shutdown
    pub default_shutdown_timeout: Duration,
}

impl StoreConfig {
    /// Set the action broadcast capacity
    ///
    /// The value is stored as given. The broadcast channel itself is created
    /// with at least one slot, so zero still delivers actions.
    #[must_use]
    pub const fn with_broadcast_capacity(mut self, capacity: usize) -> Self {
        self.broadcast_capacity = capacity;
        self
    }

    /// Set the default shutdown timeout
    #[must_use]
    pub const fn with_shutdown_timeout(mut self, timeout: Duration) -> Self {
        self.default_shutdown_timeout = timeout;
        self
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            broadcast_capacity: 16,
            default_shutdown_timeout: Duration::from_secs(5),
        }
    }
}

/// Decrements the shared pending-effects counter when dropped, even if the
/// effect task panics.
struct AtomicCounterGuard(Arc<AtomicUsize>);

impl Drop for AtomicCounterGuard {
    fn drop(&mut self) {
        self.0.fetch_sub(1, Ordering::SeqCst);
    }
}

/// Store module - The runtime for reducers
pub mod store {
    use super::{
        Arc, AtomicBool, AtomicCounterGuard, AtomicUsize, Duration, Effect, Ordering, Reducer,
        RwLock, StoreConfig, StoreError,
    };
    use tokio::sync::broadcast;

    /// The Store - runtime coordinator for a reducer
    ///
    /// The Store manages:
    /// 1. State (behind `RwLock` for concurrent access)
    /// 2. Reducer (business logic)
    /// 3. Environment (injected dependencies)
    /// 4. Observers (action broadcast)
    /// 5. Effect execution (with feedback loop)
    ///
    /// Cloning a Store yields another handle to the same state, which is how
    /// the store is handed down to the components that read or dispatch.
    ///
    /// # Type Parameters
    ///
    /// - `S`: State type
    /// - `A`: Action type
    /// - `E`: Environment type
    /// - `R`: Reducer implementation
    pub struct Store<S, A, E, R>
    where
        R: Reducer<State = S, Action = A, Environment = E>,
    {
        state: Arc<RwLock<S>>,
        reducer: R,
        environment: E,
        config: StoreConfig,
        shutdown: Arc<AtomicBool>,
        pending_effects: Arc<AtomicUsize>,
        /// Every reduced action is broadcast here after the state changed.
        action_broadcast: broadcast::Sender<A>,
    }

    impl<S, A, E, R> Store<S, A, E, R>
    where
        R: Reducer<State = S, Action = A, Environment = E> + Send + Sync + 'static,
        A: Send + Clone + 'static,
        S: Send + Sync + 'static,
        E: Send + Sync + 'static,
    {
        /// Create a new store with initial state, reducer, and environment
        ///
        /// Uses [`StoreConfig::default`].
        #[must_use]
        pub fn new(initial_state: S, reducer: R, environment: E) -> Self {
            Self::with_config(initial_state, reducer, environment, StoreConfig::default())
        }

        /// Create a new Store with custom configuration
        #[must_use]
        pub fn with_config(
            initial_state: S,
            reducer: R,
            environment: E,
            config: StoreConfig,
        ) -> Self {
            let (action_broadcast, _) = broadcast::channel(config.broadcast_capacity.max(1));

            Self {
                state: Arc::new(RwLock::new(initial_state)),
                reducer,
                environment,
                config,
                shutdown: Arc::new(AtomicBool::new(false)),
                pending_effects: Arc::new(AtomicUsize::new(0)),
                action_broadcast,
            }
        }

        /// The configuration this store was built with
        #[must_use]
        pub const fn config(&self) -> &StoreConfig {
            &self.config
        }

        /// Returns true once [`Store::shutdown`] has been called
        #[must_use]
        pub fn is_shutting_down(&self) -> bool {
            self.shutdown.load(Ordering::Acquire)
        }

        /// Number of effects currently running
        #[must_use]
        pub fn pending_effects(&self) -> usize {
            self.pending_effects.load(Ordering::Acquire)
        }

        /// Subscribe to actions reduced by this store
        ///
        /// Every action is published after the reducer applied it, in the
        /// order the reductions happened. Views use this as their re-render
        /// trigger. Observers that fall more than `broadcast_capacity`
        /// actions behind receive `RecvError::Lagged`.
        #[must_use]
        pub fn subscribe_actions(&self) -> broadcast::Receiver<A> {
            self.action_broadcast.subscribe()
        }

        /// Send (dispatch) an action to the store
        ///
        /// 1. Acquires write lock on state
        /// 2. Calls reducer with (state, action, environment)
        /// 3. Broadcasts the action to observers
        /// 4. Starts the returned effects
        ///
        /// The state change is visible to every reader once this returns.
        /// Effects run in spawned tasks and may still be in flight.
        ///
        /// # Errors
        ///
        /// Returns [`StoreError::ShutdownInProgress`] if the store is shutting down.
        #[tracing::instrument(skip(self, action), name = "store_send")]
        pub async fn send(&self, action: A) -> Result<(), StoreError>
        where
            R: Clone,
            E: Clone,
        {
            if self.is_shutting_down() {
                tracing::warn!("Rejected action: store is shutting down");
                metrics::counter!("store.shutdown.rejected_actions").increment(1);
                return Err(StoreError::ShutdownInProgress);
            }

            tracing::debug!("Processing action");
            metrics::counter!("store.commands.total").increment(1);

            let effects = {
                let mut state = self.state.write().await;
                tracing::trace!("Acquired write lock on state");

                let span = tracing::debug_span!("reducer_execution");
                let _enter = span.enter();

                let effects =
                    self.reducer
                        .reduce(&mut *state, action.clone(), &self.environment);
                tracing::trace!("Reducer completed, returned {} effects", effects.len());

                // Published under the write lock so observers see reduction order.
                let observers = self.action_broadcast.send(action).unwrap_or(0);
                tracing::trace!(observers, "Broadcast action");

                effects
            };

            for effect in effects {
                self.execute_effect(effect);
            }

            Ok(())
        }

        /// Read current state via a closure
        ///
        /// Access state through a closure to ensure the lock is released promptly:
        ///
        /// ```ignore
        /// let count = store.state(|s| s.todos.len()).await;
        /// ```
        pub async fn state<F, T>(&self, f: F) -> T
        where
            F: FnOnce(&S) -> T,
        {
            let state = self.state.read().await;
            f(&*state)
        }

        /// Initiate graceful shutdown of the store
        ///
        /// Sets the shutdown flag (rejecting new actions), then waits for
        /// pending effects to complete.
        ///
        /// # Errors
        ///
        /// Returns [`StoreError::ShutdownTimeout`] if the timeout expires before all
        /// pending effects complete.
        pub async fn shutdown(&self, timeout: Duration) -> Result<(), StoreError> {
            tracing::info!("Initiating graceful shutdown");
            self.shutdown.store(true, Ordering::Release);

            let start = std::time::Instant::now();
            let poll_interval = Duration::from_millis(10);

            loop {
                let pending = self.pending_effects();

                if pending == 0 {
                    tracing::info!("All effects completed, shutdown successful");
                    return Ok(());
                }

                if start.elapsed() >= timeout {
                    tracing::error!(pending_effects = pending, "Shutdown timed out");
                    return Err(StoreError::ShutdownTimeout(pending));
                }

                tokio::time::sleep(poll_interval).await;
            }
        }

        /// Execute an effect
        ///
        /// - `None`: No-op
        /// - `Parallel`: Starts every child effect
        /// - `Future`: Spawns the computation, sends the resulting action if `Some`
        fn execute_effect(&self, effect: Effect<A>)
        where
            R: Clone,
            E: Clone,
        {
            match effect {
                Effect::None => {
                    tracing::trace!("Executing Effect::None (no-op)");
                    metrics::counter!("store.effects.executed", "type" => "none").increment(1);
                },
                Effect::Parallel(effects) => {
                    tracing::trace!("Executing Effect::Parallel with {} effects", effects.len());
                    metrics::counter!("store.effects.executed", "type" => "parallel")
                        .increment(1);
                    for effect in effects {
                        self.execute_effect(effect);
                    }
                },
                Effect::Future(fut) => {
                    tracing::trace!("Executing Effect::Future");
                    metrics::counter!("store.effects.executed", "type" => "future").increment(1);

                    self.pending_effects.fetch_add(1, Ordering::SeqCst);
                    let pending_guard = AtomicCounterGuard(Arc::clone(&self.pending_effects));
                    let store = self.clone();

                    tokio::spawn(async move {
                        let _pending_guard = pending_guard;

                        if let Some(action) = fut.await {
                            tracing::trace!("Effect::Future produced an action, sending to store");
                            if let Err(error) = store.send(action).await {
                                tracing::warn!(%error, "Dropped action produced by effect");
                            }
                        }
                    });
                },
            }
        }
    }

    impl<S, A, E, R> Clone for Store<S, A, E, R>
    where
        R: Reducer<State = S, Action = A, Environment = E> + Clone,
        E: Clone,
    {
        fn clone(&self) -> Self {
            Self {
                state: Arc::clone(&self.state),
                reducer: self.reducer.clone(),
                environment: self.environment.clone(),
                config: self.config.clone(),
                shutdown: Arc::clone(&self.shutdown),
                pending_effects: Arc::clone(&self.pending_effects),
                action_broadcast: self.action_broadcast.clone(),
            }
        }
    }
}

// Re-export for convenience
pub use store::Store;

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

    use super::*;
    use composable_todo_core::{SmallVec, smallvec};

    #[derive(Debug, Clone, Default)]
    struct TestState {
        value: i32,
    }

    #[derive(Debug, Clone, PartialEq)]
    enum TestAction {
        Increment,
        ProduceEffect,
        ProduceParallelEffects,
        ProduceSlowEffect,
    }

    #[derive(Debug, Clone)]
    struct TestEnv;

    #[derive(Debug, Clone)]
    struct TestReducer;

    impl Reducer for TestReducer {
        type State = TestState;
        type Action = TestAction;
        type Environment = TestEnv;

        fn reduce(
            &self,
            state: &mut Self::State,
            action: Self::Action,
            _env: &Self::Environment,
        ) -> SmallVec<[Effect<Self::Action>; 4]> {
            match action {
                TestAction::Increment => {
                    state.value += 1;
                    smallvec![Effect::None]
                },
                TestAction::ProduceEffect => {
                    smallvec![Effect::future(async { Some(TestAction::Increment) })]
                },
                TestAction::ProduceParallelEffects => smallvec![Effect::merge(vec![
                    Effect::future(async { Some(TestAction::Increment) }),
                    Effect::future(async { Some(TestAction::Increment) }),
                    Effect::None,
                ])],
                TestAction::ProduceSlowEffect => smallvec![Effect::future(async {
                    tokio::time::sleep(Duration::from_secs(10)).await;
                    None
                })],
            }
        }
    }

    fn store() -> Store<TestState, TestAction, TestEnv, TestReducer> {
        Store::new(TestState::default(), TestReducer, TestEnv)
    }

    async fn wait_for_value(
        store: &Store<TestState, TestAction, TestEnv, TestReducer>,
        expected: i32,
    ) {
        for _ in 0..100 {
            if store.state(|s| s.value).await == expected {
                return;
            }
            tokio::time::sleep(Duration::from_millis(5)).await;
        }
        panic!("state never reached {expected}");
    }

    #[tokio::test]
    async fn test_send_reduces_before_returning() {
        let store = store();
        store.send(TestAction::Increment).await.unwrap();
        assert_eq!(store.state(|s| s.value).await, 1);
    }

    #[tokio::test]
    async fn test_clones_share_state() {
        let store = store();
        let other = store.clone();
        other.send(TestAction::Increment).await.unwrap();
        assert_eq!(store.state(|s| s.value).await, 1);
    }

    #[tokio::test]
    async fn test_future_effect_feeds_back() {
        let store = store();
        store.send(TestAction::ProduceEffect).await.unwrap();
        wait_for_value(&store, 1).await;
    }

    #[tokio::test]
    async fn test_parallel_effects_all_run() {
        let store = store();
        store.send(TestAction::ProduceParallelEffects).await.unwrap();
        wait_for_value(&store, 2).await;
    }

    #[tokio::test]
    async fn test_observers_receive_actions_in_order() {
        let store = store();
        let mut rx = store.subscribe_actions();

        store.send(TestAction::Increment).await.unwrap();
        store.send(TestAction::ProduceEffect).await.unwrap();

        assert_eq!(rx.recv().await.unwrap(), TestAction::Increment);
        assert_eq!(rx.recv().await.unwrap(), TestAction::ProduceEffect);
        // Action fed back by the effect is observed too
        assert_eq!(rx.recv().await.unwrap(), TestAction::Increment);
    }

    #[tokio::test]
    async fn test_send_after_shutdown_is_rejected() {
        let store = store();
        store.shutdown(Duration::from_millis(100)).await.unwrap();

        assert!(store.is_shutting_down());
        assert_eq!(
            store.send(TestAction::Increment).await,
            Err(StoreError::ShutdownInProgress)
        );
        assert_eq!(store.state(|s| s.value).await, 0);
    }

    #[tokio::test]
    async fn test_shutdown_times_out_with_running_effect() {
        let store = store();
        store.send(TestAction::ProduceSlowEffect).await.unwrap();
        assert_eq!(store.pending_effects(), 1);

        let result = store.shutdown(Duration::from_millis(20)).await;
        assert_eq!(result, Err(StoreError::ShutdownTimeout(1)));
    }

    #[tokio::test]
    async fn test_config_builders() {
        let config = StoreConfig::default()
            .with_broadcast_capacity(0)
            .with_shutdown_timeout(Duration::from_millis(250));
        assert_eq!(config.broadcast_capacity, 0);
        assert_eq!(config.default_shutdown_timeout, Duration::from_millis(250));

        // Zero capacity still gets a one-slot channel
        let store = Store::with_config(TestState::default(), TestReducer, TestEnv, config);
        assert_eq!(store.config().broadcast_capacity, 0);

        let mut rx = store.subscribe_actions();
        store.send(TestAction::Increment).await.unwrap();
        assert!(matches!(rx.recv().await, Ok(TestAction::Increment)));
    }
}
