//! Reducer-backed counter store.
//!
//! The store owns the single [`CounterState`] cell. Every mutation goes
//! through [`reduce`], and every applied transition raises a shared dirty
//! flag so the host frame loop knows to rebuild the view tree. Event
//! handling is serialized by the host loop; the mutex exists so the store
//! can be shared with handler closures, not for concurrent writers.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use crate::counter::{reduce, CounterAction, CounterState};

/// Shared flag raised by the store to request a view rebuild.
pub type DirtyFlag = Arc<AtomicBool>;

/// Holds the counter state and applies transitions deterministically.
pub struct CounterStore {
    state: Mutex<CounterState>,
    dirty: DirtyFlag,
}

impl CounterStore {
    /// Create a store at the initial state with a fresh dirty flag.
    pub fn new() -> Self {
        Self::with_dirty_flag(Arc::new(AtomicBool::new(false)))
    }

    /// Create a store that raises an externally owned dirty flag.
    pub fn with_dirty_flag(dirty: DirtyFlag) -> Self {
        Self {
            state: Mutex::new(CounterState::INITIAL),
            dirty,
        }
    }

    /// Apply a transition through the reducer.
    pub fn dispatch(&self, action: CounterAction) {
        let mut state = self.state.lock().unwrap();
        let next = reduce(*state, action);
        tracing::debug!(?action, from = state.count, to = next.count, "counter transition");
        *state = next;
        self.dirty.store(true, Ordering::SeqCst);
    }

    /// Current counter value.
    pub fn count(&self) -> i64 {
        self.state.lock().unwrap().count
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> CounterState {
        *self.state.lock().unwrap()
    }

    /// The shared dirty flag.
    pub fn dirty_flag(&self) -> DirtyFlag {
        Arc::clone(&self.dirty)
    }

    /// Read and clear the dirty flag. Returns whether a rebuild is due.
    pub fn take_dirty(&self) -> bool {
        self.dirty.swap(false, Ordering::SeqCst)
    }
}

impl Default for CounterStore {
    fn default() -> Self {
        Self::new()
    }
}
