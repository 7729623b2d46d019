//! Shared counter context.
//!
//! `CounterContext` is the capability object the root view unit exposes to
//! its subtree: the current count plus the three transition entry points.
//! Descendant view units reach it through [`use_counter`] without explicit
//! parameter threading.
//!
//! # Scoping
//!
//! The binding is established by the root unit and torn down when the root
//! unmounts:
//!
//! ```ignore
//! let store = Arc::new(CounterStore::new());
//! let _ctx = CounterContext::provide(store); // guard lives as long as the root
//!
//! // anywhere below the root:
//! let counter = use_counter();
//! counter.increment();
//! ```
//!
//! The binding is per-thread: the host event loop, view builds, and handler
//! dispatch all run on one logical thread, and keeping the slot thread-local
//! means independent hosts (and test threads) cannot observe each other's
//! binding.
//!
//! # Panics
//!
//! Accessing the context outside an established scope is a structural
//! wiring defect, not a runtime condition, and fails fatally. So does
//! providing a second binding while one is live: the root unit exclusively
//! owns the store.

use std::cell::RefCell;
use std::sync::Arc;

use crate::counter::CounterAction;
use crate::store::CounterStore;

thread_local! {
    static COUNTER_CONTEXT: RefCell<Option<CounterContext>> = const { RefCell::new(None) };
}

/// Capability handle over the counter store: read access plus invocation
/// rights for the closed transition set. Cheap to clone.
#[derive(Clone)]
pub struct CounterContext {
    store: Arc<CounterStore>,
}

impl CounterContext {
    /// Establish the scoped binding for the current thread.
    ///
    /// Returns a guard that tears the binding down on drop. Intended to be
    /// held by the root view unit for its whole lifetime.
    ///
    /// # Panics
    ///
    /// Panics if a binding is already established on this thread.
    pub fn provide(store: Arc<CounterStore>) -> ContextGuard {
        COUNTER_CONTEXT.with(|slot| {
            let mut slot = slot.borrow_mut();
            if slot.is_some() {
                panic!("counter context provided twice; the root view unit exclusively owns the binding");
            }
            *slot = Some(CounterContext { store });
        });
        tracing::debug!("counter context established");
        ContextGuard { _priv: () }
    }

    /// Whether a binding is currently established on this thread.
    pub fn is_provided() -> bool {
        COUNTER_CONTEXT.with(|slot| slot.borrow().is_some())
    }

    /// Current counter value.
    pub fn count(&self) -> i64 {
        self.store.count()
    }

    /// Increment by 1.
    pub fn increment(&self) {
        self.increment_by(1);
    }

    /// Increment by an explicit amount. No validation: zero and negative
    /// amounts produce the arithmetic result.
    pub fn increment_by(&self, amount: i64) {
        self.store.dispatch(CounterAction::Increment { amount });
    }

    /// Decrement by 1.
    pub fn decrement(&self) {
        self.decrement_by(1);
    }

    /// Decrement by an explicit amount.
    pub fn decrement_by(&self, amount: i64) {
        self.store.dispatch(CounterAction::Decrement { amount });
    }

    /// Reset to the initial state.
    pub fn clear(&self) {
        self.store.dispatch(CounterAction::Clear);
    }
}

/// RAII guard for the context binding. Dropping it unbinds the context,
/// mirroring the root unit's unmount.
pub struct ContextGuard {
    _priv: (),
}

impl Drop for ContextGuard {
    fn drop(&mut self) {
        COUNTER_CONTEXT.with(|slot| {
            *slot.borrow_mut() = None;
        });
        tracing::debug!("counter context torn down");
    }
}

/// Access the counter context from a descendant view unit.
///
/// # Panics
///
/// Panics if no binding is established on this thread, i.e. the caller is
/// not below a mounted root unit.
pub fn use_counter() -> CounterContext {
    COUNTER_CONTEXT.with(|slot| {
        slot.borrow()
            .clone()
            .expect("counter context not established; mount the root view unit first")
    })
}
