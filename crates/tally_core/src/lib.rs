//! Tally Core Runtime
//!
//! This crate provides the foundational primitives for the Tally counter UI:
//!
//! - **Counter Store**: a reducer-backed state cell with a closed transition set
//! - **Shared Context**: scoped capability binding for descendant view units
//! - **Event Dispatch**: pointer event routing to registered handlers
//! - **State Machines**: flat statecharts for widget interaction states
//!
//! # Example
//!
//! ```rust
//! use tally_core::{reduce, CounterAction, CounterState};
//!
//! let state = CounterState::default();
//! let state = reduce(state, CounterAction::Increment { amount: 5 });
//! let state = reduce(state, CounterAction::Decrement { amount: 1 });
//! assert_eq!(state.count, 4);
//!
//! let state = reduce(state, CounterAction::Clear);
//! assert_eq!(state, CounterState::default());
//! ```

pub mod context;
pub mod counter;
pub mod events;
pub mod fsm;
pub mod paint;
pub mod store;

pub use context::{use_counter, ContextGuard, CounterContext};
pub use counter::{reduce, CounterAction, CounterState};
pub use events::{Event, EventDispatcher, EventType};
pub use fsm::{FsmId, FsmRuntime, StateId, StateMachine, StateTransition};
pub use paint::{Color, CornerRadius, DisplayList, DrawContext, PaintCmd, Rect, TextAlign};
pub use store::{CounterStore, DirtyFlag};
