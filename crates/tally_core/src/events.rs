//! Event dispatch.
//!
//! Pointer events are the only input surface: the counter UI has no
//! keyboard shortcuts, no scroll regions, and no text input. Activation
//! (`CLICK`) is synthesized by the router from a press and release on the
//! same element.

use rustc_hash::FxHashMap;

/// Event type identifier
pub type EventType = u32;

/// Common event types
pub mod event_types {
    use super::EventType;

    pub const POINTER_DOWN: EventType = 1;
    pub const POINTER_UP: EventType = 2;
    pub const POINTER_MOVE: EventType = 3;
    pub const POINTER_ENTER: EventType = 4;
    pub const POINTER_LEAVE: EventType = 5;
    /// Press and release on the same element.
    pub const CLICK: EventType = 6;
}

/// A routed pointer event. The position is where the pointer was when
/// the event fired, in the same coordinate space as the computed layout.
#[derive(Clone, Debug)]
pub struct Event {
    pub event_type: EventType,
    /// Target element, as a raw layout node key.
    pub target: u64,
    pub x: f32,
    pub y: f32,
    pub timestamp: u64,
    pub propagation_stopped: bool,
}

impl Event {
    /// Build a pointer event at the given position.
    pub fn pointer(event_type: EventType, target: u64, x: f32, y: f32, timestamp: u64) -> Self {
        Self {
            event_type,
            target,
            x,
            y,
            timestamp,
            propagation_stopped: false,
        }
    }

    pub fn stop_propagation(&mut self) {
        self.propagation_stopped = true;
    }
}

/// Event handler function type
pub type EventHandler = Box<dyn Fn(&Event) + Send + Sync>;

/// Dispatches events to registered handlers
pub struct EventDispatcher {
    handlers: FxHashMap<(u64, EventType), Vec<EventHandler>>,
}

impl EventDispatcher {
    pub fn new() -> Self {
        Self {
            handlers: FxHashMap::default(),
        }
    }

    /// Register an event handler for an element and event type
    pub fn register<F>(&mut self, target: u64, event_type: EventType, handler: F)
    where
        F: Fn(&Event) + Send + Sync + 'static,
    {
        self.handlers
            .entry((target, event_type))
            .or_default()
            .push(Box::new(handler));
    }

    /// Dispatch an event to all registered handlers
    pub fn dispatch(&self, event: &mut Event) {
        if let Some(handlers) = self.handlers.get(&(event.target, event.event_type)) {
            for handler in handlers {
                if event.propagation_stopped {
                    break;
                }
                handler(event);
            }
        }
    }
}

impl Default for EventDispatcher {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::sync::Arc;

    #[test]
    fn test_dispatch_reaches_registered_handler() {
        let hits = Arc::new(AtomicU32::new(0));
        let hits_clone = Arc::clone(&hits);

        let mut dispatcher = EventDispatcher::new();
        dispatcher.register(7, event_types::CLICK, move |event| {
            assert_eq!((event.x, event.y), (1.0, 2.0));
            hits_clone.fetch_add(1, Ordering::SeqCst);
        });

        let mut event = Event::pointer(event_types::CLICK, 7, 1.0, 2.0, 0);
        dispatcher.dispatch(&mut event);
        assert_eq!(hits.load(Ordering::SeqCst), 1);

        // Wrong target: no handler runs.
        let mut miss = Event::pointer(event_types::CLICK, 8, 1.0, 2.0, 0);
        dispatcher.dispatch(&mut miss);
        assert_eq!(hits.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_stop_propagation_halts_remaining_handlers() {
        let hits = Arc::new(AtomicU32::new(0));

        let mut dispatcher = EventDispatcher::new();
        dispatcher.register(1, event_types::POINTER_DOWN, |_| {});

        let hits_clone = Arc::clone(&hits);
        dispatcher.register(1, event_types::POINTER_DOWN, move |_| {
            hits_clone.fetch_add(1, Ordering::SeqCst);
        });

        let mut event = Event::pointer(event_types::POINTER_DOWN, 1, 0.0, 0.0, 0);
        event.stop_propagation();
        dispatcher.dispatch(&mut event);
        assert_eq!(hits.load(Ordering::SeqCst), 0);
    }
}
