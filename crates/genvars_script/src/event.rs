//! Generic events.
//!
//! A handler receives an event name and a [`Generic`] argument and answers
//! with a [`Generic`]. An empty reply means the handler did not respond.

use std::sync::Arc;

use genvars_core::Generic;
use genvars_foundation::{Name, ObjectRef};
use tracing::trace;

/// Receiver of generic events.
pub trait GenericEventHandler: Send + Sync {
    /// Handles `event_name` sent by `source` with `args`. The default
    /// implementation ignores the event and returns an empty container.
    fn handle_generic_event(&self, source: &ObjectRef, event_name: Name, args: &Generic) -> Generic {
        let _ = (source, event_name, args);
        Generic::new()
    }
}

/// Fans events out to registered handlers.
#[derive(Clone, Default)]
pub struct EventDispatcher {
    handlers: Vec<Arc<dyn GenericEventHandler>>,
}

impl EventDispatcher {
    /// Creates a dispatcher with no handlers.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a handler. Handlers are called in registration order.
    pub fn register(&mut self, handler: Arc<dyn GenericEventHandler>) -> &mut Self {
        self.handlers.push(handler);
        self
    }

    /// Returns the number of registered handlers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    /// Returns true if no handler is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Sends an event to every handler, collecting the non-empty replies.
    pub fn dispatch(&self, source: &ObjectRef, event_name: Name, args: &Generic) -> Vec<Generic> {
        let replies: Vec<Generic> = self
            .handlers
            .iter()
            .map(|handler| handler.handle_generic_event(source, event_name, args))
            .filter(|reply| !reply.is_empty())
            .collect();
        trace!(
            target: "genvars::generic",
            event = %event_name,
            handlers = self.handlers.len(),
            replies = replies.len(),
            "dispatched generic event"
        );
        replies
    }
}

impl std::fmt::Debug for EventDispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventDispatcher")
            .field("handlers", &self.handlers.len())
            .finish()
    }
}
