//! Outbound dock events.
//!
//! The manager writes every change notification to a single [`EventSink`].
//! Delivering events to the individual subscribers is the sink's concern.

use serde::Serialize;
use tokio::sync::broadcast;

use super::AppId;

/// Event names used when events cross a process boundary.
pub mod names {
    /// Raised after an application was docked.
    pub const DOCKED: &str = "dockd://dock/docked";

    /// Raised after an application was undocked.
    pub const UNDOCKED: &str = "dockd://dock/undocked";
}

/// A change to the docked application set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", content = "id", rename_all = "lowercase")]
pub enum DockEvent {
    /// The application was pinned to the dock.
    Docked(AppId),
    /// The application was removed from the dock.
    Undocked(AppId),
}

impl DockEvent {
    /// Returns the wire name of the event.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Docked(_) => names::DOCKED,
            Self::Undocked(_) => names::UNDOCKED,
        }
    }

    /// Returns the application id carried by the event.
    #[must_use]
    pub fn app_id(&self) -> &str {
        match self {
            Self::Docked(id) | Self::Undocked(id) => id,
        }
    }
}

/// Fire-and-forget destination for dock events.
pub trait EventSink: Send + Sync {
    /// Emits an event. Must not block and must not fail.
    ///
    /// Called while the manager's lock is held: calling back into the
    /// manager from here deadlocks. Hand the event to another thread or a
    /// channel instead.
    fn emit(&self, event: DockEvent);
}

/// Sink that fans events out to in-process subscribers.
#[derive(Debug, Clone)]
pub struct BroadcastEvents {
    sender: broadcast::Sender<DockEvent>,
}

impl BroadcastEvents {
    /// Creates a channel buffering up to `capacity` events per lagging subscriber.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity.max(1));
        Self { sender }
    }

    /// Registers a new subscriber. It sees events emitted after this call.
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<DockEvent> { self.sender.subscribe() }

    /// Number of live subscribers.
    #[must_use]
    pub fn subscriber_count(&self) -> usize { self.sender.receiver_count() }
}

impl Default for BroadcastEvents {
    fn default() -> Self { Self::new(64) }
}

impl EventSink for BroadcastEvents {
    fn emit(&self, event: DockEvent) {
        // An error only means nobody is listening.
        if self.sender.send(event).is_err() {
            tracing::trace!("dock event dropped: no subscribers");
        }
    }
}

/// Sink that only records events in the log.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogEvents;

impl EventSink for LogEvents {
    fn emit(&self, event: DockEvent) {
        tracing::info!(event = event.name(), id = event.app_id(), "dock event");
    }
}
