//! # Broadcast channel for controller events.
//!
//! [`Bus`] is a thin wrapper around [`tokio::sync::broadcast`]. The
//! controller and its sequence drivers publish milestones onto it; the
//! subscriber listener and any number of direct receivers consume them.
//!
//! ## Rules
//! - **Non-blocking publish**: `publish()` never blocks or awaits.
//! - **Bounded capacity**: one ring buffer shared by all receivers.
//! - **Lag handling**: a slow receiver observes `RecvError::Lagged(n)` and
//!   skips the `n` oldest events.
//! - **No persistence**: events published while no receiver exists are
//!   dropped.

use tokio::sync::broadcast;

use super::event::Event;

/// Broadcast channel for controller events.
///
/// Cheap to clone (the sender is `Arc`-backed); every receiver observes
/// each event published after it subscribed.
#[derive(Clone, Debug)]
pub struct Bus {
    tx: broadcast::Sender<Event>,
}

impl Bus {
    /// Creates a bus with the given ring capacity (clamped to ≥ 1).
    pub fn new(capacity: usize) -> Self {
        let (tx, _rx) = broadcast::channel::<Event>(capacity.max(1));
        Self { tx }
    }

    /// Publishes an event to all active receivers.
    ///
    /// Returns immediately; if there are no receivers the event is
    /// dropped.
    pub fn publish(&self, ev: Event) {
        let _ = self.tx.send(ev);
    }

    /// Creates an independent receiver observing subsequent events.
    pub fn subscribe(&self) -> broadcast::Receiver<Event> {
        self.tx.subscribe()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::EventKind;

    #[tokio::test]
    async fn receivers_observe_published_events() {
        let bus = Bus::new(8);
        let mut rx = bus.subscribe();

        bus.publish(Event::new(EventKind::ViewRequested));
        bus.publish(Event::new(EventKind::ViewCreated));

        assert_eq!(rx.recv().await.expect("recv").kind, EventKind::ViewRequested);
        assert_eq!(rx.recv().await.expect("recv").kind, EventKind::ViewCreated);
    }

    #[tokio::test]
    async fn publish_without_receivers_is_dropped() {
        let bus = Bus::new(1);
        bus.publish(Event::new(EventKind::ViewRequested));

        // A receiver created afterwards starts from the next event.
        let mut rx = bus.subscribe();
        bus.publish(Event::new(EventKind::ViewCreated));
        assert_eq!(rx.recv().await.expect("recv").kind, EventKind::ViewCreated);
    }
}
