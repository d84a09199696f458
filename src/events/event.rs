//! # Lifecycle events published by the view controller.
//!
//! [`EventKind`] names the six presentation milestones, in the causal order
//! the state machine produces them:
//!
//! ```text
//! ViewRequested → ViewCreated → ShowStarting → ShowCompleted
//!                                   ...        HideStarting → HideCompleted
//! ```
//!
//! plus two infrastructure kinds reporting subscriber trouble. Each
//! milestone carries the source controller's name, the view kind, and the
//! display mode.
//!
//! ## Ordering guarantees
//! Every event gets a globally unique sequence number (`seq`) that grows
//! monotonically. Delivery matches the causal order of the state machine;
//! use `seq` to restore the total order if a transport reorders events.
//! Listeners must never assume a hook they did not trigger completes
//! synchronously — a show-complete may arrive arbitrarily long after the
//! show-start.
//!
//! ## Example
//! ```rust
//! use viewvisor::{DisplayMode, Event, EventKind, ViewKind};
//!
//! let ev = Event::new(EventKind::ShowStarting)
//!     .with_view(&ViewKind::new("shop"))
//!     .with_mode(DisplayMode::Overlay);
//!
//! assert_eq!(ev.kind, EventKind::ShowStarting);
//! assert_eq!(ev.view.as_ref().map(|k| k.as_str()), Some("shop"));
//! assert!(ev.is_milestone());
//! ```

use std::sync::atomic::{AtomicU64, Ordering as AtomicOrdering};
use std::sync::Arc;
use std::time::SystemTime;

use crate::views::{DisplayMode, ViewKind};

/// Global sequence counter for event ordering.
static EVENT_SEQ: AtomicU64 = AtomicU64::new(0);

/// Classification of controller events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    // === Subscriber infrastructure ===
    /// Subscriber panicked during event processing.
    ///
    /// Sets:
    /// - `view`: subscriber name (reused field)
    /// - `reason`: panic info/message
    SubscriberPanicked,

    /// Subscriber dropped an event (queue full or worker closed).
    ///
    /// Sets:
    /// - `view`: subscriber name (reused field)
    /// - `reason`: reason string (`"full"`, `"closed"`)
    SubscriberOverflow,

    // === Presentation milestones ===
    /// A location change or overlay open was accepted.
    ///
    /// Emitted before anything else happens for the request, including
    /// when the eventual creation is deferred behind a running hide.
    ///
    /// Sets: `controller`, `view`, `mode`.
    ViewRequested,

    /// An instance was created: resource loaded, view instantiated,
    /// create hook finished.
    ///
    /// Sets: `controller`, `view`, `mode`.
    ViewCreated,

    /// The show hook was started.
    ///
    /// Sets: `controller`, `view`, `mode`.
    ShowStarting,

    /// The show hook resolved; the instance is now active. Fires only on
    /// the `Showing → Active` edge — an instance hidden mid-show never
    /// produces this.
    ///
    /// Sets: `controller`, `view`, `mode`.
    ShowCompleted,

    /// The hide hook was started.
    ///
    /// Sets: `controller`, `view`, `mode`.
    HideStarting,

    /// The hide hook resolved and hide-complete processing ran: the
    /// instance left its tracking collection and one resource reference
    /// was returned.
    ///
    /// Sets: `controller`, `view`, `mode`.
    HideCompleted,
}

/// Controller event with optional metadata.
///
/// - `seq`: monotonic global sequence for ordering
/// - `at`: wall-clock timestamp (for logs)
/// - remaining fields are set depending on the [`EventKind`]
#[derive(Clone, Debug)]
pub struct Event {
    /// Globally unique, monotonically increasing sequence number.
    pub seq: u64,
    /// Wall-clock timestamp.
    pub at: SystemTime,
    /// Event classification.
    pub kind: EventKind,
    /// Name of the controller that produced the event.
    pub controller: Option<Arc<str>>,
    /// View kind the event concerns (subscriber name for infra kinds).
    pub view: Option<ViewKind>,
    /// Display discipline of the instance concerned.
    pub mode: Option<DisplayMode>,
    /// Human-readable detail (panic info, overflow cause).
    pub reason: Option<Arc<str>>,
}

impl Event {
    /// Creates a new event of the given kind with the current timestamp
    /// and the next sequence number.
    pub fn new(kind: EventKind) -> Self {
        Self {
            seq: EVENT_SEQ.fetch_add(1, AtomicOrdering::Relaxed),
            at: SystemTime::now(),
            kind,
            controller: None,
            view: None,
            mode: None,
            reason: None,
        }
    }

    /// Attaches the producing controller's name.
    #[inline]
    pub fn with_controller(mut self, name: impl Into<Arc<str>>) -> Self {
        self.controller = Some(name.into());
        self
    }

    /// Attaches the view kind.
    #[inline]
    pub fn with_view(mut self, kind: &ViewKind) -> Self {
        self.view = Some(kind.clone());
        self
    }

    /// Attaches the display mode.
    #[inline]
    pub fn with_mode(mut self, mode: DisplayMode) -> Self {
        self.mode = Some(mode);
        self
    }

    /// Attaches a human-readable reason.
    #[inline]
    pub fn with_reason(mut self, reason: impl Into<Arc<str>>) -> Self {
        self.reason = Some(reason.into());
        self
    }

    /// True for the six presentation milestones (i.e. not subscriber
    /// infrastructure).
    pub fn is_milestone(&self) -> bool {
        !matches!(
            self.kind,
            EventKind::SubscriberOverflow | EventKind::SubscriberPanicked
        )
    }

    /// Creates a subscriber overflow event.
    #[inline]
    pub(crate) fn subscriber_overflow(subscriber: &'static str, reason: &'static str) -> Self {
        Event::new(EventKind::SubscriberOverflow)
            .with_view(&ViewKind::new(subscriber))
            .with_reason(reason)
    }

    /// Creates a subscriber panic event.
    #[inline]
    pub(crate) fn subscriber_panicked(subscriber: &'static str, info: String) -> Self {
        Event::new(EventKind::SubscriberPanicked)
            .with_view(&ViewKind::new(subscriber))
            .with_reason(info)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sequence_numbers_increase() {
        let a = Event::new(EventKind::ViewRequested);
        let b = Event::new(EventKind::ViewCreated);
        assert!(b.seq > a.seq);
    }

    #[test]
    fn milestones_exclude_subscriber_kinds() {
        assert!(Event::new(EventKind::HideCompleted).is_milestone());
        assert!(!Event::subscriber_overflow("log", "full").is_milestone());
        assert!(!Event::subscriber_panicked("log", "boom".into()).is_milestone());
    }

    #[test]
    fn builders_attach_metadata() {
        let ev = Event::new(EventKind::ViewRequested)
            .with_controller("hud")
            .with_view(&ViewKind::new("menu"))
            .with_mode(DisplayMode::Location)
            .with_reason("why not");
        assert_eq!(ev.controller.as_deref(), Some("hud"));
        assert_eq!(ev.view.as_ref().map(|k| k.as_str()), Some("menu"));
        assert_eq!(ev.mode, Some(DisplayMode::Location));
        assert_eq!(ev.reason.as_deref(), Some("why not"));
    }
}
