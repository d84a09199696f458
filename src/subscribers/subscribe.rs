//! # Event subscriber trait.
//!
//! [`Subscribe`] is the extension point for plugging UI chrome, analytics,
//! or any other listener into the controller's milestone stream.
//!
//! Each subscriber gets:
//! - a **dedicated worker task** (runs independently),
//! - a **per-subscriber bounded queue** (capacity via
//!   [`Subscribe::queue_capacity`]),
//! - **panic isolation** (panics are caught and reported as
//!   `EventKind::SubscriberPanicked`).
//!
//! ## Rules
//! - A slow subscriber only affects its own queue.
//! - Queue overflow drops the event **for this subscriber only** and
//!   publishes `EventKind::SubscriberOverflow`; others are unaffected.
//! - Events are processed sequentially (FIFO) per subscriber.
//! - Subscribers never block the controller or each other.
//!
//! ## Example
//! ```rust
//! use async_trait::async_trait;
//! use viewvisor::{Event, EventKind, Subscribe};
//!
//! struct OpenCounter;
//!
//! #[async_trait]
//! impl Subscribe for OpenCounter {
//!     async fn on_event(&self, ev: &Event) {
//!         if matches!(ev.kind, EventKind::ShowCompleted) {
//!             // bump a metric, etc.
//!         }
//!     }
//!
//!     fn name(&self) -> &'static str { "open-counter" }
//! }
//! ```

use async_trait::async_trait;

use crate::events::Event;

/// Milestone listener with an isolated worker and bounded queue.
///
/// ### Implementation requirements
/// - Use async I/O; avoid blocking the executor.
/// - Handle errors internally; do not panic.
/// - Never assume a hook completes synchronously: a show-complete may
///   arrive long after the matching show-start.
#[async_trait]
pub trait Subscribe: Send + Sync + 'static {
    /// Processes a single event.
    ///
    /// Called from the subscriber's own worker, never in the publisher's
    /// context. FIFO per subscriber; panics are caught and surfaced as
    /// `EventKind::SubscriberPanicked`.
    async fn on_event(&self, event: &Event);

    /// Name used in logs and overflow/panic events.
    ///
    /// Prefer short descriptive names ("chrome", "analytics"). The
    /// default uses `type_name::<Self>()`, which can be verbose.
    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }

    /// Preferred queue capacity (clamped to ≥ 1). Default: 1024.
    fn queue_capacity(&self) -> usize {
        1024
    }
}
