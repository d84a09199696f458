//! Controller events: the milestone data model and the broadcast bus.
//!
//! ## Contents
//! - [`EventKind`], [`Event`] — the six presentation milestones plus
//!   subscriber infrastructure kinds, with global sequence numbers
//! - [`Bus`] — thin wrapper over `tokio::sync::broadcast`
//!
//! ## Quick reference
//! - **Publishers**: the controller (requested/created/show-start and hide
//!   milestones) and its spawned sequence drivers (show/hide completion).
//! - **Consumers**: the controller's subscriber listener (fans out to the
//!   [`SubscriberSet`](crate::SubscriberSet)) and any receiver obtained
//!   from [`ViewController::subscribe`](crate::ViewController::subscribe).

mod bus;
mod event;

pub use bus::Bus;
pub use event::{Event, EventKind};
