//! Tracking collections and pending targets.
//!
//! [`ControllerState`] is the controller's single mutual-exclusion domain:
//! the location slot, the overlay set, and the one pending target per
//! discipline all change together under one lock. Locks are never held
//! across view hooks; the suspension between a hook starting and its
//! resolution retains only this bookkeeping.

use std::sync::Arc;

use crate::views::{ViewData, ViewInstance, ViewKind};

/// A queued location or overlay request whose creation is deferred until
/// an in-flight hide sequence completes.
pub(crate) struct PendingRequest {
    pub kind: ViewKind,
    pub data: Option<ViewData>,
}

/// Mutable orchestration state.
///
/// At most one pending target exists per discipline; a newer pending
/// request silently overwrites the older one.
pub(crate) struct ControllerState {
    /// The single active location instance.
    pub current_location: Option<Arc<ViewInstance>>,
    /// Deferred location request, consumed by the outgoing instance's
    /// hide-complete processing.
    pub target_location: Option<PendingRequest>,
    /// Kind of the previously displaced location (diagnostic only).
    pub last_location: Option<ViewKind>,
    /// Open overlay instances; duplicates of a kind are distinct entries.
    pub overlays: Vec<Arc<ViewInstance>>,
    /// Deferred overlay request, consumed by the first overlay
    /// hide-complete after it was queued.
    pub target_overlay: Option<PendingRequest>,
}

impl ControllerState {
    pub fn new() -> Self {
        Self {
            current_location: None,
            target_location: None,
            last_location: None,
            overlays: Vec::new(),
            target_overlay: None,
        }
    }

    /// True when `id` is the active location instance.
    pub fn is_current(&self, id: u64) -> bool {
        self.current_location.as_ref().is_some_and(|c| c.id() == id)
    }

    /// True when `id` is an open overlay.
    pub fn overlay_tracked(&self, id: u64) -> bool {
        self.overlays.iter().any(|o| o.id() == id)
    }

    /// Removes the overlay with `id`; false when it was not tracked.
    pub fn remove_overlay(&mut self, id: u64) -> bool {
        let before = self.overlays.len();
        self.overlays.retain(|o| o.id() != id);
        self.overlays.len() != before
    }
}
