//! Error types raised by the view controller and the asset registry.
//!
//! All variants of [`ViewError`] are raised synchronously to the immediate
//! caller of the operation that detected them. Nothing is caught or retried
//! internally, and there is no partial-failure recovery: a request that
//! failed mid-creation has already consumed its pending-target slot, so the
//! caller must re-request explicitly.

use std::sync::Arc;

use thiserror::Error;

use crate::views::ViewKind;

/// # Errors produced by view orchestration.
///
/// Covers caller errors (unregistered kinds, misuse of wait targets) and
/// configuration errors (missing resources, resources without a view).
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum ViewError {
    /// The request referenced a view kind that was never registered.
    ///
    /// Raised before any event is emitted or state is touched.
    #[error("unknown view kind '{kind}'")]
    UnknownView {
        /// The unregistered kind.
        kind: ViewKind,
    },

    /// The registered kind's resource could not be loaded.
    ///
    /// The loader returned nothing for the configured locator. Fatal for
    /// this request; never retried automatically.
    #[error("resource for view '{kind}' not found at '{locator}'")]
    ResourceMissing {
        /// The kind whose resource failed to load.
        kind: ViewKind,
        /// The locator handed to the loader.
        locator: Arc<str>,
    },

    /// The loaded resource does not provide the view capability.
    ///
    /// The partially-created object is discarded (and its resource
    /// reference returned) before this error is raised.
    #[error("resource for view '{kind}' does not provide a view")]
    MissingViewComponent {
        /// The kind whose resource lacks a view.
        kind: ViewKind,
    },

    /// An operation was applied to an instance in a state that cannot
    /// accept it, e.g. hide-complete processing for an untracked instance
    /// or a location view passed as an overlay wait target.
    #[error("invalid state: {reason}")]
    InvalidState {
        /// What was inconsistent.
        reason: String,
    },
}

impl ViewError {
    pub(crate) fn unknown(kind: &ViewKind) -> Self {
        ViewError::UnknownView { kind: kind.clone() }
    }

    pub(crate) fn invalid_state(reason: impl Into<String>) -> Self {
        ViewError::InvalidState {
            reason: reason.into(),
        }
    }

    /// Returns a short stable label (snake_case) for use in logs/metrics.
    ///
    /// # Example
    /// ```
    /// use viewvisor::{ViewError, ViewKind};
    ///
    /// let err = ViewError::UnknownView { kind: ViewKind::new("settings") };
    /// assert_eq!(err.as_label(), "unknown_view");
    /// ```
    pub fn as_label(&self) -> &'static str {
        match self {
            ViewError::UnknownView { .. } => "unknown_view",
            ViewError::ResourceMissing { .. } => "view_resource_missing",
            ViewError::MissingViewComponent { .. } => "missing_view_component",
            ViewError::InvalidState { .. } => "invalid_state",
        }
    }

    /// Returns a human-readable message with details about the error.
    pub fn as_message(&self) -> String {
        match self {
            ViewError::UnknownView { kind } => format!("unknown view kind: {kind}"),
            ViewError::ResourceMissing { kind, locator } => {
                format!("resource missing for {kind} (locator={locator})")
            }
            ViewError::MissingViewComponent { kind } => {
                format!("no view component in resource for {kind}")
            }
            ViewError::InvalidState { reason } => format!("invalid state: {reason}"),
        }
    }
}
