//! # The view capability and its display vocabulary.
//!
//! [`View`] is the contract every concrete view implements. The controller
//! drives three hooks:
//! - [`View::on_create`] runs once, synchronously, right after the instance
//!   is attached to its host;
//! - [`View::on_show_start`] begins the entrance presentation. **The hook's
//!   future resolving is the show-complete signal**: the instance stays in
//!   `Showing` until the future resolves, however long that takes;
//! - [`View::on_hide_start`] begins the exit presentation, with the same
//!   completion contract.
//!
//! The default bodies resolve immediately, so a view that overrides nothing
//! completes its show and hide synchronously. A view may hold its future
//! pending on a channel, an animation driver, or anything else; there is no
//! way to abort a hook once started.
//!
//! ## Driving completion from the outside
//! ```rust
//! use std::sync::Arc;
//! use tokio::sync::Notify;
//! use viewvisor::{View, ViewData};
//!
//! struct FadeIn {
//!     finished: Arc<Notify>,
//! }
//!
//! #[async_trait::async_trait]
//! impl View for FadeIn {
//!     async fn on_show_start(&self, _data: Option<ViewData>) {
//!         // Resolves when the animation system calls `finished.notify_one()`.
//!         self.finished.notified().await;
//!     }
//! }
//! ```

use std::any::Any;
use std::sync::Arc;

use async_trait::async_trait;

/// Opaque payload handed to [`View::on_show_start`].
///
/// Downcast to the concrete type the requester agreed on:
/// `data.downcast_ref::<MyParams>()`.
pub type ViewData = Arc<dyn Any + Send + Sync>;

/// Shared handle to a view implementation.
pub type ViewRef = Arc<dyn View>;

/// Display discipline of a view instance.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DisplayMode {
    /// Mutually exclusive, one active controller-wide; changing location
    /// hides the outgoing instance before the incoming one is created.
    Location,
    /// Multiple concurrent, independently lifecycled instances, duplicates
    /// of the same kind included.
    Overlay,
}

/// Where the host places an instance among its siblings.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Placement {
    /// Fixed leading position.
    Leading,
    /// Appended at the end.
    Trailing,
}

/// # The capability every concrete view implements.
///
/// All hooks have defaults: a view that overrides nothing is created,
/// shown, and hidden with synchronous completion.
#[async_trait]
pub trait View: Send + Sync + 'static {
    /// Create hook. Runs once per instance, before the created milestone.
    fn on_create(&self) {}

    /// Begins the entrance presentation.
    ///
    /// The instance transitions to `Active` (and the show-complete
    /// milestone fires) when the returned future resolves. The default
    /// resolves immediately.
    async fn on_show_start(&self, data: Option<ViewData>) {
        let _ = data;
    }

    /// Begins the exit presentation.
    ///
    /// Hide-complete processing (removal from tracking, resource release,
    /// destruction, queued-target creation) runs when the returned future
    /// resolves. The default resolves immediately.
    async fn on_hide_start(&self) {}

    /// Sibling placement the host should use for this view.
    ///
    /// Defaults to the standard rule: locations lead, overlays trail.
    /// Override to swap the ordering for a particular view.
    fn placement(&self, mode: DisplayMode) -> Placement {
        match mode {
            DisplayMode::Location => Placement::Leading,
            DisplayMode::Overlay => Placement::Trailing,
        }
    }
}
