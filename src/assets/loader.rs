//! # Resource loading boundary.
//!
//! Physical I/O stays outside the crate: the controller only requires
//! "load by locator → handle" and relies on `Drop` for release. A
//! [`ResourceHandle`] is the cached unit the registry reference-counts;
//! when the count reaches zero the registry drops its clone, and dropping
//! the last clone is the release call.
//!
//! A loaded resource is a **factory**: [`ViewResource::instantiate`]
//! produces one fresh view per created instance, so repeated show/hide
//! cycles of the same kind share a single physical load.

use async_trait::async_trait;

use crate::views::ViewRef;

/// Shared handle to one loaded view resource.
pub type ResourceHandle = std::sync::Arc<dyn ViewResource>;

/// A loaded resource that can mint view instances.
pub trait ViewResource: Send + Sync + 'static {
    /// Creates one view from this resource.
    ///
    /// Returns `None` when the resource does not carry the view
    /// capability; the controller surfaces that as
    /// [`MissingViewComponent`](crate::ViewError::MissingViewComponent).
    fn instantiate(&self) -> Option<ViewRef>;
}

/// External loader capability.
///
/// Must be idempotent under repeated loads of an already-cached locator;
/// the registry guarantees it is only consulted while no cached handle
/// exists, so no duplicate physical loads happen while a kind is
/// referenced.
#[async_trait]
pub trait ResourceLoader: Send + Sync + 'static {
    /// Loads the resource at `locator`, or `None` when it does not exist.
    async fn load(&self, locator: &str) -> Option<ResourceHandle>;
}
