//! # Host seam: where instances are attached for presentation.
//!
//! The controller itself never touches a scene graph. When an instance is
//! created it is handed to the configured [`ViewHost`] together with the
//! [`Placement`](crate::Placement) the view asked for, and handed back on
//! destruction. A headless controller (tests, server-side) simply runs
//! without a host.

use std::sync::Arc;

use crate::views::instance::ViewInstance;
use crate::views::view::Placement;

/// Container that presents view instances.
///
/// `attach` is called after instantiation, before the create hook runs;
/// `detach` is called when the instance is destroyed at the end of its hide
/// sequence.
pub trait ViewHost: Send + Sync + 'static {
    /// Places an instance among the host's children.
    fn attach(&self, instance: &Arc<ViewInstance>, placement: Placement);

    /// Removes a destroyed instance from the host's children.
    fn detach(&self, instance: &Arc<ViewInstance>);
}
