//! View vocabulary: kinds, the view capability, live instances, and the
//! host seam.
//!
//! ## Contents
//! - [`ViewKind`], [`ViewDescriptor`] — registration identity and input
//! - [`View`], [`ViewData`], [`ViewRef`] — the capability concrete views
//!   implement, with default synchronous-complete show/hide
//! - [`ViewInstance`], [`ViewState`] — one live view and its state machine
//! - [`ViewHost`], [`Placement`], [`DisplayMode`] — presentation seam

mod host;
mod instance;
mod kind;
mod view;

pub use host::ViewHost;
pub use instance::{ViewInstance, ViewState};
pub use kind::{ViewDescriptor, ViewKind};
pub use view::{DisplayMode, Placement, View, ViewData, ViewRef};
