//! # Controller configuration.
//!
//! [`ControllerConfig`] carries everything a controller needs at setup:
//! its name (stamped on every event it publishes), the event bus capacity,
//! the view descriptors produced by the authoring layer, and an optional
//! starting location applied by
//! [`ViewController::start`](crate::ViewController::start).
//!
//! # Example
//! ```
//! use viewvisor::{ControllerConfig, ViewDescriptor, ViewKind};
//!
//! let mut cfg = ControllerConfig::new("hud");
//! cfg.views.push(ViewDescriptor::new("menu", "ui/menu"));
//! cfg.views.push(ViewDescriptor::new("shop", "ui/shop"));
//! cfg.initial_location = Some(ViewKind::new("menu"));
//!
//! assert_eq!(&*cfg.name, "hud");
//! assert_eq!(cfg.views.len(), 2);
//! ```

use std::sync::Arc;

use crate::views::{ViewDescriptor, ViewKind};

/// Setup input for one [`ViewController`](crate::ViewController).
#[derive(Clone, Debug)]
pub struct ControllerConfig {
    /// Controller name carried on every published event.
    pub name: Arc<str>,
    /// Capacity of the event bus ring (clamped to ≥ 1).
    pub bus_capacity: usize,
    /// Registered view kinds and their resource locators, in registration
    /// order.
    pub views: Vec<ViewDescriptor>,
    /// Location applied by `start()`, if any.
    pub initial_location: Option<ViewKind>,
}

impl Default for ControllerConfig {
    /// Provides a default configuration:
    /// - `name = "main"`
    /// - `bus_capacity = 1024`
    /// - no views, no initial location
    fn default() -> Self {
        Self {
            name: Arc::from("main"),
            bus_capacity: 1024,
            views: Vec::new(),
            initial_location: None,
        }
    }
}

impl ControllerConfig {
    /// Creates a default configuration with the given controller name.
    pub fn new(name: impl Into<Arc<str>>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub(crate) fn bus_capacity_clamped(&self) -> usize {
        self.bus_capacity.max(1)
    }
}
