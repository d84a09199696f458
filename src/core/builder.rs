//! Builder assembling a controller from its parts.

use std::sync::Arc;

use crate::assets::{AssetRegistry, ResourceLoader};
use crate::config::ControllerConfig;
use crate::core::controller::ViewController;
use crate::events::Bus;
use crate::subscribers::{Subscribe, SubscriberSet};
use crate::views::ViewHost;

/// Builder for constructing a [`ViewController`].
///
/// The configuration and resource loader are mandatory; subscribers and a
/// host are optional. `build()` spawns the subscriber workers and the bus
/// listener, so it must be called from within a Tokio runtime.
pub struct ViewControllerBuilder {
    cfg: ControllerConfig,
    loader: Arc<dyn ResourceLoader>,
    subscribers: Vec<Arc<dyn Subscribe>>,
    host: Option<Arc<dyn ViewHost>>,
}

impl ViewControllerBuilder {
    /// Creates a new builder.
    pub fn new(cfg: ControllerConfig, loader: Arc<dyn ResourceLoader>) -> Self {
        Self {
            cfg,
            loader,
            subscribers: Vec::new(),
            host: None,
        }
    }

    /// Sets event subscribers for observability.
    ///
    /// Subscribers receive lifecycle milestones through dedicated workers
    /// with bounded queues; see [`Subscribe`].
    pub fn with_subscribers(mut self, subscribers: Vec<Arc<dyn Subscribe>>) -> Self {
        self.subscribers = subscribers;
        self
    }

    /// Sets the host that presents created instances.
    ///
    /// Without a host the controller runs headless, which is the normal
    /// setup for tests.
    pub fn with_host(mut self, host: Arc<dyn ViewHost>) -> Self {
        self.host = Some(host);
        self
    }

    /// Builds and returns the controller.
    ///
    /// Initializes the event bus, the subscriber workers, and the asset
    /// registry (one record per configured descriptor), then spawns the
    /// bus listener that feeds the subscriber set.
    pub fn build(self) -> Arc<ViewController> {
        let bus = Bus::new(self.cfg.bus_capacity_clamped());
        let subs = Arc::new(SubscriberSet::new(self.subscribers, bus.clone()));
        let registry = AssetRegistry::new(self.loader, &self.cfg.views);

        let controller = Arc::new_cyclic(|weak| {
            ViewController::new_internal(self.cfg, bus, subs, registry, self.host, weak.clone())
        });
        controller.spawn_subscriber_listener();
        controller
    }
}
