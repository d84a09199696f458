//! # ViewController: orchestrates locations, overlays, and their resources.
//!
//! The controller owns the event bus, the subscriber fan-out, the asset
//! registry, and the tracking state for both display disciplines. It
//! creates instances, drives them through their lifecycle via spawned
//! sequence drivers, and enforces the ordering rule that makes the whole
//! system predictable: **a queued target is never created before its
//! predecessor's hide completes**.
//!
//! ## High-level architecture
//! ```text
//! Requests:
//!   change_location / open_overlay / close_* ──► ViewController
//!         │
//!         ├─ resolve against ControllerState (act now, or park one
//!         │  PendingRequest per discipline)
//!         ├─ AssetRegistry::load (refcounted, cached)
//!         ├─ ViewResource::instantiate ──► ViewInstance (Creating)
//!         ├─ ViewHost::attach + create hook
//!         └─ sequence drivers await the show/hide hooks
//!
//! Event flow:
//!   controller + drivers ── publish(Event) ──► Bus ──► subscriber listener
//!                                               │            └─► SubscriberSet
//!                                               └─► subscribe() receivers
//!
//! Hide-complete processing (per instance, under the state lock):
//!   remove from slot/set ─► release one resource reference ─► destroy
//!        └─► consume the discipline's PendingRequest, if any ─► create next
//! ```
//!
//! ## Rules
//! - Requests fail fast: `UnknownView` is raised before any event or state
//!   change; the other errors surface to the caller of the operation that
//!   tripped them.
//! - One pending target per discipline; newest wins, silently.
//! - Overlays are identified by instance; duplicate kinds are normal.
//! - The state lock never spans a view hook or a loader call.

use std::sync::{Arc, Weak};

use tokio::sync::{broadcast, RwLock};

use crate::assets::AssetRegistry;
use crate::core::sequence;
use crate::core::state::{ControllerState, PendingRequest};
use crate::error::ViewError;
use crate::events::{Bus, Event, EventKind};
use crate::subscribers::SubscriberSet;
use crate::views::{DisplayMode, ViewData, ViewHost, ViewInstance, ViewKind};

/// Wait condition for [`ViewController::open_overlay`].
pub enum OverlayWait {
    /// Open immediately alongside whatever is already showing.
    None,
    /// Close the given overlay instance first; the new overlay is created
    /// when that instance's hide completes. Ignored (immediate open) when
    /// the instance is not currently open.
    UntilClosed(Arc<ViewInstance>),
    /// Close every open overlay first; the new overlay is created by the
    /// first hide that completes after the request. Immediate open when
    /// none are showing.
    UntilAllClosed,
}

/// Orchestrator for one independent view hierarchy.
///
/// Built via [`ViewController::builder`]; cheap to share as `Arc`.
/// In-flight transitions are driven by spawned tasks holding their own
/// strong handle, obtained from the controller's weak self-reference.
pub struct ViewController {
    name: Arc<str>,
    initial_location: Option<ViewKind>,
    bus: Bus,
    subs: Arc<SubscriberSet>,
    registry: AssetRegistry,
    host: Option<Arc<dyn ViewHost>>,
    state: RwLock<ControllerState>,
    self_ref: Weak<ViewController>,
}

impl ViewController {
    /// Starts building a controller from its configuration and resource
    /// loader.
    pub fn builder(
        cfg: crate::config::ControllerConfig,
        loader: Arc<dyn crate::assets::ResourceLoader>,
    ) -> crate::core::builder::ViewControllerBuilder {
        crate::core::builder::ViewControllerBuilder::new(cfg, loader)
    }

    pub(crate) fn new_internal(
        cfg: crate::config::ControllerConfig,
        bus: Bus,
        subs: Arc<SubscriberSet>,
        registry: AssetRegistry,
        host: Option<Arc<dyn ViewHost>>,
        self_ref: Weak<ViewController>,
    ) -> Self {
        Self {
            name: cfg.name,
            initial_location: cfg.initial_location,
            bus,
            subs,
            registry,
            host,
            state: RwLock::new(ControllerState::new()),
            self_ref,
        }
    }

    /// Strong handle for spawned sequence drivers; `None` only while the
    /// controller is being torn down.
    fn strong_self(&self) -> Option<Arc<ViewController>> {
        self.self_ref.upgrade()
    }

    /// Controller name, stamped on every published event.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The asset registry owned by this controller.
    pub fn registry(&self) -> &AssetRegistry {
        &self.registry
    }

    /// Creates an independent receiver for this controller's events.
    pub fn subscribe(&self) -> broadcast::Receiver<Event> {
        self.bus.subscribe()
    }

    /// Applies the configured initial location, if any.
    pub async fn start(&self) -> Result<(), ViewError> {
        let Some(kind) = self.initial_location.clone() else {
            return Ok(());
        };
        self.change_location(&kind, None).await
    }

    // ---------------------------
    // Location requests
    // ---------------------------

    /// Switches the active location to `kind`.
    ///
    /// With no current location the new one is created and shown at once.
    /// Otherwise the request is parked as the pending location target and
    /// the current instance starts hiding; the new instance is created
    /// only when that hide completes. A pending target that was already
    /// parked is silently overwritten.
    ///
    /// ### Errors
    /// - [`ViewError::UnknownView`] — `kind` is not registered; nothing
    ///   else happens.
    /// - [`ViewError::ResourceMissing`] / [`ViewError::MissingViewComponent`]
    ///   — immediate creation failed; the request is already consumed.
    pub async fn change_location(
        &self,
        kind: &ViewKind,
        data: Option<ViewData>,
    ) -> Result<(), ViewError> {
        self.ensure_registered(kind).await?;
        self.publish(
            Event::new(EventKind::ViewRequested)
                .with_view(kind)
                .with_mode(DisplayMode::Location),
        );

        let outgoing = {
            let mut st = self.state.write().await;
            match &st.current_location {
                Some(current) => {
                    let current = current.clone();
                    st.target_location = Some(PendingRequest {
                        kind: kind.clone(),
                        data: data.clone(),
                    });
                    Some(current)
                }
                None => None,
            }
        };

        match outgoing {
            Some(current) => {
                self.begin_hide(&current);
                Ok(())
            }
            None => self
                .create_view(kind.clone(), DisplayMode::Location, data)
                .await
                .map(|_| ()),
        }
    }

    /// Switches the active location without waiting for the outgoing hide.
    ///
    /// The current instance is detached from the slot now and its hide
    /// sequence runs in the background; the new location is created
    /// immediately. Any pending location target is cleared — this request
    /// supersedes it. Intended for forced/instant transitions only.
    pub async fn change_location_immediate(
        &self,
        kind: &ViewKind,
        data: Option<ViewData>,
    ) -> Result<(), ViewError> {
        self.ensure_registered(kind).await?;
        self.publish(
            Event::new(EventKind::ViewRequested)
                .with_view(kind)
                .with_mode(DisplayMode::Location),
        );

        let displaced = {
            let mut st = self.state.write().await;
            st.target_location = None;
            let old = st.current_location.take();
            if let Some(old) = &old {
                st.last_location = Some(old.kind().clone());
            }
            old
        };

        if let Some(old) = displaced {
            self.begin_hide(&old);
        }

        self.create_view(kind.clone(), DisplayMode::Location, data)
            .await
            .map(|_| ())
    }

    // ---------------------------
    // Overlay requests
    // ---------------------------

    /// Opens an overlay of `kind`, optionally after closing others first.
    ///
    /// Overlays are identified by instance: opening the same kind twice
    /// yields two independent instances. When `wait` names work to finish
    /// first and that work actually exists, the request is parked as the
    /// pending overlay target and consumed by the first hide-complete.
    ///
    /// ### Errors
    /// - [`ViewError::UnknownView`] — `kind` is not registered.
    /// - [`ViewError::InvalidState`] — the wait target is not an overlay
    ///   instance.
    /// - [`ViewError::ResourceMissing`] / [`ViewError::MissingViewComponent`]
    ///   — immediate creation failed.
    pub async fn open_overlay(
        &self,
        kind: &ViewKind,
        data: Option<ViewData>,
        wait: OverlayWait,
    ) -> Result<(), ViewError> {
        self.ensure_registered(kind).await?;
        self.publish(
            Event::new(EventKind::ViewRequested)
                .with_view(kind)
                .with_mode(DisplayMode::Overlay),
        );

        match wait {
            OverlayWait::None => self
                .create_view(kind.clone(), DisplayMode::Overlay, data)
                .await
                .map(|_| ()),
            OverlayWait::UntilClosed(target) => {
                if target.mode() != DisplayMode::Overlay {
                    return Err(ViewError::invalid_state(format!(
                        "wait target '{}' is not an overlay instance",
                        target.kind()
                    )));
                }
                let parked = {
                    let mut st = self.state.write().await;
                    if st.overlay_tracked(target.id()) {
                        st.target_overlay = Some(PendingRequest {
                            kind: kind.clone(),
                            data: data.clone(),
                        });
                        true
                    } else {
                        false
                    }
                };
                if parked {
                    self.begin_hide(&target);
                    Ok(())
                } else {
                    self.create_view(kind.clone(), DisplayMode::Overlay, data)
                        .await
                        .map(|_| ())
                }
            }
            OverlayWait::UntilAllClosed => {
                let open = {
                    let mut st = self.state.write().await;
                    if st.overlays.is_empty() {
                        Vec::new()
                    } else {
                        st.target_overlay = Some(PendingRequest {
                            kind: kind.clone(),
                            data: data.clone(),
                        });
                        st.overlays.clone()
                    }
                };
                if open.is_empty() {
                    self.create_view(kind.clone(), DisplayMode::Overlay, data)
                        .await
                        .map(|_| ())
                } else {
                    for overlay in &open {
                        self.begin_hide(overlay);
                    }
                    Ok(())
                }
            }
        }
    }

    /// Hides one overlay instance. No-op when it is not currently open.
    pub async fn close_overlay(&self, instance: &Arc<ViewInstance>) {
        let tracked = self.state.read().await.overlay_tracked(instance.id());
        if tracked {
            self.begin_hide(instance);
        }
    }

    /// Hides every open overlay of `kind`. No-op when none are open.
    pub async fn close_overlay_kind(&self, kind: &ViewKind) {
        let matching: Vec<_> = self
            .state
            .read()
            .await
            .overlays
            .iter()
            .filter(|o| o.kind() == kind)
            .cloned()
            .collect();
        for overlay in &matching {
            self.begin_hide(overlay);
        }
    }

    /// Hides every open overlay. Each instance runs its own independent
    /// hide sequence; there is no combined "all hidden" barrier.
    pub async fn close_all_overlays(&self) {
        let open: Vec<_> = self.state.read().await.overlays.clone();
        for overlay in &open {
            self.begin_hide(overlay);
        }
    }

    // ---------------------------
    // Accessors
    // ---------------------------

    /// The active location instance, if any.
    pub async fn current_location(&self) -> Option<Arc<ViewInstance>> {
        self.state.read().await.current_location.clone()
    }

    /// Kind of the previously displaced location (diagnostic).
    pub async fn last_location(&self) -> Option<ViewKind> {
        self.state.read().await.last_location.clone()
    }

    /// Kind parked as the pending location target, if any.
    pub async fn pending_location(&self) -> Option<ViewKind> {
        let st = self.state.read().await;
        st.target_location.as_ref().map(|p| p.kind.clone())
    }

    /// Kind parked as the pending overlay target, if any.
    pub async fn pending_overlay(&self) -> Option<ViewKind> {
        let st = self.state.read().await;
        st.target_overlay.as_ref().map(|p| p.kind.clone())
    }

    /// Snapshot of the open overlay instances.
    pub async fn overlays(&self) -> Vec<Arc<ViewInstance>> {
        self.state.read().await.overlays.clone()
    }

    /// Number of open overlay instances.
    pub async fn overlay_count(&self) -> usize {
        self.state.read().await.overlays.len()
    }

    /// True when at least one overlay of `kind` is open.
    pub async fn is_overlay_open(&self, kind: &ViewKind) -> bool {
        self.state
            .read()
            .await
            .overlays
            .iter()
            .any(|o| o.kind() == kind)
    }

    // ---------------------------
    // Internals
    // ---------------------------

    pub(crate) fn publish(&self, ev: Event) {
        self.bus.publish(ev.with_controller(self.name.clone()));
    }

    pub(crate) fn spawn_subscriber_listener(&self) {
        let mut rx = self.bus.subscribe();
        let subs = Arc::clone(&self.subs);
        tokio::spawn(async move {
            loop {
                match rx.recv().await {
                    Ok(ev) => subs.emit(&ev),
                    Err(broadcast::error::RecvError::Closed) => break,
                    Err(broadcast::error::RecvError::Lagged(_)) => continue,
                }
            }
        });
    }

    async fn ensure_registered(&self, kind: &ViewKind) -> Result<(), ViewError> {
        if self.registry.contains(kind).await {
            Ok(())
        } else {
            Err(ViewError::unknown(kind))
        }
    }

    /// Creates, tracks, and begins showing one instance of `kind`.
    async fn create_view(
        &self,
        kind: ViewKind,
        mode: DisplayMode,
        data: Option<ViewData>,
    ) -> Result<Arc<ViewInstance>, ViewError> {
        let handle = self.registry.load(&kind).await?;
        let Some(view) = handle.instantiate() else {
            // Give the taken reference back before surfacing the error.
            self.registry.unload(&kind, false).await;
            return Err(ViewError::MissingViewComponent { kind });
        };

        let instance = ViewInstance::new(kind, mode, view);
        if let Some(host) = &self.host {
            host.attach(&instance, instance.view().placement(mode));
        }
        instance.view().on_create();

        {
            let mut st = self.state.write().await;
            match mode {
                DisplayMode::Location => st.current_location = Some(instance.clone()),
                DisplayMode::Overlay => st.overlays.push(instance.clone()),
            }
        }

        self.publish(
            Event::new(EventKind::ViewCreated)
                .with_view(instance.kind())
                .with_mode(mode),
        );

        self.show_instance(&instance, data).await?;
        Ok(instance)
    }

    /// Begins the show sequence for a created (or re-shown) instance.
    pub(crate) async fn show_instance(
        &self,
        instance: &Arc<ViewInstance>,
        data: Option<ViewData>,
    ) -> Result<(), ViewError> {
        if instance.needs_rehide() {
            // Shown again before its previous hide ran: synthesize a
            // hide-complete without destroying, then re-enter the show.
            self.finish_hide(instance, false).await?;
            let _ = self.registry.load(instance.kind()).await?;
            let mut st = self.state.write().await;
            match instance.mode() {
                DisplayMode::Location => {
                    if st.current_location.is_none() {
                        st.current_location = Some(instance.clone());
                    }
                }
                DisplayMode::Overlay => st.overlays.push(instance.clone()),
            }
        }

        instance.mark_showing();
        self.publish(
            Event::new(EventKind::ShowStarting)
                .with_view(instance.kind())
                .with_mode(instance.mode()),
        );
        if let Some(me) = self.strong_self() {
            sequence::drive_show(me, instance.clone(), data);
        }
        Ok(())
    }

    /// Starts the hide sequence; idempotent against instances that are not
    /// currently presented.
    fn begin_hide(&self, instance: &Arc<ViewInstance>) {
        if !instance.try_begin_hide() {
            return;
        }
        self.publish(
            Event::new(EventKind::HideStarting)
                .with_view(instance.kind())
                .with_mode(instance.mode()),
        );
        if let Some(me) = self.strong_self() {
            sequence::drive_hide(me, instance.clone());
        }
    }

    /// Hide-complete processing: removal, resource release, destruction,
    /// and queued-target creation.
    ///
    /// `destroy` is false only for the synthesized hide-complete of a
    /// re-shown instance.
    pub(crate) async fn finish_hide(
        &self,
        instance: &Arc<ViewInstance>,
        destroy: bool,
    ) -> Result<(), ViewError> {
        let pending = {
            let mut st = self.state.write().await;
            let consume = match instance.mode() {
                DisplayMode::Overlay => {
                    if !st.remove_overlay(instance.id()) {
                        return Err(ViewError::invalid_state(format!(
                            "overlay instance of '{}' is not tracked",
                            instance.kind()
                        )));
                    }
                    true
                }
                DisplayMode::Location => {
                    // A location displaced by an immediate switch already
                    // left the slot; it still releases and destroys, but
                    // never consumes the pending target.
                    if st.is_current(instance.id()) {
                        st.current_location = None;
                        st.last_location = Some(instance.kind().clone());
                        true
                    } else {
                        false
                    }
                }
            };
            if consume {
                match instance.mode() {
                    DisplayMode::Overlay => st.target_overlay.take(),
                    DisplayMode::Location => st.target_location.take(),
                }
            } else {
                None
            }
        };

        self.registry.unload(instance.kind(), false).await;

        if destroy {
            if let Some(host) = &self.host {
                host.detach(instance);
            }
            instance.mark_destroyed();
        }

        self.publish(
            Event::new(EventKind::HideCompleted)
                .with_view(instance.kind())
                .with_mode(instance.mode()),
        );

        if let Some(next) = pending {
            Box::pin(self.create_view(next.kind, instance.mode(), next.data))
                .await
                .map(|_| ())?;
        }
        Ok(())
    }
}
