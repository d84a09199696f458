//! # viewvisor
//!
//! **Viewvisor** is a lightweight view presentation orchestration library
//! for Rust.
//!
//! It manages the lifecycle of application views under two independent
//! display disciplines — a mutually exclusive **location** slot and a
//! concurrent **overlay** set — while decoupling *when a view's resource
//! is loaded* from *when its visible lifecycle runs*. Transitions are
//! serialized: an outgoing view always finishes hiding before the view
//! displacing it is created.
//!
//! ## Architecture
//! ### Overview
//! ```text
//!    ┌──────────────────┐  ┌──────────────────┐  ┌──────────────────┐
//!    │  ViewDescriptor  │  │  ViewDescriptor  │  │  ViewDescriptor  │
//!    │ (kind, locator)  │  │ (kind, locator)  │  │ (kind, locator)  │
//!    └────────┬─────────┘  └────────┬─────────┘  └────────┬─────────┘
//!             ▼                     ▼                     ▼
//! ┌──────────────────────────────────────────────────────────────────────┐
//! │  ViewController (per-hierarchy orchestrator)                         │
//! │  - location slot (one current + one pending target)                  │
//! │  - overlay set (many instances + one pending target)                 │
//! │  - AssetRegistry (refcounted resource cache over ResourceLoader)     │
//! │  - Bus (broadcast milestones)                                        │
//! │  - SubscriberSet (fans out to user subscribers)                      │
//! └──────┬──────────────────────┬──────────────────────┬────────────────┘
//!        ▼                      ▼                      ▼
//!   ┌────────────┐        ┌────────────┐        ┌────────────┐
//!   │ show driver│        │ hide driver│        │ hide driver│
//!   │ (awaits    │        │ (awaits    │        │ (awaits    │
//!   │  on_show)  │        │  on_hide)  │        │  on_hide)  │
//!   └─────┬──────┘        └─────┬──────┘        └─────┬──────┘
//!         │ publishes           │ publishes           │
//!         ▼                     ▼                     ▼
//! ┌──────────────────────────────────────────────────────────────────────┐
//! │                      Bus (broadcast channel)                         │
//! └───────────────┬──────────────────────────────────┬───────────────────┘
//!                 ▼                                  ▼
//!        subscriber listener                subscribe() receivers
//!                 │
//!        ┌────────┼────────┐
//!        ▼        ▼        ▼
//!    [queue S1][queue S2][queue SN]   (bounded, one worker each)
//! ```
//!
//! ### Lifecycle
//! ```text
//! change_location(kind) ──► registry.load ──► instantiate ──► attach
//!                            │                                  │
//!                            │ (cache hit: no physical load)    ▼
//!                            │                         on_create()  [Creating]
//!                            │                                  │
//!                            ▼                                  ▼
//!   outgoing current? ── yes ─► park PendingRequest      ShowStarting  [Showing]
//!        │                      begin hide of current           │
//!        no                     (created on its                 ▼
//!        │                       hide-complete)        on_show_start().await
//!        ▼                                                      │
//!   create immediately                                          ▼
//!                                                   ShowCompleted  [Active]
//!
//! hide:  HideStarting [Hiding] ─► on_hide_start().await ─► remove from slot
//!        ─► release resource ref ─► destroy [Destroyed] ─► HideCompleted
//!        ─► create parked target, if any
//! ```
//!
//! ## Features
//! | Area            | Description                                              | Key types / traits                  |
//! |-----------------|----------------------------------------------------------|-------------------------------------|
//! | **Locations**   | One active view, serialized replacement, pending target. | [`ViewController`]                  |
//! | **Overlays**    | Concurrent instances, duplicates, wait conditions.       | [`OverlayWait`]                     |
//! | **Resources**   | Refcounted load-once cache with deterministic eviction.  | [`AssetRegistry`], [`ResourceLoader`] |
//! | **Views**       | Capability trait with default synchronous completion.    | [`View`], [`ViewInstance`]          |
//! | **Events**      | Six ordered milestones, broadcast + subscriber fan-out.  | [`Event`], [`Subscribe`]            |
//! | **Errors**      | Typed, synchronous, never retried internally.            | [`ViewError`]                       |
//!
//! ## Optional features
//! - `logging`: exports a simple built-in [`LogWriter`] _(demo/reference only)_.
//!
//! ## Example
//! ```rust
//! use std::sync::Arc;
//! use viewvisor::{
//!     ControllerConfig, OverlayWait, ResourceHandle, ResourceLoader, View,
//!     ViewController, ViewDescriptor, ViewKind, ViewRef, ViewResource,
//! };
//!
//! struct Menu;
//! impl View for Menu {}
//!
//! struct MenuResource;
//! impl ViewResource for MenuResource {
//!     fn instantiate(&self) -> Option<ViewRef> {
//!         Some(Arc::new(Menu))
//!     }
//! }
//!
//! struct StaticLoader;
//!
//! #[async_trait::async_trait]
//! impl ResourceLoader for StaticLoader {
//!     async fn load(&self, locator: &str) -> Option<ResourceHandle> {
//!         (locator == "ui/menu").then(|| Arc::new(MenuResource) as ResourceHandle)
//!     }
//! }
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<(), viewvisor::ViewError> {
//!     let menu = ViewKind::new("menu");
//!
//!     let mut cfg = ControllerConfig::new("main");
//!     cfg.views.push(ViewDescriptor::new(menu.clone(), "ui/menu"));
//!
//!     let controller = ViewController::builder(cfg, Arc::new(StaticLoader)).build();
//!     let mut events = controller.subscribe();
//!
//!     controller.change_location(&menu, None).await?;
//!     assert!(controller.current_location().await.is_some());
//!
//!     // Overlays open alongside the location, duplicates included.
//!     controller.open_overlay(&menu, None, OverlayWait::None).await?;
//!
//!     let first = events.recv().await.expect("event");
//!     assert_eq!(first.view.as_ref().map(|k| k.as_str()), Some("menu"));
//!     Ok(())
//! }
//! ```

mod assets;
mod config;
mod core;
mod error;
mod events;
mod subscribers;
mod views;

// ---- Public re-exports ----

pub use assets::{AssetRecord, AssetRegistry, ResourceHandle, ResourceLoader, ViewResource};
pub use config::ControllerConfig;
pub use core::{OverlayWait, ViewController, ViewControllerBuilder};
pub use error::ViewError;
pub use events::{Bus, Event, EventKind};
pub use subscribers::{Subscribe, SubscriberSet};
pub use views::{
    DisplayMode, Placement, View, ViewData, ViewDescriptor, ViewHost, ViewInstance, ViewKind,
    ViewRef, ViewState,
};

// Optional: expose a simple built-in logger subscriber (demo/reference).
// Enable with: `--features logging`
#[cfg(feature = "logging")]
pub use subscribers::LogWriter;
