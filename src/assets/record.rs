//! # Per-kind asset record: reference count plus cached handle.
//!
//! One record exists per registered kind, owned exclusively by the
//! registry. The record maintains the central caching invariant:
//!
//! ```text
//! handle.is_some()  ⇔  ref_count > 0
//! ```
//!
//! Every load takes a reference, every unload returns one; the cached
//! handle is evicted exactly when the count reaches zero.

use std::sync::Arc;

use crate::assets::loader::ResourceHandle;
use crate::views::{ViewDescriptor, ViewKind};

/// Registry entry for one view kind.
pub struct AssetRecord {
    kind: ViewKind,
    locator: Arc<str>,
    ref_count: u32,
    handle: Option<ResourceHandle>,
}

impl AssetRecord {
    pub(crate) fn new(descriptor: &ViewDescriptor) -> Self {
        Self {
            kind: descriptor.kind().clone(),
            locator: descriptor.locator().clone(),
            ref_count: 0,
            handle: None,
        }
    }

    /// The kind this record belongs to.
    pub fn kind(&self) -> &ViewKind {
        &self.kind
    }

    /// The locator the resource is loaded from.
    pub fn locator(&self) -> &Arc<str> {
        &self.locator
    }

    /// Number of live references to the cached resource.
    pub fn ref_count(&self) -> u32 {
        self.ref_count
    }

    /// True iff a handle is cached (equivalently, `ref_count > 0`).
    pub fn is_loaded(&self) -> bool {
        self.handle.is_some() && self.ref_count > 0
    }

    /// Takes a reference against the cached handle, if one exists.
    pub(crate) fn retain(&mut self) -> Option<ResourceHandle> {
        let handle = self.handle.clone()?;
        self.ref_count += 1;
        Some(handle)
    }

    /// Stores a freshly loaded handle and takes the first reference.
    ///
    /// If a handle is already cached (a load raced this one), the cached
    /// handle wins and the fresh one is dropped.
    pub(crate) fn commit(&mut self, handle: ResourceHandle) -> ResourceHandle {
        match &self.handle {
            Some(cached) => {
                self.ref_count += 1;
                cached.clone()
            }
            None => {
                self.handle = Some(handle.clone());
                self.ref_count = 1;
                handle
            }
        }
    }

    /// Returns one reference (or all of them when `force`), evicting the
    /// cached handle at zero. No-op when already at zero.
    pub(crate) fn release(&mut self, force: bool) {
        if self.ref_count == 0 {
            return;
        }
        self.ref_count = if force { 0 } else { self.ref_count - 1 };
        if self.ref_count == 0 {
            self.handle = None;
        }
    }
}
