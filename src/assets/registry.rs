//! # Asset registry: load-once caching with deterministic eviction.
//!
//! The registry owns one [`AssetRecord`] per registered kind and is the
//! only component that talks to the [`ResourceLoader`]. The controller
//! takes a reference per created instance and returns it when the
//! instance's hide completes.
//!
//! ## Rules
//! - A cached kind never reaches the loader again while referenced.
//! - The count reaching zero evicts the handle; the next load is physical.
//! - `unload_all` is a forced sweep: every record is zeroed at once.
//! - The kind table is owned by this registry instance — controllers do
//!   not share records, and tests may run any number of them side by side.
//!
//! The loader is consulted without the table lock held, matching the
//! crate-wide rule that locks never span external calls.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;

use crate::assets::loader::{ResourceHandle, ResourceLoader};
use crate::assets::record::AssetRecord;
use crate::error::ViewError;
use crate::views::{ViewDescriptor, ViewKind};

/// Reference-counting cache over the external resource loader.
pub struct AssetRegistry {
    loader: Arc<dyn ResourceLoader>,
    records: RwLock<HashMap<ViewKind, AssetRecord>>,
}

impl AssetRegistry {
    pub(crate) fn new(loader: Arc<dyn ResourceLoader>, descriptors: &[ViewDescriptor]) -> Self {
        let records = descriptors
            .iter()
            .map(|d| (d.kind().clone(), AssetRecord::new(d)))
            .collect();
        Self {
            loader,
            records: RwLock::new(records),
        }
    }

    /// True when `kind` was registered at setup.
    pub async fn contains(&self, kind: &ViewKind) -> bool {
        self.records.read().await.contains_key(kind)
    }

    /// True when `kind`'s resource is cached (referenced by at least one
    /// live instance or explicit load).
    pub async fn is_loaded(&self, kind: &ViewKind) -> bool {
        self.records
            .read()
            .await
            .get(kind)
            .is_some_and(AssetRecord::is_loaded)
    }

    /// Current reference count for `kind` (zero for unknown kinds).
    pub async fn ref_count(&self, kind: &ViewKind) -> u32 {
        self.records
            .read()
            .await
            .get(kind)
            .map_or(0, AssetRecord::ref_count)
    }

    /// Takes one reference to `kind`'s resource, loading it on a cache
    /// miss.
    ///
    /// ### Errors
    /// - [`ViewError::UnknownView`] when `kind` was never registered.
    /// - [`ViewError::ResourceMissing`] when the loader returns nothing;
    ///   propagated to the caller and never retried here.
    pub async fn load(&self, kind: &ViewKind) -> Result<ResourceHandle, ViewError> {
        let locator = {
            let mut records = self.records.write().await;
            let record = records.get_mut(kind).ok_or_else(|| ViewError::unknown(kind))?;
            if let Some(handle) = record.retain() {
                return Ok(handle);
            }
            record.locator().clone()
        };

        let Some(handle) = self.loader.load(&locator).await else {
            return Err(ViewError::ResourceMissing {
                kind: kind.clone(),
                locator,
            });
        };

        let mut records = self.records.write().await;
        let record = records.get_mut(kind).ok_or_else(|| ViewError::unknown(kind))?;
        Ok(record.commit(handle))
    }

    /// Returns one reference (or zeroes the count when `force`), evicting
    /// the cached handle at zero. No-op for unknown kinds or counts
    /// already at zero.
    pub async fn unload(&self, kind: &ViewKind, force: bool) {
        if let Some(record) = self.records.write().await.get_mut(kind) {
            record.release(force);
        }
    }

    /// Forced sweep: zeroes every record and evicts every handle.
    pub async fn unload_all(&self) {
        for record in self.records.write().await.values_mut() {
            record.release(true);
        }
    }
}
