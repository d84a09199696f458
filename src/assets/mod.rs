//! Resource records and the reference-counting registry.
//!
//! ## Contents
//! - [`ResourceLoader`], [`ViewResource`], [`ResourceHandle`] — the
//!   external loading boundary (physical I/O lives outside the crate)
//! - [`AssetRecord`] — per-kind `{locator, ref_count, cached handle}`
//! - [`AssetRegistry`] — load / unload / is_loaded / unload_all with the
//!   invariant `handle present ⇔ ref_count > 0`

mod loader;
mod record;
mod registry;

pub use loader::{ResourceHandle, ResourceLoader, ViewResource};
pub use record::AssetRecord;
pub use registry::AssetRegistry;
