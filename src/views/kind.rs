//! # View kind identifiers and registration descriptors.
//!
//! [`ViewKind`] is the opaque, comparable identifier for a view "kind" —
//! the key used by the asset registry and the controller's tracking
//! collections. It is a cheap-to-clone interned string; two controllers may
//! register the same kind names independently (there is no ambient global
//! table).
//!
//! [`ViewDescriptor`] pairs a kind with its resource locator and is the
//! configuration input consumed at controller setup, typically produced by
//! an external authoring layer.

use std::fmt;
use std::sync::Arc;

/// Opaque identifier for a view kind.
///
/// Used as the registry key and carried on lifecycle events. Unique per
/// distinct kind within one controller.
///
/// ## Example
/// ```
/// use viewvisor::ViewKind;
///
/// let a = ViewKind::new("main-menu");
/// let b: ViewKind = "main-menu".into();
/// assert_eq!(a, b);
/// assert_eq!(a.as_str(), "main-menu");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ViewKind(Arc<str>);

impl ViewKind {
    /// Creates a kind from a name.
    pub fn new(name: impl Into<Arc<str>>) -> Self {
        Self(name.into())
    }

    /// Returns the kind name.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ViewKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ViewKind {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for ViewKind {
    fn from(name: String) -> Self {
        Self::new(name)
    }
}

/// Registration record for one view kind: the kind plus the locator its
/// resource is loaded from.
#[derive(Clone, Debug)]
pub struct ViewDescriptor {
    kind: ViewKind,
    locator: Arc<str>,
}

impl ViewDescriptor {
    /// Creates a descriptor.
    ///
    /// ### Parameters
    /// - `kind`: the kind to register
    /// - `locator`: the path handed to the resource loader
    pub fn new(kind: impl Into<ViewKind>, locator: impl Into<Arc<str>>) -> Self {
        Self {
            kind: kind.into(),
            locator: locator.into(),
        }
    }

    /// Returns the registered kind.
    pub fn kind(&self) -> &ViewKind {
        &self.kind
    }

    /// Returns the resource locator.
    pub fn locator(&self) -> &Arc<str> {
        &self.locator
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_compare_by_name() {
        let a = ViewKind::new("menu");
        let b: ViewKind = String::from("menu").into();
        let c = ViewKind::new("shop");
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_eq!(format!("{a}"), "menu");
    }

    #[test]
    fn descriptor_carries_kind_and_locator() {
        let d = ViewDescriptor::new("menu", "ui/menu");
        assert_eq!(d.kind().as_str(), "menu");
        assert_eq!(&**d.locator(), "ui/menu");
    }
}
