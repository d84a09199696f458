//! # Live view instances and their lifecycle state machine.
//!
//! A [`ViewInstance`] is one created view tracked by the controller. Its
//! state word moves through a fixed set of transitions:
//!
//! ```text
//! Creating ──► Showing ──► Active ──► Hiding ──► Destroyed
//!                 │                      ▲
//!                 └──────────────────────┘   (rapid show-then-hide)
//! ```
//!
//! ## Rules
//! - `Showing → Active` happens only when the show hook resolves; the
//!   show-complete milestone fires on this edge and no other.
//! - A hide request is idempotent: it succeeds from `Active` or `Showing`
//!   and is a no-op from every other state.
//! - Nothing leaves `Destroyed`.
//!
//! Transitions use compare-and-swap on an atomic state word, so a late
//! show-hook resolution races harmlessly against an already-started hide:
//! whichever transition committed first wins and the loser is dropped.

use std::sync::atomic::{AtomicU64, AtomicU8, Ordering};

use crate::views::view::{DisplayMode, ViewRef};
use crate::views::ViewKind;

/// Global counter for instance identities.
static INSTANCE_IDS: AtomicU64 = AtomicU64::new(0);

/// Lifecycle state of a view instance.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum ViewState {
    /// Created, create hook not finished or show not begun.
    Creating = 0,
    /// Show hook running; stays here until the hook resolves.
    Showing = 1,
    /// Show finished; fully presented.
    Active = 2,
    /// Hide hook running.
    Hiding = 3,
    /// Hide finished and instance destroyed. Terminal.
    Destroyed = 4,
}

impl ViewState {
    fn from_word(word: u8) -> Self {
        match word {
            0 => ViewState::Creating,
            1 => ViewState::Showing,
            2 => ViewState::Active,
            3 => ViewState::Hiding,
            _ => ViewState::Destroyed,
        }
    }
}

/// One live, created view.
///
/// Instances are identified by [`id`](ViewInstance::id), never by kind:
/// two overlays of the same kind are distinct instances. An instance is a
/// member of exactly one tracking collection (the location slot or the
/// overlay set) from the completion of its create hook until its hide
/// completes, and of neither outside that window.
pub struct ViewInstance {
    id: u64,
    kind: ViewKind,
    mode: DisplayMode,
    state: AtomicU8,
    view: ViewRef,
}

impl ViewInstance {
    pub(crate) fn new(kind: ViewKind, mode: DisplayMode, view: ViewRef) -> std::sync::Arc<Self> {
        std::sync::Arc::new(Self {
            id: INSTANCE_IDS.fetch_add(1, Ordering::Relaxed) + 1,
            kind,
            mode,
            state: AtomicU8::new(ViewState::Creating as u8),
            view,
        })
    }

    /// Process-unique instance identity.
    pub fn id(&self) -> u64 {
        self.id
    }

    /// The kind this instance was created from.
    pub fn kind(&self) -> &ViewKind {
        &self.kind
    }

    /// Display discipline the instance lives under.
    pub fn mode(&self) -> DisplayMode {
        self.mode
    }

    /// Current lifecycle state.
    pub fn state(&self) -> ViewState {
        ViewState::from_word(self.state.load(Ordering::SeqCst))
    }

    /// True while fully presented (`Active`).
    pub fn is_active(&self) -> bool {
        self.state() == ViewState::Active
    }

    /// True while the show hook is still running.
    pub fn is_showing(&self) -> bool {
        self.state() == ViewState::Showing
    }

    pub(crate) fn view(&self) -> &ViewRef {
        &self.view
    }

    /// True when a show request must synthesize a hide-complete first.
    pub(crate) fn needs_rehide(&self) -> bool {
        matches!(self.state(), ViewState::Showing | ViewState::Active)
    }

    /// Enters `Showing` unconditionally (from `Creating`, or after a
    /// synthesized hide-complete).
    pub(crate) fn mark_showing(&self) {
        self.state
            .store(ViewState::Showing as u8, Ordering::SeqCst);
    }

    /// `Showing → Active`. Fails when a hide (or destroy) won the race.
    pub(crate) fn try_activate(&self) -> bool {
        self.state
            .compare_exchange(
                ViewState::Showing as u8,
                ViewState::Active as u8,
                Ordering::SeqCst,
                Ordering::SeqCst,
            )
            .is_ok()
    }

    /// `Active|Showing → Hiding`. Returns false (no-op) from any other
    /// state, which is what makes hide requests idempotent.
    pub(crate) fn try_begin_hide(&self) -> bool {
        for from in [ViewState::Active, ViewState::Showing] {
            if self
                .state
                .compare_exchange(
                    from as u8,
                    ViewState::Hiding as u8,
                    Ordering::SeqCst,
                    Ordering::SeqCst,
                )
                .is_ok()
            {
                return true;
            }
        }
        false
    }

    /// Terminal transition; nothing observes the previous state.
    pub(crate) fn mark_destroyed(&self) {
        self.state
            .store(ViewState::Destroyed as u8, Ordering::SeqCst);
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::views::view::View;

    struct Plain;
    impl View for Plain {}

    fn instance(mode: DisplayMode) -> Arc<ViewInstance> {
        ViewInstance::new(ViewKind::new("menu"), mode, Arc::new(Plain))
    }

    #[test]
    fn fresh_instance_is_creating_with_unique_id() {
        let a = instance(DisplayMode::Location);
        let b = instance(DisplayMode::Overlay);
        assert_eq!(a.state(), ViewState::Creating);
        assert_ne!(a.id(), b.id());
        assert_eq!(b.mode(), DisplayMode::Overlay);
    }

    #[test]
    fn show_then_activate() {
        let v = instance(DisplayMode::Location);
        v.mark_showing();
        assert!(v.is_showing());
        assert!(v.try_activate());
        assert!(v.is_active());
        // A second resolution of the same hook must not re-fire.
        assert!(!v.try_activate());
    }

    #[test]
    fn hide_is_idempotent() {
        let v = instance(DisplayMode::Location);
        // Not yet showing: hide is a no-op.
        assert!(!v.try_begin_hide());

        v.mark_showing();
        assert!(v.try_activate());
        assert!(v.try_begin_hide());
        assert_eq!(v.state(), ViewState::Hiding);
        // Already hiding: no-op.
        assert!(!v.try_begin_hide());

        v.mark_destroyed();
        assert!(!v.try_begin_hide());
        assert_eq!(v.state(), ViewState::Destroyed);
    }

    #[test]
    fn rapid_show_then_hide_skips_active() {
        let v = instance(DisplayMode::Overlay);
        v.mark_showing();
        // Hide lands while the show hook is still pending.
        assert!(v.try_begin_hide());
        // The late show resolution loses the race and must not activate.
        assert!(!v.try_activate());
        assert_eq!(v.state(), ViewState::Hiding);
    }

    #[test]
    fn rehide_needed_only_while_presented() {
        let v = instance(DisplayMode::Location);
        assert!(!v.needs_rehide());
        v.mark_showing();
        assert!(v.needs_rehide());
        assert!(v.try_activate());
        assert!(v.needs_rehide());
        assert!(v.try_begin_hide());
        assert!(!v.needs_rehide());
    }
}
