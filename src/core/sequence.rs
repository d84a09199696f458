//! # Sequence drivers: one spawned task per in-flight transition.
//!
//! A driver owns exactly one show or hide sequence. It awaits the view's
//! hook — the suspension point where real presentation work (animation,
//! async loading inside the view) happens — and commits the resulting
//! transition when the hook resolves.
//!
//! ```text
//! show:  [ShowStarting published] ──► on_show_start().await ──► Showing→Active
//!                                                               ShowCompleted
//! hide:  [HideStarting published] ──► on_hide_start().await ──► finish_hide()
//!                                                               (removal, release,
//!                                                                destroy, queued target)
//! ```
//!
//! ## Rules
//! - There is no way to abort a driver; a second request for the same slot
//!   overwrites only the pending target, never the in-flight transition.
//! - A show driver whose instance was hidden mid-hook loses the
//!   `Showing → Active` race and publishes nothing.
//! - Errors inside deferred creation have no caller to reach and are
//!   reported on stderr.

use std::sync::Arc;

use crate::core::controller::ViewController;
use crate::events::{Event, EventKind};
use crate::views::{ViewData, ViewInstance};

/// Drives one show transition to completion.
pub(crate) fn drive_show(
    controller: Arc<ViewController>,
    instance: Arc<ViewInstance>,
    data: Option<ViewData>,
) {
    tokio::spawn(async move {
        instance.view().on_show_start(data).await;
        if instance.try_activate() {
            controller.publish(
                Event::new(EventKind::ShowCompleted)
                    .with_view(instance.kind())
                    .with_mode(instance.mode()),
            );
        }
    });
}

/// Drives one hide transition to completion.
pub(crate) fn drive_hide(controller: Arc<ViewController>, instance: Arc<ViewInstance>) {
    tokio::spawn(async move {
        instance.view().on_hide_start().await;
        if let Err(err) = controller.finish_hide(&instance, true).await {
            eprintln!(
                "[viewvisor] hide completion for '{}' failed: {err}",
                instance.kind()
            );
        }
    });
}
