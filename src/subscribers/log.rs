//! # LogWriter — simple milestone printer.
//!
//! A minimal subscriber that prints incoming [`Event`]s to stdout. Use it
//! for tests or demos.
//!
//! ## Example output
//! ```text
//! [requested] controller="main" view="menu" mode=Location
//! [created] controller="main" view="menu" mode=Location
//! [show-start] controller="main" view="menu" mode=Location
//! [show-complete] controller="main" view="menu" mode=Location
//! [hide-start] controller="main" view="menu" mode=Location
//! [hide-complete] controller="main" view="menu" mode=Location
//! ```

use async_trait::async_trait;

use crate::events::{Event, EventKind};
use crate::subscribers::Subscribe;

/// Milestone printer subscriber.
#[derive(Default)]
pub struct LogWriter;

impl LogWriter {
    /// Constructs a new [`LogWriter`].
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

fn line(tag: &str, e: &Event) {
    println!(
        "[{tag}] controller={:?} view={:?} mode={:?}",
        e.controller.as_deref().unwrap_or("?"),
        e.view.as_ref().map(|k| k.as_str()).unwrap_or("?"),
        e.mode,
    );
}

#[async_trait]
impl Subscribe for LogWriter {
    async fn on_event(&self, e: &Event) {
        match e.kind {
            EventKind::ViewRequested => line("requested", e),
            EventKind::ViewCreated => line("created", e),
            EventKind::ShowStarting => line("show-start", e),
            EventKind::ShowCompleted => line("show-complete", e),
            EventKind::HideStarting => line("hide-start", e),
            EventKind::HideCompleted => line("hide-complete", e),
            EventKind::SubscriberOverflow => {
                println!(
                    "[subscriber-overflow] subscriber={:?} reason={:?}",
                    e.view.as_ref().map(|k| k.as_str()),
                    e.reason.as_deref(),
                );
            }
            EventKind::SubscriberPanicked => {
                println!(
                    "[subscriber-panicked] subscriber={} info={}",
                    e.view.as_ref().map(|k| k.as_str()).unwrap_or("unknown"),
                    e.reason.as_deref().unwrap_or("unknown"),
                );
            }
        }
    }

    fn name(&self) -> &'static str {
        "LogWriter"
    }
}
