//! Event subscribers: the listener trait and the fan-out set.
//!
//! ## Contents
//! - [`Subscribe`] — listener trait with isolated worker + bounded queue
//! - [`SubscriberSet`] — non-blocking fan-out used by the controller's
//!   bus listener
//! - `LogWriter` — built-in stdout printer (feature `logging`)

#[cfg(feature = "logging")]
mod log;
mod set;
mod subscribe;

#[cfg(feature = "logging")]
pub use log::LogWriter;
pub use set::SubscriberSet;
pub use subscribe::Subscribe;
