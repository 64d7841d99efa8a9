#![deny(missing_docs)]

//! High level entry point for mounting the Vitrine page behaviors with
//! minimal boilerplate.

mod launcher;
pub use launcher::{PageLauncher, PageSettings};

/// Browser runtime (requires the `web` feature).
#[cfg(feature = "web")]
pub mod web;

pub use vitrine_core::gesture_constants::DEFAULT_AUTOPLAY_INTERVAL;
