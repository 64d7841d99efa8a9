//! Shared thresholds for swipe and scroll handling.
//!
//! Values are in CSS (logical) pixels, the unit the browser reports for
//! `clientX`/`clientY` and `scrollY`.

use std::time::Duration;

/// Minimum horizontal travel, in logical pixels, before a drag on the slider
/// track counts as a swipe.
///
/// The comparison is strict: a drag of exactly this distance is discarded.
/// Horizontal travel must also exceed vertical travel, so a mostly vertical
/// drag that happens to cover this distance sideways still scrolls the page.
pub const SWIPE_THRESHOLD: f32 = 50.0;

/// Vertical scroll offset past which the header is marked as scrolled.
///
/// Strictly greater: an offset of exactly 10 still renders the resting header.
pub const SCROLL_THRESHOLD: f64 = 10.0;

/// Default period between autoplay advances.
pub const DEFAULT_AUTOPLAY_INTERVAL: Duration = Duration::from_millis(5_000);

/// Number of slides the stock page markup ships with.
pub const DEFAULT_TOTAL_SLIDES: usize = 3;
