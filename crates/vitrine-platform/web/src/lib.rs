//! Web platform adapter for Vitrine.
//!
//! Binds the host-agnostic components in `vitrine-core` to the DOM:
//! [`DomElement`] implements the presentational surfaces, [`WebHost`]
//! routes window, document and element events into event channels, and
//! [`WebTimers`] provides repeating timers.

mod element;
mod host;
mod timers;

pub use element::{query_all, DomElement};
pub use host::WebHost;
pub use timers::WebTimers;

use vitrine_core::{Point, PointerEvent, PointerEventKind, PointerSource};
use web_sys::{MouseEvent, TouchEvent};

/// Converts browser input events into [`PointerEvent`]s.
#[derive(Clone, Copy, Debug, Default)]
pub struct WebPlatform;

impl WebPlatform {
    pub fn new() -> Self {
        Self
    }

    pub fn pointer_position(&self, client_x: i32, client_y: i32) -> Point {
        // clientX/clientY are already CSS pixels, the unit thresholds use.
        Point {
            x: client_x as f32,
            y: client_y as f32,
        }
    }

    pub fn mouse_event(&self, kind: PointerEventKind, event: &MouseEvent) -> PointerEvent {
        let position = self.pointer_position(event.client_x(), event.client_y());
        PointerEvent::new(kind, PointerSource::Mouse, position)
    }

    /// Reads the first touch of `event`.
    ///
    /// Releases and cancellations no longer list the lifted finger in
    /// `touches`, so those read `changedTouches` instead.
    pub fn touch_event(&self, kind: PointerEventKind, event: &TouchEvent) -> Option<PointerEvent> {
        let touches = match TouchListKind::for_event(kind) {
            TouchListKind::Changed => event.changed_touches(),
            TouchListKind::Active => event.touches(),
        };
        let touch = touches.get(0)?;
        let position = self.pointer_position(touch.client_x(), touch.client_y());
        Some(PointerEvent::new(kind, PointerSource::Touch, position))
    }
}

/// Which `TouchEvent` list carries the finger an event is about.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum TouchListKind {
    /// `touches`: fingers still on the surface.
    Active,
    /// `changedTouches`: fingers that changed in this event.
    Changed,
}

impl TouchListKind {
    fn for_event(kind: PointerEventKind) -> Self {
        match kind {
            PointerEventKind::Up | PointerEventKind::Cancel => TouchListKind::Changed,
            PointerEventKind::Down | PointerEventKind::Move => TouchListKind::Active,
        }
    }
}
