use crate::geometry::Point;
use std::cell::Cell;
use std::rc::Rc;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerEventKind {
    Down,
    Move,
    Up,
    Cancel,
}

/// Input pathway an event arrived through.
///
/// Touch and mouse share one gesture session on the slider but differ in how
/// moves are intercepted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PointerSource {
    Touch,
    Mouse,
}

/// Pointer event with consumption tracking.
///
/// A handler consumes an event to claim it for the slider; the host then
/// suppresses the platform default for it (page scrolling, text selection).
#[derive(Clone, Debug)]
pub struct PointerEvent {
    pub kind: PointerEventKind,
    pub source: PointerSource,
    pub position: Point,
    /// Shared via Rc<Cell> so consumption is visible across copies.
    consumed: Rc<Cell<bool>>,
}

impl PointerEvent {
    pub fn new(kind: PointerEventKind, source: PointerSource, position: Point) -> Self {
        Self {
            kind,
            source,
            position,
            consumed: Rc::new(Cell::new(false)),
        }
    }

    pub fn touch(kind: PointerEventKind, position: Point) -> Self {
        Self::new(kind, PointerSource::Touch, position)
    }

    pub fn mouse(kind: PointerEventKind, position: Point) -> Self {
        Self::new(kind, PointerSource::Mouse, position)
    }

    /// Mark this event as consumed so the host prevents the default action.
    pub fn consume(&self) {
        self.consumed.set(true);
    }

    pub fn is_consumed(&self) -> bool {
        self.consumed.get()
    }
}
