//! Swipe recognition for the slider track.
//!
//! Touch and mouse feed the same [`SwipeGesture`]. A session opens on the
//! pointer going down, optionally claims move events so the page does not
//! scroll underneath a horizontal drag, and is evaluated once on release.

use crate::geometry::Point;
use crate::input::{PointerEvent, PointerEventKind, PointerSource};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SwipeDirection {
    /// Leftward drag, reveals the following slide.
    Next,
    /// Rightward drag, reveals the preceding slide.
    Previous,
}

/// Decides whether a drag from `start` to `end` is a committed swipe.
///
/// The horizontal travel must exceed `threshold` and dominate the vertical
/// travel. Anything else is a tap or a vertical scroll and yields `None`.
pub fn evaluate_swipe(start: Point, end: Point, threshold: f32) -> Option<SwipeDirection> {
    let diff_x = start.x - end.x;
    let diff_y = (start.y - end.y).abs();

    if diff_x.abs() > threshold && diff_x.abs() > diff_y {
        if diff_x > 0.0 {
            Some(SwipeDirection::Next)
        } else {
            Some(SwipeDirection::Previous)
        }
    } else {
        None
    }
}

/// Coordinates of the current (or last) drag.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct GestureSession {
    pub start: Point,
    pub end: Point,
    pub is_dragging: bool,
}

#[derive(Debug, Clone)]
pub struct SwipeGesture {
    session: GestureSession,
    threshold: f32,
}

impl SwipeGesture {
    pub fn new(threshold: f32) -> Self {
        Self {
            session: GestureSession::default(),
            threshold,
        }
    }

    pub fn session(&self) -> GestureSession {
        self.session
    }

    pub fn is_dragging(&self) -> bool {
        self.session.is_dragging
    }

    /// Opens a new session, discarding whatever the previous one left behind.
    pub fn start(&mut self, at: Point) {
        self.session = GestureSession {
            start: at,
            end: at,
            is_dragging: true,
        };
    }

    /// Whether a move to `at` should be claimed by the slider.
    ///
    /// Touch moves are claimed only while horizontal travel dominates, so a
    /// vertical swipe keeps scrolling the page. Mouse moves are claimed for
    /// the whole drag.
    pub fn intercepts_move(&self, source: PointerSource, at: Point) -> bool {
        if !self.session.is_dragging {
            return false;
        }
        match source {
            PointerSource::Touch => {
                let (dx, dy) = self.session.start.abs_delta(at);
                dx > dy
            }
            PointerSource::Mouse => true,
        }
    }

    /// Closes the session at `at` and evaluates it.
    ///
    /// Returns `None` without touching the session when no drag is open.
    pub fn finish(&mut self, at: Point) -> Option<SwipeDirection> {
        if !self.session.is_dragging {
            return None;
        }
        self.session.end = at;
        self.session.is_dragging = false;
        let direction = evaluate_swipe(self.session.start, self.session.end, self.threshold);
        log::trace!(
            "swipe from {:?} to {:?} evaluated as {:?}",
            self.session.start,
            self.session.end,
            direction
        );
        direction
    }

    /// Abandons the open session without evaluating it.
    pub fn cancel(&mut self) {
        self.session.is_dragging = false;
    }

    /// Feeds one pointer event through the session.
    ///
    /// Claimed moves are consumed on the event itself; a committed swipe is
    /// returned from the release.
    pub fn handle(&mut self, event: &PointerEvent) -> Option<SwipeDirection> {
        match event.kind {
            PointerEventKind::Down => {
                self.start(event.position);
                None
            }
            PointerEventKind::Move => {
                if self.intercepts_move(event.source, event.position) {
                    event.consume();
                }
                None
            }
            PointerEventKind::Up => self.finish(event.position),
            PointerEventKind::Cancel => {
                self.cancel();
                None
            }
        }
    }
}
