//! Event-subscription interface between components and their host.
//!
//! Components never listen to platform events themselves. They register
//! handlers against an [`EventChannel`] on an [`EventHost`], and ask a
//! [`TimerHost`] for repeating timers. The DOM adapter and the test host
//! both implement these traits.

pub mod drag_scope;
pub mod registry;

pub use drag_scope::{DragScope, WeakDragScope};
pub use registry::EventRegistry;

use crate::input::PointerEvent;
use std::time::Duration;

/// Named event streams a host can deliver.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EventChannel {
    /// Page content is ready. Delivered once.
    Ready,
    /// The page scrolled vertically.
    Scroll,
    /// A pointer went down on the slider track.
    DragStart,
    /// A pointer moved during a drag.
    DragMove,
    /// A pointer was released or the drag was cancelled.
    DragEnd,
    /// A slider dot was clicked.
    DotClick,
}

#[derive(Clone, Debug)]
pub enum HostEvent {
    Ready { scroll_y: f64 },
    Scroll { scroll_y: f64 },
    Pointer(PointerEvent),
    DotClick { index: usize },
}

impl HostEvent {
    /// Vertical scroll offset carried by ready and scroll events.
    pub fn scroll_y(&self) -> Option<f64> {
        match self {
            HostEvent::Ready { scroll_y } | HostEvent::Scroll { scroll_y } => Some(*scroll_y),
            _ => None,
        }
    }
}

pub type EventHandler = Box<dyn FnMut(&HostEvent)>;

/// Loading state of the page a host serves.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReadyState {
    Loading,
    Loaded,
}

/// Runs a late [`EventChannel::Ready`] subscriber at once.
///
/// The ready event fires only once, so a handler subscribing after the page
/// loaded would otherwise never run. Returns the handler when it still has to
/// be registered.
pub fn deliver_if_ready(
    channel: EventChannel,
    state: ReadyState,
    scroll_y: f64,
    mut handler: EventHandler,
) -> Option<EventHandler> {
    if channel == EventChannel::Ready && state == ReadyState::Loaded {
        handler(&HostEvent::Ready { scroll_y });
        None
    } else {
        Some(handler)
    }
}

pub trait EventHost {
    /// Registers `handler` for every future event on `channel`.
    ///
    /// Hosts may invoke a [`EventChannel::Ready`] handler immediately when
    /// the page is already ready.
    fn subscribe(&mut self, channel: EventChannel, handler: EventHandler);
}

pub trait TimerHost {
    /// Calls `tick` every `period` until the returned registration is
    /// cancelled or dropped.
    fn set_interval(&mut self, period: Duration, tick: Box<dyn FnMut()>) -> TimerRegistration;
}

/// Keeps a host timer alive; dropping it stops the timer.
pub struct TimerRegistration {
    cancel: Option<Box<dyn FnOnce()>>,
}

impl TimerRegistration {
    pub fn new(cancel: impl FnOnce() + 'static) -> Self {
        Self {
            cancel: Some(Box::new(cancel)),
        }
    }

    pub fn is_active(&self) -> bool {
        self.cancel.is_some()
    }

    pub fn cancel(mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }

    /// Leaves the timer running for the rest of the page's life.
    pub fn forget(mut self) {
        if let Some(cancel) = self.cancel.take() {
            // The cancel closure may own the platform timer; leak it so the
            // timer is never dropped.
            std::mem::forget(cancel);
        }
    }
}

impl std::fmt::Debug for TimerRegistration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TimerRegistration")
            .field("active", &self.is_active())
            .finish()
    }
}

impl Drop for TimerRegistration {
    fn drop(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn dropping_a_registration_cancels_it() {
        let cancelled = Rc::new(Cell::new(0));
        {
            let cancelled = Rc::clone(&cancelled);
            let _registration = TimerRegistration::new(move || cancelled.set(cancelled.get() + 1));
        }
        assert_eq!(cancelled.get(), 1);
    }

    #[test]
    fn explicit_cancel_runs_once() {
        let cancelled = Rc::new(Cell::new(0));
        let registration = {
            let cancelled = Rc::clone(&cancelled);
            TimerRegistration::new(move || cancelled.set(cancelled.get() + 1))
        };
        registration.cancel();
        assert_eq!(cancelled.get(), 1);
    }

    #[test]
    fn forgotten_registration_never_cancels() {
        let cancelled = Rc::new(Cell::new(false));
        let registration = {
            let cancelled = Rc::clone(&cancelled);
            TimerRegistration::new(move || cancelled.set(true))
        };
        registration.forget();
        assert!(!cancelled.get());
    }

    #[test]
    fn late_ready_subscribers_run_immediately() {
        let seen = Rc::new(Cell::new(None));
        let handler = {
            let seen = Rc::clone(&seen);
            Box::new(move |event: &HostEvent| seen.set(event.scroll_y())) as EventHandler
        };

        let pending = deliver_if_ready(EventChannel::Ready, ReadyState::Loaded, 64.0, handler);

        assert!(pending.is_none());
        assert_eq!(seen.get(), Some(64.0));
    }

    #[test]
    fn subscribers_still_wait_while_loading() {
        let ran = Rc::new(Cell::new(false));
        let handler = {
            let ran = Rc::clone(&ran);
            Box::new(move |_: &HostEvent| ran.set(true)) as EventHandler
        };
        let pending = deliver_if_ready(EventChannel::Ready, ReadyState::Loading, 0.0, handler);
        assert!(pending.is_some());

        let scroll = Box::new(|_: &HostEvent| {}) as EventHandler;
        let pending_scroll =
            deliver_if_ready(EventChannel::Scroll, ReadyState::Loaded, 0.0, scroll);
        assert!(pending_scroll.is_some());
        assert!(!ran.get());
    }

    #[test]
    fn scroll_offset_is_read_from_scroll_events_only() {
        assert_eq!(HostEvent::Ready { scroll_y: 4.0 }.scroll_y(), Some(4.0));
        assert_eq!(HostEvent::Scroll { scroll_y: 12.5 }.scroll_y(), Some(12.5));
        assert_eq!(HostEvent::DotClick { index: 1 }.scroll_y(), None);
    }
}
