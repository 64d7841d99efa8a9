//! In-memory host with a manual clock.
//!
//! Events are delivered only when a test dispatches them, and timers fire
//! only when a test advances time, so every run is deterministic.
//!
//! Mouse move and release reach handlers only while a mouse drag is in
//! progress, as with the browser host's document-level listeners.

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;
use vitrine_core::{
    deliver_if_ready, DragScope, EventChannel, EventHandler, EventHost, EventRegistry,
    HostEvent, PointerEvent, PointerEventKind, PointerSource, ReadyState, TimerHost,
    TimerRegistration,
};

/// Document mouse move + mouse up.
const LISTENERS_PER_DRAG: usize = 2;

/// Stands in for the document listeners attached for one mouse drag.
struct DocumentMouseListeners;

struct TimerEntry {
    id: u64,
    period: Duration,
    next_due: Duration,
    tick: Option<Box<dyn FnMut()>>,
}

#[derive(Default)]
struct TimerState {
    now: Duration,
    next_id: u64,
    entries: Vec<TimerEntry>,
}

#[derive(Clone)]
pub struct FakeHost {
    registry: Rc<RefCell<EventRegistry>>,
    timers: Rc<RefCell<TimerState>>,
    ready_state: Rc<Cell<ReadyState>>,
    scroll_y: Rc<Cell<f64>>,
    mouse_drag: DragScope<DocumentMouseListeners>,
}

impl Default for FakeHost {
    fn default() -> Self {
        Self {
            registry: Rc::default(),
            timers: Rc::default(),
            ready_state: Rc::new(Cell::new(ReadyState::Loading)),
            scroll_y: Rc::new(Cell::new(0.0)),
            mouse_drag: DragScope::new(),
        }
    }
}

impl FakeHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks the page loaded at `scroll_y` and delivers the ready event.
    pub fn finish_loading(&self, scroll_y: f64) -> usize {
        self.ready_state.set(ReadyState::Loaded);
        self.scroll_y.set(scroll_y);
        self.dispatch(EventChannel::Ready, HostEvent::Ready { scroll_y })
    }

    pub fn ready_state(&self) -> ReadyState {
        self.ready_state.get()
    }

    pub fn scroll_to(&self, scroll_y: f64) -> usize {
        self.scroll_y.set(scroll_y);
        self.dispatch(EventChannel::Scroll, HostEvent::Scroll { scroll_y })
    }

    /// Delivers a pointer event on the channel for its kind.
    ///
    /// Mouse moves and releases outside a drag have no listener to reach and
    /// are dropped.
    pub fn dispatch_pointer(&self, event: &PointerEvent) -> usize {
        let channel = match event.kind {
            PointerEventKind::Down => EventChannel::DragStart,
            PointerEventKind::Move => EventChannel::DragMove,
            PointerEventKind::Up | PointerEventKind::Cancel => EventChannel::DragEnd,
        };
        if event.source == PointerSource::Mouse
            && event.kind != PointerEventKind::Down
            && !self.mouse_drag.is_active()
        {
            return 0;
        }
        let delivered = self.dispatch(channel, HostEvent::Pointer(event.clone()));
        self.mouse_drag.track(event, || DocumentMouseListeners);
        delivered
    }

    /// Document-level listeners currently attached for a mouse drag.
    pub fn drag_listeners(&self) -> usize {
        if self.mouse_drag.is_active() {
            LISTENERS_PER_DRAG
        } else {
            0
        }
    }

    /// Delivers `event` on `channel`, returning how many handlers ran.
    pub fn dispatch(&self, channel: EventChannel, event: HostEvent) -> usize {
        self.registry.borrow_mut().dispatch(channel, &event)
    }

    pub fn has_handlers(&self, channel: EventChannel) -> bool {
        self.registry.borrow().has_handlers(channel)
    }

    pub fn now(&self) -> Duration {
        self.timers.borrow().now
    }

    pub fn active_timers(&self) -> usize {
        self.timers.borrow().entries.len()
    }

    /// Moves the clock forward by `by`, firing every timer that falls due in
    /// order. Returns the number of ticks delivered.
    pub fn advance(&self, by: Duration) -> usize {
        let target = self.timers.borrow().now + by;
        let mut fired = 0;
        loop {
            let due = {
                let mut guard = self.timers.borrow_mut();
                let state = &mut *guard;
                let next = state
                    .entries
                    .iter()
                    .enumerate()
                    .filter(|(_, entry)| entry.next_due <= target)
                    .min_by_key(|(_, entry)| entry.next_due)
                    .map(|(index, _)| index);
                match next {
                    Some(index) => {
                        let entry = &mut state.entries[index];
                        let due_at = entry.next_due;
                        entry.next_due += entry.period;
                        let fired_entry = (entry.id, entry.tick.take());
                        state.now = due_at;
                        Some(fired_entry)
                    }
                    None => {
                        state.now = target;
                        None
                    }
                }
            };

            let Some((id, tick)) = due else {
                break;
            };
            // The tick runs without the timer table borrowed so it may
            // cancel timers itself.
            if let Some(mut tick) = tick {
                tick();
                fired += 1;
                let mut state = self.timers.borrow_mut();
                if let Some(entry) = state.entries.iter_mut().find(|entry| entry.id == id) {
                    entry.tick = Some(tick);
                }
            }
        }
        fired
    }
}

impl EventHost for FakeHost {
    fn subscribe(&mut self, channel: EventChannel, handler: EventHandler) {
        let Some(handler) =
            deliver_if_ready(channel, self.ready_state.get(), self.scroll_y.get(), handler)
        else {
            return;
        };
        self.registry.borrow_mut().register(channel, handler);
    }
}

impl TimerHost for FakeHost {
    fn set_interval(&mut self, period: Duration, tick: Box<dyn FnMut()>) -> TimerRegistration {
        // A zero period would fire forever within one advance.
        let period = period.max(Duration::from_millis(1));
        let id = {
            let mut state = self.timers.borrow_mut();
            let id = state.next_id;
            state.next_id += 1;
            let next_due = state.now + period;
            state.entries.push(TimerEntry {
                id,
                period,
                next_due,
                tick: Some(tick),
            });
            id
        };
        let timers = Rc::downgrade(&self.timers);
        TimerRegistration::new(move || {
            if let Some(timers) = timers.upgrade() {
                timers.borrow_mut().entries.retain(|entry| entry.id != id);
            }
        })
    }
}

impl std::fmt::Debug for FakeHost {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FakeHost")
            .field("registry", &*self.registry.borrow())
            .field("now", &self.now())
            .field("timers", &self.active_timers())
            .field("ready_state", &self.ready_state())
            .field("drag_listeners", &self.drag_listeners())
            .finish()
    }
}
