//! DOM-backed [`EventHost`].
//!
//! DOM listeners are installed lazily, the first time a channel gains a
//! subscriber, and live as long as the host. Mouse move/up listeners are the
//! exception: they are attached to the document on mouse-down and released
//! on mouse-up, so repeated drags never accumulate listeners.

use crate::WebPlatform;
use gloo::events::{EventListener, EventListenerOptions};
use std::cell::RefCell;
use std::rc::Rc;
use vitrine_core::{
    deliver_if_ready, DragScope, EventChannel, EventHandler, EventHost, EventRegistry,
    HostEvent, PointerEvent, PointerEventKind, ReadyState, WeakDragScope,
};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, MouseEvent, TouchEvent, Window};

type Registry = Rc<RefCell<EventRegistry>>;

/// Document-level listeners for one mouse drag.
struct MouseDrag {
    _move: EventListener,
    _up: EventListener,
}

pub struct WebHost {
    window: Window,
    document: Document,
    track: Option<Element>,
    dots: Vec<Element>,
    platform: WebPlatform,
    registry: Registry,
    installed: Vec<EventChannel>,
    listeners: Vec<EventListener>,
    mouse_drag: DragScope<MouseDrag>,
}

impl WebHost {
    pub fn new(window: Window, document: Document) -> Self {
        Self {
            window,
            document,
            track: None,
            dots: Vec::new(),
            platform: WebPlatform::new(),
            registry: Rc::new(RefCell::new(EventRegistry::new())),
            installed: Vec::new(),
            listeners: Vec::new(),
            mouse_drag: DragScope::new(),
        }
    }

    /// Elements the drag and dot-click channels listen on.
    ///
    /// Must be set before the slider subscribes.
    pub fn with_slider_elements(mut self, track: Option<Element>, dots: Vec<Element>) -> Self {
        self.track = track;
        self.dots = dots;
        self
    }

    pub fn scroll_y(&self) -> f64 {
        self.window.scroll_y().unwrap_or(0.0)
    }

    fn ready_state(&self) -> ReadyState {
        if self.document.ready_state() == "loading" {
            ReadyState::Loading
        } else {
            ReadyState::Loaded
        }
    }

    fn install(&mut self, channel: EventChannel) {
        match channel {
            EventChannel::Ready => self.install_ready(),
            EventChannel::Scroll => self.install_scroll(),
            EventChannel::DragStart => self.install_drag_start(),
            EventChannel::DragMove => self.install_drag_move(),
            EventChannel::DragEnd => self.install_drag_end(),
            EventChannel::DotClick => self.install_dot_clicks(),
        }
    }

    fn install_ready(&mut self) {
        let registry = Rc::clone(&self.registry);
        let window = self.window.clone();
        let listener = EventListener::once(&self.document, "DOMContentLoaded", move |_event| {
            let scroll_y = window.scroll_y().unwrap_or(0.0);
            registry
                .borrow_mut()
                .dispatch(EventChannel::Ready, &HostEvent::Ready { scroll_y });
        });
        self.listeners.push(listener);
    }

    fn install_scroll(&mut self) {
        let registry = Rc::clone(&self.registry);
        let window = self.window.clone();
        let listener = EventListener::new(&self.window, "scroll", move |_event| {
            let scroll_y = window.scroll_y().unwrap_or(0.0);
            registry
                .borrow_mut()
                .dispatch(EventChannel::Scroll, &HostEvent::Scroll { scroll_y });
        });
        self.listeners.push(listener);
    }

    fn install_drag_start(&mut self) {
        let Some(track) = self.track.clone() else {
            log::warn!("no slider track to listen for drags on");
            return;
        };
        let platform = self.platform;

        let registry = Rc::clone(&self.registry);
        let listener = EventListener::new(&track, "touchstart", move |event: &Event| {
            let Some(event) = event.dyn_ref::<TouchEvent>() else {
                return;
            };
            if let Some(pointer) = platform.touch_event(PointerEventKind::Down, event) {
                dispatch_pointer(&registry, EventChannel::DragStart, pointer, event);
            }
        });
        self.listeners.push(listener);

        let registry = Rc::clone(&self.registry);
        let document = self.document.clone();
        let scope = self.mouse_drag.clone();
        let listener = EventListener::new(&track, "mousedown", move |event: &Event| {
            let Some(event) = event.dyn_ref::<MouseEvent>() else {
                return;
            };
            let pointer = platform.mouse_event(PointerEventKind::Down, event);
            dispatch_pointer(&registry, EventChannel::DragStart, pointer.clone(), event);
            scope.track(&pointer, || {
                begin_mouse_drag(&document, &registry, scope.downgrade(), platform)
            });
        });
        self.listeners.push(listener);
    }

    fn install_drag_move(&mut self) {
        let Some(track) = self.track.clone() else {
            return;
        };
        let platform = self.platform;
        let registry = Rc::clone(&self.registry);
        // Non-passive so horizontal swipes can cancel page scrolling.
        let listener = EventListener::new_with_options(
            &track,
            "touchmove",
            EventListenerOptions::enable_prevent_default(),
            move |event: &Event| {
                let Some(event) = event.dyn_ref::<TouchEvent>() else {
                    return;
                };
                if let Some(pointer) = platform.touch_event(PointerEventKind::Move, event) {
                    dispatch_pointer(&registry, EventChannel::DragMove, pointer, event);
                }
            },
        );
        self.listeners.push(listener);
    }

    fn install_drag_end(&mut self) {
        let Some(track) = self.track.clone() else {
            return;
        };
        let platform = self.platform;
        for (event_type, kind) in [
            ("touchend", PointerEventKind::Up),
            ("touchcancel", PointerEventKind::Cancel),
        ] {
            let registry = Rc::clone(&self.registry);
            let listener = EventListener::new(&track, event_type, move |event: &Event| {
                let Some(event) = event.dyn_ref::<TouchEvent>() else {
                    return;
                };
                if let Some(pointer) = platform.touch_event(kind, event) {
                    dispatch_pointer(&registry, EventChannel::DragEnd, pointer, event);
                }
            });
            self.listeners.push(listener);
        }
    }

    fn install_dot_clicks(&mut self) {
        for (index, dot) in self.dots.iter().enumerate() {
            let registry = Rc::clone(&self.registry);
            let listener = EventListener::new(dot, "click", move |_event| {
                registry
                    .borrow_mut()
                    .dispatch(EventChannel::DotClick, &HostEvent::DotClick { index });
            });
            self.listeners.push(listener);
        }
    }
}

impl EventHost for WebHost {
    fn subscribe(&mut self, channel: EventChannel, handler: EventHandler) {
        let Some(handler) = deliver_if_ready(channel, self.ready_state(), self.scroll_y(), handler)
        else {
            return;
        };

        self.registry.borrow_mut().register(channel, handler);
        if !self.installed.contains(&channel) {
            self.installed.push(channel);
            self.install(channel);
        }
    }
}

impl std::fmt::Debug for WebHost {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WebHost")
            .field("installed", &self.installed)
            .field("listeners", &self.listeners.len())
            .field("dots", &self.dots.len())
            .field("mouse_drag", &self.mouse_drag)
            .finish()
    }
}

fn begin_mouse_drag(
    document: &Document,
    registry: &Registry,
    scope: WeakDragScope<MouseDrag>,
    platform: WebPlatform,
) -> MouseDrag {
    let move_registry = Rc::clone(registry);
    let on_move = EventListener::new_with_options(
        document,
        "mousemove",
        EventListenerOptions::enable_prevent_default(),
        move |event: &Event| {
            let Some(event) = event.dyn_ref::<MouseEvent>() else {
                return;
            };
            let pointer = platform.mouse_event(PointerEventKind::Move, event);
            dispatch_pointer(&move_registry, EventChannel::DragMove, pointer, event);
        },
    );

    let up_registry = Rc::clone(registry);
    let on_up = EventListener::new(document, "mouseup", move |event: &Event| {
        let Some(event) = event.dyn_ref::<MouseEvent>() else {
            return;
        };
        let pointer = platform.mouse_event(PointerEventKind::Up, event);
        dispatch_pointer(&up_registry, EventChannel::DragEnd, pointer, event);
        scope.end();
    });

    MouseDrag {
        _move: on_move,
        _up: on_up,
    }
}

fn dispatch_pointer(registry: &Registry, channel: EventChannel, pointer: PointerEvent, event: &Event) {
    registry
        .borrow_mut()
        .dispatch(channel, &HostEvent::Pointer(pointer.clone()));
    if pointer.is_consumed() {
        event.prevent_default();
    }
}
