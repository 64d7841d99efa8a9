//! Page-level test rule.
//!
//! Owns a [`FakeHost`] plus the fake header, track and dots of the stock
//! page, mounts components onto them and drives them with the same event
//! sequences a browser would produce.

use crate::element::FakeElement;
use crate::host::FakeHost;
use std::rc::Rc;
use std::time::Duration;
use vitrine_core::{
    AutoplayHandle, EventChannel, HeaderConfig, HostEvent, Point, PointerEvent,
    PointerEventKind, PointerSource, ScrollHeader, SetupError, SharedSlider, Slider,
    SliderConfig,
};

pub type FakeSlider = SharedSlider<FakeElement, FakeElement>;

/// What the host observed while replaying a drag.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DragReport {
    /// Move events the slider claimed (the host would prevent their default).
    pub moves_consumed: usize,
    pub moves: usize,
    /// Drag-scoped listeners still attached once the pointer was released.
    pub listeners_left: usize,
}

pub struct PageTestRule {
    host: FakeHost,
    header: FakeElement,
    track: FakeElement,
    dots: Vec<FakeElement>,
}

impl PageTestRule {
    pub fn new() -> Self {
        Self::with_slides(vitrine_core::gesture_constants::DEFAULT_TOTAL_SLIDES)
    }

    pub fn with_slides(count: usize) -> Self {
        let _ = env_logger::builder().is_test(true).try_init();
        Self {
            host: FakeHost::new(),
            header: FakeElement::new("header"),
            track: FakeElement::new("sliderTrack"),
            dots: (0..count)
                .map(|index| FakeElement::new(&format!("dot-{index}")))
                .collect(),
        }
    }

    pub fn host(&self) -> &FakeHost {
        &self.host
    }

    pub fn header(&self) -> &FakeElement {
        &self.header
    }

    pub fn track(&self) -> &FakeElement {
        &self.track
    }

    pub fn dots(&self) -> &[FakeElement] {
        &self.dots
    }

    pub fn mount_header(&mut self, config: HeaderConfig) -> Rc<ScrollHeader<FakeElement>> {
        ScrollHeader::new(self.header.clone(), config).attach(&mut self.host)
    }

    pub fn mount_slider(&mut self, config: SliderConfig) -> Result<FakeSlider, SetupError> {
        self.mount_slider_with(Some(self.track.clone()), self.dots.clone(), config)
    }

    /// Mounts a slider over explicit elements, e.g. to simulate missing
    /// markup.
    pub fn mount_slider_with(
        &mut self,
        track: Option<FakeElement>,
        dots: Vec<FakeElement>,
        config: SliderConfig,
    ) -> Result<FakeSlider, SetupError> {
        let slider = Slider::new(track, dots, config)?.into_shared();
        Slider::attach(&slider, &mut self.host);
        Ok(slider)
    }

    pub fn start_autoplay(&mut self, slider: &FakeSlider, interval: Duration) -> AutoplayHandle {
        Slider::start_autoplay(slider, &mut self.host, interval)
    }

    /// Finishes loading the page at `scroll_y`.
    pub fn ready(&self, scroll_y: f64) -> usize {
        self.host.finish_loading(scroll_y)
    }

    pub fn scroll_to(&self, scroll_y: f64) -> usize {
        self.host.scroll_to(scroll_y)
    }

    pub fn click_dot(&self, index: usize) -> usize {
        self.host
            .dispatch(EventChannel::DotClick, HostEvent::DotClick { index })
    }

    /// Sends a single pointer event and returns it so callers can check
    /// whether it was consumed.
    pub fn pointer(
        &self,
        source: PointerSource,
        kind: PointerEventKind,
        at: Point,
    ) -> PointerEvent {
        let event = PointerEvent::new(kind, source, at);
        self.host.dispatch_pointer(&event);
        event
    }

    /// Replays down, `steps` evenly spaced moves, and up from `from` to `to`.
    pub fn drag(&self, source: PointerSource, from: Point, to: Point, steps: usize) -> DragReport {
        let mut report = DragReport::default();
        self.pointer(source, PointerEventKind::Down, from);
        for step in 1..=steps {
            let t = step as f32 / steps as f32;
            let at = Point::new(from.x + (to.x - from.x) * t, from.y + (to.y - from.y) * t);
            let event = self.pointer(source, PointerEventKind::Move, at);
            report.moves += 1;
            if event.is_consumed() {
                report.moves_consumed += 1;
            }
        }
        self.pointer(source, PointerEventKind::Up, to);
        report.listeners_left = self.host.drag_listeners();
        report
    }

    pub fn touch_drag(&self, from: Point, to: Point) -> DragReport {
        self.drag(PointerSource::Touch, from, to, 4)
    }

    pub fn mouse_drag(&self, from: Point, to: Point) -> DragReport {
        self.drag(PointerSource::Mouse, from, to, 4)
    }

    pub fn advance(&self, by: Duration) -> usize {
        self.host.advance(by)
    }
}

impl Default for PageTestRule {
    fn default() -> Self {
        Self::new()
    }
}
