//! Swipeable horizontal slider with dot navigation.
//!
//! [`SliderState`] holds the index arithmetic. [`Slider`] pairs it with the
//! track and dot handles, re-rendering both after every change, and owns
//! the [`SwipeGesture`] fed by pointer events.

use crate::autoplay::{AutoplayHandle, AutoplayToken};
use crate::error::{NavigationError, SetupError};
use crate::gesture::{SwipeDirection, SwipeGesture};
use crate::gesture_constants::{DEFAULT_TOTAL_SLIDES, SWIPE_THRESHOLD};
use crate::host::{EventChannel, EventHost, HostEvent, TimerHost};
use crate::input::PointerEvent;
use crate::surface::{translate_x, ClassTarget, TrackSurface};
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

#[derive(Clone, Debug, PartialEq)]
pub struct SliderConfig {
    pub total_slides: usize,
    /// Minimum horizontal travel for a swipe, in logical pixels.
    pub swipe_threshold: f32,
    /// Class carried by the dot of the current slide.
    pub active_class: String,
    /// Skip autoplay ticks while a drag is in progress.
    pub pause_while_dragging: bool,
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self {
            total_slides: DEFAULT_TOTAL_SLIDES,
            swipe_threshold: SWIPE_THRESHOLD,
            active_class: "active".into(),
            pause_while_dragging: false,
        }
    }
}

/// Current slide index over a fixed slide count.
///
/// `current` stays in `[0, total)`: wrapping moves cycle through the range
/// and out-of-range jumps are rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SliderState {
    current: usize,
    total: usize,
}

impl SliderState {
    pub fn new(total: usize) -> Result<Self, SetupError> {
        if total == 0 {
            return Err(SetupError::NoSlides);
        }
        Ok(Self { current: 0, total })
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn go_to(&mut self, index: usize) -> Result<(), NavigationError> {
        if index >= self.total {
            return Err(NavigationError::OutOfRange {
                index,
                total: self.total,
            });
        }
        self.current = index;
        Ok(())
    }

    pub fn advance(&mut self) -> usize {
        self.current = (self.current + 1) % self.total;
        self.current
    }

    pub fn retreat(&mut self) -> usize {
        self.current = if self.current == 0 {
            self.total - 1
        } else {
            self.current - 1
        };
        self.current
    }

    /// Track offset for the current slide, as a percentage of the track.
    pub fn offset_percent(&self) -> f64 {
        -(self.current as f64) * (100.0 / self.total as f64)
    }
}

pub struct Slider<T, D> {
    state: SliderState,
    track: T,
    dots: Vec<D>,
    gesture: SwipeGesture,
    config: SliderConfig,
}

pub type SharedSlider<T, D> = Rc<RefCell<Slider<T, D>>>;

impl<T: TrackSurface, D: ClassTarget> Slider<T, D> {
    /// Builds a slider over `track` and `dots` and renders the first slide.
    ///
    /// Fails when the track is absent or the dot count does not match
    /// `config.total_slides`.
    pub fn new(track: Option<T>, dots: Vec<D>, config: SliderConfig) -> Result<Self, SetupError> {
        let state = SliderState::new(config.total_slides)?;
        let track = track.ok_or(SetupError::MissingTrack)?;
        if dots.len() != state.total() {
            return Err(SetupError::DotCountMismatch {
                expected: state.total(),
                found: dots.len(),
            });
        }

        let slider = Self {
            state,
            track,
            dots,
            gesture: SwipeGesture::new(config.swipe_threshold),
            config,
        };
        slider.update_slider();
        Ok(slider)
    }

    pub fn current_slide(&self) -> usize {
        self.state.current()
    }

    pub fn total_slides(&self) -> usize {
        self.state.total()
    }

    pub fn state(&self) -> SliderState {
        self.state
    }

    pub fn config(&self) -> &SliderConfig {
        &self.config
    }

    pub fn track(&self) -> &T {
        &self.track
    }

    pub fn dots(&self) -> &[D] {
        &self.dots
    }

    pub fn is_dragging(&self) -> bool {
        self.gesture.is_dragging()
    }

    pub fn go_to_slide(&mut self, index: usize) -> Result<(), NavigationError> {
        self.state.go_to(index)?;
        log::debug!("slider jumped to slide {index}");
        self.update_slider();
        Ok(())
    }

    pub fn next_slide(&mut self) {
        let current = self.state.advance();
        log::debug!("slider advanced to slide {current}");
        self.update_slider();
    }

    pub fn prev_slide(&mut self) {
        let current = self.state.retreat();
        log::debug!("slider went back to slide {current}");
        self.update_slider();
    }

    /// Feeds a pointer event to the swipe gesture and applies a committed
    /// swipe.
    pub fn handle_pointer(&mut self, event: &PointerEvent) -> Option<SwipeDirection> {
        let direction = self.gesture.handle(event)?;
        match direction {
            SwipeDirection::Next => self.next_slide(),
            SwipeDirection::Previous => self.prev_slide(),
        }
        Some(direction)
    }

    fn update_slider(&self) {
        self.track
            .set_transform(&translate_x(self.state.offset_percent()));
        let current = self.state.current();
        for (index, dot) in self.dots.iter().enumerate() {
            dot.set_class(&self.config.active_class, index == current);
        }
    }
}

impl<T: TrackSurface + 'static, D: ClassTarget + 'static> Slider<T, D> {
    pub fn into_shared(self) -> SharedSlider<T, D> {
        Rc::new(RefCell::new(self))
    }

    /// Binds the slider to the drag channels and the dot clicks of `host`.
    pub fn attach(slider: &SharedSlider<T, D>, host: &mut impl EventHost) {
        for channel in [
            EventChannel::DragStart,
            EventChannel::DragMove,
            EventChannel::DragEnd,
        ] {
            let slider = Rc::downgrade(slider);
            host.subscribe(
                channel,
                Box::new(move |event: &HostEvent| {
                    let (Some(slider), HostEvent::Pointer(pointer)) = (slider.upgrade(), event)
                    else {
                        return;
                    };
                    slider.borrow_mut().handle_pointer(pointer);
                }),
            );
        }

        let weak = Rc::downgrade(slider);
        host.subscribe(
            EventChannel::DotClick,
            Box::new(move |event: &HostEvent| {
                let (Some(slider), HostEvent::DotClick { index }) = (weak.upgrade(), event) else {
                    return;
                };
                let result = slider.borrow_mut().go_to_slide(*index);
                if let Err(err) = result {
                    log::warn!("ignoring dot click: {err}");
                }
            }),
        );
    }

    /// Advances the slider every `interval` until the handle is cancelled.
    pub fn start_autoplay(
        slider: &SharedSlider<T, D>,
        timers: &mut impl TimerHost,
        interval: Duration,
    ) -> AutoplayHandle {
        let token = AutoplayToken::new();
        let tick_token = token.clone();
        let weak = Rc::downgrade(slider);
        let registration = timers.set_interval(
            interval,
            Box::new(move || {
                if !tick_token.is_active() {
                    return;
                }
                let Some(slider) = weak.upgrade() else {
                    return;
                };
                let mut slider = slider.borrow_mut();
                if slider.config.pause_while_dragging && slider.is_dragging() {
                    log::trace!("autoplay tick skipped during drag");
                    return;
                }
                slider.next_slide();
            }),
        );
        log::debug!("autoplay started every {interval:?}");
        AutoplayHandle::new(token, registration, interval)
    }
}

impl<T, D> std::fmt::Debug for Slider<T, D> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Slider")
            .field("state", &self.state)
            .field("dots", &self.dots.len())
            .field("gesture", &self.gesture)
            .finish()
    }
}
