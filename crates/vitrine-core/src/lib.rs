//! Host-agnostic core for the Vitrine page behaviors.
//!
//! Two independent components live here:
//!
//! - [`ScrollHeader`] toggles a class on the page header once the page has
//!   been scrolled past a threshold.
//! - [`Slider`] keeps the active slide index, renders it onto a track and a
//!   row of dots, recognises horizontal swipes and drives optional autoplay.
//!
//! Neither component talks to a browser directly. They subscribe to named
//! [`EventChannel`]s on an [`EventHost`] and write to [`ClassTarget`] /
//! [`TrackSurface`] handles, so the same code runs against the DOM adapter
//! and the in-memory host used by tests.

pub mod autoplay;
pub mod error;
pub mod geometry;
pub mod gesture;
pub mod gesture_constants;
pub mod header;
pub mod host;
pub mod input;
pub mod slider;
pub mod surface;

pub use autoplay::{AutoplayHandle, AutoplayToken};
pub use error::{NavigationError, SetupError};
pub use geometry::Point;
pub use gesture::{evaluate_swipe, GestureSession, SwipeDirection, SwipeGesture};
pub use header::{is_scrolled, HeaderConfig, ScrollHeader};
pub use host::{
    deliver_if_ready, DragScope, EventChannel, EventHandler, EventHost, EventRegistry,
    HostEvent, ReadyState, TimerHost, TimerRegistration, WeakDragScope,
};
pub use input::{PointerEvent, PointerEventKind, PointerSource};
pub use slider::{SharedSlider, Slider, SliderConfig, SliderState};
pub use surface::{translate_x, ClassTarget, TrackSurface};

