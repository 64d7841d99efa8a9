//! Testing utilities and harness for Vitrine

pub mod assertions;
pub mod element;
pub mod host;
pub mod rule;

pub use element::FakeElement;
pub use host::FakeHost;
pub use rule::{DragReport, PageTestRule};

