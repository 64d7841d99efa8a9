//! Assertion helpers for page state.

use crate::element::FakeElement;
use vitrine_core::translate_x;

/// Assert that exactly the dot at `expected` carries `class`.
pub fn assert_only_active(dots: &[FakeElement], class: &str, expected: usize, msg: &str) {
    let active: Vec<usize> = dots
        .iter()
        .enumerate()
        .filter(|(_, dot)| dot.has_class(class))
        .map(|(index, _)| index)
        .collect();
    assert_eq!(
        active,
        vec![expected],
        "{}: expected only dot {} to be '{}'",
        msg,
        expected,
        class
    );
}

/// Assert that the track is translated to show slide `index` of `total`.
pub fn assert_track_shows(track: &FakeElement, index: usize, total: usize, msg: &str) {
    let expected = translate_x(-(index as f64) * (100.0 / total as f64));
    assert_eq!(
        track.transform().as_deref(),
        Some(expected.as_str()),
        "{}: track transform",
        msg
    );
}

pub fn assert_has_class(element: &FakeElement, class: &str, msg: &str) {
    assert!(
        element.has_class(class),
        "{}: '{}' missing from {} {:?}",
        msg,
        class,
        element.name(),
        element.classes()
    );
}

pub fn assert_lacks_class(element: &FakeElement, class: &str, msg: &str) {
    assert!(
        !element.has_class(class),
        "{}: '{}' unexpectedly on {}",
        msg,
        class,
        element.name()
    );
}
