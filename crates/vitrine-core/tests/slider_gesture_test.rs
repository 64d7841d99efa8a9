//! Slider driven end to end through the host event channels.

use vitrine_core::{Point, PointerEventKind, PointerSource, SetupError, SliderConfig};
use vitrine_testing::assertions::{assert_only_active, assert_track_shows};
use vitrine_testing::{FakeElement, PageTestRule};

fn mounted() -> (PageTestRule, vitrine_testing::rule::FakeSlider) {
    let mut rule = PageTestRule::new();
    let slider = rule
        .mount_slider(SliderConfig::default())
        .expect("slider mounts over stock markup");
    (rule, slider)
}

#[test]
fn horizontal_touch_swipe_changes_exactly_one_slide() {
    let (rule, slider) = mounted();

    // diff_x = 60, diff_y = 5
    let report = rule.touch_drag(Point::new(200.0, 300.0), Point::new(140.0, 305.0));

    assert_eq!(slider.borrow().current_slide(), 1);
    assert_eq!(report.moves_consumed, report.moves);
    assert_only_active(rule.dots(), "active", 1, "after leftward swipe");
    assert_track_shows(rule.track(), 1, 3, "after leftward swipe");

    rule.touch_drag(Point::new(140.0, 300.0), Point::new(200.0, 295.0));
    assert_eq!(slider.borrow().current_slide(), 0);
}

#[test]
fn short_drag_is_treated_as_a_tap() {
    let (rule, slider) = mounted();

    rule.touch_drag(Point::new(200.0, 300.0), Point::new(170.0, 300.0));

    assert_eq!(slider.borrow().current_slide(), 0);
    assert_only_active(rule.dots(), "active", 0, "after short drag");
}

#[test]
fn vertical_drag_keeps_scrolling_the_page() {
    let (rule, slider) = mounted();

    // diff_x = 60, diff_y = 70
    let report = rule.touch_drag(Point::new(200.0, 300.0), Point::new(140.0, 370.0));

    assert_eq!(slider.borrow().current_slide(), 0);
    assert_eq!(report.moves_consumed, 0, "vertical moves must not be claimed");
}

#[test]
fn mouse_drag_swipes_and_claims_every_move() {
    let (rule, slider) = mounted();

    let report = rule.mouse_drag(Point::new(100.0, 50.0), Point::new(300.0, 60.0));

    assert_eq!(slider.borrow().current_slide(), 2);
    assert_eq!(report.moves_consumed, report.moves);
}

#[test]
fn stray_moves_and_releases_are_ignored() {
    let (rule, slider) = mounted();

    let moved = rule.pointer(
        PointerSource::Mouse,
        PointerEventKind::Move,
        Point::new(10.0, 10.0),
    );
    rule.pointer(
        PointerSource::Mouse,
        PointerEventKind::Up,
        Point::new(500.0, 10.0),
    );

    assert!(!moved.is_consumed());
    assert_eq!(slider.borrow().current_slide(), 0);
    assert!(!slider.borrow().is_dragging());
}

#[test]
fn cancelled_touch_does_not_swipe() {
    let (rule, slider) = mounted();

    rule.pointer(
        PointerSource::Touch,
        PointerEventKind::Down,
        Point::new(300.0, 0.0),
    );
    rule.pointer(
        PointerSource::Touch,
        PointerEventKind::Cancel,
        Point::new(0.0, 0.0),
    );
    rule.pointer(
        PointerSource::Touch,
        PointerEventKind::Up,
        Point::new(0.0, 0.0),
    );

    assert_eq!(slider.borrow().current_slide(), 0);
}

#[test]
fn dot_clicks_jump_directly() {
    let (rule, slider) = mounted();

    for index in [2, 0, 1] {
        assert_eq!(rule.click_dot(index), 1);
        assert_eq!(slider.borrow().current_slide(), index);
        assert_only_active(rule.dots(), "active", index, "after dot click");
        assert_track_shows(rule.track(), index, 3, "after dot click");
    }
}

#[test]
fn out_of_range_dot_click_is_ignored() {
    let (rule, slider) = mounted();
    rule.click_dot(1);

    rule.click_dot(7);

    assert_eq!(slider.borrow().current_slide(), 1);
    assert_only_active(rule.dots(), "active", 1, "after bogus click");
}

#[test]
fn missing_markup_aborts_setup() {
    let mut rule = PageTestRule::new();

    let missing_track = rule.mount_slider_with(None, rule.dots().to_vec(), SliderConfig::default());
    assert_eq!(missing_track.unwrap_err(), SetupError::MissingTrack);

    let missing_dots = rule.mount_slider_with(
        Some(rule.track().clone()),
        rule.dots()[..2].to_vec(),
        SliderConfig::default(),
    );
    assert_eq!(
        missing_dots.unwrap_err(),
        SetupError::DotCountMismatch {
            expected: 3,
            found: 2
        }
    );

    assert_eq!(rule.track().transform(), None, "nothing rendered");
    assert!(!rule
        .host()
        .has_handlers(vitrine_core::EventChannel::DragStart));
}

#[test]
fn custom_slide_count_and_threshold() {
    let mut rule = PageTestRule::with_slides(5);
    let config = SliderConfig {
        total_slides: 5,
        swipe_threshold: 100.0,
        ..SliderConfig::default()
    };
    let slider = rule.mount_slider(config).expect("five slides mount");

    rule.touch_drag(Point::new(300.0, 0.0), Point::new(220.0, 0.0));
    assert_eq!(slider.borrow().current_slide(), 0, "80px is below 100px");

    rule.touch_drag(Point::new(300.0, 0.0), Point::new(150.0, 0.0));
    assert_eq!(slider.borrow().current_slide(), 1);
    assert_track_shows(rule.track(), 1, 5, "fifth-width step");
}

#[test]
fn fake_elements_record_each_refresh() {
    let (rule, _slider) = mounted();
    let dot: &FakeElement = &rule.dots()[0];
    let before = dot.class_writes();

    rule.click_dot(0);

    assert_eq!(dot.class_writes(), before + 1);
}

#[test]
fn mouse_drag_listeners_are_released_on_mouse_up() {
    let (rule, slider) = mounted();

    rule.pointer(
        PointerSource::Mouse,
        PointerEventKind::Down,
        Point::new(300.0, 0.0),
    );
    assert_eq!(rule.host().drag_listeners(), 2);
    rule.pointer(
        PointerSource::Mouse,
        PointerEventKind::Up,
        Point::new(300.0, 0.0),
    );
    assert_eq!(rule.host().drag_listeners(), 0);

    for _ in 0..3 {
        let report = rule.mouse_drag(Point::new(100.0, 0.0), Point::new(300.0, 0.0));
        assert_eq!(report.listeners_left, 0, "repeated drags must not pile up listeners");
    }
    assert_eq!(slider.borrow().current_slide(), 0);

    let late = rule.pointer(
        PointerSource::Mouse,
        PointerEventKind::Move,
        Point::new(0.0, 0.0),
    );
    assert!(!late.is_consumed());
}

#[test]
fn diagonal_ties_and_the_exact_threshold_do_not_swipe() {
    let (rule, slider) = mounted();

    // diff_x = 80, diff_y = 80
    let report = rule.touch_drag(Point::new(200.0, 300.0), Point::new(120.0, 380.0));
    assert_eq!(slider.borrow().current_slide(), 0);
    assert_eq!(report.moves_consumed, 0);

    rule.touch_drag(Point::new(200.0, 300.0), Point::new(150.0, 300.0));
    assert_eq!(slider.borrow().current_slide(), 0, "exactly 50px is not a swipe");

    rule.touch_drag(Point::new(200.0, 300.0), Point::new(149.0, 300.0));
    assert_eq!(slider.borrow().current_slide(), 1);
}
