use folio_core::swipe::{SWIPE_RESISTANCE_RATIO, SWIPE_THRESHOLD_PX};
use folio_core::{CarouselState, SlideDirection, SwipeOutcome, SwipeTracker};

const SLIDE_WIDTH: f64 = 360.0;

fn assert_close(actual: f64, expected: f64) {
    let delta = (actual - expected).abs();
    assert!(
        delta <= 1e-9,
        "expected {:.6} got {:.6} (delta {:.6})",
        expected,
        actual,
        delta
    );
}

#[test]
fn short_travel_stays_a_tap() {
    let carousel = CarouselState::new(3);
    let mut swipe = SwipeTracker::begin(1, 200.0);
    assert!(!swipe.update(200.0 - SWIPE_THRESHOLD_PX));
    assert!(!swipe.is_engaged());
    assert_close(swipe.offset(&carousel), 0.0);
    assert_eq!(swipe.finish(&carousel, SLIDE_WIDTH), SwipeOutcome::Tap);
}

#[test]
fn engages_once_past_threshold() {
    let mut swipe = SwipeTracker::begin(1, 200.0);
    assert!(swipe.update(189.0));
    assert!(!swipe.update(150.0));
    assert!(swipe.is_engaged());
}

#[test]
fn long_left_swipe_commits_next() {
    let carousel = CarouselState::new(3);
    let mut swipe = SwipeTracker::begin(4, 300.0);
    swipe.update(300.0 - SLIDE_WIDTH * 0.6);
    assert_eq!(
        swipe.finish(&carousel, SLIDE_WIDTH),
        SwipeOutcome::Commit(SlideDirection::Next)
    );
}

#[test]
fn half_hearted_swipe_snaps_back() {
    let carousel = CarouselState::new(3);
    let mut swipe = SwipeTracker::begin(4, 300.0);
    swipe.update(300.0 - 40.0);
    assert_eq!(swipe.finish(&carousel, SLIDE_WIDTH), SwipeOutcome::SnapBack);
}

#[test]
fn swipe_past_last_page_snaps_back_with_resistance() {
    let mut carousel = CarouselState::new(2);
    carousel.slide_changed(1);
    let mut swipe = SwipeTracker::begin(2, 400.0);
    swipe.update(100.0);
    let offset = swipe.offset(&carousel);
    assert_close(offset, -(300.0_f64.powf(SWIPE_RESISTANCE_RATIO)));
    assert!(offset < 0.0 && offset > -300.0);
    assert_eq!(swipe.finish(&carousel, SLIDE_WIDTH), SwipeOutcome::SnapBack);
}

#[test]
fn right_swipe_from_middle_commits_prev_without_damping() {
    let mut carousel = CarouselState::new(3);
    carousel.slide_changed(1);
    let mut swipe = SwipeTracker::begin(2, 50.0);
    swipe.update(300.0);
    assert_close(swipe.offset(&carousel), 250.0);
    assert_eq!(
        swipe.finish(&carousel, SLIDE_WIDTH),
        SwipeOutcome::Commit(SlideDirection::Prev)
    );
}
