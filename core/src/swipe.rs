use crate::carousel::{CarouselState, SlideDirection};

pub const SWIPE_THRESHOLD_PX: f64 = 10.0;
pub const SWIPE_RESISTANCE_RATIO: f64 = 0.85;
pub const SWIPE_COMMIT_RATIO: f64 = 0.5;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SwipeOutcome {
    /// Pointer never travelled past the threshold; treat as a tap.
    Tap,
    /// Gesture engaged but fell short; the track snaps back.
    SnapBack,
    Commit(SlideDirection),
}

/// Horizontal pointer gesture over the carousel track.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SwipeTracker {
    pointer_id: i32,
    start_x: f64,
    current_x: f64,
    engaged: bool,
}

impl SwipeTracker {
    pub fn begin(pointer_id: i32, x: f64) -> Self {
        Self {
            pointer_id,
            start_x: x,
            current_x: x,
            engaged: false,
        }
    }

    pub fn pointer_id(&self) -> i32 {
        self.pointer_id
    }

    pub fn is_engaged(&self) -> bool {
        self.engaged
    }

    /// Feeds a pointer position. Returns true exactly once, on the move that
    /// engages the gesture.
    pub fn update(&mut self, x: f64) -> bool {
        self.current_x = x;
        if self.engaged || self.travel().abs() <= SWIPE_THRESHOLD_PX {
            return false;
        }
        self.engaged = true;
        true
    }

    pub fn travel(&self) -> f64 {
        self.current_x - self.start_x
    }

    /// Visual track offset in pixels. Overscroll past either end grows as
    /// `|travel|^SWIPE_RESISTANCE_RATIO`.
    pub fn offset(&self, carousel: &CarouselState) -> f64 {
        if !self.engaged {
            return 0.0;
        }
        let travel = self.travel();
        let past_start = travel > 0.0 && !carousel.can_prev();
        let past_end = travel < 0.0 && !carousel.can_next();
        if past_start || past_end {
            travel.signum() * travel.abs().powf(SWIPE_RESISTANCE_RATIO)
        } else {
            travel
        }
    }

    pub fn finish(&self, carousel: &CarouselState, slide_width: f64) -> SwipeOutcome {
        if !self.engaged {
            return SwipeOutcome::Tap;
        }
        let travel = self.travel();
        if slide_width <= 0.0 || travel.abs() < slide_width * SWIPE_COMMIT_RATIO {
            return SwipeOutcome::SnapBack;
        }
        let direction = if travel < 0.0 {
            SlideDirection::Next
        } else {
            SlideDirection::Prev
        };
        match carousel.step(direction) {
            Some(_) => SwipeOutcome::Commit(direction),
            None => SwipeOutcome::SnapBack,
        }
    }
}
