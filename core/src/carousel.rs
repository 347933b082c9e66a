/// Delay between the end of a slide transition and re-enabling card clicks.
pub const DRAG_RELEASE_DELAY_MS: u32 = 100;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SlideDirection {
    Prev,
    Next,
}

/// A requested move from one page to another. The caller starts a transition,
/// reports the new index through [`CarouselState::slide_changed`], then ends
/// the transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SlideChange {
    pub from: usize,
    pub to: usize,
}

/// Token handed out when a transition ends. Only the token for the most
/// recent transition may clear the drag flag.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DragRelease {
    epoch: u64,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DragGate {
    dragging: bool,
    epoch: u64,
}

impl DragGate {
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    fn engage(&mut self) {
        self.dragging = true;
        self.epoch = self.epoch.wrapping_add(1);
    }

    fn token(&self) -> DragRelease {
        DragRelease { epoch: self.epoch }
    }

    fn release(&mut self, token: DragRelease) -> bool {
        if token.epoch != self.epoch || !self.dragging {
            return false;
        }
        self.dragging = false;
        true
    }

    fn clear(&mut self) {
        self.dragging = false;
        self.epoch = self.epoch.wrapping_add(1);
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CarouselState {
    active_index: usize,
    page_count: usize,
    drag: DragGate,
}

impl CarouselState {
    pub fn new(page_count: usize) -> Self {
        Self {
            active_index: 0,
            page_count,
            drag: DragGate::default(),
        }
    }

    pub fn active_index(&self) -> usize {
        self.active_index
    }

    pub fn page_count(&self) -> usize {
        self.page_count
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    pub fn can_prev(&self) -> bool {
        self.active_index > 0
    }

    pub fn can_next(&self) -> bool {
        self.active_index + 1 < self.page_count
    }

    pub fn step(&self, direction: SlideDirection) -> Option<SlideChange> {
        match direction {
            SlideDirection::Prev => self.prev(),
            SlideDirection::Next => self.next(),
        }
    }

    pub fn next(&self) -> Option<SlideChange> {
        if !self.can_next() {
            return None;
        }
        Some(SlideChange {
            from: self.active_index,
            to: self.active_index + 1,
        })
    }

    pub fn prev(&self) -> Option<SlideChange> {
        if !self.can_prev() {
            return None;
        }
        Some(SlideChange {
            from: self.active_index,
            to: self.active_index - 1,
        })
    }

    pub fn jump_to(&self, index: usize) -> Option<SlideChange> {
        if index >= self.page_count || index == self.active_index {
            return None;
        }
        Some(SlideChange {
            from: self.active_index,
            to: index,
        })
    }

    /// Records the page now showing. Out-of-range indices clamp to the last
    /// page.
    pub fn slide_changed(&mut self, index: usize) {
        self.active_index = index.min(self.page_count.saturating_sub(1));
    }

    /// Applies a full move: start, index change. The transition end is
    /// reported separately once the slide animation finishes.
    pub fn begin(&mut self, change: SlideChange) {
        self.transition_start();
        self.slide_changed(change.to);
    }

    pub fn transition_start(&mut self) {
        self.drag.engage();
    }

    pub fn transition_end(&self) -> DragRelease {
        self.drag.token()
    }

    /// Clears the drag flag if `token` belongs to the latest transition.
    /// Returns whether the flag changed.
    pub fn release(&mut self, token: DragRelease) -> bool {
        self.drag.release(token)
    }

    pub fn reset(&mut self, page_count: usize) {
        self.page_count = page_count;
        self.active_index = 0;
        self.drag.clear();
    }
}
