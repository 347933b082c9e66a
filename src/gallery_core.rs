use std::cell::RefCell;
use std::rc::{Rc, Weak};

use folio_core::{
    activation_target, page_count, section_in_view, CarouselState, HoverPreview, HoverState,
    ProjectRecord, SlideChange, SlideDirection, SwipeOutcome, SwipeTracker, ViewportBucket,
    DRAG_RELEASE_DELAY_MS,
};
use folio_core::viewport::REVEAL_MARGIN_PX;
use gloo::timers::callback::Timeout;

use crate::dom;

/// Duration of the track's slide animation. The track's CSS transition is
/// built from the same value.
pub(crate) const SLIDE_TRANSITION_MS: u32 = 300;

pub(crate) type GallerySubscriber = Rc<dyn Fn()>;

#[derive(Clone, Copy, Debug)]
pub(crate) enum GalleryAction {
    Resize {
        width: f64,
    },
    Step(SlideDirection),
    JumpTo(usize),
    TransitionEnd,
    HoverEnter(&'static ProjectRecord),
    PointerMove {
        x: f64,
        y: f64,
    },
    HoverLeave,
    CardClick(&'static ProjectRecord),
    SwipeBegin {
        pointer_id: i32,
        x: f64,
    },
    SwipeMove {
        pointer_id: i32,
        x: f64,
    },
    SwipeEnd {
        pointer_id: i32,
        slide_width: f64,
    },
    SwipeCancel,
    Reveal {
        top: f64,
        bottom: f64,
        viewport_height: f64,
    },
}

#[derive(Clone, Debug, PartialEq)]
pub(crate) struct GallerySnapshot {
    pub(crate) bucket: ViewportBucket,
    pub(crate) active_index: usize,
    pub(crate) page_count: usize,
    pub(crate) can_prev: bool,
    pub(crate) can_next: bool,
    pub(crate) dragging: bool,
    pub(crate) swipe_offset: f64,
    pub(crate) swiping: bool,
    pub(crate) preview: Option<HoverPreview>,
    pub(crate) tooltip: Option<(f64, f64)>,
    pub(crate) revealed: bool,
}

struct GalleryState {
    projects: &'static [ProjectRecord],
    bucket: ViewportBucket,
    carousel: CarouselState,
    hover: HoverState,
    swipe: Option<SwipeTracker>,
    revealed: bool,
}

impl GalleryState {
    fn new(projects: &'static [ProjectRecord], bucket: ViewportBucket) -> Self {
        Self {
            projects,
            bucket,
            carousel: CarouselState::new(page_count(projects.len(), bucket)),
            hover: HoverState::default(),
            swipe: None,
            revealed: false,
        }
    }

    fn snapshot(&self) -> GallerySnapshot {
        let swipe = self.swipe.filter(SwipeTracker::is_engaged);
        GallerySnapshot {
            bucket: self.bucket,
            active_index: self.carousel.active_index(),
            page_count: self.carousel.page_count(),
            can_prev: self.carousel.can_prev(),
            can_next: self.carousel.can_next(),
            dragging: self.carousel.is_dragging(),
            swipe_offset: swipe
                .map(|swipe| swipe.offset(&self.carousel))
                .unwrap_or(0.0),
            swiping: swipe.is_some(),
            preview: self.hover.preview().copied(),
            tooltip: self.hover.tooltip_position(),
            revealed: self.revealed,
        }
    }
}

/// Owns the gallery's carousel, hover and swipe state plus the timers that
/// finish slide transitions. Views read [`GallerySnapshot`]s and feed
/// [`GalleryAction`]s back in.
pub(crate) struct GalleryCore {
    weak_self: Weak<GalleryCore>,
    state: RefCell<GalleryState>,
    snapshot: RefCell<GallerySnapshot>,
    subscribers: Rc<RefCell<Vec<GallerySubscriber>>>,
    transition_timer: RefCell<Option<Timeout>>,
    release_timer: RefCell<Option<Timeout>>,
}

impl GalleryCore {
    pub(crate) fn new(projects: &'static [ProjectRecord], width: f64) -> Rc<Self> {
        let state = GalleryState::new(projects, ViewportBucket::from_width(width));
        let snapshot = state.snapshot();
        Rc::new_cyclic(|weak_self| Self {
            weak_self: weak_self.clone(),
            state: RefCell::new(state),
            snapshot: RefCell::new(snapshot),
            subscribers: Rc::new(RefCell::new(Vec::new())),
            transition_timer: RefCell::new(None),
            release_timer: RefCell::new(None),
        })
    }

    pub(crate) fn subscribe(&self, subscriber: GallerySubscriber) -> GallerySubscription {
        self.subscribers.borrow_mut().push(subscriber.clone());
        GallerySubscription {
            subscriber,
            subscribers: Rc::clone(&self.subscribers),
        }
    }

    pub(crate) fn snapshot(&self) -> GallerySnapshot {
        self.snapshot.borrow().clone()
    }

    pub(crate) fn apply_action(&self, action: GalleryAction) {
        let changed = match action {
            GalleryAction::Resize { width } => self.resize(width),
            GalleryAction::Step(direction) => {
                let change = self.state.borrow().carousel.step(direction);
                change.map(|change| self.begin_slide(change)).is_some()
            }
            GalleryAction::JumpTo(index) => {
                let change = self.state.borrow().carousel.jump_to(index);
                change.map(|change| self.begin_slide(change)).is_some()
            }
            GalleryAction::TransitionEnd => self.end_transition(),
            GalleryAction::HoverEnter(project) => {
                self.state.borrow_mut().hover.enter(project);
                true
            }
            GalleryAction::PointerMove { x, y } => self.state.borrow_mut().hover.move_to(x, y),
            GalleryAction::HoverLeave => {
                let mut state = self.state.borrow_mut();
                let had_preview = state.hover.preview().is_some();
                state.hover.leave();
                had_preview
            }
            GalleryAction::CardClick(project) => {
                let dragging = self.state.borrow().carousel.is_dragging();
                if let Some(url) = activation_target(project, dragging) {
                    dom::open_in_new_tab(url);
                }
                false
            }
            GalleryAction::SwipeBegin { pointer_id, x } => self.swipe_begin(pointer_id, x),
            GalleryAction::SwipeMove { pointer_id, x } => self.swipe_move(pointer_id, x),
            GalleryAction::SwipeEnd {
                pointer_id,
                slide_width,
            } => self.swipe_end(Some(pointer_id), slide_width),
            GalleryAction::SwipeCancel => self.swipe_end(None, 0.0),
            GalleryAction::Reveal {
                top,
                bottom,
                viewport_height,
            } => {
                let mut state = self.state.borrow_mut();
                if state.revealed
                    || !section_in_view(top, bottom, viewport_height, REVEAL_MARGIN_PX)
                {
                    false
                } else {
                    state.revealed = true;
                    true
                }
            }
        };
        if changed {
            self.notify();
        }
    }

    fn resize(&self, width: f64) -> bool {
        let bucket = ViewportBucket::from_width(width);
        {
            let mut state = self.state.borrow_mut();
            if state.bucket == bucket {
                return false;
            }
            let pages = page_count(state.projects.len(), bucket);
            state.bucket = bucket;
            state.carousel.reset(pages);
            state.swipe = None;
            // The hovered card unmounts with the old carousel without a mouseleave.
            state.hover.leave();
        }
        self.cancel_timers();
        gloo::console::log!("gallery bucket", bucket.per_page() as u32, width);
        true
    }

    fn begin_slide(&self, change: SlideChange) {
        self.cancel_timers();
        self.state.borrow_mut().carousel.begin(change);
        self.arm_transition_timer();
    }

    fn end_transition(&self) -> bool {
        let token = self.state.borrow().carousel.transition_end();
        let weak_self = self.weak_self.clone();
        let timer = Timeout::new(DRAG_RELEASE_DELAY_MS, move || {
            let Some(core) = weak_self.upgrade() else {
                return;
            };
            let released = core.state.borrow_mut().carousel.release(token);
            if released {
                core.notify();
            }
        });
        *self.release_timer.borrow_mut() = Some(timer);
        false
    }

    fn swipe_begin(&self, pointer_id: i32, x: f64) -> bool {
        let mut state = self.state.borrow_mut();
        if !state.bucket.allows_touch_paging() || state.swipe.is_some() {
            return false;
        }
        state.swipe = Some(SwipeTracker::begin(pointer_id, x));
        false
    }

    fn swipe_move(&self, pointer_id: i32, x: f64) -> bool {
        let engaged_now = {
            let mut state = self.state.borrow_mut();
            let Some(swipe) = state.swipe.as_mut() else {
                return false;
            };
            if swipe.pointer_id() != pointer_id {
                return false;
            }
            let engaged_now = swipe.update(x);
            if !swipe.is_engaged() {
                return false;
            }
            if engaged_now {
                state.carousel.transition_start();
            }
            engaged_now
        };
        if engaged_now {
            self.cancel_timers();
        }
        true
    }

    fn swipe_end(&self, pointer_id: Option<i32>, slide_width: f64) -> bool {
        let outcome = {
            let mut state = self.state.borrow_mut();
            let Some(swipe) = state.swipe else {
                return false;
            };
            if pointer_id.is_some_and(|id| id != swipe.pointer_id()) {
                return false;
            }
            state.swipe = None;
            let outcome = if pointer_id.is_none() && swipe.is_engaged() {
                SwipeOutcome::SnapBack
            } else {
                swipe.finish(&state.carousel, slide_width)
            };
            if let SwipeOutcome::Commit(direction) = outcome {
                if let Some(change) = state.carousel.step(direction) {
                    state.carousel.slide_changed(change.to);
                }
            }
            outcome
        };
        match outcome {
            SwipeOutcome::Tap => false,
            SwipeOutcome::SnapBack | SwipeOutcome::Commit(_) => {
                self.arm_transition_timer();
                true
            }
        }
    }

    fn arm_transition_timer(&self) {
        let weak_self = self.weak_self.clone();
        let timer = Timeout::new(SLIDE_TRANSITION_MS, move || {
            if let Some(core) = weak_self.upgrade() {
                core.apply_action(GalleryAction::TransitionEnd);
            }
        });
        *self.transition_timer.borrow_mut() = Some(timer);
    }

    /// Drops pending timers; dropping a `Timeout` cancels it.
    fn cancel_timers(&self) {
        self.transition_timer.borrow_mut().take();
        self.release_timer.borrow_mut().take();
    }

    fn notify(&self) {
        let next = self.state.borrow().snapshot();
        *self.snapshot.borrow_mut() = next;
        let subscribers = self.subscribers.borrow().clone();
        for subscriber in subscribers {
            (subscriber)();
        }
    }
}

pub(crate) struct GallerySubscription {
    subscriber: GallerySubscriber,
    subscribers: Rc<RefCell<Vec<GallerySubscriber>>>,
}

impl Drop for GallerySubscription {
    fn drop(&mut self) {
        let mut subscribers = self.subscribers.borrow_mut();
        subscribers.retain(|item| !Rc::ptr_eq(item, &self.subscriber));
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use console_error_panic_hook::set_once as set_panic_hook;
    use gloo::timers::future::TimeoutFuture;
    use std::cell::Cell;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    const fn project(id: u32, link: Option<&'static str>) -> ProjectRecord {
        ProjectRecord {
            id,
            name: "Test project",
            category: "Web",
            description: "",
            image: "/assets/test.png",
            preview: None,
            link,
            role: "UI Design",
            tools: "Figma",
        }
    }

    static PROJECTS: [ProjectRecord; 7] = [
        project(1, Some("https://example.com/1")),
        project(2, None),
        project(3, None),
        project(4, None),
        project(5, None),
        project(6, None),
        project(7, None),
    ];

    const SETTLE_MS: u32 = SLIDE_TRANSITION_MS + DRAG_RELEASE_DELAY_MS + 80;

    #[wasm_bindgen_test]
    fn resize_repartitions_and_resets_index() {
        set_panic_hook();
        let core = GalleryCore::new(&PROJECTS, 1280.0);
        let snapshot = core.snapshot();
        assert_eq!(snapshot.bucket, ViewportBucket::Triple);
        assert_eq!(snapshot.page_count, 3);

        core.apply_action(GalleryAction::Step(SlideDirection::Next));
        assert_eq!(core.snapshot().active_index, 1);

        core.apply_action(GalleryAction::Resize { width: 800.0 });
        let snapshot = core.snapshot();
        assert_eq!(snapshot.bucket, ViewportBucket::Single);
        assert_eq!(snapshot.page_count, 7);
        assert_eq!(snapshot.active_index, 0);
        assert!(!snapshot.dragging);

        core.apply_action(GalleryAction::Resize { width: 1024.0 });
        assert_eq!(core.snapshot().page_count, 4);
    }

    #[wasm_bindgen_test]
    fn bucket_change_drops_hover_preview() {
        let core = GalleryCore::new(&PROJECTS, 1440.0);
        core.apply_action(GalleryAction::HoverEnter(&PROJECTS[0]));
        core.apply_action(GalleryAction::PointerMove { x: 40.0, y: 60.0 });
        assert_eq!(core.snapshot().tooltip, Some((52.0, 72.0)));

        core.apply_action(GalleryAction::Resize { width: 1024.0 });
        let snapshot = core.snapshot();
        assert!(snapshot.preview.is_none());
        assert!(snapshot.tooltip.is_none());

        core.apply_action(GalleryAction::PointerMove { x: 90.0, y: 90.0 });
        assert!(core.snapshot().tooltip.is_none());

        core.apply_action(GalleryAction::HoverEnter(&PROJECTS[1]));
        core.apply_action(GalleryAction::Resize { width: 1020.0 });
        assert!(core.snapshot().preview.is_none());
    }

    #[wasm_bindgen_test]
    fn subscription_stops_on_drop() {
        let core = GalleryCore::new(&PROJECTS, 1280.0);
        let hits = Rc::new(Cell::new(0u32));
        let subscription = {
            let hits = hits.clone();
            core.subscribe(Rc::new(move || hits.set(hits.get() + 1)))
        };
        core.apply_action(GalleryAction::HoverEnter(&PROJECTS[1]));
        assert_eq!(hits.get(), 1);
        drop(subscription);
        core.apply_action(GalleryAction::HoverLeave);
        assert_eq!(hits.get(), 1);
        assert!(core.snapshot().preview.is_none());
    }

    #[wasm_bindgen_test(async)]
    async fn drag_flag_clears_after_transition_and_delay() {
        set_panic_hook();
        let core = GalleryCore::new(&PROJECTS, 1280.0);
        core.apply_action(GalleryAction::Step(SlideDirection::Next));
        assert!(core.snapshot().dragging);
        TimeoutFuture::new(SETTLE_MS).await;
        let snapshot = core.snapshot();
        assert!(!snapshot.dragging);
        assert_eq!(snapshot.active_index, 1);
    }

    #[wasm_bindgen_test(async)]
    async fn new_transition_cancels_pending_release() {
        set_panic_hook();
        let core = GalleryCore::new(&PROJECTS, 1280.0);
        core.apply_action(GalleryAction::Step(SlideDirection::Next));
        TimeoutFuture::new(SLIDE_TRANSITION_MS + 20).await;
        core.apply_action(GalleryAction::Step(SlideDirection::Next));
        TimeoutFuture::new(DRAG_RELEASE_DELAY_MS + 20).await;
        assert!(core.snapshot().dragging);
        TimeoutFuture::new(SETTLE_MS).await;
        let snapshot = core.snapshot();
        assert!(!snapshot.dragging);
        assert_eq!(snapshot.active_index, 2);
        assert!(!snapshot.can_next);
    }

    #[wasm_bindgen_test]
    fn swipe_is_ignored_on_wide_viewports() {
        let core = GalleryCore::new(&PROJECTS, 1440.0);
        core.apply_action(GalleryAction::SwipeBegin { pointer_id: 1, x: 300.0 });
        core.apply_action(GalleryAction::SwipeMove { pointer_id: 1, x: 20.0 });
        core.apply_action(GalleryAction::SwipeEnd {
            pointer_id: 1,
            slide_width: 360.0,
        });
        let snapshot = core.snapshot();
        assert_eq!(snapshot.active_index, 0);
        assert!(!snapshot.dragging);
    }

    #[wasm_bindgen_test]
    fn committed_swipe_pages_forward_and_holds_drag_flag() {
        let core = GalleryCore::new(&PROJECTS, 600.0);
        core.apply_action(GalleryAction::SwipeBegin { pointer_id: 3, x: 300.0 });
        core.apply_action(GalleryAction::SwipeMove { pointer_id: 3, x: 60.0 });
        let snapshot = core.snapshot();
        assert!(snapshot.swiping);
        assert!(snapshot.dragging);
        assert_eq!(snapshot.swipe_offset, -240.0);

        core.apply_action(GalleryAction::SwipeEnd {
            pointer_id: 3,
            slide_width: 360.0,
        });
        let snapshot = core.snapshot();
        assert_eq!(snapshot.active_index, 1);
        assert!(!snapshot.swiping);
        assert!(snapshot.dragging);
    }

    #[wasm_bindgen_test]
    fn reveal_latches_once_in_view() {
        let core = GalleryCore::new(&PROJECTS, 1280.0);
        core.apply_action(GalleryAction::Reveal {
            top: 1200.0,
            bottom: 1900.0,
            viewport_height: 900.0,
        });
        assert!(!core.snapshot().revealed);
        core.apply_action(GalleryAction::Reveal {
            top: 400.0,
            bottom: 1100.0,
            viewport_height: 900.0,
        });
        assert!(core.snapshot().revealed);
        core.apply_action(GalleryAction::Reveal {
            top: 5000.0,
            bottom: 5600.0,
            viewport_height: 900.0,
        });
        assert!(core.snapshot().revealed);
    }
}
