pub mod activation;
pub mod carousel;
pub mod catalog;
pub mod hover;
pub mod navbar;
pub mod paging;
pub mod project;
pub mod swipe;
pub mod viewport;

pub use activation::activation_target;
pub use carousel::{CarouselState, DragRelease, SlideChange, SlideDirection, DRAG_RELEASE_DELAY_MS};
pub use catalog::PROJECT_CATALOG;
pub use hover::{HoverPreview, HoverState, PREVIEW_PLACEHOLDER_SRC};
pub use navbar::{scroll_target, NavSection, NavbarState, SectionError, MENU_SECTIONS};
pub use paging::{page_count, partition, Page};
pub use project::ProjectRecord;
pub use swipe::{SwipeOutcome, SwipeTracker};
pub use viewport::{section_in_view, ViewportBucket};
