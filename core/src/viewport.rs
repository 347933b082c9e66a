use std::fmt;

/// Width at which the gallery switches between one, two and three cards.
pub const BUCKET_BREAKPOINT: f64 = 1024.0;
pub const REVEAL_MARGIN_PX: f64 = 100.0;

/// How many project cards a carousel page holds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ViewportBucket {
    Single,
    Double,
    Triple,
}

impl ViewportBucket {
    pub fn from_width(width: f64) -> Self {
        if width > BUCKET_BREAKPOINT {
            ViewportBucket::Triple
        } else if width == BUCKET_BREAKPOINT {
            ViewportBucket::Double
        } else {
            ViewportBucket::Single
        }
    }

    pub fn per_page(self) -> usize {
        match self {
            ViewportBucket::Single => 1,
            ViewportBucket::Double => 2,
            ViewportBucket::Triple => 3,
        }
    }

    /// Free touch paging is only offered when a single card fills the page.
    pub fn allows_touch_paging(self) -> bool {
        matches!(self, ViewportBucket::Single)
    }
}

impl fmt::Display for ViewportBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.per_page().fmt(f)
    }
}

/// True once a section's box overlaps the viewport shrunk by `margin` on
/// both edges.
pub fn section_in_view(top: f64, bottom: f64, viewport_height: f64, margin: f64) -> bool {
    let visible_top = margin;
    let visible_bottom = viewport_height - margin;
    top < visible_bottom && bottom > visible_top
}
