use crate::project::ProjectRecord;

pub const PREVIEW_PLACEHOLDER_SRC: &str = "/assets/all-projects-images/placeholder.png";
pub const TOOLTIP_OFFSET_PX: (f64, f64) = (12.0, 12.0);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HoverPreview {
    pub src: &'static str,
    pub has_link: bool,
}

impl HoverPreview {
    pub fn for_project(project: &ProjectRecord) -> Self {
        Self {
            src: project.preview.unwrap_or(PREVIEW_PLACEHOLDER_SRC),
            has_link: project.has_link(),
        }
    }

    pub fn label(&self) -> &'static str {
        if self.has_link {
            "Visit Project"
        } else {
            "Preview Only"
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct HoverState {
    preview: Option<HoverPreview>,
    pointer: (f64, f64),
}

impl HoverState {
    pub fn preview(&self) -> Option<&HoverPreview> {
        self.preview.as_ref()
    }

    pub fn pointer(&self) -> (f64, f64) {
        self.pointer
    }

    pub fn enter(&mut self, project: &ProjectRecord) {
        self.preview = Some(HoverPreview::for_project(project));
    }

    /// Tracks the pointer while a preview is showing. Returns whether the
    /// position was taken.
    pub fn move_to(&mut self, x: f64, y: f64) -> bool {
        if self.preview.is_none() {
            return false;
        }
        self.pointer = (x, y);
        true
    }

    pub fn leave(&mut self) {
        self.preview = None;
    }

    pub fn tooltip_position(&self) -> Option<(f64, f64)> {
        self.preview.map(|_| {
            (
                self.pointer.0 + TOOLTIP_OFFSET_PX.0,
                self.pointer.1 + TOOLTIP_OFFSET_PX.1,
            )
        })
    }
}
