use crate::project::ProjectRecord;

/// Link a card click should open, if any. Clicks that land while the carousel
/// is mid-transition are swallowed so a swipe never navigates.
pub fn activation_target(project: &ProjectRecord, dragging: bool) -> Option<&'static str> {
    if dragging {
        return None;
    }
    project.external_link()
}
