/// One showcase entry. Records are compiled in from the project catalog and
/// never change at runtime.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProjectRecord {
    pub id: u32,
    pub name: &'static str,
    pub category: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    pub preview: Option<&'static str>,
    pub link: Option<&'static str>,
    /// Comma-separated role labels.
    pub role: &'static str,
    /// Comma-separated tool labels.
    pub tools: &'static str,
}

impl ProjectRecord {
    /// External link, if present and not blank.
    pub fn external_link(&self) -> Option<&'static str> {
        self.link.filter(|link| !link.trim().is_empty())
    }

    pub fn has_link(&self) -> bool {
        self.external_link().is_some()
    }

    pub fn roles(&self) -> impl Iterator<Item = &'static str> {
        split_labels(self.role)
    }

    pub fn tool_labels(&self) -> impl Iterator<Item = &'static str> {
        split_labels(self.tools)
    }
}

pub fn split_labels(list: &str) -> impl Iterator<Item = &str> {
    list.split(',').map(str::trim).filter(|label| !label.is_empty())
}
