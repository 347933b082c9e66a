use std::fmt;

/// Height kept clear above a scrolled-to section for the fixed navbar.
pub const NAVBAR_CLEARANCE_PX: f64 = 110.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NavSection {
    Home,
    About,
    Skills,
    Projects,
    Contact,
}

/// Sections linked from the menu, in display order. Home is reached through
/// the logo.
pub const MENU_SECTIONS: [NavSection; 4] = [
    NavSection::About,
    NavSection::Skills,
    NavSection::Projects,
    NavSection::Contact,
];

impl NavSection {
    pub const ALL: [NavSection; 5] = [
        NavSection::Home,
        NavSection::About,
        NavSection::Skills,
        NavSection::Projects,
        NavSection::Contact,
    ];

    pub fn id(self) -> &'static str {
        match self {
            NavSection::Home => "home",
            NavSection::About => "about",
            NavSection::Skills => "skills",
            NavSection::Projects => "projects",
            NavSection::Contact => "contact",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            NavSection::Home => "Home",
            NavSection::About => "About",
            NavSection::Skills => "Skills",
            NavSection::Projects => "Projects",
            NavSection::Contact => "Contact",
        }
    }

    /// Accepts an element id or a location hash such as `#projects`.
    pub fn parse(value: &str) -> Result<Self, SectionError> {
        let trimmed = value.trim().trim_start_matches('#');
        if trimmed.is_empty() {
            return Err(SectionError::Empty);
        }
        NavSection::ALL
            .into_iter()
            .find(|section| section.id().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| SectionError::Unknown {
                id: trimmed.to_string(),
            })
    }
}

impl fmt::Display for NavSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl std::str::FromStr for NavSection {
    type Err = SectionError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::parse(value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SectionError {
    Empty,
    Unknown { id: String },
}

impl fmt::Display for SectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SectionError::Empty => write!(f, "section id is empty"),
            SectionError::Unknown { id } => write!(f, "unknown section '{id}'"),
        }
    }
}

impl std::error::Error for SectionError {}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NavbarState {
    has_shadow: bool,
    menu_open: bool,
}

impl NavbarState {
    pub fn has_shadow(&self) -> bool {
        self.has_shadow
    }

    pub fn menu_open(&self) -> bool {
        self.menu_open
    }

    pub fn on_scroll(&mut self, offset: f64) {
        self.has_shadow = offset > 0.0;
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }
}

/// Scroll offset that leaves a section's top edge just under the navbar.
pub fn scroll_target(section_top: f64) -> f64 {
    section_top - NAVBAR_CLEARANCE_PX
}
