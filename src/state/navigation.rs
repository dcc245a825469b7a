//! Page sections and navigation state.
//!
//! The active section follows the scroll position: the section whose extent
//! contains the point [`PROBE_OFFSET_PX`] below the scroll offset wins, with
//! sections checked in [`Section::ALL`] order.

use crate::constants::PROBE_OFFSET_PX;

/// One of the three named page regions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Section {
    /// Hero with identity and social links.
    #[default]
    Home,
    /// Project cards.
    Projects,
    /// Contact form.
    Contact,
}

impl Section {
    /// All sections in declaration (and scan) order.
    pub const ALL: [Section; 3] = [Section::Home, Section::Projects, Section::Contact];

    /// Element id of the section.
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::Projects => "projects",
            Section::Contact => "contact",
        }
    }

    /// Navigation label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::Projects => "Projects",
            Section::Contact => "Contact",
        }
    }

    /// In-page anchor the nav entries point at.
    #[must_use]
    pub const fn anchor(self) -> &'static str {
        match self {
            Section::Home => "#home",
            Section::Projects => "#projects",
            Section::Contact => "#contact",
        }
    }

    /// Section reached by the 1-based shortcut digit.
    #[must_use]
    pub fn from_shortcut(c: char) -> Option<Self> {
        match c {
            '1' => Some(Section::Home),
            '2' => Some(Section::Projects),
            '3' => Some(Section::Contact),
            _ => None,
        }
    }
}

impl std::fmt::Display for Section {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

/// Vertical extent of a section, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Extent {
    pub top: u32,
    pub height: u32,
}

impl Extent {
    #[must_use]
    pub const fn new(top: u32, height: u32) -> Self {
        Self { top, height }
    }

    /// Half-open containment: `top <= y < top + height`.
    #[must_use]
    pub const fn contains(self, y: u32) -> bool {
        y >= self.top && y - self.top < self.height
    }
}

/// Finds the first section, in [`Section::ALL`] order, whose extent contains
/// the probe point below `scroll_offset`.
///
/// Sections for which `geometry` returns `None` are skipped.
pub fn locate<G>(scroll_offset: u32, geometry: G) -> Option<Section>
where
    G: Fn(Section) -> Option<Extent>,
{
    let probe = scroll_offset.saturating_add(PROBE_OFFSET_PX);
    Section::ALL
        .into_iter()
        .find(|&section| geometry(section).is_some_and(|extent| extent.contains(probe)))
}

/// Transient UI state owned by the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NavigationState {
    /// Section currently considered in view.
    pub active_section: Section,
    /// Whether the collapsed navigation menu is expanded.
    pub menu_open: bool,
}

impl NavigationState {
    /// Scroll transition. Leaves the active section untouched when no
    /// section contains the probe point.
    #[must_use]
    pub fn on_scroll<G>(self, scroll_offset: u32, geometry: G) -> Self
    where
        G: Fn(Section) -> Option<Extent>,
    {
        match locate(scroll_offset, geometry) {
            Some(active_section) => Self {
                active_section,
                ..self
            },
            None => self,
        }
    }

    /// Menu button transition.
    #[must_use]
    pub const fn toggle_menu(self) -> Self {
        Self {
            menu_open: !self.menu_open,
            ..self
        }
    }
}
