//! Static page content: project cards and social links.

use serde::Serialize;

use crate::constants;

/// Symbolic icon shown on a project card.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Icon {
    Globe,
    Palette,
    Code,
}

impl Icon {
    /// Terminal glyph for the icon.
    #[must_use]
    pub const fn glyph(self) -> &'static str {
        match self {
            Icon::Globe => "◍",
            Icon::Palette => "◐",
            Icon::Code => "</>",
        }
    }
}

/// One portfolio project, rendered as a card.
///
/// Entries have no identity beyond their position in [`PROJECTS`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ProjectEntry {
    pub title: &'static str,
    pub description: &'static str,
    pub tags: &'static [&'static str],
    pub icon: Icon,
    /// Repository URL, rendered verbatim.
    pub link: &'static str,
}

/// Projects in display order.
pub static PROJECTS: [ProjectEntry; 3] = [
    ProjectEntry {
        title: "Hotel Management System",
        description: "A full-stack web application built with React and Node.js",
        tags: &["React", "Node.js", "MongoDB", "Tailwind"],
        icon: Icon::Globe,
        link: "https://github.com/gauravpatil9903/Hotel-management",
    },
    ProjectEntry {
        title: "Employee Management System using Chatbot Automation",
        description: "Enabled seamless management of employee data, attendance tracking, leave,requests,performance assessment, and payroll/benefits administration.",
        tags: &["React", "Node.js", "Tailwind", "Express"],
        icon: Icon::Palette,
        link: "https://github.com/gauravpatil9903/Tectile-Diagram-",
    },
    ProjectEntry {
        title: "Deep Learning based system for unveiling inauthenticity in audio content",
        description: "Developed an initial prototype for voice-activated input, capturing and processing user speech via microphone",
        tags: &["Python", "NLP"],
        icon: Icon::Code,
        link: "https://github.com/gauravpatil9903/Design-and-development-of-a-system-to-unveiling-inauthenticity-in-audio-content",
    },
];

/// Kind of hero link.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum SocialKind {
    GitHub,
    LinkedIn,
    Email,
}

impl std::fmt::Display for SocialKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SocialKind::GitHub => write!(f, "GitHub"),
            SocialKind::LinkedIn => write!(f, "LinkedIn"),
            SocialKind::Email => write!(f, "Email"),
        }
    }
}

/// Link in the hero section.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct SocialLink {
    pub kind: SocialKind,
    pub url: &'static str,
}

/// Hero links in display order.
pub static SOCIAL_LINKS: [SocialLink; 3] = [
    SocialLink {
        kind: SocialKind::GitHub,
        url: constants::GITHUB_URL,
    },
    SocialLink {
        kind: SocialKind::LinkedIn,
        url: constants::LINKEDIN_URL,
    },
    SocialLink {
        kind: SocialKind::Email,
        url: constants::EMAIL_URL,
    },
];

/// Every outbound link on the page, hero links first.
#[must_use]
pub fn outbound_links() -> Vec<&'static str> {
    SOCIAL_LINKS
        .iter()
        .map(|s| s.url)
        .chain(PROJECTS.iter().map(|p| p.link))
        .collect()
}
