//! Fixed navigation bar: brand, section links, and the collapsed-menu button.

use crate::app::App;
use crate::constants;
use crate::state::Section;
use crate::theme;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Gap between inline section links.
const LINK_GAP: u16 = 4;

/// Clickable element of the navigation bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavTarget {
    /// The brand, which links to `#home`.
    Brand,
    /// Inline section link (wide layout only).
    Link(Section),
    /// Menu button (narrow layout only).
    MenuButton,
}

impl NavTarget {
    fn label(self) -> &'static str {
        match self {
            NavTarget::Brand => constants::BRAND,
            NavTarget::Link(section) => section.label(),
            NavTarget::MenuButton => constants::LABEL_MENU_BUTTON,
        }
    }
}

/// Whether the bar is collapsed to the menu button at this width.
#[must_use]
pub fn is_narrow(width: u16) -> bool {
    width < constants::NARROW_WIDTH
}

fn label_width(target: NavTarget) -> u16 {
    u16::try_from(target.label().chars().count()).unwrap_or(u16::MAX)
}

/// Column span `[start, end)` of every target, left to right.
#[must_use]
pub fn targets(width: u16) -> Vec<(u16, u16, NavTarget)> {
    let brand = NavTarget::Brand;
    let mut out = vec![(1, 1 + label_width(brand), brand)];

    if is_narrow(width) {
        let button = NavTarget::MenuButton;
        let end = width.saturating_sub(2);
        out.push((end.saturating_sub(label_width(button)), end, button));
        return out;
    }

    let links: Vec<NavTarget> = Section::ALL.into_iter().map(NavTarget::Link).collect();
    let gaps = LINK_GAP * u16::try_from(links.len() - 1).unwrap_or(0);
    let total: u16 = links.iter().map(|&t| label_width(t)).sum::<u16>() + gaps;
    let mut x = width.saturating_sub(2).saturating_sub(total);
    for link in links {
        let w = label_width(link);
        out.push((x, x + w, link));
        x += w + LINK_GAP;
    }
    out
}

/// Target under column `x`, if any.
#[must_use]
pub fn hit(width: u16, x: u16) -> Option<NavTarget> {
    targets(width)
        .into_iter()
        .find(|&(start, end, _)| x >= start && x < end)
        .map(|(_, _, target)| target)
}

/// Render the navigation bar.
pub fn render(frame: &mut Frame, _app: &App, area: Rect) {
    let fill = Style::default().bg(theme::NAV_BG);
    let mut spans = Vec::new();
    let mut cursor = 0u16;

    for (start, _, target) in targets(area.width) {
        if start > cursor {
            spans.push(Span::styled(" ".repeat(usize::from(start - cursor)), fill));
        }
        let style = match target {
            NavTarget::Brand | NavTarget::MenuButton => Style::default()
                .fg(theme::PRIMARY)
                .add_modifier(Modifier::BOLD),
            NavTarget::Link(_) => Style::default().fg(theme::SECONDARY),
        };
        spans.push(Span::styled(target.label(), style.bg(theme::NAV_BG)));
        cursor = start.max(cursor) + label_width(target);
    }

    frame.render_widget(Paragraph::new(Line::from(spans)).style(fill), area);
}
