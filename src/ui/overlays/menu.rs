//! Collapsed navigation menu, dropped down under the navigation bar.
//!
//! Only drawn on narrow terminals; the open flag is tracked at any width.

use crate::state::Section;
use crate::theme;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Clear, List, ListItem, Padding},
    Frame,
};

/// Rows the dropdown occupies: one per section plus bottom padding.
pub const MENU_HEIGHT: u16 = 4;

/// Area of the dropdown for a page whose navigation bar sits in `nav`.
#[must_use]
pub fn area(nav: Rect, screen: Rect) -> Rect {
    let y = nav.bottom();
    Rect {
        x: nav.x,
        y,
        width: nav.width,
        height: MENU_HEIGHT.min(screen.bottom().saturating_sub(y)),
    }
}

/// Section listed on screen row `row`, if the dropdown covers it.
#[must_use]
pub fn entry_at(menu: Rect, row: u16) -> Option<Section> {
    let offset = row.checked_sub(menu.y)?;
    Section::ALL.get(usize::from(offset)).copied()
}

/// Render the dropdown
pub fn render(frame: &mut Frame, menu: Rect) {
    frame.render_widget(Clear, menu);

    let items: Vec<ListItem> = Section::ALL
        .iter()
        .map(|section| {
            ListItem::new(Line::from(vec![
                Span::styled(
                    section.label(),
                    Style::default()
                        .fg(theme::SECONDARY)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    format!("  {}", section.anchor()),
                    Style::default().fg(theme::ACCENT),
                ),
            ]))
        })
        .collect();

    let block = Block::default()
        .padding(Padding::left(1))
        .style(Style::default().bg(theme::NAV_BG));

    frame.render_widget(List::new(items).block(block), menu);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_area_under_nav() {
        let screen = Rect::new(0, 0, 60, 20);
        let nav = Rect::new(0, 0, 60, 1);
        assert_eq!(area(nav, screen), Rect::new(0, 1, 60, MENU_HEIGHT));
    }

    #[test]
    fn test_entry_rows() {
        let menu = Rect::new(0, 1, 60, MENU_HEIGHT);
        assert_eq!(entry_at(menu, 0), None);
        assert_eq!(entry_at(menu, 1), Some(Section::Home));
        assert_eq!(entry_at(menu, 3), Some(Section::Contact));
        assert_eq!(entry_at(menu, 4), None);
    }
}
