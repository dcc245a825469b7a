//! UI rendering module

pub mod overlays;
pub mod page;
pub mod widgets;

use crate::app::App;
use crate::theme;
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::Style,
    widgets::{Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState},
    Frame,
};

/// Rows taken by the navigation bar and the footer.
pub const CHROME_ROWS: u16 = 2;

/// Split the screen into navigation bar, page body, and footer.
#[must_use]
pub fn screen_layout(area: Rect) -> [Rect; 3] {
    Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(area)
}

/// Main render function
pub fn render(frame: &mut Frame, app: &App) {
    let [nav, body, footer] = screen_layout(frame.area());

    render_page(frame, app, body);
    widgets::nav::render(frame, app, nav);
    widgets::footer::render(frame, app, footer);

    if app.menu_visible() {
        overlays::menu::render(frame, overlays::menu::area(nav, frame.area()));
    }

    if app.toast.is_some() {
        overlays::toast::render(frame, app);
    }
}

fn render_page(frame: &mut Frame, app: &App, area: Rect) {
    let layout = app.layout();
    let total = usize::from(layout.height());

    frame.render_widget(
        Paragraph::new(layout.lines)
            .style(Style::default().bg(theme::LIGHT))
            .scroll((app.scroll, 0)),
        area,
    );

    let scrollbar = Scrollbar::default()
        .orientation(ScrollbarOrientation::VerticalRight)
        .begin_symbol(None)
        .end_symbol(None)
        .style(Style::default().fg(theme::ACCENT))
        .thumb_style(Style::default().fg(theme::HIGHLIGHT));

    let mut scrollbar_state =
        ScrollbarState::new(total.saturating_sub(usize::from(area.height)))
            .position(usize::from(app.scroll));

    frame.render_stateful_widget(scrollbar, area, &mut scrollbar_state);
}
