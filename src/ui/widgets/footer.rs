//! Footer widget with context-aware keybinding hints

use crate::app::{App, Focus};
use crate::theme;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Keybinding hints for the current focus.
#[must_use]
pub fn hints(app: &App) -> Vec<(&'static str, &'static str)> {
    match app.focus {
        Focus::Field(field) => {
            let mut hints = vec![("Tab", "Next"), ("S-Tab", "Prev")];
            if field.is_multiline() {
                hints.push(("Enter", "Newline"));
            }
            hints.push(("Esc", "Done"));
            hints
        }
        Focus::Link(_) => vec![
            ("Enter", "Open"),
            ("Tab", "Next"),
            ("Esc", "Page"),
            ("↑↓", "Scroll"),
            ("q", "Quit"),
        ],
        Focus::Submit => vec![
            ("Enter", "Send"),
            ("Tab", "Next"),
            ("Esc", "Page"),
            ("q", "Quit"),
        ],
        Focus::Page => vec![
            ("↑↓", "Scroll"),
            ("1-3", "Jump"),
            ("Tab", "Focus"),
            ("m", "Menu"),
            ("q", "Quit"),
        ],
    }
}

/// Render page footer with context-aware shortcuts
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    render_hints(frame, area, &hints(app));
}

fn render_hints(frame: &mut Frame, area: Rect, hints: &[(&str, &str)]) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(0),     // Hints (left)
            Constraint::Length(16), // Branding (right)
        ])
        .split(area);

    // 1. Render hints on the left
    let mut hint_spans = Vec::new();
    let mut current_width = 0;
    let max_width = chunks[0].width as usize;

    hint_spans.push(Span::raw(" "));
    current_width += 1;

    for (i, (key, action)) in hints.iter().enumerate() {
        // "key" + " " + "action", plus " │ " before every item but the first
        let sep_width = if i > 0 { 3 } else { 0 };
        let item_width = key.chars().count() + 1 + action.len() + sep_width;

        if current_width + item_width > max_width {
            break;
        }

        if i > 0 {
            hint_spans.push(Span::styled(" │ ", Style::default().fg(theme::ACCENT)));
        }
        hint_spans.push(Span::styled(
            *key,
            Style::default()
                .fg(theme::HIGHLIGHT)
                .add_modifier(Modifier::BOLD),
        ));
        hint_spans.push(Span::raw(" "));
        hint_spans.push(Span::styled(
            *action,
            Style::default().fg(theme::LIGHT),
        ));

        current_width += item_width;
    }
    let bar = Style::default().bg(theme::PRIMARY);
    frame.render_widget(
        Paragraph::new(Line::from(hint_spans)).style(bar),
        chunks[0],
    );

    // 2. Render branding on the right
    let branding = Line::from(vec![Span::styled(
        format!(
            "{} v{} ",
            crate::constants::APP_NAME,
            crate::constants::APP_VERSION
        ),
        Style::default().fg(theme::ACCENT),
    )]);
    frame.render_widget(
        Paragraph::new(branding)
            .alignment(Alignment::Right)
            .style(bar),
        chunks[1],
    );
}
