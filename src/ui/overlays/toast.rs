//! Toast notification overlay

use crate::app::App;
use crate::state::ToastType;
use crate::theme;
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Render toast notification
pub fn render(frame: &mut Frame, app: &App) {
    if let Some(ref toast) = app.toast {
        let area = frame.area();
        let width = (area.width / 3).clamp(30, 60).min(area.width);

        // Calculate dynamic height based on text length + vertical padding
        let inner_width = width.saturating_sub(4) as usize;
        let text_len = toast.message.chars().count();
        let text_lines = if inner_width > 0 {
            u16::try_from(text_len.div_ceil(inner_width)).unwrap_or(u16::MAX)
        } else {
            1
        };

        let height = (text_lines.saturating_add(4))
            .max(5)
            .min(area.height);

        // Bottom centre, clear of the footer
        let toast_area = Rect {
            x: (area.width / 2).saturating_sub(width / 2),
            y: area.height.saturating_sub(height + 2),
            width,
            height,
        };

        frame.render_widget(Clear, toast_area);

        let (title, color) = match toast.toast_type {
            ToastType::Info => (" INFO ", theme::ACCENT),
            ToastType::Error => (" ERROR ", theme::ERROR),
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(color))
            .style(Style::default().bg(theme::CARD_BG))
            .title(Span::styled(
                title,
                Style::default()
                    .fg(theme::TEXT_ON_DARK)
                    .bg(color)
                    .add_modifier(Modifier::BOLD),
            ));

        let inner_area = block.inner(toast_area);
        frame.render_widget(block, toast_area);

        let vertical_chunks = Layout::vertical([
            Constraint::Fill(1),
            Constraint::Length(text_lines),
            Constraint::Fill(1),
        ])
        .split(inner_area);

        let paragraph = Paragraph::new(toast.message.clone())
            .style(Style::default().fg(theme::PRIMARY))
            .wrap(Wrap { trim: true })
            .alignment(Alignment::Center);

        frame.render_widget(paragraph, vertical_chunks[1]);
    }
}
