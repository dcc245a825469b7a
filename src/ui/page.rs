//! Scrollable page body: hero, project cards, and contact form.
//!
//! The page is laid out once per frame into full-width lines. Alongside the
//! lines the layout records the row extent of every section and the row of
//! every focusable element, which the app uses for scroll tracking and for
//! keeping the focused element in view.

use crate::app::Focus;
use crate::constants;
use crate::state::{ContactForm, FormField, Section, PROJECTS, SOCIAL_LINKS};
use crate::theme;
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

/// Widest a project card gets.
const CARD_MAX_WIDTH: u16 = 72;
/// Widest the contact form gets.
const FORM_MAX_WIDTH: u16 = 56;

/// Inputs the page needs besides the static content.
pub struct PageView<'a> {
    pub form: &'a ContactForm,
    pub focus: Focus,
}

/// A laid-out page.
pub struct PageLayout {
    pub lines: Vec<Line<'static>>,
    sections: [(u16, u16); 3],
    focus_rows: Vec<(Focus, u16)>,
}

impl PageLayout {
    /// Lay out the page for a terminal `width` columns wide.
    #[must_use]
    pub fn build(width: u16, view: &PageView<'_>) -> Self {
        let mut page = PageBuilder::new(width.max(1), view.focus);

        let home_top = page.row();
        page.hero();
        let projects_top = page.row();
        page.projects();
        let contact_top = page.row();
        page.contact(view.form);
        let end = page.row();

        Self {
            lines: page.lines,
            sections: [
                (home_top, projects_top - home_top),
                (projects_top, contact_top - projects_top),
                (contact_top, end - contact_top),
            ],
            focus_rows: page.focus_rows,
        }
    }

    /// Total rows in the page.
    #[must_use]
    pub fn height(&self) -> u16 {
        u16::try_from(self.lines.len()).unwrap_or(u16::MAX)
    }

    /// `(top, height)` of a section, in rows.
    #[must_use]
    pub fn section_rows(&self, section: Section) -> Option<(u16, u16)> {
        let idx = Section::ALL.iter().position(|&s| s == section)?;
        self.sections.get(idx).copied()
    }

    /// Row on which a focusable element starts.
    #[must_use]
    pub fn focus_row(&self, focus: Focus) -> Option<u16> {
        self.focus_rows
            .iter()
            .find(|(f, _)| *f == focus)
            .map(|(_, row)| *row)
    }
}

#[derive(Clone, Copy)]
enum Align {
    Center,
    Left(u16),
}

struct PageBuilder {
    width: u16,
    content_width: u16,
    focus: Focus,
    lines: Vec<Line<'static>>,
    focus_rows: Vec<(Focus, u16)>,
}

impl PageBuilder {
    fn new(width: u16, focus: Focus) -> Self {
        Self {
            width,
            content_width: width.min(constants::MAX_CONTENT_WIDTH),
            focus,
            lines: Vec::new(),
            focus_rows: Vec::new(),
        }
    }

    fn row(&self) -> u16 {
        u16::try_from(self.lines.len()).unwrap_or(u16::MAX)
    }

    fn mark(&mut self, focus: Focus) {
        let row = self.row();
        self.focus_rows.push((focus, row));
    }

    fn focused_style(&self, focus: Focus, base: Style) -> Style {
        if self.focus == focus {
            base.add_modifier(Modifier::REVERSED | Modifier::BOLD)
        } else {
            base
        }
    }

    fn blank(&mut self, bg: Color, count: usize) {
        for _ in 0..count {
            self.push(Vec::new(), bg, Align::Center);
        }
    }

    fn push(&mut self, spans: Vec<Span<'static>>, bg: Color, align: Align) {
        let line = pad_line(spans, self.width, bg, align);
        self.lines.push(line);
    }

    fn centered_text(&mut self, text: &str, style: Style, bg: Color, max_width: u16) {
        for chunk in wrap_words(text, usize::from(max_width.max(1))) {
            self.push(vec![Span::styled(chunk, style)], bg, Align::Center);
        }
    }

    // === Home ===

    fn hero(&mut self) {
        let bg = theme::PRIMARY;
        let on_dark = Style::default().fg(theme::TEXT_ON_DARK);

        self.blank(bg, 3);
        self.centered_text(
            constants::OWNER_NAME,
            on_dark.add_modifier(Modifier::BOLD),
            bg,
            self.content_width,
        );
        self.blank(bg, 1);
        self.centered_text(constants::OWNER_ROLE, on_dark, bg, self.content_width);
        self.blank(bg, 1);

        let mut links = Vec::new();
        for (i, link) in SOCIAL_LINKS.iter().enumerate() {
            let style = self.focused_style(
                Focus::Link(i),
                Style::default()
                    .fg(theme::HIGHLIGHT)
                    .add_modifier(Modifier::UNDERLINED),
            );
            links.push(Span::styled(format!(" {} ", link.kind), style));
        }

        let one_row = spans_width(&links) + 3 * (links.len() - 1);
        if one_row <= usize::from(self.content_width) {
            let mut spans = Vec::new();
            for (i, link) in links.into_iter().enumerate() {
                self.mark(Focus::Link(i));
                if i > 0 {
                    spans.push(Span::raw("   "));
                }
                spans.push(link);
            }
            self.push(spans, bg, Align::Center);
        } else {
            for (i, link) in links.into_iter().enumerate() {
                self.mark(Focus::Link(i));
                self.push(vec![link], bg, Align::Center);
            }
        }

        self.blank(bg, 3);
    }

    // === Projects ===

    fn projects(&mut self) {
        let bg = theme::LIGHT;
        self.blank(bg, 2);
        self.centered_text(
            constants::TITLE_PROJECTS,
            Style::default()
                .fg(theme::PRIMARY)
                .add_modifier(Modifier::BOLD),
            bg,
            self.content_width,
        );
        self.blank(bg, 2);

        for idx in 0..PROJECTS.len() {
            if idx > 0 {
                self.blank(bg, 1);
            }
            self.project_card(idx);
        }

        self.blank(bg, 2);
    }

    fn project_card(&mut self, idx: usize) {
        let project = &PROJECTS[idx];
        let bg = theme::LIGHT;
        let outer = self
            .content_width
            .saturating_sub(4)
            .min(CARD_MAX_WIDTH)
            .max(8);
        let inner = outer - 4;
        let border = Style::default().fg(theme::blend(theme::ACCENT, theme::CARD_BG, 0x60));
        let card = Card {
            inner,
            surface: theme::CARD_BG,
            border,
        };

        self.push(card.top(), bg, Align::Center);
        self.push(card.body(Vec::new()), bg, Align::Center);

        let accent = Style::default().fg(theme::ACCENT);
        self.push(
            card.body(vec![Span::styled(project.icon.glyph(), accent)]),
            bg,
            Align::Center,
        );
        self.push(card.body(Vec::new()), bg, Align::Center);

        let title = Style::default()
            .fg(theme::PRIMARY)
            .add_modifier(Modifier::BOLD);
        for chunk in wrap_words(project.title, usize::from(inner)) {
            self.push(card.body(vec![Span::styled(chunk, title)]), bg, Align::Center);
        }
        self.push(card.body(Vec::new()), bg, Align::Center);

        let muted = Style::default().fg(theme::TEXT_MUTED);
        for chunk in wrap_words(project.description, usize::from(inner)) {
            self.push(card.body(vec![Span::styled(chunk, muted)]), bg, Align::Center);
        }
        self.push(card.body(Vec::new()), bg, Align::Center);

        let chip = Style::default()
            .fg(theme::ACCENT)
            .bg(theme::tag_background());
        for row in wrap_chips(project.tags, usize::from(inner)) {
            let mut spans = Vec::new();
            for (i, tag) in row.into_iter().enumerate() {
                if i > 0 {
                    spans.push(Span::raw(" "));
                }
                spans.push(Span::styled(format!(" {tag} "), chip));
            }
            self.push(card.body(spans), bg, Align::Center);
        }
        self.push(card.body(Vec::new()), bg, Align::Center);

        let focus = Focus::Link(SOCIAL_LINKS.len() + idx);
        self.mark(focus);
        let link_style = self.focused_style(focus, accent);
        self.push(
            card.body(vec![Span::styled(constants::LABEL_VIEW_PROJECT, link_style)]),
            bg,
            Align::Center,
        );
        let url = Style::default()
            .fg(theme::ACCENT)
            .add_modifier(Modifier::DIM);
        for chunk in chunk_chars(project.link, usize::from(inner)) {
            self.push(card.body(vec![Span::styled(chunk, url)]), bg, Align::Center);
        }

        self.push(card.body(Vec::new()), bg, Align::Center);
        self.push(card.bottom(), bg, Align::Center);
    }

    // === Contact ===

    fn contact(&mut self, form: &ContactForm) {
        let bg = theme::SECONDARY;
        let on_dark = Style::default().fg(theme::TEXT_ON_DARK);
        let form_width = self
            .content_width
            .saturating_sub(4)
            .min(FORM_MAX_WIDTH)
            .max(8);
        let left = self.width.saturating_sub(form_width) / 2;

        self.blank(bg, 2);
        self.centered_text(
            constants::TITLE_CONTACT,
            on_dark.add_modifier(Modifier::BOLD),
            bg,
            self.content_width,
        );
        self.blank(bg, 2);

        for field in FormField::ALL {
            self.push(
                vec![Span::styled(field.label(), on_dark.add_modifier(Modifier::BOLD))],
                bg,
                Align::Left(left),
            );
            self.input(field, form.value(field), form_width, left);
            self.blank(bg, 1);
        }

        self.mark(Focus::Submit);
        let label = constants::LABEL_SEND_MESSAGE;
        let label_width = u16::try_from(label.chars().count()).unwrap_or(form_width);
        let side = form_width.saturating_sub(label_width) / 2;
        let button = self.focused_style(
            Focus::Submit,
            Style::default()
                .fg(theme::PRIMARY)
                .bg(theme::HIGHLIGHT)
                .add_modifier(Modifier::BOLD),
        );
        let fill = " ".repeat(usize::from(side));
        let trailing =
            " ".repeat(usize::from(form_width.saturating_sub(side).saturating_sub(label_width)));
        self.push(
            vec![
                Span::styled(fill, button),
                Span::styled(label, button),
                Span::styled(trailing, button),
            ],
            bg,
            Align::Left(left),
        );

        self.blank(bg, 2);
    }

    fn input(&mut self, field: FormField, value: &str, width: u16, left: u16) {
        let bg = theme::SECONDARY;
        let focused = self.focus == Focus::Field(field);
        let border = if focused {
            Style::default()
                .fg(theme::HIGHLIGHT)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme::blend(theme::HIGHLIGHT, theme::SECONDARY, 0x40))
        };
        let inner = width.saturating_sub(4).max(1);
        let card = Card {
            inner,
            surface: theme::INPUT_BG,
            border,
        };

        self.mark(Focus::Field(field));
        self.push(card.top(), bg, Align::Left(left));

        let text = Style::default().fg(theme::PRIMARY);
        for row in input_rows(value, usize::from(inner), field.rows(), focused) {
            self.push(
                card.body_left(vec![Span::styled(row, text)]),
                bg,
                Align::Left(left),
            );
        }
        self.push(card.bottom(), bg, Align::Left(left));
    }
}

/// Rounded box drawn line by line.
struct Card {
    inner: u16,
    surface: Color,
    border: Style,
}

impl Card {
    fn edge(&self, left: &'static str, right: &'static str) -> Vec<Span<'static>> {
        let style = self.border.bg(self.surface);
        vec![
            Span::styled(left, style),
            Span::styled("─".repeat(usize::from(self.inner) + 2), style),
            Span::styled(right, style),
        ]
    }

    fn top(&self) -> Vec<Span<'static>> {
        self.edge("╭", "╮")
    }

    fn bottom(&self) -> Vec<Span<'static>> {
        self.edge("╰", "╯")
    }

    fn body(&self, content: Vec<Span<'static>>) -> Vec<Span<'static>> {
        let used = spans_width(&content);
        let left = (usize::from(self.inner).saturating_sub(used)) / 2;
        self.framed(content, left)
    }

    fn body_left(&self, content: Vec<Span<'static>>) -> Vec<Span<'static>> {
        self.framed(content, 0)
    }

    fn framed(&self, content: Vec<Span<'static>>, left: usize) -> Vec<Span<'static>> {
        let used = spans_width(&content);
        let right = usize::from(self.inner).saturating_sub(used + left);
        let border = self.border.bg(self.surface);
        let surface = Style::default().bg(self.surface);

        let mut spans = Vec::with_capacity(content.len() + 4);
        spans.push(Span::styled("│", border));
        spans.push(Span::styled(" ".repeat(left + 1), surface));
        spans.extend(content.into_iter().map(|mut s| {
            if s.style.bg.is_none() {
                s.style = s.style.bg(self.surface);
            }
            s
        }));
        spans.push(Span::styled(" ".repeat(right + 1), surface));
        spans.push(Span::styled("│", border));
        spans
    }
}

fn spans_width(spans: &[Span<'_>]) -> usize {
    spans.iter().map(Span::width).sum()
}

/// Pad `spans` to a full-width line, filling unstyled backgrounds with `bg`.
fn pad_line(spans: Vec<Span<'static>>, width: u16, bg: Color, align: Align) -> Line<'static> {
    let width = usize::from(width);
    let used = spans_width(&spans);
    let left = match align {
        Align::Center => width.saturating_sub(used) / 2,
        Align::Left(n) => usize::from(n),
    };
    let right = width.saturating_sub(used + left);
    let fill = Style::default().bg(bg);

    let mut out = Vec::with_capacity(spans.len() + 2);
    out.push(Span::styled(" ".repeat(left), fill));
    out.extend(spans.into_iter().map(|mut s| {
        if s.style.bg.is_none() {
            s.style = s.style.bg(bg);
        }
        s
    }));
    out.push(Span::styled(" ".repeat(right), fill));
    Line::from(out)
}

/// Greedy word wrap. Words longer than `width` are split.
fn wrap_words(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        for piece in chunk_chars(word, width) {
            let needed = if current.is_empty() {
                piece.chars().count()
            } else {
                current.chars().count() + 1 + piece.chars().count()
            };
            if needed > width && !current.is_empty() {
                lines.push(std::mem::take(&mut current));
            }
            if !current.is_empty() {
                current.push(' ');
            }
            current.push_str(&piece);
        }
    }
    if !current.is_empty() || lines.is_empty() {
        lines.push(current);
    }
    lines
}

/// Split `text` into pieces of at most `width` characters.
fn chunk_chars(text: &str, width: usize) -> Vec<String> {
    let chars: Vec<char> = text.chars().collect();
    if chars.is_empty() {
        return vec![String::new()];
    }
    chars
        .chunks(width.max(1))
        .map(|c| c.iter().collect())
        .collect()
}

/// Group tags into rows of chips no wider than `width`.
fn wrap_chips(tags: &[&'static str], width: usize) -> Vec<Vec<&'static str>> {
    let mut rows: Vec<Vec<&'static str>> = Vec::new();
    let mut used = 0;
    for &tag in tags {
        let chip = tag.chars().count() + 2;
        match rows.last_mut() {
            Some(row) if used + 1 + chip <= width => {
                row.push(tag);
                used += 1 + chip;
            }
            _ => {
                rows.push(vec![tag]);
                used = chip;
            }
        }
    }
    rows
}

/// Visible rows of an input box: the tail of the text, plus a cursor when focused.
fn input_rows(value: &str, width: usize, rows: u16, focused: bool) -> Vec<String> {
    let mut text = value.to_string();
    if focused {
        text.push('▏');
    }
    let rows = usize::from(rows);
    if rows == 1 {
        // single-line inputs scroll horizontally
        let flat: Vec<char> = text.replace('\n', " ").chars().collect();
        let start = flat.len().saturating_sub(width);
        return vec![flat[start..].iter().collect()];
    }
    let mut lines: Vec<String> = text
        .split('\n')
        .flat_map(|line| chunk_chars(line, width))
        .collect();
    if lines.len() > rows {
        lines.drain(..lines.len() - rows);
    }
    lines.resize(rows, String::new());
    lines
}
