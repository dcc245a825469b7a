//! Page state and input handling.
//!
//! [`App`] owns the navigation state, the scroll position, and the contact
//! form. Terminal events are mapped to [`Message`]s, and every state change
//! goes through [`App::update`].

use crate::config::Config;
use crate::constants;
use crate::event::Event;
use crate::message::Message;
use crate::state::{
    outbound_links, ContactForm, Extent, FormField, NavigationState, Section, Toast, ToastType,
};
use crate::ui;
use crate::ui::page::{PageLayout, PageView};
use crate::ui::widgets::nav::{self, NavTarget};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;
use std::time::Instant;

/// Opens an outbound link outside the terminal.
pub type LinkOpener = fn(&str) -> std::io::Result<()>;

fn open_in_browser(url: &str) -> std::io::Result<()> {
    open::that(url)
}

/// Keyboard focus on the page, in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// Nothing focused; keys scroll the page.
    Page,
    /// Outbound link, indexed into [`outbound_links`].
    Link(usize),
    Field(FormField),
    /// The contact form's submit button.
    Submit,
}

impl Focus {
    fn order() -> Vec<Focus> {
        let links = (0..outbound_links().len()).map(Focus::Link);
        let fields = FormField::ALL.into_iter().map(Focus::Field);
        links.chain(fields).chain([Focus::Submit]).collect()
    }

    /// Next element in tab order, wrapping around.
    #[must_use]
    pub fn next(self) -> Self {
        let order = Self::order();
        match order.iter().position(|&f| f == self) {
            Some(i) => order[(i + 1) % order.len()],
            None => order[0],
        }
    }

    /// Previous element in tab order, wrapping around.
    #[must_use]
    pub fn prev(self) -> Self {
        let order = Self::order();
        match order.iter().position(|&f| f == self) {
            Some(0) | None => order[order.len() - 1],
            Some(i) => order[i - 1],
        }
    }
}

/// Page component state.
pub struct App {
    pub nav: NavigationState,
    /// Rows scrolled past the top of the page.
    pub scroll: u16,
    pub form: ContactForm,
    pub focus: Focus,
    pub toast: Option<Toast>,
    pub should_quit: bool,
    /// Terminal size in cells.
    pub width: u16,
    pub height: u16,
    /// Pixel height of one terminal row.
    pub cell_height_px: u32,
    scroll_step: u16,
    page_step: u16,
    open_link: LinkOpener,
}

impl App {
    /// Create the page for a `width` x `height` terminal.
    #[must_use]
    pub fn new(config: &Config, cell_height_px: u32, width: u16, height: u16) -> Self {
        let mut app = Self {
            nav: NavigationState::default(),
            scroll: 0,
            form: ContactForm::default(),
            focus: Focus::Page,
            toast: None,
            should_quit: false,
            width,
            height,
            cell_height_px: cell_height_px.clamp(1, constants::MAX_CELL_HEIGHT_PX),
            scroll_step: config.scroll_step,
            page_step: config.page_step,
            open_link: open_in_browser,
        };
        app.track_scroll();
        app
    }

    /// Replace the link opener.
    #[must_use]
    pub fn with_link_opener(mut self, open_link: LinkOpener) -> Self {
        self.open_link = open_link;
        self
    }

    /// Lay out the page at the current width.
    #[must_use]
    pub fn layout(&self) -> PageLayout {
        PageLayout::build(
            self.width,
            &PageView {
                form: &self.form,
                focus: self.focus,
            },
        )
    }

    /// Rows available to the page body.
    #[must_use]
    pub fn page_rows(&self) -> u16 {
        self.height.saturating_sub(ui::CHROME_ROWS)
    }

    fn max_scroll(&self, layout: &PageLayout) -> u16 {
        layout.height().saturating_sub(self.page_rows())
    }

    /// Whether the collapsed menu dropdown is on screen.
    #[must_use]
    pub fn menu_visible(&self) -> bool {
        self.nav.menu_open && nav::is_narrow(self.width)
    }

    // === Event Mapping ===

    /// Map a terminal event to a message and apply it.
    pub fn handle_event(&mut self, event: Event) {
        let message = match event {
            Event::Key(key) => self.map_key(key),
            Event::Mouse(mouse) => self.map_mouse(mouse),
            Event::Resize(w, h) => Some(Message::Resize(w, h)),
            Event::Tick => Some(Message::Tick),
        };
        if let Some(message) = message {
            self.update(message);
        }
    }

    fn map_key(&self, key: KeyEvent) -> Option<Message> {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Some(Message::Quit);
        }

        if let Focus::Field(field) = self.focus {
            return match key.code {
                KeyCode::Esc => Some(Message::Unfocus),
                KeyCode::Tab => Some(Message::FocusNext),
                KeyCode::BackTab => Some(Message::FocusPrev),
                KeyCode::Enter if field.is_multiline() => Some(Message::Input('\n')),
                KeyCode::Enter => Some(Message::FocusNext),
                KeyCode::Backspace => Some(Message::Backspace),
                KeyCode::Char(c) => Some(Message::Input(c)),
                _ => None,
            };
        }

        let step = i32::from(self.scroll_step);
        let page = i32::from(self.page_step);
        match key.code {
            KeyCode::Char('q') => Some(Message::Quit),
            KeyCode::Down | KeyCode::Char('j') => Some(Message::ScrollBy(step)),
            KeyCode::Up | KeyCode::Char('k') => Some(Message::ScrollBy(-step)),
            KeyCode::PageDown | KeyCode::Char(' ') => Some(Message::ScrollBy(page)),
            KeyCode::PageUp => Some(Message::ScrollBy(-page)),
            KeyCode::Home | KeyCode::Char('g') => Some(Message::ScrollTo(0)),
            KeyCode::End | KeyCode::Char('G') => Some(Message::ScrollTo(u16::MAX)),
            KeyCode::Char('m') => Some(Message::ToggleMenu),
            KeyCode::Char(c) => Section::from_shortcut(c).map(Message::JumpTo),
            KeyCode::Tab => Some(Message::FocusNext),
            KeyCode::BackTab => Some(Message::FocusPrev),
            KeyCode::Enter => Some(Message::Activate),
            KeyCode::Esc => Some(Message::Unfocus),
            _ => None,
        }
    }

    fn map_mouse(&self, mouse: MouseEvent) -> Option<Message> {
        let step = i32::from(self.scroll_step);
        match mouse.kind {
            MouseEventKind::ScrollDown => Some(Message::ScrollBy(step)),
            MouseEventKind::ScrollUp => Some(Message::ScrollBy(-step)),
            MouseEventKind::Down(MouseButton::Left) => self.click(mouse.column, mouse.row),
            _ => None,
        }
    }

    fn click(&self, column: u16, row: u16) -> Option<Message> {
        let screen = Rect::new(0, 0, self.width, self.height);
        let [nav_area, _, _] = ui::screen_layout(screen);

        if self.menu_visible() {
            let menu = ui::overlays::menu::area(nav_area, screen);
            if let Some(section) = ui::overlays::menu::entry_at(menu, row) {
                return Some(Message::JumpTo(section));
            }
        }

        if row != nav_area.y {
            return None;
        }
        match nav::hit(self.width, column)? {
            NavTarget::Brand => Some(Message::JumpTo(Section::Home)),
            NavTarget::Link(section) => Some(Message::JumpTo(section)),
            NavTarget::MenuButton => Some(Message::ToggleMenu),
        }
    }

    // === State Transitions ===

    /// Apply a message.
    pub fn update(&mut self, message: Message) {
        match message {
            Message::ScrollBy(delta) => {
                let target = i32::from(self.scroll).saturating_add(delta).max(0);
                self.scroll_to(u16::try_from(target).unwrap_or(u16::MAX));
            }
            Message::ScrollTo(row) => self.scroll_to(row),
            Message::JumpTo(section) => {
                if let Some((top, _)) = self.layout().section_rows(section) {
                    tracing::debug!(%section, anchor = section.anchor(), "anchor navigation");
                    self.scroll_to(top);
                }
            }
            Message::ToggleMenu => {
                self.nav = self.nav.toggle_menu();
                tracing::debug!(open = self.nav.menu_open, "menu toggled");
            }
            Message::FocusNext => self.set_focus(self.focus.next()),
            Message::FocusPrev => self.set_focus(self.focus.prev()),
            Message::Unfocus => self.focus = Focus::Page,
            Message::Activate => self.activate(),
            Message::Input(c) => {
                if let Focus::Field(field) = self.focus {
                    self.form.insert(field, c);
                }
            }
            Message::Backspace => {
                if let Focus::Field(field) = self.focus {
                    self.form.backspace(field);
                }
            }
            Message::SubmitForm => {
                // the contact form has no submission behaviour
                tracing::debug!("contact form submit ignored");
            }
            Message::Resize(width, height) => {
                self.width = width;
                self.height = height;
                // the page reflows at a new width, so sections move under the offset
                self.scroll_to(self.scroll);
            }
            Message::Tick => {
                if self
                    .toast
                    .as_ref()
                    .is_some_and(|t| t.is_expired(Instant::now()))
                {
                    self.toast = None;
                }
            }
            Message::Quit => self.should_quit = true,
        }
    }

    fn scroll_to(&mut self, row: u16) {
        let max = self.max_scroll(&self.layout());
        self.scroll = row.min(max);
        self.track_scroll();
    }

    /// Pixel offset of `rows` terminal rows.
    fn rows_to_px(&self, rows: u16) -> u32 {
        u32::from(rows).saturating_mul(self.cell_height_px)
    }

    /// Scroll handler: recompute the active section from the current offset.
    fn track_scroll(&mut self) {
        let layout = self.layout();
        let offset = self.rows_to_px(self.scroll);
        let before = self.nav.active_section;

        let geometry = |section: Section| {
            layout
                .section_rows(section)
                .map(|(top, height)| Extent::new(self.rows_to_px(top), self.rows_to_px(height)))
        };
        let nav = self.nav.on_scroll(offset, geometry);
        self.nav = nav;

        if self.nav.active_section != before {
            tracing::debug!(
                from = %before,
                to = %self.nav.active_section,
                scroll_px = offset,
                "active section changed"
            );
        }
    }

    fn set_focus(&mut self, focus: Focus) {
        self.focus = focus;
        let layout = self.layout();
        let Some(row) = layout.focus_row(focus) else {
            return;
        };
        let rows = self.page_rows();
        if row < self.scroll {
            self.scroll_to(row);
        } else if rows > 0 && row >= self.scroll + rows {
            // keep a few rows of the element below it visible
            self.scroll_to((row + 3).saturating_sub(rows));
        }
    }

    fn activate(&mut self) {
        match self.focus {
            Focus::Link(idx) => {
                if let Some(url) = outbound_links().get(idx).copied() {
                    self.open(url);
                }
            }
            Focus::Submit => self.update(Message::SubmitForm),
            Focus::Field(_) | Focus::Page => {}
        }
    }

    fn open(&mut self, url: &'static str) {
        match (self.open_link)(url) {
            Ok(()) => {
                tracing::info!(url, "opened link");
                self.toast = Some(Toast::new(
                    format!("{}{url}", constants::MSG_OPENING),
                    ToastType::Info,
                    constants::TOAST_DURATION,
                ));
            }
            Err(e) => {
                tracing::warn!(url, error = %e, "failed to open link");
                self.toast = Some(Toast::new(
                    format!("{}{e}", constants::MSG_OPEN_FAILED),
                    ToastType::Error,
                    constants::TOAST_DURATION,
                ));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::PROJECTS;
    use crossterm::event::KeyEventState;
    use std::sync::Mutex;

    const CELL: u32 = 18;

    fn new_app() -> App {
        App::new(&Config::default(), CELL, 100, 30).with_link_opener(|_| Ok(()))
    }

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: crossterm::event::KeyEventKind::Press,
            state: KeyEventState::NONE,
        })
    }

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> Event {
        Event::Mouse(MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        })
    }

    fn expected_section(app: &App) -> Section {
        let layout = app.layout();
        let cell = u64::from(app.cell_height_px);
        let probe = u64::from(app.scroll) * cell + u64::from(constants::PROBE_OFFSET_PX);
        Section::ALL
            .into_iter()
            .find(|&s| {
                let (top, height) = layout.section_rows(s).unwrap();
                let top = u64::from(top) * cell;
                (top..top + u64::from(height) * cell).contains(&probe)
            })
            .unwrap()
    }

    #[test]
    fn test_starts_at_home() {
        let app = new_app();
        assert_eq!(app.scroll, 0);
        assert_eq!(app.nav.active_section, Section::Home);
        assert!(!app.nav.menu_open);
    }

    #[test]
    fn test_jump_tracks_section() {
        let mut app = new_app();
        app.update(Message::JumpTo(Section::Projects));
        let (top, _) = app.layout().section_rows(Section::Projects).unwrap();
        assert_eq!(app.scroll, top);
        assert_eq!(app.nav.active_section, Section::Projects);
    }

    #[test]
    fn test_every_scroll_position_matches_tracker() {
        let mut app = new_app();
        let max = app.max_scroll(&app.layout());
        for _ in 0..=max {
            app.handle_event(key(KeyCode::Down));
            assert_eq!(app.nav.active_section, expected_section(&app));
        }
        assert_eq!(app.scroll, max);
    }

    #[test]
    fn test_scroll_clamped() {
        let mut app = new_app();
        app.update(Message::ScrollBy(-5));
        assert_eq!(app.scroll, 0);
        app.update(Message::ScrollTo(u16::MAX));
        assert_eq!(app.scroll, app.max_scroll(&app.layout()));
    }

    #[test]
    fn test_mouse_wheel_scrolls() {
        let mut app = new_app();
        app.handle_event(mouse(MouseEventKind::ScrollDown, 10, 10));
        app.handle_event(mouse(MouseEventKind::ScrollDown, 10, 10));
        assert_eq!(app.scroll, 2);
        app.handle_event(mouse(MouseEventKind::ScrollUp, 10, 10));
        assert_eq!(app.scroll, 1);
    }

    #[test]
    fn test_menu_key_round_trip() {
        let mut app = new_app();
        app.handle_event(key(KeyCode::Char('m')));
        assert!(app.nav.menu_open);
        app.handle_event(key(KeyCode::Char('m')));
        assert!(!app.nav.menu_open);
    }

    #[test]
    fn test_menu_stays_open_after_navigation() {
        let mut app = App::new(&Config::default(), CELL, 60, 30).with_link_opener(|_| Ok(()));
        app.handle_event(mouse(MouseEventKind::Down(MouseButton::Left), 57, 0));
        assert!(app.menu_visible());

        // third dropdown row is Contact
        app.handle_event(mouse(MouseEventKind::Down(MouseButton::Left), 5, 3));
        assert_eq!(app.nav.active_section, Section::Contact);
        assert!(app.nav.menu_open);
    }

    #[test]
    fn test_menu_hidden_on_wide_terminal() {
        let mut app = new_app();
        app.update(Message::ToggleMenu);
        assert!(app.nav.menu_open);
        assert!(!app.menu_visible());
    }

    #[test]
    fn test_nav_link_click_jumps() {
        let mut app = new_app();
        let (start, _, _) = nav::targets(app.width)[3];
        app.handle_event(mouse(MouseEventKind::Down(MouseButton::Left), start, 0));
        assert_eq!(app.nav.active_section, Section::Contact);
    }

    #[test]
    fn test_tab_order_wraps() {
        assert_eq!(Focus::Page.next(), Focus::Link(0));
        assert_eq!(Focus::Link(5).next(), Focus::Field(FormField::Name));
        assert_eq!(Focus::Submit.next(), Focus::Link(0));
        assert_eq!(Focus::Link(0).prev(), Focus::Submit);
        assert_eq!(Focus::Page.prev(), Focus::Submit);
    }

    #[test]
    fn test_focus_scrolls_into_view() {
        let mut app = new_app();
        app.focus = Focus::Field(FormField::Message);
        app.update(Message::FocusNext);
        assert_eq!(app.focus, Focus::Submit);
        let row = app.layout().focus_row(Focus::Submit).unwrap();
        assert!(row >= app.scroll && row < app.scroll + app.page_rows());
        assert_eq!(app.nav.active_section, expected_section(&app));
    }

    #[test]
    fn test_typing_goes_to_focused_field() {
        let mut app = new_app();
        app.update(Message::Input('x'));
        assert_eq!(app.form, ContactForm::default());

        app.focus = Focus::Field(FormField::Name);
        for c in ['A', 'd', 'a', 'q'] {
            app.handle_event(key(KeyCode::Char(c)));
        }
        app.handle_event(key(KeyCode::Backspace));
        assert_eq!(app.form.name, "Ada");
        assert!(!app.should_quit);

        app.handle_event(key(KeyCode::Enter));
        assert_eq!(app.focus, Focus::Field(FormField::Email));
    }

    #[test]
    fn test_submit_is_a_no_op() {
        static OPENED: Mutex<Vec<String>> = Mutex::new(Vec::new());
        let mut app = App::new(&Config::default(), CELL, 100, 30).with_link_opener(|url| {
            OPENED.lock().unwrap().push(url.to_string());
            Ok(())
        });
        app.focus = Focus::Field(FormField::Email);
        app.handle_event(key(KeyCode::Char('a')));
        app.update(Message::JumpTo(Section::Contact));
        app.focus = Focus::Submit;

        let form = app.form.clone();
        let nav = app.nav;
        let scroll = app.scroll;
        app.handle_event(key(KeyCode::Enter));
        app.update(Message::SubmitForm);

        assert_eq!(app.form, form);
        assert_eq!(app.nav, nav);
        assert_eq!(app.scroll, scroll);
        assert_eq!(app.focus, Focus::Submit);
        assert!(app.toast.is_none());
        assert!(OPENED.lock().unwrap().is_empty());
    }

    #[test]
    fn test_enter_opens_focused_link() {
        static OPENED: Mutex<Vec<String>> = Mutex::new(Vec::new());
        let mut app = App::new(&Config::default(), CELL, 100, 30).with_link_opener(|url| {
            OPENED.lock().unwrap().push(url.to_string());
            Ok(())
        });
        app.focus = Focus::Link(4);
        app.handle_event(key(KeyCode::Enter));
        assert_eq!(*OPENED.lock().unwrap(), [PROJECTS[1].link]);
        assert_eq!(app.toast.as_ref().unwrap().toast_type, ToastType::Info);
    }

    #[test]
    fn test_open_failure_shows_error_toast() {
        let mut app = App::new(&Config::default(), CELL, 100, 30)
            .with_link_opener(|_| Err(std::io::Error::other("no browser")));
        app.focus = Focus::Link(2);
        app.update(Message::Activate);
        let toast = app.toast.as_ref().unwrap();
        assert_eq!(toast.toast_type, ToastType::Error);
        assert!(toast.message.contains("no browser"));
        assert!(!app.should_quit);
    }

    #[test]
    fn test_resize_clamps_scroll() {
        let mut app = new_app();
        app.update(Message::ScrollTo(u16::MAX));
        app.update(Message::Resize(100, 200));
        assert_eq!(app.scroll, app.max_scroll(&app.layout()));
        assert_eq!(app.nav.active_section, expected_section(&app));
    }

    #[test]
    fn test_huge_cell_height_is_capped() {
        let mut app =
            App::new(&Config::default(), 100_000_000, 30, 30).with_link_opener(|_| Ok(()));
        assert_eq!(app.cell_height_px, constants::MAX_CELL_HEIGHT_PX);

        app.update(Message::JumpTo(Section::Contact));
        assert_eq!(app.nav.active_section, expected_section(&app));
        let max = app.max_scroll(&app.layout());
        for _ in 0..=max {
            app.update(Message::ScrollBy(1));
            assert_eq!(app.nav.active_section, expected_section(&app));
        }
    }

    #[test]
    fn test_resize_reflow_retracks_section() {
        let mut app = App::new(&Config::default(), CELL, 200, 30).with_link_opener(|_| Ok(()));
        app.update(Message::ScrollTo(6));
        assert_eq!(app.nav.active_section, Section::Projects);

        // social links wrap at 30 columns and the hero grows by two rows
        app.update(Message::Resize(30, 30));
        assert_eq!(app.scroll, 6);
        assert_eq!(app.nav.active_section, Section::Home);
    }

    #[test]
    fn test_resize_always_matches_tracker() {
        let wide = App::new(&Config::default(), CELL, 200, 30);
        for row in 0..=wide.max_scroll(&wide.layout()) {
            let mut app = App::new(&Config::default(), CELL, 200, 30);
            app.update(Message::ScrollTo(row));
            app.update(Message::Resize(30, 30));
            assert_eq!(app.nav.active_section, expected_section(&app), "row {row}");
        }
    }

    #[test]
    fn test_quit_keys() {
        let mut app = new_app();
        app.handle_event(key(KeyCode::Char('q')));
        assert!(app.should_quit);

        let mut app = new_app();
        app.focus = Focus::Field(FormField::Message);
        app.handle_event(Event::Key(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL,
        )));
        assert!(app.should_quit);
    }
}
