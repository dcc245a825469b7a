//! Messages that drive [`App::update`](crate::app::App::update).

use crate::state::Section;

/// A state change requested by input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// Scroll the page by a signed number of rows.
    ScrollBy(i32),
    /// Scroll the page to an absolute row.
    ScrollTo(u16),
    /// Scroll to the top of a section (in-page anchor).
    JumpTo(Section),
    /// Flip the collapsed navigation menu.
    ToggleMenu,
    /// Move focus to the next focusable element.
    FocusNext,
    /// Move focus to the previous focusable element.
    FocusPrev,
    /// Drop focus back to the page.
    Unfocus,
    /// Activate the focused element (open a link, press a button).
    Activate,
    /// Type a character into the focused form field.
    Input(char),
    /// Delete the last character of the focused form field.
    Backspace,
    /// Press the contact form's submit button.
    SubmitForm,
    /// Terminal resized to `(width, height)`.
    Resize(u16, u16),
    /// Periodic tick.
    Tick,
    Quit,
}
