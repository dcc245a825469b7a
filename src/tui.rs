//! Terminal session lifetime.

use color_eyre::Result;
use ratatui::DefaultTerminal;

/// Raw mode and the alternate screen for as long as the value lives.
///
/// `ratatui::init` also installs a panic hook that restores the terminal,
/// so panics leave the shell usable too.
pub struct TerminalSession {
    pub terminal: DefaultTerminal,
}

impl TerminalSession {
    /// Enter the alternate screen.
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal cannot be switched into raw mode.
    pub fn enter() -> Result<Self> {
        let terminal = ratatui::try_init()?;
        tracing::debug!("terminal session started");
        Ok(Self { terminal })
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        ratatui::restore();
        tracing::debug!("terminal session restored");
    }
}

/// Pixel height of a terminal row, from the terminal itself when it
/// reports pixel dimensions, otherwise `fallback`.
#[must_use]
pub fn cell_height_px(fallback: u32) -> u32 {
    match crossterm::terminal::window_size() {
        Ok(size) if size.height > 0 && size.rows > 0 => {
            let cell = u32::from(size.height) / u32::from(size.rows);
            if cell == 0 {
                fallback
            } else {
                cell
            }
        }
        _ => fallback,
    }
}
