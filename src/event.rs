//! Terminal event handling for the TUI.
//!
//! This module provides an event loop that handles keyboard input, mouse
//! wheel scrolling, terminal resize events, and periodic tick events. Events
//! are polled on a background thread and delivered through a channel; the
//! thread stops when the [`EventHandler`] is dropped.

use color_eyre::eyre::WrapErr;
use color_eyre::Result;
use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event as CrosstermEvent, KeyEvent,
    KeyEventKind,
};
use crossterm::execute;
use std::io::stdout;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{mpsc, Arc};
use std::thread;
use std::time::{Duration, Instant};

/// Terminal events that drive the application.
#[derive(Debug)]
pub enum Event {
    /// Keyboard input event.
    Key(KeyEvent),
    /// Mouse input event.
    Mouse(event::MouseEvent),
    /// Terminal window resize event.
    Resize(u16, u16),
    /// Periodic tick for UI updates.
    Tick,
}

/// Handles terminal events in a background thread.
///
/// Spawns a thread that polls for terminal events and sends them through
/// a channel. Also generates periodic tick events for time-based updates.
pub struct EventHandler {
    receiver: mpsc::Receiver<Event>,
    running: Arc<AtomicBool>,
    handler: Option<thread::JoinHandle<()>>,
}

impl EventHandler {
    /// Creates a new event handler with the specified tick rate.
    ///
    /// # Arguments
    ///
    /// * `tick_rate_ms` - Milliseconds between tick events
    pub fn new(tick_rate_ms: u64) -> Self {
        let tick_rate = Duration::from_millis(tick_rate_ms);
        let (sender, receiver) = mpsc::channel();
        let running = Arc::new(AtomicBool::new(true));
        let flag = Arc::clone(&running);

        let handler = thread::spawn(move || {
            let mut last_tick = Instant::now();
            while flag.load(Ordering::Relaxed) {
                let timeout = tick_rate
                    .checked_sub(last_tick.elapsed())
                    .unwrap_or(Duration::ZERO);

                match event::poll(timeout) {
                    Ok(true) => {
                        if let Ok(evt) = event::read() {
                            if let Some(evt) = forward(evt) {
                                if sender.send(evt).is_err() {
                                    return;
                                }
                            }
                        }
                    }
                    Ok(false) => {}
                    // no readable input source; wait out the tick instead of spinning
                    Err(_) => thread::sleep(timeout),
                }

                if last_tick.elapsed() >= tick_rate {
                    if sender.send(Event::Tick).is_err() {
                        return;
                    }
                    last_tick = Instant::now();
                }
            }
        });

        Self {
            receiver,
            running,
            handler: Some(handler),
        }
    }

    /// Blocks until the next event is available.
    ///
    /// # Errors
    ///
    /// Returns an error if the event channel is disconnected.
    pub fn next(&self) -> Result<Event> {
        Ok(self.receiver.recv()?)
    }
}

/// Keeps the events the page reacts to.
fn forward(evt: CrosstermEvent) -> Option<Event> {
    match evt {
        // Windows reports both press and release
        CrosstermEvent::Key(key) if key.kind == KeyEventKind::Press => Some(Event::Key(key)),
        CrosstermEvent::Resize(w, h) => Some(Event::Resize(w, h)),
        CrosstermEvent::Mouse(mouse) => Some(Event::Mouse(mouse)),
        _ => None,
    }
}

impl Drop for EventHandler {
    fn drop(&mut self) {
        self.running.store(false, Ordering::Relaxed);
        if let Some(handler) = self.handler.take() {
            // the poll timeout bounds how long this waits
            let _ = handler.join();
        }
    }
}

/// Scroll-wheel subscription for the lifetime of the page.
///
/// Mouse capture is enabled on creation and disabled when the guard is
/// dropped, whichever way the page exits.
pub struct ScrollSubscription {
    active: bool,
}

impl ScrollSubscription {
    /// Subscribe to wheel events. When `enabled` is false the guard is inert
    /// and scrolling is keyboard-only.
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal rejects mouse capture.
    pub fn acquire(enabled: bool) -> Result<Self> {
        if enabled {
            execute!(stdout(), EnableMouseCapture).wrap_err("Failed to enable mouse capture")?;
            tracing::debug!("scroll subscription acquired");
        }
        Ok(Self { active: enabled })
    }
}

impl Drop for ScrollSubscription {
    fn drop(&mut self) {
        if self.active {
            if let Err(e) = execute!(stdout(), DisableMouseCapture) {
                tracing::warn!(error = %e, "failed to disable mouse capture");
            }
            tracing::debug!("scroll subscription released");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyModifiers};

    #[test]
    fn test_event_thread_stops_on_drop() {
        let (done_tx, done_rx) = mpsc::channel();
        thread::spawn(move || {
            let events = EventHandler::new(10);
            drop(events);
            let _ = done_tx.send(());
        });
        assert!(
            done_rx.recv_timeout(Duration::from_secs(5)).is_ok(),
            "event thread still running after drop"
        );
    }

    #[test]
    fn test_ticks_arrive_while_running() {
        let events = EventHandler::new(10);
        let mut ticked = false;
        for _ in 0..50 {
            if matches!(events.next(), Ok(Event::Tick)) {
                ticked = true;
                break;
            }
        }
        assert!(ticked);
    }

    #[test]
    fn test_inert_subscription() {
        let subscription = ScrollSubscription::acquire(false).unwrap();
        assert!(!subscription.active);
        drop(subscription);
    }

    #[test]
    fn test_only_key_presses_forwarded() {
        let mut key = KeyEvent::new(KeyCode::Char('j'), KeyModifiers::NONE);
        assert!(matches!(forward(CrosstermEvent::Key(key)), Some(Event::Key(_))));

        key.kind = KeyEventKind::Release;
        assert!(forward(CrosstermEvent::Key(key)).is_none());
        assert!(forward(CrosstermEvent::FocusGained).is_none());
        assert!(matches!(
            forward(CrosstermEvent::Resize(80, 24)),
            Some(Event::Resize(80, 24))
        ));
    }
}
