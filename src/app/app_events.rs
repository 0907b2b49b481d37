//! Terminal event handling

use std::io;
use std::time::Duration;

use ratatui::crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::completion::completion_events;

use super::app_state::App;

/// How long one event-loop tick waits for input before polling the worker.
const TICK_INTERVAL: Duration = Duration::from_millis(50);

impl App {
    /// Pump one tick of terminal events.
    ///
    /// Waits up to the tick interval for input so worker outcomes keep
    /// flowing even while the keyboard is idle.
    pub fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(TICK_INTERVAL)? {
            match event::read()? {
                // Check that it's a key press event to avoid duplicates
                Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                    self.handle_key_event(key_event);
                }
                _ => {}
            }
        }

        completion_events::poll_fill_outcomes(self);
        Ok(())
    }

    /// Handle key press events
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        // Status messages live until the next key press
        self.status = None;

        // Try command keys first
        if self.handle_command_keys(key) {
            return;
        }

        // Everything else goes to the editor. Any edit or cursor movement
        // invalidates the ghost text on screen.
        let cursor_before = self.buffer.cursor();
        let edited = self.buffer.textarea.input(key);
        if edited || self.buffer.cursor() != cursor_before {
            completion_events::dismiss_suggestion(self);
        }
    }

    /// Handle keys bound to commands rather than editing.
    /// Returns true if the key was handled, false otherwise
    fn handle_command_keys(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Char('c') | KeyCode::Char('q')
                if key.modifiers.contains(KeyModifiers::CONTROL) =>
            {
                self.quit();
                true
            }
            KeyCode::Char('s') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.save_buffer();
                true
            }
            KeyCode::Char('g') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                completion_events::trigger_fill(self);
                true
            }
            // Tab accepts only while ghost text is shown; otherwise it is
            // an ordinary tab for the editor
            KeyCode::Tab if self.completion.has_visible_suggestion() => {
                completion_events::accept_suggestion(self);
                true
            }
            KeyCode::Esc if self.completion.has_visible_suggestion() => {
                completion_events::dismiss_suggestion(self);
                true
            }
            _ => false,
        }
    }

    fn save_buffer(&mut self) {
        match self.buffer.save() {
            Ok(()) => self.status = Some(format!("Saved {}", self.buffer.display_name())),
            Err(err) => self.status = Some(format!("Save failed: {err}")),
        }
    }
}

#[cfg(test)]
#[path = "app_events_tests.rs"]
mod app_events_tests;
