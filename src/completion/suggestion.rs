//! The suggestion object
//!
//! Holds one model completion from arrival to acceptance or replacement.
//! Display and insertion always agree: both go through the same line
//! sequence, so what ghost text shows is exactly what accept writes.

use crate::buffer::BufferId;

use super::ghost::{Anchor, GhostLayout, SuggestionRenderer};

/// One completion prepared for display and insertion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suggestion {
    text: String,
    lines: Vec<String>,
    buffer: BufferId,
    visible: bool,
}

impl Suggestion {
    /// Build a suggestion from raw model output.
    ///
    /// Output is trimmed of surrounding whitespace. When `multiline` is
    /// false everything past the first line is dropped, for display and
    /// insertion both.
    pub fn new(raw: &str, buffer: BufferId, multiline: bool) -> Self {
        let text = raw.trim().to_string();
        let mut lines: Vec<String> = text.lines().map(str::to_string).collect();
        if !multiline {
            lines.truncate(1);
        }

        Suggestion {
            text,
            lines,
            buffer,
            visible: false,
        }
    }

    pub fn buffer(&self) -> BufferId {
        self.buffer
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Text that acceptance inserts into the buffer.
    pub fn insert_text(&self) -> String {
        self.lines.join("\n")
    }

    /// How this suggestion should be laid out on screen.
    pub fn layout(&self) -> GhostLayout {
        if self.lines.len() <= 1 {
            GhostLayout::Inline
        } else {
            GhostLayout::Block
        }
    }

    /// Render at `anchor`. Showing an empty suggestion is a no-op.
    pub fn show(&mut self, renderer: &mut dyn SuggestionRenderer, anchor: Anchor) {
        if self.is_empty() {
            return;
        }
        renderer.show(self.buffer, anchor, &self.lines, self.layout());
        self.visible = true;
    }

    /// Clear the overlay; the suggestion itself stays valid.
    pub fn hide(&mut self, renderer: &mut dyn SuggestionRenderer) {
        renderer.clear(self.buffer);
        self.visible = false;
    }
}
