//! Vertical scroll state for the editor viewport

/// Lines kept visible above/below the cursor while scrolling.
pub const SCROLLOFF: u16 = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollState {
    pub offset: u16,
    pub max_offset: u16,
    pub viewport_height: u16,
}

impl ScrollState {
    pub fn new() -> Self {
        Self {
            offset: 0,
            max_offset: 0,
            viewport_height: 0,
        }
    }

    pub fn update_bounds(&mut self, content_lines: u32, viewport_height: u16) {
        self.viewport_height = viewport_height;

        // Clamp to u16::MAX for ratatui compatibility
        self.max_offset = content_lines
            .saturating_sub(viewport_height as u32)
            .min(u16::MAX as u32) as u16;

        self.offset = self.offset.min(self.max_offset);
    }

    pub fn ensure_cursor_visible(&mut self, cursor_line: u32) {
        if self.viewport_height == 0 {
            return;
        }

        let cursor = cursor_line.min(u16::MAX as u32) as u16;
        let effective_scrolloff = SCROLLOFF.min(self.viewport_height / 2);

        let visible_start = self.offset;
        let visible_end = self.offset.saturating_add(self.viewport_height);

        if cursor < visible_start.saturating_add(effective_scrolloff) {
            self.offset = cursor.saturating_sub(effective_scrolloff);
        } else if cursor >= visible_end.saturating_sub(effective_scrolloff) {
            let new_offset = cursor
                .saturating_add(effective_scrolloff)
                .saturating_add(1)
                .saturating_sub(self.viewport_height);
            self.offset = new_offset.min(self.max_offset);
        }
    }
}

impl Default for ScrollState {
    fn default() -> Self {
        Self::new()
    }
}
