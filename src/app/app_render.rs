//! Frame rendering

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Position, Rect},
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph},
};

use crate::completion::{FillPhase, build_view_lines};

use super::app_state::App;

impl App {
    /// Render the UI
    pub fn render(&mut self, frame: &mut Frame) {
        let layout = Layout::vertical([
            Constraint::Min(1),    // Editor fills the screen
            Constraint::Length(1), // Status line
        ])
        .split(frame.area());

        self.render_editor(frame, layout[0]);
        self.render_status_line(frame, layout[1]);
    }

    /// Render the editor pane with the ghost overlay spliced in.
    ///
    /// The textarea widget cannot draw text that is not in the buffer, so
    /// the pane is assembled from its lines instead and the terminal cursor
    /// is placed by hand.
    fn render_editor(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(format!(" {} ", self.buffer.display_name()))
            .border_style(Style::default().fg(Color::DarkGray));
        let inner = block.inner(area);

        let view = build_view_lines(
            self.buffer.textarea.lines(),
            self.buffer.cursor(),
            self.overlays.get(self.buffer.id()),
            self.config.ui.tab_size,
        );

        self.scroll
            .update_bounds(view.lines.len() as u32, inner.height);
        self.scroll.ensure_cursor_visible(view.cursor_row as u32);

        let editor = Paragraph::new(view.lines)
            .block(block)
            .scroll((self.scroll.offset, 0));
        frame.render_widget(editor, area);

        let cursor_row =
            (view.cursor_row.min(u16::MAX as usize) as u16).saturating_sub(self.scroll.offset);
        if cursor_row < inner.height {
            frame.set_cursor_position(Position::new(
                inner.x + view.cursor_col.min(inner.width.saturating_sub(1)),
                inner.y + cursor_row,
            ));
        }
    }

    /// Render the status line (bottom of screen)
    fn render_status_line(&self, frame: &mut Frame, area: Rect) {
        let hint = if let Some(message) = &self.status {
            message.clone()
        } else {
            match self.completion.phase() {
                FillPhase::Idle => " Ctrl+G: Complete | Ctrl+S: Save | Ctrl+Q: Quit".to_string(),
                FillPhase::Requesting => " Completing...".to_string(),
                FillPhase::Displayed => " Tab: Accept | Esc: Dismiss".to_string(),
            }
        };

        let left = Paragraph::new(hint).style(Style::default().fg(Color::DarkGray));
        frame.render_widget(left, area);

        let info = format!("{} | {} ", self.buffer.syntax(), self.config.server.model);
        let right = Paragraph::new(info)
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Right);
        frame.render_widget(right, area);
    }
}

#[cfg(test)]
#[path = "app_render_tests.rs"]
mod app_render_tests;
