//! Ghost text view assembly
//!
//! Builds the text the editor pane draws each frame: buffer lines with the
//! ghost overlay spliced in, tabs expanded, and the screen cursor located.
//! Pure over its inputs so the splicing logic is testable without a
//! terminal.

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use unicode_width::UnicodeWidthStr;

use super::ghost::{GhostLayout, Overlay};

/// Muted italic, so ghost text never reads as real code.
fn ghost_style() -> Style {
    Style::default()
        .fg(Color::DarkGray)
        .add_modifier(Modifier::ITALIC)
}

/// Assembled editor content for one frame.
pub struct ViewLines {
    pub lines: Vec<Line<'static>>,
    /// Screen row of the cursor within `lines`
    pub cursor_row: usize,
    /// Display column of the cursor after tab expansion
    pub cursor_col: u16,
}

/// Splice `overlay` into the buffer text.
///
/// Inline overlays join the anchor line at the anchor column; block
/// overlays add whole ghost lines below the anchor row. The cursor stays on
/// its buffer row: ghost rows only ever appear below it.
pub fn build_view_lines(
    buffer_lines: &[String],
    cursor: (usize, usize),
    overlay: Option<&Overlay>,
    tab_size: usize,
) -> ViewLines {
    let mut lines = Vec::with_capacity(buffer_lines.len());

    for (row, raw) in buffer_lines.iter().enumerate() {
        match overlay {
            Some(o) if o.layout == GhostLayout::Inline && o.anchor.row == row => {
                let (before, after) = split_at_char(raw, o.anchor.col);
                let ghost = o.lines.first().map(String::as_str).unwrap_or("");
                lines.push(Line::from(vec![
                    Span::raw(expand_tabs(before, tab_size)),
                    Span::styled(expand_tabs(ghost, tab_size), ghost_style()),
                    Span::raw(expand_tabs(after, tab_size)),
                ]));
            }
            _ => lines.push(Line::raw(expand_tabs(raw, tab_size))),
        }

        if let Some(o) = overlay
            && o.layout == GhostLayout::Block
            && o.anchor.row == row
        {
            for ghost_line in &o.lines {
                lines.push(Line::styled(expand_tabs(ghost_line, tab_size), ghost_style()));
            }
        }
    }

    let cursor_line = buffer_lines.get(cursor.0).map(String::as_str).unwrap_or("");
    let (before_cursor, _) = split_at_char(cursor_line, cursor.1);
    let cursor_col = UnicodeWidthStr::width(expand_tabs(before_cursor, tab_size).as_str())
        .min(u16::MAX as usize) as u16;

    ViewLines {
        lines,
        cursor_row: cursor.0,
        cursor_col,
    }
}

/// Naive tab expansion: every tab becomes `tab_size` spaces.
pub(crate) fn expand_tabs(text: &str, tab_size: usize) -> String {
    if !text.contains('\t') {
        return text.to_string();
    }
    text.replace('\t', &" ".repeat(tab_size))
}

/// Split a line at a char column, clamping past-the-end columns.
fn split_at_char(line: &str, col: usize) -> (&str, &str) {
    let idx = line
        .char_indices()
        .nth(col)
        .map(|(i, _)| i)
        .unwrap_or(line.len());
    line.split_at(idx)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::completion::ghost::Anchor;

    fn buffer(lines: &[&str]) -> Vec<String> {
        lines.iter().map(|s| s.to_string()).collect()
    }

    fn inline_overlay(row: usize, col: usize, text: &str) -> Overlay {
        Overlay {
            anchor: Anchor { row, col },
            lines: vec![text.to_string()],
            layout: GhostLayout::Inline,
        }
    }

    fn block_overlay(row: usize, col: usize, lines: &[&str]) -> Overlay {
        Overlay {
            anchor: Anchor { row, col },
            lines: lines.iter().map(|s| s.to_string()).collect(),
            layout: GhostLayout::Block,
        }
    }

    fn line_text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_plain_buffer_without_overlay() {
        let view = build_view_lines(&buffer(&["fn main() {", "}"]), (0, 0), None, 4);
        assert_eq!(view.lines.len(), 2);
        assert_eq!(line_text(&view.lines[0]), "fn main() {");
        assert_eq!(view.cursor_row, 0);
        assert_eq!(view.cursor_col, 0);
    }

    #[test]
    fn test_inline_overlay_splices_at_anchor() {
        let lines = buffer(&["def add(a, b):", "    "]);
        let overlay = inline_overlay(1, 4, "return a + b");
        let view = build_view_lines(&lines, (1, 4), Some(&overlay), 4);

        assert_eq!(view.lines.len(), 2);
        assert_eq!(line_text(&view.lines[1]), "    return a + b");

        // Middle span is the ghost, styled muted italic
        let spans = &view.lines[1].spans;
        assert_eq!(spans.len(), 3);
        assert_eq!(spans[1].content.as_ref(), "return a + b");
        assert_eq!(spans[1].style.fg, Some(Color::DarkGray));
        assert!(spans[1].style.add_modifier.contains(Modifier::ITALIC));
        assert_eq!(spans[0].style, Style::default());
    }

    #[test]
    fn test_inline_overlay_mid_line_keeps_suffix() {
        let lines = buffer(&["print()"]);
        let overlay = inline_overlay(0, 6, "\"hi\"");
        let view = build_view_lines(&lines, (0, 6), Some(&overlay), 4);

        assert_eq!(line_text(&view.lines[0]), "print(\"hi\")");
        let spans = &view.lines[0].spans;
        assert_eq!(spans[0].content.as_ref(), "print(");
        assert_eq!(spans[2].content.as_ref(), ")");
    }

    #[test]
    fn test_block_overlay_adds_rows_below_anchor() {
        let lines = buffer(&["def f():", "    ", "rest"]);
        let overlay = block_overlay(1, 4, &["    x = 1", "    return x"]);
        let view = build_view_lines(&lines, (1, 4), Some(&overlay), 4);

        assert_eq!(view.lines.len(), 5);
        assert_eq!(line_text(&view.lines[1]), "    ");
        assert_eq!(line_text(&view.lines[2]), "    x = 1");
        assert_eq!(line_text(&view.lines[3]), "    return x");
        assert_eq!(line_text(&view.lines[4]), "rest");

        // Ghost rows carry the ghost style, buffer rows do not
        assert_eq!(view.lines[2].style.fg, Some(Color::DarkGray));
        assert_eq!(view.lines[4].style, Style::default());

        // Cursor stays on its buffer row, above the ghost rows
        assert_eq!(view.cursor_row, 1);
    }

    #[test]
    fn test_tabs_expand_in_buffer_and_ghost() {
        let lines = buffer(&["\tcall("]);
        let overlay = inline_overlay(0, 6, "\targ");
        let view = build_view_lines(&lines, (0, 6), Some(&overlay), 4);

        assert_eq!(line_text(&view.lines[0]), "    call(    arg");
    }

    #[test]
    fn test_cursor_col_counts_expanded_tabs() {
        let lines = buffer(&["\t\tx = 1"]);
        let view = build_view_lines(&lines, (0, 2), None, 4);
        assert_eq!(view.cursor_col, 8);

        let view = build_view_lines(&lines, (0, 2), None, 2);
        assert_eq!(view.cursor_col, 4);
    }

    #[test]
    fn test_cursor_col_counts_display_width() {
        // CJK chars are double width on screen
        let lines = buffer(&["世界 = 1"]);
        let view = build_view_lines(&lines, (0, 2), None, 4);
        assert_eq!(view.cursor_col, 4);
    }

    #[test]
    fn test_overlay_on_other_row_leaves_line_plain() {
        let lines = buffer(&["one", "two"]);
        let overlay = inline_overlay(0, 3, " ghost");
        let view = build_view_lines(&lines, (0, 3), Some(&overlay), 4);

        assert_eq!(view.lines[1].spans.len(), 1);
        assert_eq!(line_text(&view.lines[1]), "two");
    }

    #[test]
    fn test_anchor_col_past_line_end_clamps() {
        let lines = buffer(&["ab"]);
        let overlay = inline_overlay(0, 99, "!");
        let view = build_view_lines(&lines, (0, 2), Some(&overlay), 4);
        assert_eq!(line_text(&view.lines[0]), "ab!");
    }

    #[test]
    fn test_expand_tabs_plain_text_untouched() {
        assert_eq!(expand_tabs("no tabs here", 4), "no tabs here");
        assert_eq!(expand_tabs("a\tb", 2), "a  b");
        assert_eq!(expand_tabs("\t", 8), "        ");
    }
}
