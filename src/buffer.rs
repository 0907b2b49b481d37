//! Editing buffer
//!
//! Wraps the textarea editing model with what the completion engine needs
//! from a buffer: a stable identity, a syntax name, and cursor coordinate
//! math in byte offsets.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};

use tui_textarea::TextArea;

use crate::error::GhostfillError;
use crate::syntax;

static NEXT_BUFFER_ID: AtomicU64 = AtomicU64::new(1);

/// Process-unique identity of an editing buffer.
///
/// Ghost overlays are keyed by this, so a suggestion can never leak into a
/// buffer it was not produced for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BufferId(u64);

impl BufferId {
    /// Allocate the next unused id.
    pub fn next() -> Self {
        BufferId(NEXT_BUFFER_ID.fetch_add(1, Ordering::Relaxed))
    }
}

impl std::fmt::Display for BufferId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "buffer#{}", self.0)
    }
}

/// One open file (or scratch buffer) being edited.
#[derive(Debug)]
pub struct Buffer {
    id: BufferId,
    pub textarea: TextArea<'static>,
    path: Option<PathBuf>,
    syntax: &'static str,
}

impl Buffer {
    /// Open a file into a new buffer. The cursor starts at the top.
    pub fn from_file(path: &Path) -> Result<Self, GhostfillError> {
        let contents = fs::read_to_string(path).map_err(|source| GhostfillError::OpenFile {
            path: path.display().to_string(),
            source,
        })?;

        Ok(Self {
            id: BufferId::next(),
            textarea: TextArea::from(contents.lines()),
            path: Some(path.to_path_buf()),
            syntax: syntax::detect(Some(path)),
        })
    }

    /// An empty, pathless buffer.
    pub fn scratch() -> Self {
        Self {
            id: BufferId::next(),
            textarea: TextArea::default(),
            path: None,
            syntax: syntax::detect(None),
        }
    }

    pub fn id(&self) -> BufferId {
        self.id
    }

    pub fn syntax(&self) -> &'static str {
        self.syntax
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Name shown in the title bar.
    pub fn display_name(&self) -> String {
        match &self.path {
            Some(path) => path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.display().to_string()),
            None => "[scratch]".to_string(),
        }
    }

    /// Full buffer text with `\n` line separators.
    pub fn text(&self) -> String {
        self.textarea.lines().join("\n")
    }

    /// Cursor position as (row, col); col counts chars, not bytes.
    pub fn cursor(&self) -> (usize, usize) {
        self.textarea.cursor()
    }

    pub fn line_count(&self) -> usize {
        self.textarea.lines().len()
    }

    /// Byte offset of the cursor into `text()`.
    pub fn cursor_offset(&self) -> usize {
        let (row, col) = self.textarea.cursor();
        let lines = self.textarea.lines();

        let mut offset = 0;
        for line in lines.iter().take(row) {
            offset += line.len() + 1;
        }

        offset + byte_index_at_char(&lines[row], col)
    }

    /// Insert text at the cursor as one undo-grouped edit.
    ///
    /// Newlines in the text create new buffer lines; the cursor ends up
    /// after the inserted text.
    pub fn insert_at_cursor(&mut self, text: &str) {
        self.textarea.insert_str(text);
    }

    /// Write the buffer back to its file, normalizing the final newline.
    pub fn save(&self) -> Result<(), GhostfillError> {
        let Some(path) = &self.path else {
            return Ok(());
        };

        let mut contents = self.text();
        if !contents.ends_with('\n') {
            contents.push('\n');
        }
        fs::write(path, contents)?;
        Ok(())
    }
}

/// Byte index of the char at `col`, or the line length past the end.
fn byte_index_at_char(line: &str, col: usize) -> usize {
    line.char_indices()
        .nth(col)
        .map(|(i, _)| i)
        .unwrap_or(line.len())
}

#[cfg(test)]
#[path = "buffer_tests.rs"]
mod buffer_tests;
