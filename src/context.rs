//! Cursor context extraction
//!
//! Splits the buffer at the cursor into the prefix/suffix halves of a
//! fill-in-the-middle prompt and decides whether the model may produce
//! multiple lines: only when the lexical scope enclosing the cursor is empty,
//! so a blank function body invites a whole body while mid-expression
//! completions stay on one line.

mod scan;

use scan::ScanState;

/// Buffer context around the cursor for one fill request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FillContext {
    /// Text from the start of the buffer to the cursor
    pub prefix: String,
    /// Text from the cursor to the end of the buffer
    pub suffix: String,
    /// Whether a multi-line completion is allowed
    pub multiline: bool,
}

/// Extract the fill context at `cursor`, a byte offset into `text`.
///
/// The offset must lie on a char boundary; offsets past the end are clamped.
pub fn extract(text: &str, cursor: usize) -> FillContext {
    let cursor = cursor.min(text.len());

    FillContext {
        prefix: text[..cursor].to_string(),
        suffix: text[cursor..].to_string(),
        multiline: scope_is_empty(text, cursor),
    }
}

/// True when the scope enclosing the cursor contains only whitespace.
///
/// With no enclosing delimiter the whole buffer is the scope, so an empty
/// buffer allows multi-line completion.
fn scope_is_empty(text: &str, cursor: usize) -> bool {
    match scope_interior(text, cursor) {
        Some((start, end)) => text[start..end].trim().is_empty(),
        None => text.trim().is_empty(),
    }
}

/// Byte range of the interior of the innermost scope containing the cursor.
///
/// A scope is a `()`/`[]`/`{}` pair whose delimiters sit outside string
/// literals. The cursor counts as inside when it is past the opener and not
/// past the closer. An opener that was never closed still forms a scope
/// running to the end of the buffer; the closer just has not been typed yet.
fn scope_interior(text: &str, cursor: usize) -> Option<(usize, usize)> {
    let mut open_delims: Vec<(usize, char)> = Vec::new();
    let mut innermost: Option<(usize, usize)> = None;
    let mut state = ScanState::default();

    for (pos, ch) in text.char_indices() {
        if !state.is_in_string() {
            match ch {
                '(' | '[' | '{' => open_delims.push((pos, ch)),
                ')' | ']' | '}' => {
                    let expected = match ch {
                        ')' => '(',
                        ']' => '[',
                        _ => '{',
                    };
                    if let Some(&(open, open_ch)) = open_delims.last()
                        && open_ch == expected
                    {
                        open_delims.pop();
                        if open < cursor
                            && cursor <= pos
                            && innermost.is_none_or(|(start, _)| open + 1 > start)
                        {
                            innermost = Some((open + 1, pos));
                        }
                    }
                }
                _ => {}
            }
        }
        state = state.advance(ch);
    }

    if let Some(&(open, _)) = open_delims.iter().rev().find(|&&(open, _)| open < cursor)
        && innermost.is_none_or(|(start, _)| open + 1 > start)
    {
        innermost = Some((open + 1, text.len()));
    }

    innermost
}

#[cfg(test)]
#[path = "context_tests.rs"]
mod context_tests;
