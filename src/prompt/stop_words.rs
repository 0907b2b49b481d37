//! Per-syntax stop words
//!
//! Keywords that mark the start of the next definition in each language.
//! Stopping on them keeps a completion from running into the code below
//! the cursor.

/// Comment marker appended to every stop list, after the family sentinels
/// and before the syntax keywords.
pub const COMMENT_MARKER: &str = "//";

const STOP_WORDS: &[(&str, &[&str])] = &[
    ("TSX", &["function", "class", "module", "export"]),
    ("TypeScript", &["function", "class", "module", "export"]),
    ("Python", &["def", "class"]),
];

/// Stop words for a syntax name, or `None` for unsupported syntaxes.
pub fn stop_words(syntax: &str) -> Option<&'static [&'static str]> {
    STOP_WORDS
        .iter()
        .find(|(name, _)| *name == syntax)
        .map(|(_, words)| *words)
}
