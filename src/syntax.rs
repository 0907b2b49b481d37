//! File-extension to syntax-name mapping
//!
//! Syntax names key the stop-word table in the prompt builder. A file type
//! without a stop-word entry cannot be filled; that failure is silent.

use std::path::Path;

/// Syntax assigned when the extension is unrecognized.
pub const PLAIN_TEXT: &str = "Plain Text";

/// Detect the syntax name from a file path, if any.
pub fn detect(path: Option<&Path>) -> &'static str {
    let ext = path.and_then(|p| p.extension()).and_then(|e| e.to_str());

    match ext {
        Some("py" | "pyi") => "Python",
        Some("ts" | "mts" | "cts") => "TypeScript",
        Some("tsx") => "TSX",
        _ => PLAIN_TEXT,
    }
}
