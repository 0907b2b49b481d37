/// Tracks whether a scan position is inside a quoted string literal.
///
/// Handles both quote characters used by the supported languages and skips
/// backslash escapes, so delimiters inside strings never count as scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScanState {
    #[default]
    Normal,
    InString(char),
    InStringEscape(char),
}

impl ScanState {
    pub fn advance(self, ch: char) -> Self {
        match self {
            ScanState::Normal => match ch {
                '"' | '\'' => ScanState::InString(ch),
                _ => ScanState::Normal,
            },
            ScanState::InString(quote) => match ch {
                '\\' => ScanState::InStringEscape(quote),
                _ if ch == quote => ScanState::Normal,
                _ => ScanState::InString(quote),
            },
            ScanState::InStringEscape(quote) => ScanState::InString(quote),
        }
    }

    pub fn is_in_string(self) -> bool {
        matches!(self, ScanState::InString(_) | ScanState::InStringEscape(_))
    }
}

#[cfg(test)]
#[path = "scan_tests.rs"]
mod scan_tests;
