//! Fill-in-the-middle prompt construction
//!
//! Formats buffer context into the prompt shape a model family was trained
//! on and assembles the stop-token list the server truncates generation at.

mod family;
mod stop_words;

use thiserror::Error;

pub use family::{DEFAULT_FAMILY, FamilySpec, family_spec};
pub use stop_words::{COMMENT_MARKER, stop_words};

/// Errors that keep a fill request from being built
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PromptError {
    /// The configured family has no template entry
    #[error("Unknown model family: {0}")]
    UnknownFamily(String),

    /// The buffer's syntax has no stop-word entry
    #[error("No stop words for syntax: {0}")]
    UnknownSyntax(String),
}

/// A formatted inference prompt plus its stop tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FimPrompt {
    pub prompt: String,
    pub stop: Vec<String>,
}

/// Build the prompt and stop list for one fill.
///
/// The prompt is exactly `head + prefix + mid + suffix + tail` for the
/// family's template. The stop list is the family sentinels, then the
/// comment marker, then the syntax's keywords; order is preserved and
/// nothing is deduplicated.
pub fn build_fim_prompt(
    family: &str,
    syntax: &str,
    prefix: &str,
    suffix: &str,
) -> Result<FimPrompt, PromptError> {
    let spec = family_spec(family).ok_or_else(|| PromptError::UnknownFamily(family.to_string()))?;
    let words = stop_words(syntax).ok_or_else(|| PromptError::UnknownSyntax(syntax.to_string()))?;

    let mut prompt = String::with_capacity(
        spec.head.len() + prefix.len() + spec.mid.len() + suffix.len() + spec.tail.len(),
    );
    prompt.push_str(spec.head);
    prompt.push_str(prefix);
    prompt.push_str(spec.mid);
    prompt.push_str(suffix);
    prompt.push_str(spec.tail);

    let stop = spec
        .stop
        .iter()
        .copied()
        .chain(std::iter::once(COMMENT_MARKER))
        .chain(words.iter().copied())
        .map(str::to_string)
        .collect();

    Ok(FimPrompt { prompt, stop })
}

#[cfg(test)]
#[path = "prompt_tests.rs"]
mod prompt_tests;
