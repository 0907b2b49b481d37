//! Model family prompt templates
//!
//! Each supported family formats fill-in-the-middle prompts with its own
//! sentinel tokens and needs those sentinels in the stop list so the model
//! never echoes them back.

/// Prompt and stop-token conventions for one model family.
///
/// The prompt is assembled as `head + prefix + mid + suffix + tail`.
/// Spacing inside the segments is part of the model's training format and
/// must be preserved exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FamilySpec {
    pub name: &'static str,
    pub head: &'static str,
    pub mid: &'static str,
    pub tail: &'static str,
    pub stop: &'static [&'static str],
}

/// Family assumed when the config does not name one.
pub const DEFAULT_FAMILY: &str = "codellama";

const FAMILIES: &[FamilySpec] = &[
    FamilySpec {
        name: "codellama",
        head: "<PRE> ",
        mid: " <SUF>",
        tail: " <MID>",
        stop: &["<PRE>", "<SUF>", "<MID>", "<EOT>"],
    },
    FamilySpec {
        name: "deepseek",
        head: "<｜fim▁begin｜>",
        mid: "<｜fim▁hole｜>",
        tail: "<｜fim▁end｜>",
        stop: &["<｜fim▁begin｜>", "<｜fim▁hole｜>", "<｜fim▁end｜>"],
    },
];

/// Look up a family by its config name.
pub fn family_spec(name: &str) -> Option<&'static FamilySpec> {
    FAMILIES.iter().find(|f| f.name == name)
}
