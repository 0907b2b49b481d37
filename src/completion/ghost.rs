//! Ghost overlay plumbing
//!
//! The engine never paints; it drives a [`SuggestionRenderer`] and the host
//! decides what showing ghost text means. The TUI host's implementation is
//! [`OverlayRegistry`], a deferred store the draw pass reads back each frame.

use std::collections::HashMap;

use crate::buffer::BufferId;

/// Buffer position an overlay is anchored to: (row, col), col in chars.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Anchor {
    pub row: usize,
    pub col: usize,
}

/// How ghost lines relate to the surrounding buffer text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GhostLayout {
    /// One line, spliced into the anchor line at the anchor column
    Inline,
    /// Whole dim lines drawn below the anchor row
    Block,
}

/// One rendered ghost overlay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Overlay {
    pub anchor: Anchor,
    pub lines: Vec<String>,
    pub layout: GhostLayout,
}

/// Capability the completion lifecycle needs from a host.
///
/// `show` replaces whatever overlay the buffer currently has; `clear`
/// removes it. Both are idempotent.
pub trait SuggestionRenderer {
    fn show(&mut self, buffer: BufferId, anchor: Anchor, lines: &[String], layout: GhostLayout);
    fn clear(&mut self, buffer: BufferId);
}

/// Per-buffer overlay store for the TUI host.
///
/// Slots are created lazily the first time a buffer is drawn to or cleared
/// and stay registered for the life of the process; an empty slot just means
/// nothing is shown there right now.
#[derive(Debug, Default)]
pub struct OverlayRegistry {
    overlays: HashMap<BufferId, Option<Overlay>>,
}

impl OverlayRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// The overlay currently shown for a buffer, if any.
    pub fn get(&self, buffer: BufferId) -> Option<&Overlay> {
        self.overlays.get(&buffer).and_then(|slot| slot.as_ref())
    }

    /// Number of buffers that ever had overlay activity.
    #[cfg(test)]
    pub fn slot_count(&self) -> usize {
        self.overlays.len()
    }
}

impl SuggestionRenderer for OverlayRegistry {
    fn show(&mut self, buffer: BufferId, anchor: Anchor, lines: &[String], layout: GhostLayout) {
        *self.overlays.entry(buffer).or_default() = Some(Overlay {
            anchor,
            lines: lines.to_vec(),
            layout,
        });
    }

    fn clear(&mut self, buffer: BufferId) {
        *self.overlays.entry(buffer).or_default() = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_registry_starts_empty() {
        let registry = OverlayRegistry::new();
        assert_eq!(registry.slot_count(), 0);
        assert!(registry.get(BufferId::next()).is_none());
    }

    #[test]
    fn test_show_creates_slot_and_overlay() {
        let mut registry = OverlayRegistry::new();
        let buffer = BufferId::next();

        registry.show(
            buffer,
            Anchor { row: 1, col: 4 },
            &lines(&["return a + b"]),
            GhostLayout::Inline,
        );

        assert_eq!(registry.slot_count(), 1);
        let overlay = registry.get(buffer).unwrap();
        assert_eq!(overlay.anchor, Anchor { row: 1, col: 4 });
        assert_eq!(overlay.lines, lines(&["return a + b"]));
        assert_eq!(overlay.layout, GhostLayout::Inline);
    }

    #[test]
    fn test_show_replaces_existing_overlay() {
        let mut registry = OverlayRegistry::new();
        let buffer = BufferId::next();
        let anchor = Anchor { row: 0, col: 0 };

        registry.show(buffer, anchor, &lines(&["first"]), GhostLayout::Inline);
        registry.show(
            buffer,
            anchor,
            &lines(&["second", "line"]),
            GhostLayout::Block,
        );

        assert_eq!(registry.slot_count(), 1);
        let overlay = registry.get(buffer).unwrap();
        assert_eq!(overlay.lines, lines(&["second", "line"]));
        assert_eq!(overlay.layout, GhostLayout::Block);
    }

    #[test]
    fn test_clear_empties_slot_but_keeps_it() {
        let mut registry = OverlayRegistry::new();
        let buffer = BufferId::next();

        registry.show(
            buffer,
            Anchor { row: 0, col: 0 },
            &lines(&["x"]),
            GhostLayout::Inline,
        );
        registry.clear(buffer);

        assert!(registry.get(buffer).is_none());
        assert_eq!(registry.slot_count(), 1);
    }

    #[test]
    fn test_clear_on_untouched_buffer_creates_empty_slot() {
        let mut registry = OverlayRegistry::new();
        let buffer = BufferId::next();

        registry.clear(buffer);

        assert!(registry.get(buffer).is_none());
        assert_eq!(registry.slot_count(), 1);
    }

    #[test]
    fn test_buffers_are_independent() {
        let mut registry = OverlayRegistry::new();
        let a = BufferId::next();
        let b = BufferId::next();
        let anchor = Anchor { row: 0, col: 0 };

        registry.show(a, anchor, &lines(&["for a"]), GhostLayout::Inline);
        registry.show(b, anchor, &lines(&["for b"]), GhostLayout::Inline);
        registry.clear(a);

        assert!(registry.get(a).is_none());
        assert_eq!(registry.get(b).unwrap().lines, lines(&["for b"]));
    }
}
