//! Inline completion engine
//!
//! Everything between a trigger keypress and ghost text on screen: the
//! suggestion lifecycle, the overlay registry behind the renderer trait,
//! the worker thread that owns the HTTP round trip, and the event handlers
//! that tie them to the host.

pub mod completion_events;
pub mod completion_render;
pub mod completion_state;
pub mod ghost;
pub mod suggestion;
pub mod worker;

pub use completion_render::{ViewLines, build_view_lines};
pub use completion_state::{CompletionState, FillPhase};
pub use ghost::{Anchor, GhostLayout, Overlay, OverlayRegistry, SuggestionRenderer};
pub use suggestion::Suggestion;
pub use worker::{FillOutcome, FillRequest, spawn_worker};
