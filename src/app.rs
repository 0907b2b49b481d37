//! Application layer: state, key handling, rendering

pub mod app_events;
pub mod app_render;
pub mod app_state;

pub use app_state::App;
