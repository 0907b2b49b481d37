//! Ghost text code completion for the terminal
//!
//! A minimal editor that asks an Ollama style inference server to fill in
//! the code around the cursor and draws the answer as dimmed ghost text
//! until it is accepted with Tab or dismissed.

pub mod app;
pub mod buffer;
pub mod completion;
pub mod config;
pub mod context;
pub mod error;
pub mod logging;
pub mod ollama;
pub mod prompt;
pub mod scroll;
pub mod syntax;
