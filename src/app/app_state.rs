//! Top level application state

use std::sync::mpsc;

use crate::buffer::Buffer;
use crate::completion::{CompletionState, OverlayRegistry, spawn_worker};
use crate::config::Config;
use crate::ollama::OllamaClient;
use crate::scroll::ScrollState;

pub struct App {
    pub buffer: Buffer,
    pub completion: CompletionState,
    pub overlays: OverlayRegistry,
    pub scroll: ScrollState,
    pub config: Config,
    /// One-shot message for the status line, replaced on each action
    pub status: Option<String>,
    should_quit: bool,
}

impl App {
    /// Build an app with no worker attached. Tests drive the completion
    /// channels directly; the binary calls [`App::start_worker`] right after.
    pub fn new(buffer: Buffer, config: Config) -> Self {
        Self {
            buffer,
            completion: CompletionState::new(),
            overlays: OverlayRegistry::new(),
            scroll: ScrollState::new(),
            config,
            status: None,
            should_quit: false,
        }
    }

    /// Spawn the fill worker and wire its channels into completion state.
    pub fn start_worker(&mut self) {
        let (request_tx, request_rx) = mpsc::channel();
        let (outcome_tx, outcome_rx) = mpsc::channel();
        let client = OllamaClient::from_config(&self.config.server);
        spawn_worker(client, request_rx, outcome_tx);
        self.completion.set_channels(request_tx, outcome_rx);
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }
}

#[cfg(test)]
#[path = "app_state_tests.rs"]
mod app_state_tests;
