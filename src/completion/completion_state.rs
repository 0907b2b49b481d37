//! Completion lifecycle state
//!
//! Owns the single active suggestion, the monotonic fill sequence, and the
//! worker channel handles. The session owns one of these and the dispatcher
//! thread is its only writer, so there is no lock anywhere.

use std::sync::mpsc::{Receiver, Sender};

use crate::buffer::BufferId;
use crate::prompt::FimPrompt;

use super::ghost::{Anchor, SuggestionRenderer};
use super::suggestion::Suggestion;
use super::worker::{FillOutcome, FillRequest};

/// Where the completion lifecycle currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FillPhase {
    /// Nothing pending, nothing shown
    Idle,
    /// A fill was sent and its outcome is still out
    Requesting,
    /// A suggestion is on screen
    Displayed,
}

/// Session-owned completion state.
pub struct CompletionState {
    /// At most one suggestion exists at a time
    current: Option<Suggestion>,
    /// Sequence number of the newest issued fill
    seq: u64,
    /// Sequence of the fill whose outcome is still pending
    in_flight: Option<u64>,
    /// Channel to send fill requests to the worker thread
    pub request_tx: Option<Sender<FillRequest>>,
    /// Channel to receive outcomes from the worker thread
    pub response_rx: Option<Receiver<FillOutcome>>,
}

impl CompletionState {
    pub fn new() -> Self {
        Self {
            current: None,
            seq: 0,
            in_flight: None,
            request_tx: None,
            response_rx: None,
        }
    }

    /// Set the channel handles for communication with the worker thread.
    pub fn set_channels(
        &mut self,
        request_tx: Sender<FillRequest>,
        response_rx: Receiver<FillOutcome>,
    ) {
        self.request_tx = Some(request_tx);
        self.response_rx = Some(response_rx);
    }

    pub fn phase(&self) -> FillPhase {
        if self.in_flight.is_some() {
            FillPhase::Requesting
        } else if self.has_visible_suggestion() {
            FillPhase::Displayed
        } else {
            FillPhase::Idle
        }
    }

    pub fn current(&self) -> Option<&Suggestion> {
        self.current.as_ref()
    }

    pub fn has_visible_suggestion(&self) -> bool {
        self.current.as_ref().is_some_and(Suggestion::is_visible)
    }

    /// Newest issued fill sequence.
    pub fn latest_seq(&self) -> u64 {
        self.seq
    }

    /// An outcome is stale when a newer fill was issued after its request.
    pub fn is_stale(&self, seq: u64) -> bool {
        seq < self.seq
    }

    pub fn clear_in_flight(&mut self, seq: u64) {
        if self.in_flight == Some(seq) {
            self.in_flight = None;
        }
    }

    /// Issue a fill to the worker.
    ///
    /// Allocates the next sequence number and marks it in flight. Returns
    /// false when no worker is attached or the send fails; the sequence
    /// still advances so any straggler outcomes stay stale.
    pub fn request_fill(&mut self, prompt: FimPrompt, multiline: bool, buffer: BufferId) -> bool {
        if self.request_tx.is_none() {
            return false;
        }

        self.seq += 1;
        self.in_flight = Some(self.seq);

        if let Some(ref tx) = self.request_tx
            && tx
                .send(FillRequest {
                    seq: self.seq,
                    prompt: prompt.prompt,
                    stop: prompt.stop,
                    multiline,
                    buffer,
                })
                .is_ok()
        {
            return true;
        }

        self.in_flight = None;
        false
    }

    /// Install `next` as the one suggestion, hiding any prior one first.
    pub fn replace(&mut self, next: Suggestion, renderer: &mut dyn SuggestionRenderer) {
        if let Some(prior) = self.current.as_mut() {
            prior.hide(renderer);
        }
        self.current = Some(next);
    }

    /// Clear the overlay; the suggestion stays installed until replaced
    /// or accepted.
    pub fn hide(&mut self, renderer: &mut dyn SuggestionRenderer) {
        if let Some(current) = self.current.as_mut() {
            current.hide(renderer);
        }
    }

    /// Re-render the installed suggestion at `anchor`, if there is one.
    pub fn show_current(&mut self, renderer: &mut dyn SuggestionRenderer, anchor: Anchor) {
        if let Some(current) = self.current.as_mut() {
            current.show(renderer, anchor);
        }
    }

    /// Consume the suggestion for insertion.
    ///
    /// Only a visible suggestion can be accepted; otherwise this is a no-op
    /// returning `None`. On success the overlay is cleared, the slot is
    /// emptied, and the caller gets the owning buffer plus the insert text.
    pub fn take_for_insert(
        &mut self,
        renderer: &mut dyn SuggestionRenderer,
    ) -> Option<(BufferId, String)> {
        if !self.has_visible_suggestion() {
            return None;
        }

        let mut suggestion = self.current.take()?;
        suggestion.hide(renderer);
        Some((suggestion.buffer(), suggestion.insert_text()))
    }
}

impl Default for CompletionState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "completion_state_tests.rs"]
mod completion_state_tests;
