//! Fill worker thread
//!
//! One persistent background thread owns the blocking HTTP round trip so
//! the UI thread never waits on the network. Requests arrive on a channel;
//! outcomes go back on another, echoing the request's sequence number so
//! the dispatcher can drop anything a newer fill superseded.

use std::sync::mpsc::{Receiver, Sender, TryRecvError};

use crate::buffer::BufferId;
use crate::ollama::{Generate, OllamaClient};

/// One fill job from dispatcher to worker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FillRequest {
    pub seq: u64,
    pub prompt: String,
    pub stop: Vec<String>,
    pub multiline: bool,
    pub buffer: BufferId,
}

/// Worker verdict for one fill, echoing the request's fields the
/// dispatcher needs to build and place the suggestion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FillOutcome {
    Completed {
        seq: u64,
        text: String,
        multiline: bool,
        buffer: BufferId,
    },
    Failed {
        seq: u64,
        error: String,
    },
}

/// Spawn the fill worker thread.
///
/// The thread runs until the request channel closes. Outcomes that cannot
/// be delivered (dispatcher gone) end the thread too.
pub fn spawn_worker(
    client: OllamaClient,
    request_rx: Receiver<FillRequest>,
    outcome_tx: Sender<FillOutcome>,
) {
    std::thread::spawn(move || {
        worker_loop(&client, request_rx, outcome_tx);
    });
}

/// Main worker loop, generic over the backend so tests can run it against
/// a canned one.
fn worker_loop<G: Generate>(
    client: &G,
    request_rx: Receiver<FillRequest>,
    outcome_tx: Sender<FillOutcome>,
) {
    while let Ok(request) = request_rx.recv() {
        // Newest wins: a queued fill that a later trigger superseded is not
        // worth a round trip.
        let request = drain_to_latest(&request_rx, request);

        log::debug!("fill {} starting", request.seq);
        let outcome = match client.generate(&request.prompt, &request.stop) {
            Ok(text) => FillOutcome::Completed {
                seq: request.seq,
                text,
                multiline: request.multiline,
                buffer: request.buffer,
            },
            Err(e) => FillOutcome::Failed {
                seq: request.seq,
                error: e.to_string(),
            },
        };

        if outcome_tx.send(outcome).is_err() {
            return;
        }
    }

    log::debug!("fill worker shutting down");
}

/// Skip queued requests that a newer one already superseded.
fn drain_to_latest(request_rx: &Receiver<FillRequest>, mut latest: FillRequest) -> FillRequest {
    loop {
        match request_rx.try_recv() {
            Ok(next) => {
                log::debug!("fill {} superseded by {} in queue", latest.seq, next.seq);
                latest = next;
            }
            Err(TryRecvError::Empty | TryRecvError::Disconnected) => return latest,
        }
    }
}

#[cfg(test)]
#[path = "worker_tests.rs"]
mod worker_tests;
