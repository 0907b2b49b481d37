//! Fill dispatch: the seam between key handling and the worker
//!
//! These functions run on the UI thread. They turn a trigger keypress into
//! a fill request, drain worker outcomes each tick, and move the suggestion
//! lifecycle along. Anything that goes wrong here is logged and swallowed;
//! a failed fill just never shows ghost text.

use std::sync::mpsc::TryRecvError;

use crate::app::App;
use crate::context;
use crate::prompt::build_fim_prompt;

use super::ghost::Anchor;
use super::suggestion::Suggestion;
use super::worker::FillOutcome;

/// Start a fill at the cursor.
pub fn trigger_fill(app: &mut App) {
    let text = app.buffer.text();
    let context = context::extract(&text, app.buffer.cursor_offset());

    let prompt = match build_fim_prompt(
        &app.config.server.family,
        app.buffer.syntax(),
        &context.prefix,
        &context.suffix,
    ) {
        Ok(prompt) => prompt,
        Err(err) => {
            log::debug!("fill not started: {err}");
            return;
        }
    };

    if !app
        .completion
        .request_fill(prompt, context.multiline, app.buffer.id())
    {
        log::debug!("fill not dispatched, worker unavailable");
    }
}

/// Insert the visible suggestion at the cursor and clear it.
pub fn accept_suggestion(app: &mut App) {
    let Some((buffer, text)) = app.completion.take_for_insert(&mut app.overlays) else {
        return;
    };

    if buffer == app.buffer.id() {
        app.buffer.insert_at_cursor(&text);
    } else {
        log::debug!("dropping accepted text for unfocused {buffer}");
    }
}

/// Hide ghost text. Runs on Esc and on any edit or cursor movement.
pub fn dismiss_suggestion(app: &mut App) {
    app.completion.hide(&mut app.overlays);
}

/// Drain worker outcomes. Called on every tick of the event loop.
pub fn poll_fill_outcomes(app: &mut App) {
    // Collect first; handling an outcome needs &mut App while the
    // receiver is borrowed from it.
    let mut outcomes = Vec::new();
    let mut disconnected = false;

    if let Some(ref response_rx) = app.completion.response_rx {
        loop {
            match response_rx.try_recv() {
                Ok(outcome) => outcomes.push(outcome),
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    disconnected = true;
                    break;
                }
            }
        }
    }

    if disconnected {
        log::debug!("fill worker is gone, disabling completion");
        app.completion.request_tx = None;
        app.completion.response_rx = None;
    }

    for outcome in outcomes {
        handle_outcome(app, outcome);
    }
}

fn handle_outcome(app: &mut App, outcome: FillOutcome) {
    match outcome {
        FillOutcome::Completed {
            seq,
            text,
            multiline,
            buffer,
        } => {
            app.completion.clear_in_flight(seq);

            if app.completion.is_stale(seq) {
                log::debug!("fill {seq} superseded, dropping");
                return;
            }

            let suggestion = Suggestion::new(&text, buffer, multiline);
            if suggestion.is_empty() {
                log::debug!("fill {seq} returned nothing");
                return;
            }

            let (row, col) = app.buffer.cursor();
            app.completion.replace(suggestion, &mut app.overlays);
            app.completion
                .show_current(&mut app.overlays, Anchor { row, col });
        }
        FillOutcome::Failed { seq, error } => {
            log::debug!("fill {seq} failed: {error}");
            app.completion.clear_in_flight(seq);
        }
    }
}

#[cfg(test)]
#[path = "completion_events_tests.rs"]
mod completion_events_tests;
