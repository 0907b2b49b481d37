use super::*;
use crate::buffer::Buffer;
use crate::completion::worker::FillRequest;
use crate::completion::{FillPhase, GhostLayout};
use crate::config::Config;
use crate::test_utils::test_helpers::{test_app, wire_channels};

fn completed(request: &FillRequest, text: &str) -> FillOutcome {
    FillOutcome::Completed {
        seq: request.seq,
        text: text.to_string(),
        multiline: request.multiline,
        buffer: request.buffer,
    }
}

// ===== Triggering =====

#[test]
fn test_trigger_without_worker_stays_idle() {
    let (mut app, _dir) = test_app("x = 1");

    trigger_fill(&mut app);

    assert_eq!(app.completion.phase(), FillPhase::Idle);
    assert_eq!(app.completion.latest_seq(), 0);
}

#[test]
fn test_trigger_fill_sends_request() {
    let (mut app, _dir) = test_app("def add(a, b):\n    ");
    let (request_rx, _outcome_tx) = wire_channels(&mut app);

    trigger_fill(&mut app);

    let request = request_rx.try_recv().unwrap();
    assert_eq!(request.seq, 1);
    assert_eq!(request.prompt, "<PRE> def add(a, b):\n     <SUF> <MID>");
    assert_eq!(
        request.stop,
        vec!["<PRE>", "<SUF>", "<MID>", "<EOT>", "//", "def", "class"]
    );
    assert!(!request.multiline);
    assert_eq!(request.buffer, app.buffer.id());
    assert_eq!(app.completion.phase(), FillPhase::Requesting);
}

#[test]
fn test_trigger_in_empty_scope_requests_multiline() {
    let (mut app, _dir) = test_app("items = [");
    let (request_rx, _outcome_tx) = wire_channels(&mut app);

    trigger_fill(&mut app);

    let request = request_rx.try_recv().unwrap();
    assert!(request.multiline);
}

#[test]
fn test_trigger_with_unknown_family_does_nothing() {
    let (mut app, _dir) = test_app("x = 1");
    app.config.server.family = "mystery".to_string();
    let (request_rx, _outcome_tx) = wire_channels(&mut app);

    trigger_fill(&mut app);

    assert!(request_rx.try_recv().is_err());
    assert_eq!(app.completion.phase(), FillPhase::Idle);
}

#[test]
fn test_trigger_on_plain_text_buffer_does_nothing() {
    let mut app = App::new(Buffer::scratch(), Config::default());
    let (request_rx, _outcome_tx) = wire_channels(&mut app);

    trigger_fill(&mut app);

    assert!(request_rx.try_recv().is_err());
    assert_eq!(app.completion.phase(), FillPhase::Idle);
}

// ===== Outcome handling =====

#[test]
fn test_completed_outcome_shows_ghost_text_at_cursor() {
    let (mut app, _dir) = test_app("def add(a, b):\n    ");
    let (request_rx, outcome_tx) = wire_channels(&mut app);

    trigger_fill(&mut app);
    let request = request_rx.try_recv().unwrap();
    outcome_tx.send(completed(&request, "return a + b")).unwrap();
    poll_fill_outcomes(&mut app);

    assert_eq!(app.completion.phase(), FillPhase::Displayed);
    let overlay = app.overlays.get(app.buffer.id()).unwrap();
    assert_eq!(overlay.anchor, Anchor { row: 1, col: 4 });
    assert_eq!(overlay.lines, vec!["return a + b"]);
    assert_eq!(overlay.layout, GhostLayout::Inline);
}

#[test]
fn test_multiline_outcome_shows_block_overlay() {
    let (mut app, _dir) = test_app("items = [");
    let (request_rx, outcome_tx) = wire_channels(&mut app);

    trigger_fill(&mut app);
    let request = request_rx.try_recv().unwrap();
    outcome_tx
        .send(completed(&request, "1,\n    2,\n]"))
        .unwrap();
    poll_fill_outcomes(&mut app);

    let overlay = app.overlays.get(app.buffer.id()).unwrap();
    assert_eq!(overlay.layout, GhostLayout::Block);
    assert_eq!(overlay.lines, vec!["1,", "    2,", "]"]);
}

#[test]
fn test_stale_outcome_is_dropped() {
    let (mut app, _dir) = test_app("def add(a, b):\n    ");
    let (request_rx, outcome_tx) = wire_channels(&mut app);

    trigger_fill(&mut app);
    trigger_fill(&mut app);
    let first = request_rx.try_recv().unwrap();
    let second = request_rx.try_recv().unwrap();

    // Worker answers out of order: the newer fill lands first
    outcome_tx.send(completed(&second, "newer")).unwrap();
    outcome_tx.send(completed(&first, "older")).unwrap();
    poll_fill_outcomes(&mut app);

    let overlay = app.overlays.get(app.buffer.id()).unwrap();
    assert_eq!(overlay.lines, vec!["newer"]);
    assert_eq!(app.completion.phase(), FillPhase::Displayed);
}

#[test]
fn test_newer_fill_replaces_displayed_suggestion() {
    let (mut app, _dir) = test_app("def add(a, b):\n    ");
    let (request_rx, outcome_tx) = wire_channels(&mut app);

    trigger_fill(&mut app);
    let first = request_rx.try_recv().unwrap();
    outcome_tx.send(completed(&first, "pass")).unwrap();
    poll_fill_outcomes(&mut app);

    trigger_fill(&mut app);
    let second = request_rx.try_recv().unwrap();
    outcome_tx.send(completed(&second, "return a + b")).unwrap();
    poll_fill_outcomes(&mut app);

    let overlay = app.overlays.get(app.buffer.id()).unwrap();
    assert_eq!(overlay.lines, vec!["return a + b"]);
}

#[test]
fn test_failed_outcome_returns_to_idle() {
    let (mut app, _dir) = test_app("x = 1");
    let (request_rx, outcome_tx) = wire_channels(&mut app);

    trigger_fill(&mut app);
    let request = request_rx.try_recv().unwrap();
    outcome_tx
        .send(FillOutcome::Failed {
            seq: request.seq,
            error: "connection refused".to_string(),
        })
        .unwrap();
    poll_fill_outcomes(&mut app);

    assert_eq!(app.completion.phase(), FillPhase::Idle);
    assert!(app.overlays.get(app.buffer.id()).is_none());
}

#[test]
fn test_blank_completion_is_discarded() {
    let (mut app, _dir) = test_app("x = 1");
    let (request_rx, outcome_tx) = wire_channels(&mut app);

    trigger_fill(&mut app);
    let request = request_rx.try_recv().unwrap();
    outcome_tx.send(completed(&request, "  \n  ")).unwrap();
    poll_fill_outcomes(&mut app);

    assert_eq!(app.completion.phase(), FillPhase::Idle);
    assert!(app.overlays.get(app.buffer.id()).is_none());
}

#[test]
fn test_poll_disables_completion_when_worker_is_gone() {
    let (mut app, _dir) = test_app("x = 1");
    let (request_rx, outcome_tx) = wire_channels(&mut app);
    drop(outcome_tx);

    poll_fill_outcomes(&mut app);

    assert!(app.completion.request_tx.is_none());
    assert!(app.completion.response_rx.is_none());

    // Later triggers quietly do nothing
    trigger_fill(&mut app);
    assert_eq!(app.completion.phase(), FillPhase::Idle);
    drop(request_rx);
}

// ===== Accept and dismiss =====

#[test]
fn test_accept_when_nothing_is_shown_is_a_noop() {
    let (mut app, _dir) = test_app("x = 1");

    accept_suggestion(&mut app);

    assert_eq!(app.buffer.text(), "x = 1");
}

#[test]
fn test_dismiss_hides_ghost_text() {
    let (mut app, _dir) = test_app("def add(a, b):\n    ");
    let (request_rx, outcome_tx) = wire_channels(&mut app);

    trigger_fill(&mut app);
    let request = request_rx.try_recv().unwrap();
    outcome_tx.send(completed(&request, "return a + b")).unwrap();
    poll_fill_outcomes(&mut app);

    dismiss_suggestion(&mut app);

    assert!(app.overlays.get(app.buffer.id()).is_none());
    assert_eq!(app.completion.phase(), FillPhase::Idle);
}

#[test]
fn test_accept_after_dismiss_inserts_nothing() {
    let (mut app, _dir) = test_app("def add(a, b):\n    ");
    let (request_rx, outcome_tx) = wire_channels(&mut app);

    trigger_fill(&mut app);
    let request = request_rx.try_recv().unwrap();
    outcome_tx.send(completed(&request, "return a + b")).unwrap();
    poll_fill_outcomes(&mut app);
    dismiss_suggestion(&mut app);

    accept_suggestion(&mut app);

    assert_eq!(app.buffer.text(), "def add(a, b):\n    ");
}

// ===== End to end =====

#[test]
fn test_fill_round_trip_inserts_completion() {
    let (mut app, _dir) = test_app("def add(a, b):\n    ");
    let (request_rx, outcome_tx) = wire_channels(&mut app);

    trigger_fill(&mut app);

    let request = request_rx.try_recv().unwrap();
    assert_eq!(request.prompt, "<PRE> def add(a, b):\n     <SUF> <MID>");
    assert_eq!(
        request.stop,
        vec!["<PRE>", "<SUF>", "<MID>", "<EOT>", "//", "def", "class"]
    );
    assert!(!request.multiline);

    outcome_tx.send(completed(&request, "return a + b")).unwrap();
    poll_fill_outcomes(&mut app);

    let overlay = app.overlays.get(app.buffer.id()).unwrap();
    assert_eq!(overlay.anchor, Anchor { row: 1, col: 4 });
    assert_eq!(overlay.lines, vec!["return a + b"]);

    accept_suggestion(&mut app);

    assert_eq!(app.buffer.text(), "def add(a, b):\n    return a + b");
    assert_eq!(app.completion.phase(), FillPhase::Idle);
    assert!(app.overlays.get(app.buffer.id()).is_none());

    // A second accept has nothing left to insert
    accept_suggestion(&mut app);
    assert_eq!(app.buffer.text(), "def add(a, b):\n    return a + b");
}
