use std::sync::Once;

use mailview_core::{update, AppState, Effect, Message, Msg};
use pretty_assertions::assert_eq;
use serde_json::json;

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(mailview_logging::initialize_for_tests);
}

fn message(id: &str, subject: &str) -> Message {
    Message::from_json(json!({
        "ID": id,
        "From": { "Mailbox": "sender", "Domain": "example.com" },
        "To": [{ "Mailbox": "rcpt", "Domain": "example.com" }],
        "Content": { "Headers": { "Subject": [subject] }, "Body": format!("body of {id}") },
        "Created": "2014-04-19T14:08:31Z"
    }))
}

fn fetch_request_id(effects: &[Effect]) -> u64 {
    effects
        .iter()
        .find_map(|effect| match effect {
            Effect::FetchMessages { request_id } => Some(*request_id),
            _ => None,
        })
        .expect("fetch effect")
}

fn loaded(state: AppState, messages: Vec<Message>) -> AppState {
    let (state, effects) = update(state, Msg::RefreshClicked);
    let request_id = fetch_request_id(&effects);
    let (state, effects) = update(
        state,
        Msg::MessagesLoaded {
            request_id,
            result: Ok(messages),
        },
    );
    assert!(effects.is_empty());
    state
}

#[test]
fn refresh_emits_fetch_and_marks_loading() {
    init_logging();
    let (mut state, effects) = update(AppState::new(), Msg::RefreshClicked);

    assert_eq!(effects, vec![Effect::FetchMessages { request_id: 1 }]);
    assert!(state.view().loading);
    assert!(state.consume_dirty());
}

#[test]
fn refresh_replaces_messages_in_server_order() {
    init_logging();
    let first = vec![message("a", "A"), message("b", "B")];
    let state = loaded(AppState::new(), first);

    let second = vec![message("c", "C"), message("a", "A")];
    let state = loaded(state, second.clone());

    assert_eq!(state.messages(), second.as_slice());
    let view = state.view();
    assert!(!view.loading);
    assert_eq!(view.message_count, 2);
    let ids: Vec<_> = view.messages.iter().map(|row| row.id.clone()).collect();
    assert_eq!(ids, vec![Some("c".to_string()), Some("a".to_string())]);
    assert_eq!(view.messages[1].index, 1);
    assert_eq!(view.messages[0].subject.as_deref(), Some("C"));
    assert_eq!(view.messages[0].from.as_deref(), Some("sender@example.com"));
    assert!(view.messages[0].date.is_some());
}

#[test]
fn opaque_records_are_kept_verbatim() {
    init_logging();
    let records = vec![
        Message::from_json(json!({"anything": [1, 2, 3]})),
        Message::from_json(json!("plain")),
    ];
    let state = loaded(AppState::new(), records.clone());

    assert_eq!(state.messages(), records.as_slice());
    let view = state.view();
    assert_eq!(view.messages[0].id, None);
    assert_eq!(view.messages[1].subject, None);
}

#[test]
fn refresh_failure_keeps_messages_and_surfaces_error() {
    init_logging();
    let state = loaded(AppState::new(), vec![message("a", "A")]);
    let (state, effects) = update(state, Msg::RefreshClicked);
    let request_id = fetch_request_id(&effects);

    let (state, effects) = update(
        state,
        Msg::MessagesLoaded {
            request_id,
            result: Err("http status 500".to_string()),
        },
    );

    assert!(effects.is_empty());
    assert_eq!(state.messages().len(), 1);
    let view = state.view();
    assert!(!view.loading);
    assert_eq!(
        view.last_error.as_deref(),
        Some("Failed to load messages: http status 500")
    );

    let (state, _) = update(state, Msg::ErrorDismissed);
    assert_eq!(state.last_error(), None);
}

#[test]
fn successful_refresh_clears_previous_error() {
    init_logging();
    let (state, effects) = update(AppState::new(), Msg::RefreshClicked);
    let (state, _) = update(
        state,
        Msg::MessagesLoaded {
            request_id: fetch_request_id(&effects),
            result: Err("network error".to_string()),
        },
    );
    assert!(state.last_error().is_some());

    let state = loaded(state, Vec::new());
    assert_eq!(state.last_error(), None);
}

#[test]
fn select_message_sets_preview() {
    init_logging();
    let state = loaded(AppState::new(), vec![message("a", "A")]);
    let chosen = state.message_at(0).cloned().unwrap();

    let (mut state, effects) = update(state, Msg::MessageSelected(chosen.clone()));

    assert!(effects.is_empty());
    assert_eq!(state.preview(), Some(&chosen));
    assert!(state.consume_dirty());
    let preview = state.view().preview.unwrap();
    assert_eq!(preview.subject.as_deref(), Some("A"));
    assert_eq!(preview.to, vec!["rcpt@example.com".to_string()]);
    assert_eq!(preview.body.as_deref(), Some("body of a"));
}

#[test]
fn select_message_accepts_message_not_in_list() {
    init_logging();
    let state = loaded(AppState::new(), vec![message("a", "A")]);
    let outsider = message("zzz", "Elsewhere");

    let (state, _) = update(state, Msg::MessageSelected(outsider.clone()));

    assert_eq!(state.preview(), Some(&outsider));
    assert_eq!(state.messages().len(), 1);
}

#[test]
fn delete_all_only_shows_prompt() {
    init_logging();
    let (mut state, effects) = update(AppState::new(), Msg::DeleteAllClicked);

    assert!(effects.is_empty());
    assert!(state.confirm_delete_visible());
    assert!(state.view().confirm_delete_visible);
    assert!(state.consume_dirty());
}

#[test]
fn cancel_hides_prompt_without_effects() {
    init_logging();
    let (state, _) = update(AppState::new(), Msg::DeleteAllClicked);
    let (state, effects) = update(state, Msg::DeleteAllCancelled);

    assert!(effects.is_empty());
    assert!(!state.confirm_delete_visible());
}

#[test]
fn confirm_deletes_then_refreshes_once() {
    init_logging();
    let state = loaded(AppState::new(), vec![message("a", "A")]);
    let (state, _) = update(state, Msg::MessageSelected(message("a", "A")));
    let (state, _) = update(state, Msg::DeleteAllClicked);

    let (state, effects) = update(state, Msg::DeleteAllConfirmed);
    assert_eq!(effects, vec![Effect::DeleteAll { request_id: 2 }]);
    assert!(!state.confirm_delete_visible());
    assert!(state.view().deleting);

    let (state, effects) = update(
        state,
        Msg::DeleteAllCompleted {
            request_id: 2,
            result: Ok(()),
        },
    );
    assert_eq!(effects, vec![Effect::FetchMessages { request_id: 3 }]);
    assert!(!state.view().deleting);
    assert_eq!(state.preview(), None);
    assert!(!state.confirm_delete_visible());

    let (state, effects) = update(
        state,
        Msg::MessagesLoaded {
            request_id: 3,
            result: Ok(Vec::new()),
        },
    );
    assert!(effects.is_empty());
    assert!(state.messages().is_empty());
}

#[test]
fn confirm_without_prompt_is_ignored() {
    init_logging();
    let (mut state, effects) = update(AppState::new(), Msg::DeleteAllConfirmed);

    assert!(effects.is_empty());
    assert!(!state.view().deleting);
    assert!(!state.consume_dirty());
}

#[test]
fn second_confirm_issues_no_second_delete() {
    init_logging();
    let (state, _) = update(AppState::new(), Msg::DeleteAllClicked);
    let (state, first) = update(state, Msg::DeleteAllConfirmed);
    let (_state, second) = update(state, Msg::DeleteAllConfirmed);

    assert_eq!(first.len(), 1);
    assert!(second.is_empty());
}

#[test]
fn failed_delete_surfaces_error_and_skips_refresh() {
    init_logging();
    let state = loaded(AppState::new(), vec![message("a", "A")]);
    let (state, _) = update(state, Msg::DeleteAllClicked);
    let (state, effects) = update(state, Msg::DeleteAllConfirmed);
    let request_id = match effects.as_slice() {
        [Effect::DeleteAll { request_id }] => *request_id,
        other => panic!("unexpected effects {other:?}"),
    };

    let (state, effects) = update(
        state,
        Msg::DeleteAllCompleted {
            request_id,
            result: Err("http status 503".to_string()),
        },
    );

    assert!(effects.is_empty());
    assert_eq!(state.messages().len(), 1);
    assert!(!state.confirm_delete_visible());
    assert_eq!(
        state.last_error(),
        Some("Failed to delete messages: http status 503")
    );
}
