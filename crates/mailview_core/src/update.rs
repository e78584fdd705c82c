use crate::{AppState, Effect, Msg};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::RefreshClicked => {
            let request_id = state.begin_fetch();
            vec![Effect::FetchMessages { request_id }]
        }
        Msg::MessagesLoaded { request_id, result } => {
            // A superseded refresh may resolve after a newer one; only the
            // latest issued request is applied.
            state.finish_fetch(request_id, result);
            Vec::new()
        }
        Msg::MessageSelected(message) => {
            state.select(message);
            Vec::new()
        }
        Msg::DeleteAllClicked => {
            // One delete at a time; each success owes exactly one refresh.
            if !state.delete_in_flight() {
                state.set_confirm_delete_visible(true);
            }
            Vec::new()
        }
        Msg::DeleteAllConfirmed => {
            if !state.confirm_delete_visible() || state.delete_in_flight() {
                return (state, Vec::new());
            }
            state.set_confirm_delete_visible(false);
            let request_id = state.begin_delete();
            vec![Effect::DeleteAll { request_id }]
        }
        Msg::DeleteAllCancelled => {
            state.set_confirm_delete_visible(false);
            Vec::new()
        }
        Msg::DeleteAllCompleted { request_id, result } => {
            match state.finish_delete(request_id, result) {
                Some(true) => {
                    let request_id = state.begin_fetch();
                    vec![Effect::FetchMessages { request_id }]
                }
                Some(false) | None => Vec::new(),
            }
        }
        Msg::ErrorDismissed => {
            state.clear_error();
            Vec::new()
        }
        Msg::Tick | Msg::NoOp => Vec::new(),
    };

    (state, effects)
}
