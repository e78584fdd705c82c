use crate::{Message, RequestId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User asked for the message list to be reloaded.
    RefreshClicked,
    /// Engine finished a list request.
    MessagesLoaded {
        request_id: RequestId,
        result: Result<Vec<Message>, String>,
    },
    /// User picked a message for the preview pane.
    MessageSelected(Message),
    /// User clicked Delete all; opens the confirmation prompt.
    DeleteAllClicked,
    /// User confirmed the prompt.
    DeleteAllConfirmed,
    /// User dismissed the prompt.
    DeleteAllCancelled,
    /// Engine finished a delete-all request.
    DeleteAllCompleted {
        request_id: RequestId,
        result: Result<(), String>,
    },
    /// User acknowledged the error banner.
    ErrorDismissed,
    /// UI/render tick to coalesce rendering.
    Tick,
    /// Fallback for placeholder wiring.
    NoOp,
}
