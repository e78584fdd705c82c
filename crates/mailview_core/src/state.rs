use crate::view_model::{AppViewModel, MessageRowView, PreviewView};
use crate::{format_created, prepare_preview_body, Message};

pub type RequestId = u64;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    messages: Vec<Message>,
    preview: Option<Message>,
    confirm_delete_visible: bool,
    next_request_id: RequestId,
    pending_fetch: Option<RequestId>,
    pending_delete: Option<RequestId>,
    last_error: Option<String>,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> AppViewModel {
        AppViewModel {
            messages: self
                .messages
                .iter()
                .enumerate()
                .map(|(index, message)| MessageRowView {
                    index,
                    id: message.id().map(ToOwned::to_owned),
                    from: message.sender(),
                    subject: message.subject().map(ToOwned::to_owned),
                    date: message.created().map(format_created),
                })
                .collect(),
            message_count: self.messages.len(),
            preview: self.preview.as_ref().map(preview_view),
            confirm_delete_visible: self.confirm_delete_visible,
            loading: self.pending_fetch.is_some(),
            deleting: self.pending_delete.is_some(),
            last_error: self.last_error.clone(),
            dirty: self.dirty,
        }
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn message_at(&self, index: usize) -> Option<&Message> {
        self.messages.get(index)
    }

    pub fn preview(&self) -> Option<&Message> {
        self.preview.as_ref()
    }

    pub fn confirm_delete_visible(&self) -> bool {
        self.confirm_delete_visible
    }

    pub fn delete_in_flight(&self) -> bool {
        self.pending_delete.is_some()
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Returns whether anything visible changed since the last call, and resets the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    fn allocate_request_id(&mut self) -> RequestId {
        self.next_request_id += 1;
        self.next_request_id
    }

    /// Starts a list request; any earlier one still in flight becomes stale.
    pub(crate) fn begin_fetch(&mut self) -> RequestId {
        let request_id = self.allocate_request_id();
        self.pending_fetch = Some(request_id);
        self.mark_dirty();
        request_id
    }

    /// Applies a list response. Responses to superseded requests are dropped.
    pub(crate) fn finish_fetch(
        &mut self,
        request_id: RequestId,
        result: Result<Vec<Message>, String>,
    ) {
        if self.pending_fetch != Some(request_id) {
            return;
        }
        self.pending_fetch = None;
        match result {
            Ok(messages) => {
                self.messages = messages;
                self.last_error = None;
            }
            Err(error) => {
                self.last_error = Some(format!("Failed to load messages: {error}"));
            }
        }
        self.mark_dirty();
    }

    pub(crate) fn select(&mut self, message: Message) {
        self.preview = Some(message);
        self.mark_dirty();
    }

    pub(crate) fn set_confirm_delete_visible(&mut self, visible: bool) {
        if self.confirm_delete_visible != visible {
            self.confirm_delete_visible = visible;
            self.mark_dirty();
        }
    }

    pub(crate) fn begin_delete(&mut self) -> RequestId {
        let request_id = self.allocate_request_id();
        self.pending_delete = Some(request_id);
        self.mark_dirty();
        request_id
    }

    /// Applies a delete response. Returns `Some(true)` on success, `Some(false)`
    /// on failure and `None` when the response does not match the pending delete.
    pub(crate) fn finish_delete(
        &mut self,
        request_id: RequestId,
        result: Result<(), String>,
    ) -> Option<bool> {
        if self.pending_delete != Some(request_id) {
            return None;
        }
        self.pending_delete = None;
        self.mark_dirty();
        match result {
            Ok(()) => {
                self.preview = None;
                self.last_error = None;
                Some(true)
            }
            Err(error) => {
                self.last_error = Some(format!("Failed to delete messages: {error}"));
                Some(false)
            }
        }
    }

    pub(crate) fn clear_error(&mut self) {
        if self.last_error.take().is_some() {
            self.mark_dirty();
        }
    }
}

fn preview_view(message: &Message) -> PreviewView {
    PreviewView {
        id: message.id().map(ToOwned::to_owned),
        from: message.sender(),
        to: message.recipients(),
        subject: message.subject().map(ToOwned::to_owned),
        date: message.created().map(format_created),
        body: message.body().map(prepare_preview_body),
    }
}
