#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub messages: Vec<MessageRowView>,
    pub message_count: usize,
    pub preview: Option<PreviewView>,
    pub confirm_delete_visible: bool,
    /// A list request is in flight.
    pub loading: bool,
    /// A delete-all request is in flight.
    pub deleting: bool,
    pub last_error: Option<String>,
    pub dirty: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageRowView {
    /// Zero-based position in server order.
    pub index: usize,
    pub id: Option<String>,
    pub from: Option<String>,
    pub subject: Option<String>,
    pub date: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewView {
    pub id: Option<String>,
    pub from: Option<String>,
    pub to: Vec<String>,
    pub subject: Option<String>,
    pub date: Option<String>,
    pub body: Option<String>,
}
