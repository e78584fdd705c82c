//! Mailview engine: mail store HTTP client and effect execution.
mod api;
mod decode;
mod engine;
mod types;

pub use api::{ApiSettings, MailApi, ReqwestMailApi, DELETE_ALL_PATH, MESSAGES_PATH};
pub use decode::decode_message_list;
pub use engine::{ChannelEventSink, EngineHandle, EventSink};
pub use types::{ApiError, EngineEvent, FailureKind, RequestId};
