use crate::RequestId;

/// IO requested by [`crate::update`]; executed by the platform layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// `GET /api/v1/messages`.
    FetchMessages { request_id: RequestId },
    /// `POST /api/v1/messages/delete`.
    DeleteAll { request_id: RequestId },
}
