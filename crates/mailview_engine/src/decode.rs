use serde_json::Value;

use crate::{ApiError, FailureKind};

/// Decodes a `GET /api/v1/messages` body. The records are returned verbatim,
/// in server order; anything other than a JSON array is rejected.
pub fn decode_message_list(bytes: &[u8]) -> Result<Vec<Value>, ApiError> {
    let value: Value = serde_json::from_slice(bytes)
        .map_err(|err| ApiError::new(FailureKind::UnexpectedBody, err.to_string()))?;
    match value {
        Value::Array(records) => Ok(records),
        // An empty store may be serialized as `null`.
        Value::Null => Ok(Vec::new()),
        other => Err(ApiError::new(
            FailureKind::UnexpectedBody,
            format!("expected a JSON array, got {}", json_kind(&other)),
        )),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
