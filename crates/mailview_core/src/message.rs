use serde_json::Value;

/// A stored mail item exactly as the mail store returned it.
///
/// The record is kept verbatim; the accessors read the MailHog field layout
/// when it is present and fall back to `None` otherwise.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    raw: Value,
}

impl Message {
    pub fn from_json(raw: Value) -> Self {
        Self { raw }
    }

    pub fn raw(&self) -> &Value {
        &self.raw
    }

    pub fn into_raw(self) -> Value {
        self.raw
    }

    pub fn id(&self) -> Option<&str> {
        self.raw.get("ID").and_then(Value::as_str)
    }

    /// Sender as `mailbox@domain`.
    pub fn sender(&self) -> Option<String> {
        self.raw.get("From").and_then(format_path)
    }

    pub fn recipients(&self) -> Vec<String> {
        self.raw
            .get("To")
            .and_then(Value::as_array)
            .map(|paths| paths.iter().filter_map(format_path).collect())
            .unwrap_or_default()
    }

    pub fn subject(&self) -> Option<&str> {
        self.header("Subject")
    }

    /// First value of a header in `Content.Headers`.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.raw
            .get("Content")?
            .get("Headers")?
            .get(name)?
            .as_array()?
            .first()?
            .as_str()
    }

    /// Creation time as sent by the server (RFC 3339).
    pub fn created(&self) -> Option<&str> {
        self.raw.get("Created").and_then(Value::as_str)
    }

    pub fn body(&self) -> Option<&str> {
        self.raw.get("Content")?.get("Body")?.as_str()
    }
}

impl From<Value> for Message {
    fn from(raw: Value) -> Self {
        Self::from_json(raw)
    }
}

fn format_path(path: &Value) -> Option<String> {
    let mailbox = path.get("Mailbox").and_then(Value::as_str)?;
    match path.get("Domain").and_then(Value::as_str) {
        Some(domain) if !domain.is_empty() => Some(format!("{mailbox}@{domain}")),
        _ => Some(mailbox.to_string()),
    }
}
