const TRUNCATED_MARKER: &str = "\n[truncated]";
pub const MAX_PREVIEW_BODY: usize = 40_960;

/// Normalizes line endings and caps the body shown in the preview pane.
pub fn prepare_preview_body(body: &str) -> String {
    let normalized = body.replace("\r\n", "\n");
    if normalized.len() <= MAX_PREVIEW_BODY {
        return normalized;
    }
    let mut end = MAX_PREVIEW_BODY;
    while end > 0 && !normalized.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}{TRUNCATED_MARKER}", &normalized[..end])
}
