use mailview_core::{AppViewModel, MessageRowView, PreviewView};

const NO_SUBJECT: &str = "(no subject)";
const UNKNOWN: &str = "(unknown)";

/// Renders the whole view as plain text for the terminal.
pub fn render(view: &AppViewModel) -> String {
    let mut lines = Vec::new();

    let mut status = format!("Messages: {}", view.message_count);
    if view.loading {
        status.push_str(" | loading...");
    }
    if view.deleting {
        status.push_str(" | deleting...");
    }
    lines.push(status);

    if let Some(error) = &view.last_error {
        lines.push(format!("! {error} (x to dismiss)"));
    }

    if view.messages.is_empty() {
        lines.push("  (no messages)".to_string());
    }
    lines.extend(view.messages.iter().map(format_row));

    if let Some(preview) = &view.preview {
        lines.push(String::new());
        lines.extend(format_preview(preview));
    }

    if view.confirm_delete_visible {
        lines.push(String::new());
        lines.push("Delete all messages? This cannot be undone. [y/n]".to_string());
    }

    lines.join("\n")
}

fn format_row(row: &MessageRowView) -> String {
    format!(
        "[{n}] {date} | {from} | {subject}",
        n = row.index + 1,
        date = row.date.as_deref().unwrap_or(UNKNOWN),
        from = row.from.as_deref().unwrap_or(UNKNOWN),
        subject = row.subject.as_deref().unwrap_or(NO_SUBJECT),
    )
}

fn format_preview(preview: &PreviewView) -> Vec<String> {
    let to = if preview.to.is_empty() {
        UNKNOWN.to_string()
    } else {
        preview.to.join(", ")
    };
    let mut lines = vec![
        "--- Preview ---".to_string(),
        format!("From:    {}", preview.from.as_deref().unwrap_or(UNKNOWN)),
        format!("To:      {to}"),
        format!("Subject: {}", preview.subject.as_deref().unwrap_or(NO_SUBJECT)),
        format!("Date:    {}", preview.date.as_deref().unwrap_or(UNKNOWN)),
    ];
    if let Some(id) = &preview.id {
        lines.push(format!("ID:      {id}"));
    }
    lines.push(String::new());
    lines.push(preview.body.clone().unwrap_or_default());
    lines
}
