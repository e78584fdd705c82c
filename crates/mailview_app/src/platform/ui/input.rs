use mailview_core::Msg;

pub const HELP: &str = "\
Commands:
  r        refresh the message list
  s <n>    preview message n
  d        delete all messages (asks for confirmation)
  y / n    confirm / cancel delete all
  x        dismiss the error
  h        show this help
  q        quit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Send(Msg),
    /// Zero-based row index.
    Select(usize),
    Help,
    Quit,
    Unknown(String),
}

/// Parses one line of user input. Blank lines yield `None`.
pub fn parse_command(line: &str) -> Option<Command> {
    let mut words = line.split_whitespace();
    let head = words.next()?;
    let rest: Vec<&str> = words.collect();

    let command = match (head.to_ascii_lowercase().as_str(), rest.as_slice()) {
        ("r", []) => Command::Send(Msg::RefreshClicked),
        ("d", []) => Command::Send(Msg::DeleteAllClicked),
        ("y", []) => Command::Send(Msg::DeleteAllConfirmed),
        ("n", []) => Command::Send(Msg::DeleteAllCancelled),
        ("x", []) => Command::Send(Msg::ErrorDismissed),
        ("h" | "?", []) => Command::Help,
        ("q", []) => Command::Quit,
        ("s", [n]) => match n.parse::<usize>() {
            Ok(n) if n > 0 => Command::Select(n - 1),
            _ => Command::Unknown(line.trim().to_string()),
        },
        _ => Command::Unknown(line.trim().to_string()),
    };
    Some(command)
}
