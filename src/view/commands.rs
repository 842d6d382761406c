use console::style;

/// One line of terminal input.
#[derive(Debug, PartialEq)]
pub enum InputCommand {
    /// Text to send. Empty means "send the current draft".
    Submit(String),
    /// Copy suggestion `n` (1-based) into the draft.
    Select(usize),
    Help,
    Quit,
    Unknown(String),
}

pub fn parse(input: &str) -> InputCommand {
    let trimmed = input.trim();
    if !trimmed.starts_with('/') {
        return InputCommand::Submit(input.to_string());
    }
    // "//" escapes a question that itself starts with '/'
    if let Some(text) = trimmed.strip_prefix("//") {
        return InputCommand::Submit(format!("/{}", text));
    }

    let cmd = trimmed.to_lowercase();
    match cmd.as_str() {
        "/help" | "/h" | "/?" => InputCommand::Help,
        "/quit" | "/exit" | "/q" => InputCommand::Quit,
        other => match other[1..].parse::<usize>() {
            Ok(n) if n > 0 => InputCommand::Select(n),
            _ => InputCommand::Unknown(other.to_string()),
        },
    }
}

pub fn render_help() -> String {
    format!(
        "\n  {}\n\n  {}    {}\n  {}    {}\n  {}    {}\n  {}     {}\n  {}   {}\n",
        style("Available commands:").bold(),
        style("/<n>").cyan(),
        "Put suggested question n into the input",
        style("/help").cyan(),
        "Show this help message",
        style("/quit").cyan(),
        "End the chat session",
        style("//").cyan(),
        "Send a question that starts with '/' (e.g. //etc/hosts?)",
        style("Enter").cyan(),
        "Send the typed text, or the selected question on an empty line"
    )
}
