//! Slash command parsing and execution for the chat loop.
//!
//! Commands start with `/` and provide in-chat access to relationship
//! status, conversation history, and the timeline view.

use console::style;

/// How many turns `/history` shows when no count is given.
const DEFAULT_HISTORY_LIMIT: i64 = 10;

/// Available slash commands in the chat loop.
#[derive(Debug, PartialEq)]
pub enum ChatCommand {
    /// Show available commands.
    Help,
    /// Show relationship status and learned style.
    Status,
    /// Show the most recent conversation turns.
    History(i64),
    /// Show the digital-era timeline for an age.
    Timeline(u8),
    /// Exit the chat session.
    Quit,
    /// Unknown command.
    Unknown(String),
}

/// Parse user input as a slash command.
///
/// Returns `None` if the input doesn't start with `/`.
pub fn parse(input: &str) -> Option<ChatCommand> {
    let trimmed = input.trim();
    if !trimmed.starts_with('/') {
        return None;
    }

    let parts: Vec<&str> = trimmed.splitn(2, ' ').collect();
    let cmd = parts[0].to_lowercase();
    let arg = parts.get(1).map(|s| s.trim());

    match cmd.as_str() {
        "/help" | "/h" | "/?" => Some(ChatCommand::Help),
        "/status" | "/stage" => Some(ChatCommand::Status),
        "/history" => {
            let limit = arg
                .and_then(|a| a.parse().ok())
                .unwrap_or(DEFAULT_HISTORY_LIMIT);
            Some(ChatCommand::History(limit))
        }
        "/timeline" => match arg.and_then(|a| a.parse().ok()) {
            Some(age) => Some(ChatCommand::Timeline(age)),
            None => Some(ChatCommand::Unknown(
                "/timeline requires an age, e.g. /timeline 28".to_string(),
            )),
        },
        "/quit" | "/exit" | "/q" => Some(ChatCommand::Quit),
        other => Some(ChatCommand::Unknown(other.to_string())),
    }
}

/// Print the help text listing all available commands.
pub fn print_help() {
    println!();
    println!("  {}", style("Available commands:").bold());
    println!();
    println!(
        "  {}     {}",
        style("/help").cyan(),
        "Show this help message"
    );
    println!(
        "  {}   {}",
        style("/status").cyan(),
        "Show relationship stage and learned style"
    );
    println!(
        "  {}  {}",
        style("/history").cyan(),
        "Show recent conversation turns (optional count)"
    );
    println!(
        "  {} {}",
        style("/timeline").cyan(),
        "Show the digital-era timeline for an age"
    );
    println!(
        "  {}     {}",
        style("/quit").cyan(),
        "End the chat session"
    );
    println!();
    println!(
        "  {}",
        style("Ctrl+D or Ctrl+C also end the session").dim()
    );
    println!();
}
