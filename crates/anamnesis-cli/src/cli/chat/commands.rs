//! Slash command parsing for the interview loop.
//!
//! Commands start with `/` and control the simulation: restart the current
//! case, switch patients, review the transcript, and so on.

use console::style;

/// Available slash commands in the interview loop.
#[derive(Debug, PartialEq)]
pub enum ChatCommand {
    /// Show available commands.
    Help,
    /// Clear the terminal screen.
    Clear,
    /// Exit the interview.
    Exit,
    /// Restart the simulation for the current case.
    Reset,
    /// Switch to another patient case (prompts if no argument given).
    Case(Option<String>),
    /// Show the transcript so far.
    History,
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
    let arg = parts.get(1).map(|s| s.trim().to_string()).filter(|s| !s.is_empty());

    match cmd.as_str() {
        "/help" | "/h" | "/?" => Some(ChatCommand::Help),
        "/clear" | "/cls" => Some(ChatCommand::Clear),
        "/exit" | "/quit" | "/q" => Some(ChatCommand::Exit),
        "/reset" | "/restart" => Some(ChatCommand::Reset),
        "/case" | "/patient" => Some(ChatCommand::Case(arg)),
        "/history" => Some(ChatCommand::History),
        other => Some(ChatCommand::Unknown(other.to_string())),
    }
}

/// Print the help text listing all available commands.
pub fn print_help() {
    println!();
    println!("  {}", style("Available commands:").bold());
    println!();
    println!("  {}    {}", style("/help").cyan(), "Show this help message");
    println!("  {}   {}", style("/clear").cyan(), "Clear the screen");
    println!("  {}   {}", style("/reset").cyan(), "Restart the current case from the beginning");
    println!("  {}    {}", style("/case").cyan(), "Switch patient (optionally: /case <number or label>)");
    println!("  {} {}", style("/history").cyan(), "Show the interview transcript");
    println!("  {}    {}", style("/exit").cyan(), "End the interview");
    println!();
    println!("  {}", style("Ctrl+D to exit").dim());
    println!();
}
