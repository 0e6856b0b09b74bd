//! Welcome banner display for chat sessions.
//!
//! Prints a styled banner when a chat session starts, showing the
//! companion's identity, relationship stage, and trust level.

use console::style;

use renexus_types::companion::Companion;

/// Print the welcome banner at the start of a chat session.
///
/// Displays the companion's name, its current development stage, trust,
/// and exchange count, with a hint about slash commands.
pub fn print_welcome_banner(companion: &Companion) {
    let stage = companion.stage();

    println!();
    println!(
        "  {} {}",
        style("✦").cyan().bold(),
        style(&companion.companion_name).cyan().bold()
    );
    println!("  {}", style(stage.description()).dim());
    println!();
    println!(
        "  {}      {}",
        style("Stage:").bold(),
        stage.label()
    );
    println!(
        "  {}      {:.2}",
        style("Trust:").bold(),
        companion.trust
    );
    println!(
        "  {}  {}",
        style("Exchanges:").bold(),
        companion.conversation_count
    );
    println!();
    println!(
        "  {}",
        style("Type /help for commands, Ctrl+D to exit").dim()
    );
    println!(
        "  {}",
        style("---").dim()
    );
    println!();
}
