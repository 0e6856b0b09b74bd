//! Main chat loop orchestration.
//!
//! Coordinates the conversation lifecycle: companion resolution, style
//! learner hydration, welcome banner, input loop with a composing spinner,
//! slash commands, and stage-transition notices.

use chrono::{Datelike, Utc};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::info;

use renexus_core::companion::ExchangeOutcome;
use renexus_core::style::StyleLearner;
use renexus_types::companion::Companion;
use renexus_types::timeline::LifeTimeline;

use crate::state::AppState;

use super::banner::print_welcome_banner;
use super::commands::{self, ChatCommand};
use super::input::{ChatInput, InputEvent};

/// Longest history line before truncation.
const HISTORY_PREVIEW_CHARS: usize = 100;

/// Run the interactive chat loop for a companion.
pub async fn run_chat_loop(state: &AppState, slug: &str, verbose: bool) -> anyhow::Result<()> {
    let mut companion = state.companion_service.get_by_slug(slug).await?;
    let mut learner = state.engine.learner_for(&companion.id).await?;

    print_welcome_banner(&companion);

    let prompt = format!("  {} ", style("You >").green().bold());
    let (mut chat_input, _writer) =
        ChatInput::new(prompt).map_err(|e| anyhow::anyhow!("failed to initialize input: {e}"))?;

    loop {
        let event = chat_input.read_line().await;
        match event {
            InputEvent::Eof | InputEvent::Interrupted => {
                println!("\n  {}", style("Session ended.").dim());
                break;
            }
            InputEvent::Message(text) => {
                if text.is_empty() {
                    continue;
                }

                // Slash commands
                if let Some(cmd) = commands::parse(&text) {
                    match cmd {
                        ChatCommand::Help => {
                            commands::print_help();
                            continue;
                        }
                        ChatCommand::Status => {
                            print_status(&companion, &learner);
                            continue;
                        }
                        ChatCommand::History(limit) => {
                            print_history(state, &companion, limit).await?;
                            continue;
                        }
                        ChatCommand::Timeline(age) => {
                            let timeline = LifeTimeline::for_age(age, Utc::now().year());
                            crate::cli::timeline::print_timeline(
                                &companion.user_name,
                                age,
                                &timeline,
                            );
                            continue;
                        }
                        ChatCommand::Quit => {
                            println!("\n  {}", style("Session ended.").dim());
                            break;
                        }
                        ChatCommand::Unknown(cmd_name) => {
                            println!(
                                "\n  {} Unknown command: {}. Type /help for available commands.\n",
                                style("?").yellow().bold(),
                                style(cmd_name).dim()
                            );
                            continue;
                        }
                    }
                }

                // Composing spinner
                let spinner = ProgressBar::new_spinner();
                spinner.set_style(
                    ProgressStyle::default_spinner()
                        .template("{spinner:.cyan} {msg}")
                        .unwrap(),
                );
                spinner.set_message("composing...");
                spinner.enable_steady_tick(std::time::Duration::from_millis(80));

                let stage_before = companion.stage();
                let outcome = state
                    .engine
                    .exchange(&mut companion, &mut learner, &text)
                    .await;

                spinner.finish_and_clear();

                let outcome = match outcome {
                    Ok(o) => o,
                    Err(e) => {
                        eprintln!("\n  {} Exchange failed: {e}", style("!").red().bold());
                        continue;
                    }
                };

                println!();
                println!(
                    "  {} {}",
                    style(format!("{} >", companion.companion_name)).cyan().bold(),
                    outcome.reply
                );
                println!();

                if verbose {
                    print_exchange_details(&outcome);
                }

                // Stage-transition notice
                let stage_after = companion.stage();
                if stage_after != stage_before {
                    println!(
                        "  {} {}\n",
                        style("✦").magenta().bold(),
                        style(format!("New stage: {}", stage_after.label())).magenta()
                    );
                    info!(stage = %stage_after, "Development stage advanced");
                }
            }
        }
    }

    Ok(())
}

/// Print relationship status and the learned style snapshot.
fn print_status(companion: &Companion, learner: &StyleLearner) {
    let stage = companion.stage();
    let summary = learner.summary();

    println!();
    println!("  {}", style("── Status ──").dim());
    println!("  {}", stage.description());
    println!();
    println!(
        "  {}      {} ({:.2} trust)",
        style("Stage:").bold(),
        stage.label(),
        companion.trust
    );
    println!(
        "  {}  {}",
        style("Exchanges:").bold(),
        companion.conversation_count
    );
    println!(
        "  {}      {:.0}% confidence over {} message{}",
        style("Style:").bold(),
        summary.confidence * 100.0,
        summary.profile.messages_analyzed,
        if summary.profile.messages_analyzed == 1 { "" } else { "s" }
    );
    if !summary.profile.topic_interests.is_empty() {
        let topics: Vec<String> = summary
            .profile
            .topic_interests
            .iter()
            .map(|t| t.to_string())
            .collect();
        println!("  {}     {}", style("Topics:").bold(), topics.join(", "));
    }
    println!();
}

/// Print the most recent turns, oldest first.
async fn print_history(
    state: &AppState,
    companion: &Companion,
    limit: i64,
) -> anyhow::Result<()> {
    let mut turns = state.engine.recent_turns(&companion.id, limit).await?;
    if turns.is_empty() {
        println!("\n  {}\n", style("No conversation history yet.").dim());
        return Ok(());
    }
    turns.reverse();

    println!();
    for turn in &turns {
        println!(
            "  {} {}",
            style("You").green().bold(),
            preview(&turn.user_message)
        );
        println!(
            "  {} {}",
            style(&companion.companion_name).cyan().bold(),
            preview(&turn.reply)
        );
    }
    println!();
    Ok(())
}

/// Per-exchange analysis line shown in verbose mode.
fn print_exchange_details(outcome: &ExchangeOutcome) {
    let features = &outcome.analysis.features;
    let mut line = format!("sentiment {:.2}", features.sentiment);
    if !outcome.style.topics.is_empty() {
        let topics: Vec<String> = outcome.style.topics.iter().map(|t| t.to_string()).collect();
        line.push_str(&format!(", topics: {}", topics.join(", ")));
    }
    println!("  {}\n", style(format!("[{line}]")).dim());
}

/// Truncate a message for history display.
fn preview(text: &str) -> String {
    if text.chars().count() > HISTORY_PREVIEW_CHARS {
        let cut: String = text.chars().take(HISTORY_PREVIEW_CHARS - 3).collect();
        format!("{cut}...")
    } else {
        text.to_string()
    }
}
