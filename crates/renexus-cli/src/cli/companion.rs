//! Companion lifecycle CLI commands: create, list, show, delete.

use anyhow::Result;
use comfy_table::{presets, Cell, Color, ContentArrangement, Table};
use console::style;
use dialoguer::{Confirm, Input};
use indicatif::{ProgressBar, ProgressStyle};

use renexus_types::companion::{CreateCompanionRequest, DevelopmentStage};
use renexus_types::personality::TraitKind;

use crate::state::AppState;

/// Create a new companion via interactive wizard or one-shot flags.
///
/// # Examples
///
/// ```bash
/// # Interactive wizard
/// ren create
///
/// # One-shot with flags
/// ren create --name "Alex Johnson" --age 28 --location "Seattle, WA"
/// ```
pub async fn create_companion(
    state: &AppState,
    name: Option<String>,
    companion_name: Option<String>,
    age: Option<u8>,
    location: Option<String>,
    json: bool,
) -> Result<()> {
    let user_name = match name {
        Some(n) => n,
        None => {
            // Interactive wizard
            Input::<String>::new()
                .with_prompt("Your name")
                .interact_text()?
        }
    };

    let age = match age {
        Some(a) => Some(a),
        None => {
            let raw: String = Input::new()
                .with_prompt("Your age (Enter to skip)")
                .allow_empty(true)
                .interact_text()?;
            raw.trim().parse::<u8>().ok()
        }
    };

    let location = match location {
        Some(l) => Some(l),
        None => {
            let raw: String = Input::new()
                .with_prompt("Your location (Enter to skip)")
                .allow_empty(true)
                .interact_text()?;
            let trimmed = raw.trim().to_string();
            if trimmed.is_empty() { None } else { Some(trimmed) }
        }
    };

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.cyan} {msg}")
            .unwrap(),
    );
    spinner.set_message("Creating companion...");
    spinner.enable_steady_tick(std::time::Duration::from_millis(80));

    let request = CreateCompanionRequest {
        user_name: user_name.clone(),
        companion_name,
        age,
        location: location.clone(),
    };

    let companion = state.companion_service.create(request).await?;

    spinner.finish_and_clear();

    if json {
        println!("{}", serde_json::to_string_pretty(&companion)?);
        return Ok(());
    }

    println!();
    println!(
        "  {} Companion created!",
        style("✓").green().bold()
    );
    println!();
    println!(
        "  {}  {}",
        style("Companion:").bold(),
        style(&companion.companion_name).cyan()
    );
    println!(
        "  {}        {}",
        style("For:").bold(),
        &companion.user_name
    );
    println!(
        "  {}       {}",
        style("Slug:").bold(),
        &companion.slug
    );
    println!(
        "  {}      {}",
        style("Stage:").bold(),
        format_stage(companion.stage())
    );
    if let Some(age) = age {
        println!(
            "  {}        {}",
            style("Age:").bold(),
            age
        );
    }
    if let Some(location) = &location {
        println!(
            "  {}   {}",
            style("Location:").bold(),
            location
        );
    }
    println!(
        "  {}         {}",
        style("ID:").bold(),
        style(companion.id.to_string()).dim()
    );
    println!();
    println!(
        "  Start chatting: {}",
        style(format!("ren chat {}", companion.slug)).yellow()
    );
    println!();

    Ok(())
}

/// List all companions in a rich colored table.
pub async fn list_companions(state: &AppState, sort: &str, json: bool) -> Result<()> {
    use renexus_core::repository::CompanionFilter;

    let filter = Some(CompanionFilter {
        sort_by: Some(sort.to_string()),
        ..Default::default()
    });

    let companions = state.companion_service.list(filter).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&companions)?);
        return Ok(());
    }

    if companions.is_empty() {
        println!();
        println!(
            "  {} No companions found. Create one with: {}",
            style("i").blue().bold(),
            style("ren create").yellow()
        );
        println!();
        return Ok(());
    }

    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL_CONDENSED);
    table.set_content_arrangement(ContentArrangement::Dynamic);

    table.set_header(vec![
        Cell::new("Companion").fg(Color::White),
        Cell::new("User").fg(Color::White),
        Cell::new("Slug").fg(Color::White),
        Cell::new("Trust").fg(Color::White),
        Cell::new("Stage").fg(Color::White),
        Cell::new("Exchanges").fg(Color::White),
        Cell::new("Last Active").fg(Color::White),
    ]);

    for companion in &companions {
        let last_active = match &companion.last_active_at {
            Some(dt) => format_relative_time(dt),
            None => "never".to_string(),
        };

        table.add_row(vec![
            Cell::new(&companion.companion_name).fg(Color::Cyan),
            Cell::new(&companion.user_name),
            Cell::new(&companion.slug).fg(Color::White),
            Cell::new(format!("{:.2}", companion.trust)),
            stage_cell(companion.stage()),
            Cell::new(companion.conversation_count),
            Cell::new(last_active).fg(Color::DarkGrey),
        ]);
    }

    println!();
    println!("{table}");
    println!();
    println!(
        "  {} companion{}",
        style(companions.len()).bold(),
        if companions.len() == 1 { "" } else { "s" }
    );
    println!();

    Ok(())
}

/// Show full profile for a companion: persona, trait vector, learned
/// style, and stored insights.
pub async fn show_companion(state: &AppState, slug: &str, json: bool) -> Result<()> {
    let companion = state.companion_service.get_by_slug(slug).await?;
    let learner = state.engine.learner_for(&companion.id).await?;
    let summary = learner.summary();
    let entries = state.engine.insights(&companion.id).await?;

    if json {
        let payload = serde_json::json!({
            "companion": companion,
            "style": summary,
            "insights": entries,
        });
        println!("{}", serde_json::to_string_pretty(&payload)?);
        return Ok(());
    }

    println!();
    println!(
        "  {} {}",
        style("✦").cyan().bold(),
        style(&companion.companion_name).cyan().bold()
    );
    println!(
        "  {}",
        style(format!("Companion for {}", companion.user_name)).dim()
    );
    println!();

    println!("  {}", style("── Details ──").dim());
    println!(
        "  {}   {}",
        style("Slug:").bold(),
        &companion.slug
    );
    println!(
        "  {}  {}",
        style("Stage:").bold(),
        format_stage(companion.stage())
    );
    println!(
        "  {}  {:.2}",
        style("Trust:").bold(),
        companion.trust
    );
    println!(
        "  {}  {}",
        style("Humor:").bold(),
        companion.humor_style
    );
    println!(
        "  {}     {}",
        style("ID:").bold(),
        style(companion.id.to_string()).dim()
    );
    println!();

    println!("  {}", style("── Personality ──").dim());
    for kind in TraitKind::ALL {
        println!(
            "  {:<18} {}",
            kind.label(),
            trait_bar(companion.traits.get(kind))
        );
    }
    println!("  {:<18} {}", "Curiosity", trait_bar(companion.curiosity));
    println!();

    println!("  {}", style("── Learned style ──").dim());
    if summary.profile.messages_analyzed == 0 {
        println!("  {}", style("(no messages analyzed yet)").dim());
    } else {
        let profile = &summary.profile;
        println!(
            "  {:<18} {}",
            "Vocabulary",
            trait_bar(profile.vocabulary_level)
        );
        println!(
            "  {:<18} {}",
            "Sentence length",
            trait_bar(profile.sentence_length)
        );
        println!(
            "  {:<18} {}",
            "Expressiveness",
            trait_bar(profile.expressiveness)
        );
        println!("  {:<18} {}", "Formality", trait_bar(profile.formality));
        println!(
            "  {:<18} {}",
            "Questions",
            trait_bar(profile.question_frequency)
        );
        println!("  {:<18} {}", "Humor", profile.humor_style);
        if !profile.topic_interests.is_empty() {
            let topics: Vec<String> = profile
                .topic_interests
                .iter()
                .map(|t| t.to_string())
                .collect();
            println!("  {:<18} {}", "Topics", topics.join(", "));
        }
        println!(
            "  {:<18} {:.0}% over {} message{}, formality {}",
            "Confidence",
            summary.confidence * 100.0,
            profile.messages_analyzed,
            if profile.messages_analyzed == 1 { "" } else { "s" },
            summary.formality_trend
        );
    }
    println!();

    println!("  {}", style("── Insights ──").dim());
    let insights: Vec<_> = entries
        .iter()
        .filter(|e| e.key.starts_with("personality_") || e.key.starts_with("user_"))
        .collect();
    if insights.is_empty() {
        println!("  {}", style("(none yet)").dim());
    } else {
        for entry in insights {
            let value = if entry.key.starts_with("personality_") {
                entry
                    .value
                    .parse::<f64>()
                    .map(|v| format!("{v:.2}"))
                    .unwrap_or_else(|_| entry.value.clone())
            } else {
                entry.value.clone()
            };
            println!(
                "  {} {}",
                style(format!("{:<26}", entry.key)).dim(),
                value
            );
        }
    }
    println!();

    println!("  {}", style("── Stats ──").dim());
    println!(
        "  {}  {}",
        style("Exchanges:").bold(),
        companion.conversation_count
    );
    println!();

    println!("  {}", style("── Timestamps ──").dim());
    println!(
        "  {}    {}",
        style("Created:").bold(),
        companion.created_at.format("%Y-%m-%d %H:%M UTC")
    );
    println!(
        "  {}    {}",
        style("Updated:").bold(),
        companion.updated_at.format("%Y-%m-%d %H:%M UTC")
    );
    if let Some(last) = &companion.last_active_at {
        println!(
            "  {} {}",
            style("Last active:").bold(),
            last.format("%Y-%m-%d %H:%M UTC")
        );
    }
    println!();

    Ok(())
}

/// Delete a companion permanently with confirmation.
pub async fn delete_companion(
    state: &AppState,
    slug: &str,
    force: bool,
    json: bool,
) -> Result<()> {
    let companion = state.companion_service.get_by_slug(slug).await?;

    if !force && !json {
        let confirmed = Confirm::new()
            .with_prompt(format!(
                "Permanently delete '{}' and every conversation with {}?",
                style(&companion.slug).red().bold(),
                companion.companion_name
            ))
            .default(false)
            .interact()?;

        if !confirmed {
            println!("  Cancelled.");
            return Ok(());
        }
    }

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.red} {msg}")
            .unwrap(),
    );
    spinner.set_message(format!("Deleting {}...", companion.slug));
    spinner.enable_steady_tick(std::time::Duration::from_millis(80));

    state.companion_service.delete(&companion.id).await?;

    spinner.finish_and_clear();

    if json {
        println!("{}", serde_json::json!({"deleted": true, "slug": slug}));
    } else {
        println!(
            "  {} Companion '{}' deleted.",
            style("✓").red().bold(),
            companion.slug
        );
    }

    Ok(())
}

// --- Formatting helpers ---

fn format_stage(stage: DevelopmentStage) -> String {
    match stage {
        DevelopmentStage::GettingToKnowYou => {
            format!("{}", style("◌ getting to know you").dim())
        }
        DevelopmentStage::BuildingRapport => {
            format!("{}", style("○ building rapport").yellow())
        }
        DevelopmentStage::DevelopingFriendship => {
            format!("{}", style("◉ developing friendship").cyan())
        }
        DevelopmentStage::DeepConnection => {
            format!("{}", style("● deep connection").green())
        }
    }
}

fn stage_cell(stage: DevelopmentStage) -> Cell {
    match stage {
        DevelopmentStage::GettingToKnowYou => {
            Cell::new("◌ getting to know you").fg(Color::DarkGrey)
        }
        DevelopmentStage::BuildingRapport => Cell::new("○ building rapport").fg(Color::Yellow),
        DevelopmentStage::DevelopingFriendship => {
            Cell::new("◉ developing friendship").fg(Color::Cyan)
        }
        DevelopmentStage::DeepConnection => Cell::new("● deep connection").fg(Color::Green),
    }
}

/// Ten-segment bar for a 0..=1 level, e.g. `██████░░░░ 0.62`.
fn trait_bar(score: f64) -> String {
    let filled = ((score * 10.0).round() as usize).min(10);
    format!("{}{} {:.2}", "█".repeat(filled), "░".repeat(10 - filled), score)
}

fn format_relative_time(dt: &chrono::DateTime<chrono::Utc>) -> String {
    let now = chrono::Utc::now();
    let diff = now - *dt;

    if diff.num_minutes() < 1 {
        "just now".to_string()
    } else if diff.num_hours() < 1 {
        format!("{}m ago", diff.num_minutes())
    } else if diff.num_days() < 1 {
        format!("{}h ago", diff.num_hours())
    } else if diff.num_days() < 30 {
        format!("{}d ago", diff.num_days())
    } else {
        dt.format("%Y-%m-%d").to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trait_bar_endpoints() {
        assert_eq!(trait_bar(0.0), "░░░░░░░░░░ 0.00");
        assert_eq!(trait_bar(1.0), "██████████ 1.00");
    }

    #[test]
    fn test_trait_bar_midpoint() {
        assert_eq!(trait_bar(0.5), "█████░░░░░ 0.50");
    }

    #[test]
    fn test_relative_time_recent() {
        let now = chrono::Utc::now();
        assert_eq!(format_relative_time(&now), "just now");

        let earlier = now - chrono::Duration::minutes(5);
        assert_eq!(format_relative_time(&earlier), "5m ago");
    }
}
