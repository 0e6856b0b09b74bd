//! Digital-era timeline command.

use anyhow::Result;
use chrono::{Datelike, Utc};
use console::style;

use renexus_types::timeline::LifeTimeline;

use crate::state::AppState;

/// Show the digital-era timeline for a companion's user.
///
/// Uses the stored age unless `--age` overrides it.
pub async fn timeline(state: &AppState, slug: &str, age: Option<u8>, json: bool) -> Result<()> {
    let companion = state.companion_service.get_by_slug(slug).await?;
    let details = state.companion_service.user_details(&companion).await?;

    let age = match age.or(details.age) {
        Some(a) => a,
        None => anyhow::bail!(
            "no age stored for '{slug}'; pass one with --age (e.g. ren timeline {slug} --age 28)"
        ),
    };

    let timeline = LifeTimeline::for_age(age, Utc::now().year());

    if json {
        println!("{}", serde_json::to_string_pretty(&timeline)?);
        return Ok(());
    }

    print_timeline(&companion.user_name, age, &timeline);

    Ok(())
}

/// Print a rendered timeline. Shared with the in-chat `/timeline` command.
pub fn print_timeline(user_name: &str, age: u8, timeline: &LifeTimeline) {
    println!();
    println!(
        "  {} Digital timeline for {} (age {age})",
        style("✦").bold(),
        style(user_name).cyan()
    );
    println!();
    println!(
        "  {}         {}",
        style("Born:").bold(),
        timeline.birth_year
    );
    println!(
        "  {}          {}",
        style("Era:").bold(),
        timeline.era.label()
    );
    println!("                {}", style(timeline.era.context()).dim());
    println!(
        "  {}  {} - {}",
        style("High school:").bold(),
        timeline.high_school_years.0,
        timeline.high_school_years.1
    );
    println!(
        "  {}      {} - {}",
        style("College:").bold(),
        timeline.college_years.0,
        timeline.college_years.1
    );
    println!();

    println!(
        "  {}",
        style("── Formative platforms (ages 13-25) ──").dim()
    );
    if timeline.formative_platforms.is_empty() {
        println!(
            "  {}",
            style("(none of the tracked platforms launched in this window)").dim()
        );
    } else {
        for echo in &timeline.formative_platforms {
            println!(
                "  {} {}, launched {}",
                style("•").dim(),
                echo,
                echo.launch_year
            );
        }
    }
    println!();
}
