//! Scripted walkthrough of the whole platform.
//!
//! Runs every subsystem in sequence against a throwaway database so a new
//! user can see what Renexus does without creating real data.

use anyhow::Result;
use chrono::{Datelike, Utc};
use console::style;

use renexus_core::guardian::assessment;
use renexus_core::personality::TraitAnalyzer;
use renexus_core::style::StyleLearner;
use renexus_types::companion::{Companion, CreateCompanionRequest};
use renexus_types::personality::TraitKind;
use renexus_types::timeline::LifeTimeline;

use crate::state::AppState;

/// Run the five-act walkthrough against a temporary data directory.
pub async fn run() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let state = AppState::init_at(dir.path().to_path_buf()).await?;

    println!();
    println!("  {} Renexus walkthrough", style("✦").cyan().bold());
    println!(
        "  {}",
        style("Everything below runs against a temporary database.").dim()
    );

    act_personality();
    act_style();
    let companion = act_guardian(&state).await?;
    act_trust(&state, companion).await?;
    act_timeline();

    println!(
        "  {}",
        style("Demo data discarded. Create your own companion: ren create").yellow()
    );
    println!();

    Ok(())
}

fn act_personality() {
    println!();
    println!("  {}", style("── Act 1: Personality analysis ──").dim());

    let analyzer = TraitAnalyzer::new();
    let samples = [
        "I love exploring new ideas and imagining what the future might look like!",
        "Let me organize a careful plan this week so nothing slips before the deadline.",
        "We should all get together this weekend, I miss hanging out with everyone.",
    ];

    for sample in samples {
        let analysis = analyzer.analyze(sample);
        println!();
        println!("  {} {}", style(">").dim(), style(sample).italic());
        for kind in TraitKind::ALL {
            println!(
                "    {:<18} {}",
                kind.label(),
                trait_bar(analysis.traits.get(kind))
            );
        }
        println!("    {}", style(analyzer.summary(&analysis.traits)).dim());
    }
    println!();
}

fn act_style() {
    println!();
    println!("  {}", style("── Act 2: Style learning ──").dim());
    println!();

    let mut learner = StyleLearner::new(0.1);
    let messages = [
        "hey!! whats up, wanna grab coffee later?",
        "lol yeah that meeting was rough, my boss would not stop talking",
        "Could you please review the quarterly report before Friday's meeting?",
        "I have been reading about machine learning and the progress is remarkable.",
        "honestly work has been exhausting but the new project is kind of exciting",
    ];

    for message in messages {
        learner.observe(message);
        let summary = learner.summary();
        println!("  {} {}", style(">").dim(), style(message).italic());
        println!(
            "    formality {:.2}, expressiveness {:.2}",
            summary.profile.formality, summary.profile.expressiveness
        );
    }

    let summary = learner.summary();
    println!();
    println!(
        "  After {} messages: {:.0}% confidence, formality trend {}",
        summary.profile.messages_analyzed,
        summary.confidence * 100.0,
        summary.formality_trend
    );
    if !summary.profile.topic_interests.is_empty() {
        let topics: Vec<String> = summary
            .profile
            .topic_interests
            .iter()
            .map(|t| t.to_string())
            .collect();
        println!("  Topics noticed: {}", topics.join(", "));
    }
    println!();
}

async fn act_guardian(state: &AppState) -> Result<Companion> {
    println!();
    println!("  {}", style("── Act 3: Guardian research ──").dim());
    println!();

    let companion = state
        .companion_service
        .create(CreateCompanionRequest {
            user_name: "Alex Johnson".to_string(),
            companion_name: None,
            age: Some(28),
            location: Some("Seattle, WA".to_string()),
        })
        .await?;
    let details = state.companion_service.user_details(&companion).await?;

    let (status, findings) = state
        .guardian
        .run_research(&companion.id, &details, Utc::now().year())
        .await?;

    println!(
        "  {} {}",
        style(format!("{} >", companion.companion_name)).cyan().bold(),
        status.message
    );
    println!(
        "  {}",
        style(format!(
            "({} queries, about {} by hand)",
            status.queries_generated, status.estimated_time
        ))
        .dim()
    );
    println!();

    for finding in &findings {
        println!(
            "  {} {} ({} risk)",
            style("•").dim(),
            finding.source,
            finding.risk
        );
    }

    let assessment = assessment::assess(&findings);
    println!();
    println!("  Overall risk: {}", assessment.overall.label());
    println!("  {}", style(assessment::summarize(&assessment)).dim());

    println!();
    println!("  Top recommendations:");
    for rec in assessment::recommendations(&findings).iter().take(3) {
        println!("  {} {}", style("↳").dim(), rec.title);
    }
    println!();

    Ok(companion)
}

async fn act_trust(state: &AppState, mut companion: Companion) -> Result<()> {
    println!();
    println!("  {}", style("── Act 4: Trust growth ──").dim());
    println!();

    let mut learner = state.engine.learner_for(&companion.id).await?;
    let scripted = [
        "Hey, how are you today?",
        "Work was pretty good, we shipped the new feature.",
        "Do you ever think about how fast technology changes?",
        "I went hiking this weekend, the views were incredible.",
        "Honestly I have been a little stressed about the deadline.",
    ];

    let mut stage = companion.stage();
    for i in 0..25 {
        let message = scripted[i % scripted.len()];
        state
            .engine
            .exchange(&mut companion, &mut learner, message)
            .await?;

        let now = companion.stage();
        if now != stage {
            println!(
                "  exchange {:>2}: trust {:.2}, advanced to {}",
                i + 1,
                companion.trust,
                style(now.label()).cyan()
            );
            stage = now;
        } else if (i + 1) % 5 == 0 {
            println!("  exchange {:>2}: trust {:.2}", i + 1, companion.trust);
        }
    }
    println!();

    Ok(())
}

fn act_timeline() {
    println!();
    println!("  {}", style("── Act 5: Digital timelines ──").dim());
    println!();

    let current_year = Utc::now().year();
    for age in [16u8, 25, 35, 65] {
        let timeline = LifeTimeline::for_age(age, current_year);
        let platforms = if timeline.formative_platforms.is_empty() {
            style("(none of the tracked platforms)").dim().to_string()
        } else {
            timeline
                .formative_platforms
                .iter()
                .map(|e| e.platform.clone())
                .collect::<Vec<_>>()
                .join(", ")
        };
        println!(
            "  age {:>2}: {} era, formative platforms: {}",
            age,
            timeline.era.label(),
            platforms
        );
    }
    println!();
}

/// Ten-cell bar for a 0..=1 score.
fn trait_bar(score: f64) -> String {
    let filled = ((score * 10.0).round() as usize).min(10);
    format!(
        "{}{} {:.2}",
        "█".repeat(filled),
        "░".repeat(10 - filled),
        score
    )
}
