//! System status dashboard command.

use anyhow::Result;
use console::style;

use renexus_types::companion::DevelopmentStage;

use crate::state::AppState;

/// Display system status dashboard.
///
/// Shows companion counts by development stage, total exchanges, config
/// tunables, storage info, and version.
pub async fn status(state: &AppState, json: bool) -> Result<()> {
    // Gather stats
    let companions = state.companion_service.list(None).await?;
    let getting_to_know = companions
        .iter()
        .filter(|c| c.stage() == DevelopmentStage::GettingToKnowYou)
        .count();
    let building_rapport = companions
        .iter()
        .filter(|c| c.stage() == DevelopmentStage::BuildingRapport)
        .count();
    let developing_friendship = companions
        .iter()
        .filter(|c| c.stage() == DevelopmentStage::DevelopingFriendship)
        .count();
    let deep_connection = companions
        .iter()
        .filter(|c| c.stage() == DevelopmentStage::DeepConnection)
        .count();

    let total_exchanges: i64 = companions.iter().map(|c| c.conversation_count).sum();
    let average_trust = if companions.is_empty() {
        0.0
    } else {
        companions.iter().map(|c| c.trust).sum::<f64>() / companions.len() as f64
    };

    if json {
        let status = serde_json::json!({
            "version": env!("CARGO_PKG_VERSION"),
            "data_dir": state.data_dir.display().to_string(),
            "companions": {
                "total": companions.len(),
                "getting_to_know_you": getting_to_know,
                "building_rapport": building_rapport,
                "developing_friendship": developing_friendship,
                "deep_connection": deep_connection,
            },
            "total_exchanges": total_exchanges,
            "average_trust": average_trust,
            "config": {
                "style_learning_rate": state.config.style_learning_rate,
                "trust_gain": state.config.trust_gain,
                "reserved_trust_threshold": state.config.reserved_trust_threshold,
            },
        });
        println!("{}", serde_json::to_string_pretty(&status)?);
        return Ok(());
    }

    println!();
    println!(
        "  {} Renexus v{}",
        style("✦").bold(),
        env!("CARGO_PKG_VERSION")
    );
    println!();

    // Companion counts
    println!("  {}", style("── Companions ──").dim());
    println!(
        "  Total:                 {}",
        style(companions.len()).bold()
    );
    if getting_to_know > 0 {
        println!(
            "  Getting to know you:   {}",
            style(getting_to_know).dim()
        );
    }
    if building_rapport > 0 {
        println!(
            "  Building rapport:      {}",
            style(building_rapport).yellow()
        );
    }
    if developing_friendship > 0 {
        println!(
            "  Developing friendship: {}",
            style(developing_friendship).cyan()
        );
    }
    if deep_connection > 0 {
        println!(
            "  Deep connection:       {}",
            style(deep_connection).green()
        );
    }
    println!();

    // Usage stats
    println!("  {}", style("── Usage ──").dim());
    println!("  Exchanges:     {total_exchanges}");
    println!("  Average trust: {average_trust:.2}");
    println!();

    // Config
    println!("  {}", style("── Config ──").dim());
    println!(
        "  Learning rate:   {}",
        state.config.style_learning_rate
    );
    println!(
        "  Trust gain:      {}",
        state.config.trust_gain
    );
    println!(
        "  Reserved below:  {}",
        state.config.reserved_trust_threshold
    );
    println!();

    // System
    println!("  {}", style("── System ──").dim());
    println!(
        "  Data dir: {}",
        style(state.data_dir.display()).dim()
    );
    println!(
        "  Database: {}",
        style("SQLite (WAL mode)").dim()
    );
    println!();

    Ok(())
}
