//! Guardian CLI commands: footprint research, report, tips, action plan.

use anyhow::Result;
use chrono::{Datelike, Utc};
use console::style;
use dialoguer::Confirm;
use indicatif::{ProgressBar, ProgressStyle};
use termimad::MadSkin;

use renexus_core::guardian::assessment;
use renexus_types::guardian::{FootprintFinding, RiskLevel, TimeCommitment, TipCategory};

use crate::state::AppState;

/// Research the user's public digital footprint and print the findings.
///
/// Research is simulated locally; nothing leaves the machine. The consent
/// prompt shows exactly which stored facts seed the queries.
pub async fn research(state: &AppState, slug: &str, yes: bool, json: bool) -> Result<()> {
    let companion = state.companion_service.get_by_slug(slug).await?;
    let details = state.companion_service.user_details(&companion).await?;

    if !yes && !json {
        println!();
        println!(
            "  {} Footprint research for {}",
            style("🛡").bold(),
            style(&details.name).cyan()
        );
        println!();
        println!("  {}", style("Search queries will be built from:").dim());
        println!("  {} Name:     {}", style("•").dim(), details.name);
        if let Some(age) = details.age {
            println!("  {} Age:      {}", style("•").dim(), age);
        }
        if let Some(location) = &details.location {
            println!("  {} Location: {}", style("•").dim(), location);
        }
        println!();

        let confirmed = Confirm::new()
            .with_prompt("Run simulated research on your public footprint?")
            .default(true)
            .interact()?;

        if !confirmed {
            println!("  Cancelled.");
            return Ok(());
        }
    }

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.cyan} {msg}")
            .unwrap(),
    );
    spinner.set_message("Researching your digital footprint...");
    spinner.enable_steady_tick(std::time::Duration::from_millis(80));

    let current_year = Utc::now().year();
    let (research_status, findings) = state
        .guardian
        .run_research(&companion.id, &details, current_year)
        .await?;

    spinner.finish_and_clear();

    let assessment = assessment::assess(&findings);

    if json {
        let payload = serde_json::json!({
            "status": research_status,
            "findings": findings,
            "assessment": assessment,
        });
        println!("{}", serde_json::to_string_pretty(&payload)?);
        return Ok(());
    }

    println!();
    println!(
        "  {} {}",
        style(format!("{} >", companion.companion_name)).cyan().bold(),
        research_status.message
    );
    println!(
        "  {}",
        style(format!(
            "({} queries, about {} by hand)",
            research_status.queries_generated, research_status.estimated_time
        ))
        .dim()
    );
    println!();

    println!("  {}", style("── Findings ──").dim());
    println!();
    for finding in &findings {
        print_finding(finding);
    }

    println!("  {}", style("── Assessment ──").dim());
    println!("  Overall risk: {}", format_risk(assessment.overall));
    println!(
        "  {} high, {} medium across {} finding{}",
        assessment.high_risk_items,
        assessment.medium_risk_items,
        assessment.total_findings,
        if assessment.total_findings == 1 { "" } else { "s" }
    );
    println!();
    println!("  {}", assessment::summarize(&assessment));
    println!();
    println!(
        "  Full report: {}",
        style(format!("ren guardian report {slug}")).yellow()
    );
    println!();

    Ok(())
}

/// Render the full markdown privacy report for a companion.
pub async fn report(state: &AppState, slug: &str, json: bool) -> Result<()> {
    let companion = state.companion_service.get_by_slug(slug).await?;
    let report = state
        .guardian
        .report(&companion.id, &companion.user_name)
        .await?;

    if json {
        let payload = serde_json::json!({"slug": slug, "report": report});
        println!("{}", serde_json::to_string_pretty(&payload)?);
        return Ok(());
    }

    let skin = MadSkin::default_dark();
    println!();
    skin.print_text(&report);
    println!();

    Ok(())
}

/// Print privacy tips for a category. Unknown categories fall back to
/// the general list.
pub fn tips(category: Option<&str>, json: bool) -> Result<()> {
    let category = category
        .map(|c| c.parse::<TipCategory>().unwrap_or_default())
        .unwrap_or_default();
    let tips = renexus_core::guardian::report::tips(category);

    if json {
        let payload = serde_json::json!({
            "category": category.to_string(),
            "tips": tips,
        });
        println!("{}", serde_json::to_string_pretty(&payload)?);
        return Ok(());
    }

    println!();
    println!(
        "  {}",
        style(format!("── Privacy tips: {category} ──")).dim()
    );
    println!();
    for tip in tips {
        println!("  {} {}", style("•").dim(), tip);
    }
    println!();

    Ok(())
}

/// Print a phased privacy action plan sized to a time commitment.
pub fn plan(commitment: &str, json: bool) -> Result<()> {
    let commitment = commitment
        .parse::<TimeCommitment>()
        .map_err(|e| anyhow::anyhow!(e))?;
    let plan = renexus_core::guardian::report::action_plan(commitment);

    if json {
        println!("{}", serde_json::to_string_pretty(&plan)?);
        return Ok(());
    }

    println!();
    println!(
        "  {} Privacy action plan ({commitment} commitment)",
        style("🛡").bold()
    );
    println!();
    println!(
        "  {}",
        style(format!("── Right now ({}) ──", plan.estimated_time)).dim()
    );
    for step in &plan.immediate {
        println!("  {} {}", style("•").dim(), step);
    }
    println!();
    println!("  {}", style("── Every week ──").dim());
    for step in &plan.weekly {
        println!("  {} {}", style("•").dim(), step);
    }
    println!();
    println!("  {}", style("── Every month ──").dim());
    for step in &plan.monthly {
        println!("  {} {}", style("•").dim(), step);
    }
    println!();

    Ok(())
}

// --- Formatting helpers ---

fn print_finding(finding: &FootprintFinding) {
    println!(
        "  {}  {} {}",
        format_risk(finding.risk),
        style(&finding.source).bold(),
        style(format!("({})", finding.kind.label())).dim()
    );
    println!("     {}", finding.content);
    println!(
        "     {} {}",
        style("↳").dim(),
        style(&finding.recommendation).dim()
    );
    println!();
}

fn format_risk(risk: RiskLevel) -> String {
    match risk {
        RiskLevel::High => format!("{}", style("● high").red()),
        RiskLevel::Medium => format!("{}", style("● medium").yellow()),
        RiskLevel::Low => format!("{}", style("● low").green()),
    }
}
