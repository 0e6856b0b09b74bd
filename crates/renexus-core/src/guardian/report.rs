//! Privacy report rendering, tips and action plans.

use renexus_types::guardian::{
    ActionPlan, FootprintFinding, Priority, Recommendation, RiskLevel, TimeCommitment, TipCategory,
};

use crate::guardian::assessment;

const GENERAL_TIPS: &[&str] = &[
    "Use privacy-focused search engines like DuckDuckGo",
    "Regularly review and update your social media privacy settings",
    "Be cautious about what personal information you share online",
    "Use a VPN when connecting to public Wi-Fi",
    "Keep your software and apps updated",
];

const SOCIAL_MEDIA_TIPS: &[&str] = &[
    "Limit who can see your posts and personal information",
    "Turn off location tracking when possible",
    "Be selective about friend/connection requests",
    "Review tagged photos before they appear on your profile",
    "Consider what your posts reveal about your daily routine",
];

const PASSWORD_TIPS: &[&str] = &[
    "Use a unique password for each account",
    "Make passwords at least 12 characters long",
    "Include a mix of letters, numbers, and symbols",
    "Use a password manager to generate and store passwords",
    "Enable two-factor authentication where available",
];

const DATA_BROKER_TIPS: &[&str] = &[
    "Regularly search for your information on data broker sites",
    "Submit opt-out requests to remove your data",
    "Be persistent - you may need to request removal multiple times",
    "Consider using a service that automates opt-out requests",
    "Monitor for your information reappearing after opt-out",
];

fn risk_marker(risk: RiskLevel) -> &'static str {
    match risk {
        RiskLevel::High => "🔴",
        RiskLevel::Medium => "🟡",
        RiskLevel::Low => "🟢",
    }
}

/// Renders the full markdown privacy report for one user.
pub fn render_report(user_name: &str, findings: &[FootprintFinding]) -> String {
    let assessment_result = assessment::assess(findings);
    let recommendations = assessment::recommendations(findings);
    let summary = assessment::summarize(&assessment_result);

    let mut report = format!("# Digital Privacy Report for {user_name}\n\n");
    report.push_str(&format!("## Summary\n{summary}\n\n"));
    report.push_str(&format!(
        "## Overall Privacy Risk: {}\n\n",
        assessment_result.overall.label().to_uppercase()
    ));
    report.push_str(&format!(
        "## Findings ({} items found)\n\n",
        assessment_result.total_findings
    ));

    for (i, finding) in findings.iter().enumerate() {
        report.push_str(&format!(
            "### {}. {} {}\n",
            i + 1,
            finding.source,
            risk_marker(finding.risk)
        ));
        report.push_str(&format!("- **Type:** {}\n", finding.kind.label()));
        report.push_str(&format!("- **Content:** {}\n", finding.content));
        report.push_str(&format!("- **Privacy Risk:** {}\n", finding.risk.label()));
        report.push_str(&format!(
            "- **Recommendation:** {}\n\n",
            finding.recommendation
        ));
    }

    report.push_str("## Recommended Actions\n\n");
    let high: Vec<&Recommendation> = recommendations
        .iter()
        .filter(|r| r.priority == Priority::High)
        .collect();
    let medium: Vec<&Recommendation> = recommendations
        .iter()
        .filter(|r| r.priority == Priority::Medium)
        .collect();

    if !high.is_empty() {
        report.push_str("### High Priority (Do These First)\n\n");
        push_recommendations(&mut report, &high);
    }
    if !medium.is_empty() {
        report.push_str("### Medium Priority (Do When You Have Time)\n\n");
        push_recommendations(&mut report, &medium);
    }

    report.push_str(
        "## Next Steps\n\n\
         1. Review the high-priority recommendations above\n\
         2. Start with the easiest items first to build momentum\n\
         3. Set aside time each month to review your digital privacy\n\
         4. Let me know if you need help with any of these steps!\n\n\
         ---\n\n\
         *This report was generated by your Ren AI companion to help protect your digital \
         privacy. All research was conducted using publicly available information.*\n",
    );

    report
}

fn push_recommendations(report: &mut String, recommendations: &[&Recommendation]) {
    for (i, rec) in recommendations.iter().enumerate() {
        report.push_str(&format!(
            "{}. **{}**\n   {}\n   *Difficulty: {}*\n\n",
            i + 1,
            rec.title,
            rec.description,
            rec.difficulty.label()
        ));
    }
}

/// Privacy tips for one category.
pub fn tips(category: TipCategory) -> &'static [&'static str] {
    match category {
        TipCategory::General => GENERAL_TIPS,
        TipCategory::SocialMedia => SOCIAL_MEDIA_TIPS,
        TipCategory::Passwords => PASSWORD_TIPS,
        TipCategory::DataBrokers => DATA_BROKER_TIPS,
    }
}

/// Builds an action plan scaled to how much time the user can commit.
pub fn action_plan(commitment: TimeCommitment) -> ActionPlan {
    let (immediate, estimated_time) = match commitment {
        TimeCommitment::Low => (
            vec![
                "Review Facebook privacy settings (10 minutes)".to_string(),
                "Enable two-factor authentication on email (5 minutes)".to_string(),
            ],
            "15 minutes",
        ),
        TimeCommitment::Medium => (
            vec![
                "Review privacy settings on your two most used social platforms (20 minutes)"
                    .to_string(),
                "Enable two-factor authentication on email and banking (10 minutes)".to_string(),
                "Set up a password manager (15 minutes)".to_string(),
            ],
            "45 minutes",
        ),
        TimeCommitment::High => (
            vec![
                "Complete privacy audit of all social media accounts (30 minutes)".to_string(),
                "Set up password manager and update passwords (45 minutes)".to_string(),
                "Opt out of major data broker sites (60 minutes)".to_string(),
            ],
            "2 hours 15 minutes",
        ),
    };

    ActionPlan {
        immediate,
        weekly: vec![
            "Search your name and skim the first page of results".to_string(),
            "Review privacy settings on any newly installed apps".to_string(),
        ],
        monthly: vec![
            "Re-check data broker sites for reappearing listings".to_string(),
            "Review app permissions on your devices".to_string(),
        ],
        estimated_time: estimated_time.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use renexus_types::companion::CompanionId;
    use renexus_types::guardian::{FindingId, FindingKind};

    fn sample_findings() -> Vec<FootprintFinding> {
        let companion_id = CompanionId::new();
        vec![
            FootprintFinding {
                id: FindingId::new(),
                companion_id: companion_id.clone(),
                source: "WhitePages".to_string(),
                kind: FindingKind::DataBroker,
                content: "Address and phone number listed".to_string(),
                risk: RiskLevel::High,
                recommendation: "Consider opting out of data broker listings".to_string(),
                discovered_at: Utc::now(),
            },
            FootprintFinding {
                id: FindingId::new(),
                companion_id,
                source: "LinkedIn".to_string(),
                kind: FindingKind::Professional,
                content: "Professional profile with work history".to_string(),
                risk: RiskLevel::Low,
                recommendation: "Review connection settings".to_string(),
                discovered_at: Utc::now(),
            },
        ]
    }

    #[test]
    fn test_report_structure() {
        let report = render_report("Alex Johnson", &sample_findings());
        assert!(report.starts_with("# Digital Privacy Report for Alex Johnson"));
        assert!(report.contains("## Overall Privacy Risk: HIGH"));
        assert!(report.contains("## Findings (2 items found)"));
        assert!(report.contains("### 1. WhitePages 🔴"));
        assert!(report.contains("- **Type:** Data Broker"));
        assert!(report.contains("### 2. LinkedIn 🟢"));
        assert!(report.contains("### High Priority (Do These First)"));
        assert!(report.contains("### Medium Priority (Do When You Have Time)"));
        assert!(report.contains("**Address WhitePages Privacy Risk**"));
        assert!(report.contains("## Next Steps"));
        assert!(report.trim_end().ends_with("publicly available information.*"));
    }

    #[test]
    fn test_report_difficulty_labels_are_title_case() {
        let report = render_report("Sam", &sample_findings());
        assert!(report.contains("*Difficulty: Easy*"));
        assert!(report.contains("*Difficulty: Medium*"));
    }

    #[test]
    fn test_tips_per_category() {
        assert_eq!(tips(TipCategory::General).len(), 5);
        assert_eq!(tips(TipCategory::Passwords).len(), 5);
        assert!(tips(TipCategory::DataBrokers)
            .iter()
            .any(|t| t.contains("opt-out")));
        assert!(tips(TipCategory::SocialMedia)
            .iter()
            .any(|t| t.contains("location tracking")));
    }

    #[test]
    fn test_action_plan_scales_with_commitment() {
        let low = action_plan(TimeCommitment::Low);
        assert_eq!(low.immediate.len(), 2);
        assert_eq!(low.estimated_time, "15 minutes");

        let medium = action_plan(TimeCommitment::Medium);
        assert_eq!(medium.immediate.len(), 3);
        assert_eq!(medium.estimated_time, "45 minutes");

        let high = action_plan(TimeCommitment::High);
        assert_eq!(high.immediate.len(), 3);
        assert_eq!(high.estimated_time, "2 hours 15 minutes");
        assert!(!high.weekly.is_empty());
        assert!(!high.monthly.is_empty());
    }
}
