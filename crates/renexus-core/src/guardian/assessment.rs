//! Risk rollup and recommendations derived from stored findings.

use renexus_types::guardian::{
    Difficulty, FootprintFinding, Priority, PrivacyAssessment, Recommendation,
    RecommendationCategory, RiskLevel,
};

/// Rolls individual findings up into one overall risk picture.
///
/// Any high-risk finding makes the overall level high; more than one
/// medium-risk finding makes it medium; otherwise it stays low.
pub fn assess(findings: &[FootprintFinding]) -> PrivacyAssessment {
    let high_risk_items = findings.iter().filter(|f| f.risk == RiskLevel::High).count() as u32;
    let medium_risk_items = findings
        .iter()
        .filter(|f| f.risk == RiskLevel::Medium)
        .count() as u32;

    let overall = if high_risk_items > 0 {
        RiskLevel::High
    } else if medium_risk_items > 1 {
        RiskLevel::Medium
    } else {
        RiskLevel::Low
    };

    PrivacyAssessment {
        overall,
        high_risk_items,
        medium_risk_items,
        total_findings: findings.len() as u32,
    }
}

/// The standing recommendations plus one targeted entry per high-risk
/// finding.
pub fn recommendations(findings: &[FootprintFinding]) -> Vec<Recommendation> {
    let mut recommendations = vec![
        Recommendation {
            category: RecommendationCategory::General,
            title: "Review Social Media Privacy Settings".to_string(),
            description: "Check privacy settings on all social media platforms to limit public \
                          visibility of personal information."
                .to_string(),
            priority: Priority::High,
            difficulty: Difficulty::Easy,
        },
        Recommendation {
            category: RecommendationCategory::General,
            title: "Google Yourself Regularly".to_string(),
            description: "Search for your name regularly to monitor what information is publicly \
                          available about you."
                .to_string(),
            priority: Priority::Medium,
            difficulty: Difficulty::Easy,
        },
        Recommendation {
            category: RecommendationCategory::DataBrokers,
            title: "Opt Out of Data Broker Sites".to_string(),
            description: "Request removal of your information from data broker websites that \
                          collect and sell personal data."
                .to_string(),
            priority: Priority::High,
            difficulty: Difficulty::Medium,
        },
        Recommendation {
            category: RecommendationCategory::Passwords,
            title: "Use Strong, Unique Passwords".to_string(),
            description: "Use a password manager to create and store strong, unique passwords \
                          for all accounts."
                .to_string(),
            priority: Priority::High,
            difficulty: Difficulty::Easy,
        },
        Recommendation {
            category: RecommendationCategory::TwoFactor,
            title: "Enable Two-Factor Authentication".to_string(),
            description: "Add an extra layer of security to important accounts with two-factor \
                          authentication."
                .to_string(),
            priority: Priority::High,
            difficulty: Difficulty::Easy,
        },
    ];

    for finding in findings.iter().filter(|f| f.risk == RiskLevel::High) {
        recommendations.push(Recommendation {
            category: RecommendationCategory::Specific,
            title: format!("Address {} Privacy Risk", finding.source),
            description: finding.recommendation.clone(),
            priority: Priority::High,
            difficulty: Difficulty::Medium,
        });
    }

    recommendations
}

/// One-paragraph plain-language summary of an assessment.
pub fn summarize(assessment: &PrivacyAssessment) -> String {
    let mut summary = format!(
        "I found {} pieces of information about you online. ",
        assessment.total_findings
    );
    summary.push_str(match assessment.overall {
        RiskLevel::High => "There are some significant privacy concerns that should be addressed. ",
        RiskLevel::Medium => "There are a few privacy items worth reviewing. ",
        RiskLevel::Low => "Your digital privacy looks pretty good overall. ",
    });
    summary.push_str("I've prepared specific recommendations to help protect your privacy.");
    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use renexus_types::companion::CompanionId;
    use renexus_types::guardian::{FindingId, FindingKind};

    fn finding(risk: RiskLevel) -> FootprintFinding {
        FootprintFinding {
            id: FindingId::new(),
            companion_id: CompanionId::new(),
            source: "Somewhere".to_string(),
            kind: FindingKind::SocialMedia,
            content: "Something public".to_string(),
            risk,
            recommendation: "Lock it down".to_string(),
            discovered_at: Utc::now(),
        }
    }

    #[test]
    fn test_any_high_finding_means_high_overall() {
        let findings = vec![finding(RiskLevel::Low), finding(RiskLevel::High)];
        let assessment = assess(&findings);
        assert_eq!(assessment.overall, RiskLevel::High);
        assert_eq!(assessment.high_risk_items, 1);
        assert_eq!(assessment.total_findings, 2);
    }

    #[test]
    fn test_single_medium_finding_stays_low() {
        let findings = vec![finding(RiskLevel::Medium), finding(RiskLevel::Low)];
        assert_eq!(assess(&findings).overall, RiskLevel::Low);
    }

    #[test]
    fn test_two_medium_findings_roll_up_to_medium() {
        let findings = vec![finding(RiskLevel::Medium), finding(RiskLevel::Medium)];
        assert_eq!(assess(&findings).overall, RiskLevel::Medium);
    }

    #[test]
    fn test_no_findings_is_low_risk() {
        let assessment = assess(&[]);
        assert_eq!(assessment.overall, RiskLevel::Low);
        assert_eq!(assessment.total_findings, 0);
    }

    #[test]
    fn test_recommendations_include_specific_for_high_risk() {
        let findings = vec![finding(RiskLevel::High)];
        let recs = recommendations(&findings);
        assert_eq!(recs.len(), 6);
        let specific = recs
            .iter()
            .find(|r| r.category == RecommendationCategory::Specific)
            .unwrap();
        assert_eq!(specific.title, "Address Somewhere Privacy Risk");
        assert_eq!(specific.description, "Lock it down");
    }

    #[test]
    fn test_recommendations_without_high_risk_are_the_standing_five() {
        let recs = recommendations(&[finding(RiskLevel::Low)]);
        assert_eq!(recs.len(), 5);
    }

    #[test]
    fn test_summary_wording_tracks_overall_risk() {
        let high = summarize(&assess(&[finding(RiskLevel::High)]));
        assert!(high.starts_with("I found 1 pieces of information"));
        assert!(high.contains("significant privacy concerns"));

        let low = summarize(&assess(&[]));
        assert!(low.contains("looks pretty good overall"));
        assert!(low.ends_with("help protect your privacy."));
    }
}
