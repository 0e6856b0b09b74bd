//! Research sources that turn search queries into footprint findings.

use renexus_types::error::GuardianError;
use renexus_types::guardian::{FindingDraft, FindingKind, RiskLevel};

/// A backend capable of running footprint research.
///
/// Implementations receive the full query set and return drafts for
/// whatever they found; the service owns identifiers and timestamps.
pub trait ResearchSource: Send + Sync {
    fn discover(
        &self,
        queries: &[String],
    ) -> impl std::future::Future<Output = Result<Vec<FindingDraft>, GuardianError>> + Send;
}

/// Offline research source returning a representative set of findings,
/// the kinds of results a live search sweep typically turns up.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimulatedResearch;

impl ResearchSource for SimulatedResearch {
    async fn discover(&self, _queries: &[String]) -> Result<Vec<FindingDraft>, GuardianError> {
        Ok(vec![
            FindingDraft {
                source: "Facebook".to_string(),
                kind: FindingKind::SocialMedia,
                content: "Public profile with photos and basic information".to_string(),
                risk: RiskLevel::Medium,
                recommendation: "Review privacy settings to limit public visibility".to_string(),
            },
            FindingDraft {
                source: "LinkedIn".to_string(),
                kind: FindingKind::Professional,
                content: "Professional profile with work history".to_string(),
                risk: RiskLevel::Low,
                recommendation:
                    "Professional profiles are generally safe, but review connection settings"
                        .to_string(),
            },
            FindingDraft {
                source: "WhitePages".to_string(),
                kind: FindingKind::DataBroker,
                content: "Address and phone number listed".to_string(),
                risk: RiskLevel::High,
                recommendation: "Consider opting out of data broker listings".to_string(),
            },
            FindingDraft {
                source: "Local News Site".to_string(),
                kind: FindingKind::NewsMention,
                content: "Mentioned in community event article".to_string(),
                risk: RiskLevel::Low,
                recommendation: "Public mentions are generally harmless".to_string(),
            },
            FindingDraft {
                source: "University Website".to_string(),
                kind: FindingKind::Educational,
                content: "Listed in graduation records".to_string(),
                risk: RiskLevel::Low,
                recommendation: "Educational records are typically public information".to_string(),
            },
        ])
    }
}
