//! Guardian service: research orchestration over stored findings.

use chrono::Utc;
use tracing::info;

use renexus_types::companion::CompanionId;
use renexus_types::error::GuardianError;
use renexus_types::guardian::{
    FindingId, FootprintFinding, PrivacyAssessment, ResearchStatus, UserDetails,
};

use crate::guardian::research::ResearchSource;
use crate::guardian::{assessment, queries, report};
use crate::repository::FootprintRepository;

const ESTIMATED_RESEARCH_TIME: &str = "5-10 minutes";
const RESEARCH_KICKOFF_MESSAGE: &str = "I'm starting to research your digital presence. This \
     will help me understand what information about you is publicly available and identify \
     potential privacy risks.";

/// Runs footprint research through a [`ResearchSource`] and persists the
/// findings per companion.
pub struct GuardianService<F, S> {
    footprint_repo: F,
    source: S,
}

impl<F, S> GuardianService<F, S>
where
    F: FootprintRepository,
    S: ResearchSource,
{
    pub fn new(footprint_repo: F, source: S) -> Self {
        Self {
            footprint_repo,
            source,
        }
    }

    /// Researches the user's footprint and replaces any previously stored
    /// findings for this companion, so re-running stays idempotent.
    pub async fn run_research(
        &self,
        companion_id: &CompanionId,
        details: &UserDetails,
        current_year: i32,
    ) -> Result<(ResearchStatus, Vec<FootprintFinding>), GuardianError> {
        let queries = queries::build_queries(details, current_year);
        let status = ResearchStatus {
            queries_generated: queries.len() as u32,
            estimated_time: ESTIMATED_RESEARCH_TIME.to_string(),
            message: RESEARCH_KICKOFF_MESSAGE.to_string(),
        };

        let drafts = self.source.discover(&queries).await?;
        let discovered_at = Utc::now();
        let findings: Vec<FootprintFinding> = drafts
            .into_iter()
            .map(|draft| FootprintFinding {
                id: FindingId::new(),
                companion_id: companion_id.clone(),
                source: draft.source,
                kind: draft.kind,
                content: draft.content,
                risk: draft.risk,
                recommendation: draft.recommendation,
                discovered_at,
            })
            .collect();

        self.footprint_repo
            .replace_for(companion_id, &findings)
            .await
            .map_err(|e| GuardianError::StorageError(e.to_string()))?;

        info!(
            companion_id = %companion_id,
            queries = status.queries_generated,
            findings = findings.len(),
            "Footprint research completed"
        );
        Ok((status, findings))
    }

    pub async fn findings(
        &self,
        companion_id: &CompanionId,
    ) -> Result<Vec<FootprintFinding>, GuardianError> {
        self.footprint_repo
            .list_for(companion_id)
            .await
            .map_err(|e| GuardianError::StorageError(e.to_string()))
    }

    /// Risk rollup of the stored findings. Errors when research has never
    /// been run for this companion.
    pub async fn assessment(
        &self,
        companion_id: &CompanionId,
    ) -> Result<PrivacyAssessment, GuardianError> {
        let findings = self.findings(companion_id).await?;
        if findings.is_empty() {
            return Err(GuardianError::NoFindings);
        }
        Ok(assessment::assess(&findings))
    }

    /// Full markdown report over the stored findings.
    pub async fn report(
        &self,
        companion_id: &CompanionId,
        user_name: &str,
    ) -> Result<String, GuardianError> {
        let findings = self.findings(companion_id).await?;
        if findings.is_empty() {
            return Err(GuardianError::NoFindings);
        }
        Ok(report::render_report(user_name, &findings))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    use renexus_types::error::RepositoryError;
    use renexus_types::guardian::{FindingDraft, RiskLevel};

    use crate::guardian::research::SimulatedResearch;

    #[derive(Default)]
    struct MemoryFootprints(Mutex<Vec<FootprintFinding>>);

    impl FootprintRepository for MemoryFootprints {
        async fn replace_for(
            &self,
            companion_id: &CompanionId,
            findings: &[FootprintFinding],
        ) -> Result<(), RepositoryError> {
            let mut stored = self.0.lock().unwrap();
            stored.retain(|f| f.companion_id != *companion_id);
            stored.extend_from_slice(findings);
            Ok(())
        }

        async fn list_for(
            &self,
            companion_id: &CompanionId,
        ) -> Result<Vec<FootprintFinding>, RepositoryError> {
            Ok(self
                .0
                .lock()
                .unwrap()
                .iter()
                .filter(|f| f.companion_id == *companion_id)
                .cloned()
                .collect())
        }
    }

    struct FailingSource;

    impl ResearchSource for FailingSource {
        async fn discover(&self, _queries: &[String]) -> Result<Vec<FindingDraft>, GuardianError> {
            Err(GuardianError::ResearchFailed("network down".to_string()))
        }
    }

    fn details() -> UserDetails {
        UserDetails {
            name: "Alex Johnson".to_string(),
            age: Some(28),
            location: Some("Seattle, WA".to_string()),
        }
    }

    #[tokio::test]
    async fn test_run_research_stores_findings() {
        let service = GuardianService::new(MemoryFootprints::default(), SimulatedResearch);
        let companion_id = CompanionId::new();

        let (status, findings) = service
            .run_research(&companion_id, &details(), 2026)
            .await
            .unwrap();
        assert_eq!(status.queries_generated, 36);
        assert_eq!(status.estimated_time, "5-10 minutes");
        assert!(status.message.starts_with("I'm starting to research"));
        assert_eq!(findings.len(), 5);

        let stored = service.findings(&companion_id).await.unwrap();
        assert_eq!(stored.len(), 5);
    }

    #[tokio::test]
    async fn test_rerun_replaces_instead_of_duplicating() {
        let service = GuardianService::new(MemoryFootprints::default(), SimulatedResearch);
        let companion_id = CompanionId::new();

        service
            .run_research(&companion_id, &details(), 2026)
            .await
            .unwrap();
        service
            .run_research(&companion_id, &details(), 2026)
            .await
            .unwrap();

        assert_eq!(service.findings(&companion_id).await.unwrap().len(), 5);
    }

    #[tokio::test]
    async fn test_assessment_requires_prior_research() {
        let service = GuardianService::new(MemoryFootprints::default(), SimulatedResearch);
        let companion_id = CompanionId::new();

        let err = service.assessment(&companion_id).await.unwrap_err();
        assert!(matches!(err, GuardianError::NoFindings));

        service
            .run_research(&companion_id, &details(), 2026)
            .await
            .unwrap();
        let assessment = service.assessment(&companion_id).await.unwrap();
        assert_eq!(assessment.overall, RiskLevel::High);
        assert_eq!(assessment.total_findings, 5);
    }

    #[tokio::test]
    async fn test_report_names_the_user() {
        let service = GuardianService::new(MemoryFootprints::default(), SimulatedResearch);
        let companion_id = CompanionId::new();
        service
            .run_research(&companion_id, &details(), 2026)
            .await
            .unwrap();

        let report = service.report(&companion_id, "Alex Johnson").await.unwrap();
        assert!(report.starts_with("# Digital Privacy Report for Alex Johnson"));
    }

    #[tokio::test]
    async fn test_source_failure_propagates() {
        let service = GuardianService::new(MemoryFootprints::default(), FailingSource);
        let companion_id = CompanionId::new();

        let err = service
            .run_research(&companion_id, &details(), 2026)
            .await
            .unwrap_err();
        assert!(matches!(err, GuardianError::ResearchFailed(_)));
        assert!(service.findings(&companion_id).await.unwrap().is_empty());
    }
}
