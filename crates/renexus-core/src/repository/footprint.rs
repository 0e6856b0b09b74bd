//! Footprint finding repository trait.

use renexus_types::companion::CompanionId;
use renexus_types::error::RepositoryError;
use renexus_types::guardian::FootprintFinding;

pub trait FootprintRepository: Send + Sync {
    /// Replace every stored finding for this companion with `findings`,
    /// so re-running research never duplicates rows.
    fn replace_for(
        &self,
        companion_id: &CompanionId,
        findings: &[FootprintFinding],
    ) -> impl std::future::Future<Output = Result<(), RepositoryError>> + Send;

    /// Stored findings for a companion, in discovery order.
    fn list_for(
        &self,
        companion_id: &CompanionId,
    ) -> impl std::future::Future<Output = Result<Vec<FootprintFinding>, RepositoryError>> + Send;
}
