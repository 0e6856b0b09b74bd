//! Profile entry repository trait.

use renexus_types::companion::{CompanionId, ProfileEntry};
use renexus_types::error::RepositoryError;

pub trait ProfileRepository: Send + Sync {
    /// Insert or replace the value stored under `key` for this companion.
    fn upsert(
        &self,
        companion_id: &CompanionId,
        key: &str,
        value: &str,
    ) -> impl std::future::Future<Output = Result<(), RepositoryError>> + Send;

    fn get(
        &self,
        companion_id: &CompanionId,
        key: &str,
    ) -> impl std::future::Future<Output = Result<Option<ProfileEntry>, RepositoryError>> + Send;

    /// Every entry for a companion, ordered by key.
    fn entries_for(
        &self,
        companion_id: &CompanionId,
    ) -> impl std::future::Future<Output = Result<Vec<ProfileEntry>, RepositoryError>> + Send;
}
