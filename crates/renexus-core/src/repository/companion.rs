//! Companion repository trait.

use renexus_types::companion::{Companion, CompanionId};
use renexus_types::error::RepositoryError;

use crate::repository::SortOrder;

/// Filter and ordering options for listing companions.
#[derive(Debug, Clone, Default)]
pub struct CompanionFilter {
    /// Column to sort by (implementations whitelist the valid names).
    pub sort_by: Option<String>,
    pub sort_order: Option<SortOrder>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

pub trait CompanionRepository: Send + Sync {
    /// Persist a new companion. Fails with `Conflict` when the slug is taken.
    fn create(
        &self,
        companion: &Companion,
    ) -> impl std::future::Future<Output = Result<Companion, RepositoryError>> + Send;

    fn get_by_id(
        &self,
        id: &CompanionId,
    ) -> impl std::future::Future<Output = Result<Option<Companion>, RepositoryError>> + Send;

    fn get_by_slug(
        &self,
        slug: &str,
    ) -> impl std::future::Future<Output = Result<Option<Companion>, RepositoryError>> + Send;

    fn list(
        &self,
        filter: Option<CompanionFilter>,
    ) -> impl std::future::Future<Output = Result<Vec<Companion>, RepositoryError>> + Send;

    /// Persist updated fields of an existing companion.
    fn update(
        &self,
        companion: &Companion,
    ) -> impl std::future::Future<Output = Result<Companion, RepositoryError>> + Send;

    /// Delete a companion and everything attached to it.
    fn delete(
        &self,
        id: &CompanionId,
    ) -> impl std::future::Future<Output = Result<(), RepositoryError>> + Send;
}
