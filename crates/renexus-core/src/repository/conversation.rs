//! Conversation history repository trait.

use renexus_types::companion::CompanionId;
use renexus_types::conversation::ConversationTurn;
use renexus_types::error::RepositoryError;

pub trait ConversationRepository: Send + Sync {
    fn append(
        &self,
        turn: &ConversationTurn,
    ) -> impl std::future::Future<Output = Result<(), RepositoryError>> + Send;

    /// The most recent turns for a companion, newest first.
    fn recent(
        &self,
        companion_id: &CompanionId,
        limit: i64,
    ) -> impl std::future::Future<Output = Result<Vec<ConversationTurn>, RepositoryError>> + Send;

    fn count_for(
        &self,
        companion_id: &CompanionId,
    ) -> impl std::future::Future<Output = Result<i64, RepositoryError>> + Send;
}
