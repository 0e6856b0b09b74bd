//! SQLite conversation history implementation.

use chrono::{DateTime, Utc};
use sqlx::Row;

use renexus_core::repository::ConversationRepository;
use renexus_types::companion::CompanionId;
use renexus_types::conversation::{ConversationId, ConversationTurn};
use renexus_types::error::RepositoryError;

use super::pool::DatabasePool;

/// SQLite-backed implementation of `ConversationRepository`.
pub struct SqliteConversationRepository {
    pool: DatabasePool,
}

impl SqliteConversationRepository {
    pub fn new(pool: DatabasePool) -> Self {
        Self { pool }
    }
}

struct TurnRow {
    id: String,
    companion_id: String,
    user_message: String,
    reply: String,
    sentiment: Option<f64>,
    trait_snapshot: Option<String>,
    created_at: String,
}

impl TurnRow {
    fn from_row(row: &sqlx::sqlite::SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            id: row.try_get("id")?,
            companion_id: row.try_get("companion_id")?,
            user_message: row.try_get("user_message")?,
            reply: row.try_get("reply")?,
            sentiment: row.try_get("sentiment")?,
            trait_snapshot: row.try_get("trait_snapshot")?,
            created_at: row.try_get("created_at")?,
        })
    }

    fn into_turn(self) -> Result<ConversationTurn, RepositoryError> {
        let id = self
            .id
            .parse::<ConversationId>()
            .map_err(|e| RepositoryError::Query(format!("invalid conversation id: {e}")))?;
        let companion_id = self
            .companion_id
            .parse::<CompanionId>()
            .map_err(|e| RepositoryError::Query(format!("invalid companion id: {e}")))?;
        let created_at = parse_datetime(&self.created_at)?;

        Ok(ConversationTurn {
            id,
            companion_id,
            user_message: self.user_message,
            reply: self.reply,
            sentiment: self.sentiment,
            trait_snapshot: self.trait_snapshot,
            created_at,
        })
    }
}

fn parse_datetime(s: &str) -> Result<DateTime<Utc>, RepositoryError> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| RepositoryError::Query(format!("invalid datetime: {e}")))
}

impl ConversationRepository for SqliteConversationRepository {
    async fn append(&self, turn: &ConversationTurn) -> Result<(), RepositoryError> {
        sqlx::query(
            "INSERT INTO conversations (id, companion_id, user_message, reply, sentiment, trait_snapshot, created_at)
             VALUES (?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(turn.id.to_string())
        .bind(turn.companion_id.to_string())
        .bind(&turn.user_message)
        .bind(&turn.reply)
        .bind(turn.sentiment)
        .bind(&turn.trait_snapshot)
        .bind(turn.created_at.to_rfc3339())
        .execute(&self.pool.writer)
        .await
        .map_err(|e| RepositoryError::Query(e.to_string()))?;

        Ok(())
    }

    async fn recent(
        &self,
        companion_id: &CompanionId,
        limit: i64,
    ) -> Result<Vec<ConversationTurn>, RepositoryError> {
        // UUID v7 ids sort by creation time, breaking ties within a timestamp.
        let rows = sqlx::query(
            "SELECT * FROM conversations WHERE companion_id = ?
             ORDER BY created_at DESC, id DESC LIMIT ?",
        )
        .bind(companion_id.to_string())
        .bind(limit)
        .fetch_all(&self.pool.reader)
        .await
        .map_err(|e| RepositoryError::Query(e.to_string()))?;

        let mut turns = Vec::with_capacity(rows.len());
        for row in &rows {
            let turn_row =
                TurnRow::from_row(row).map_err(|e| RepositoryError::Query(e.to_string()))?;
            turns.push(turn_row.into_turn()?);
        }

        Ok(turns)
    }

    async fn count_for(&self, companion_id: &CompanionId) -> Result<i64, RepositoryError> {
        let (count,): (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM conversations WHERE companion_id = ?")
                .bind(companion_id.to_string())
                .fetch_one(&self.pool.reader)
                .await
                .map_err(|e| RepositoryError::Query(e.to_string()))?;

        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    use renexus_core::repository::CompanionRepository;
    use renexus_types::companion::Companion;

    use crate::sqlite::companion::SqliteCompanionRepository;
    use crate::sqlite::testutil::{make_companion, test_pool};

    async fn seed_companion(pool: &DatabasePool, name: &str) -> Companion {
        let repo = SqliteCompanionRepository::new(pool.clone());
        repo.create(&make_companion(name)).await.unwrap()
    }

    fn make_turn(companion: &Companion, message: &str, at: DateTime<Utc>) -> ConversationTurn {
        ConversationTurn {
            id: ConversationId::new(),
            companion_id: companion.id.clone(),
            user_message: message.to_string(),
            reply: "noted".to_string(),
            sentiment: Some(0.5),
            trait_snapshot: None,
            created_at: at,
        }
    }

    #[tokio::test]
    async fn test_append_and_recent_newest_first() {
        let pool = test_pool().await;
        let companion = seed_companion(&pool, "Alex Johnson").await;
        let repo = SqliteConversationRepository::new(pool);

        let base = Utc::now();
        repo.append(&make_turn(&companion, "first", base)).await.unwrap();
        repo.append(&make_turn(&companion, "second", base + Duration::seconds(1)))
            .await
            .unwrap();
        repo.append(&make_turn(&companion, "third", base + Duration::seconds(2)))
            .await
            .unwrap();

        let recent = repo.recent(&companion.id, 2).await.unwrap();
        assert_eq!(recent.len(), 2);
        assert_eq!(recent[0].user_message, "third");
        assert_eq!(recent[1].user_message, "second");
    }

    #[tokio::test]
    async fn test_recent_scoped_to_companion() {
        let pool = test_pool().await;
        let first = seed_companion(&pool, "Alex Johnson").await;
        let second = seed_companion(&pool, "Sam Lee").await;
        let repo = SqliteConversationRepository::new(pool);

        let now = Utc::now();
        repo.append(&make_turn(&first, "hello from alex", now)).await.unwrap();
        repo.append(&make_turn(&second, "hello from sam", now)).await.unwrap();

        let turns = repo.recent(&first.id, 10).await.unwrap();
        assert_eq!(turns.len(), 1);
        assert_eq!(turns[0].user_message, "hello from alex");
    }

    #[tokio::test]
    async fn test_count_for() {
        let pool = test_pool().await;
        let companion = seed_companion(&pool, "Alex Johnson").await;
        let repo = SqliteConversationRepository::new(pool);

        assert_eq!(repo.count_for(&companion.id).await.unwrap(), 0);

        let now = Utc::now();
        repo.append(&make_turn(&companion, "one", now)).await.unwrap();
        repo.append(&make_turn(&companion, "two", now)).await.unwrap();

        assert_eq!(repo.count_for(&companion.id).await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_sentiment_and_snapshot_roundtrip() {
        let pool = test_pool().await;
        let companion = seed_companion(&pool, "Alex Johnson").await;
        let repo = SqliteConversationRepository::new(pool);

        let mut turn = make_turn(&companion, "happy message", Utc::now());
        turn.sentiment = Some(0.875);
        turn.trait_snapshot = Some(r#"{"traits":{}}"#.to_string());
        repo.append(&turn).await.unwrap();

        let stored = repo.recent(&companion.id, 1).await.unwrap();
        assert!((stored[0].sentiment.unwrap() - 0.875).abs() < f64::EPSILON);
        assert_eq!(stored[0].trait_snapshot.as_deref(), Some(r#"{"traits":{}}"#));
    }

    #[tokio::test]
    async fn test_deleting_companion_cascades() {
        let pool = test_pool().await;
        let companion = seed_companion(&pool, "Alex Johnson").await;
        let companion_repo = SqliteCompanionRepository::new(pool.clone());
        let repo = SqliteConversationRepository::new(pool);

        repo.append(&make_turn(&companion, "soon gone", Utc::now()))
            .await
            .unwrap();
        companion_repo.delete(&companion.id).await.unwrap();

        assert_eq!(repo.count_for(&companion.id).await.unwrap(), 0);
    }
}
