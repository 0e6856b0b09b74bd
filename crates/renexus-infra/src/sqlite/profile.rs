//! SQLite profile entry store.
//!
//! Learned facts about a user are stored as one row per key, replaced on
//! every upsert.

use chrono::{DateTime, Utc};
use sqlx::Row;

use renexus_core::repository::ProfileRepository;
use renexus_types::companion::{CompanionId, ProfileEntry};
use renexus_types::error::RepositoryError;

use super::pool::DatabasePool;

/// SQLite-backed implementation of `ProfileRepository`.
pub struct SqliteProfileRepository {
    pool: DatabasePool,
}

impl SqliteProfileRepository {
    pub fn new(pool: DatabasePool) -> Self {
        Self { pool }
    }
}

fn entry_from_row(row: &sqlx::sqlite::SqliteRow) -> Result<ProfileEntry, RepositoryError> {
    let companion_id: String = row
        .try_get("companion_id")
        .map_err(|e| RepositoryError::Query(e.to_string()))?;
    let key: String = row
        .try_get("key")
        .map_err(|e| RepositoryError::Query(e.to_string()))?;
    let value: String = row
        .try_get("value")
        .map_err(|e| RepositoryError::Query(e.to_string()))?;
    let updated_at: String = row
        .try_get("updated_at")
        .map_err(|e| RepositoryError::Query(e.to_string()))?;

    Ok(ProfileEntry {
        companion_id: companion_id
            .parse::<CompanionId>()
            .map_err(|e| RepositoryError::Query(format!("invalid companion id: {e}")))?,
        key,
        value,
        updated_at: parse_datetime(&updated_at)?,
    })
}

fn parse_datetime(s: &str) -> Result<DateTime<Utc>, RepositoryError> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| RepositoryError::Query(format!("invalid datetime: {e}")))
}

impl ProfileRepository for SqliteProfileRepository {
    async fn upsert(
        &self,
        companion_id: &CompanionId,
        key: &str,
        value: &str,
    ) -> Result<(), RepositoryError> {
        let now = Utc::now().to_rfc3339();

        sqlx::query(
            r#"INSERT INTO profile_entries (companion_id, key, value, updated_at)
               VALUES (?, ?, ?, ?)
               ON CONFLICT (companion_id, key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at"#,
        )
        .bind(companion_id.to_string())
        .bind(key)
        .bind(value)
        .bind(&now)
        .execute(&self.pool.writer)
        .await
        .map_err(|e| RepositoryError::Query(e.to_string()))?;

        Ok(())
    }

    async fn get(
        &self,
        companion_id: &CompanionId,
        key: &str,
    ) -> Result<Option<ProfileEntry>, RepositoryError> {
        let row = sqlx::query("SELECT * FROM profile_entries WHERE companion_id = ? AND key = ?")
            .bind(companion_id.to_string())
            .bind(key)
            .fetch_optional(&self.pool.reader)
            .await
            .map_err(|e| RepositoryError::Query(e.to_string()))?;

        row.as_ref().map(entry_from_row).transpose()
    }

    async fn entries_for(
        &self,
        companion_id: &CompanionId,
    ) -> Result<Vec<ProfileEntry>, RepositoryError> {
        let rows = sqlx::query(
            "SELECT * FROM profile_entries WHERE companion_id = ? ORDER BY key",
        )
        .bind(companion_id.to_string())
        .fetch_all(&self.pool.reader)
        .await
        .map_err(|e| RepositoryError::Query(e.to_string()))?;

        rows.iter().map(entry_from_row).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use renexus_core::repository::CompanionRepository;
    use renexus_types::companion::Companion;

    use crate::sqlite::companion::SqliteCompanionRepository;
    use crate::sqlite::testutil::{make_companion, test_pool};

    async fn seed_companion(pool: &DatabasePool) -> Companion {
        let repo = SqliteCompanionRepository::new(pool.clone());
        repo.create(&make_companion("Alex Johnson")).await.unwrap()
    }

    #[tokio::test]
    async fn test_upsert_and_get() {
        let pool = test_pool().await;
        let companion = seed_companion(&pool).await;
        let repo = SqliteProfileRepository::new(pool);

        repo.upsert(&companion.id, "user_age", "28").await.unwrap();

        let entry = repo.get(&companion.id, "user_age").await.unwrap().unwrap();
        assert_eq!(entry.key, "user_age");
        assert_eq!(entry.value, "28");
        assert_eq!(entry.companion_id, companion.id);
    }

    #[tokio::test]
    async fn test_upsert_replaces_value() {
        let pool = test_pool().await;
        let companion = seed_companion(&pool).await;
        let repo = SqliteProfileRepository::new(pool);

        repo.upsert(&companion.id, "style_formality", "0.5").await.unwrap();
        repo.upsert(&companion.id, "style_formality", "0.31").await.unwrap();

        let entry = repo
            .get(&companion.id, "style_formality")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(entry.value, "0.31");

        let entries = repo.entries_for(&companion.id).await.unwrap();
        assert_eq!(entries.len(), 1);
    }

    #[tokio::test]
    async fn test_get_missing_returns_none() {
        let pool = test_pool().await;
        let companion = seed_companion(&pool).await;
        let repo = SqliteProfileRepository::new(pool);

        let entry = repo.get(&companion.id, "user_location").await.unwrap();
        assert!(entry.is_none());
    }

    #[tokio::test]
    async fn test_entries_for_ordered_by_key() {
        let pool = test_pool().await;
        let companion = seed_companion(&pool).await;
        let repo = SqliteProfileRepository::new(pool);

        repo.upsert(&companion.id, "user_location", "Seattle, WA").await.unwrap();
        repo.upsert(&companion.id, "personality_openness", "0.6").await.unwrap();
        repo.upsert(&companion.id, "style_formality", "0.4").await.unwrap();

        let entries = repo.entries_for(&companion.id).await.unwrap();
        let keys: Vec<&str> = entries.iter().map(|e| e.key.as_str()).collect();
        assert_eq!(
            keys,
            vec!["personality_openness", "style_formality", "user_location"]
        );
    }
}
