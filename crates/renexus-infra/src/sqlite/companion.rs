//! SQLite companion repository implementation.
//!
//! Implements `CompanionRepository` from `renexus-core` using sqlx with split
//! read/write pools.

use chrono::{DateTime, Utc};
use sqlx::Row;

use renexus_core::repository::{CompanionFilter, CompanionRepository, SortOrder};
use renexus_types::companion::{Companion, CompanionId, HumorStyle};
use renexus_types::error::RepositoryError;
use renexus_types::personality::TraitScores;

use super::pool::DatabasePool;

/// SQLite-backed implementation of `CompanionRepository`.
pub struct SqliteCompanionRepository {
    pool: DatabasePool,
}

impl SqliteCompanionRepository {
    /// Create a new repository backed by the given database pool.
    pub fn new(pool: DatabasePool) -> Self {
        Self { pool }
    }
}

/// Internal row type for mapping SQLite rows to the domain Companion.
struct CompanionRow {
    id: String,
    slug: String,
    user_name: String,
    companion_name: String,
    openness: f64,
    conscientiousness: f64,
    extraversion: f64,
    agreeableness: f64,
    neuroticism: f64,
    humor_style: String,
    curiosity: f64,
    trust: f64,
    conversation_count: i64,
    created_at: String,
    updated_at: String,
    last_active_at: Option<String>,
}

impl CompanionRow {
    fn from_row(row: &sqlx::sqlite::SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            id: row.try_get("id")?,
            slug: row.try_get("slug")?,
            user_name: row.try_get("user_name")?,
            companion_name: row.try_get("companion_name")?,
            openness: row.try_get("openness")?,
            conscientiousness: row.try_get("conscientiousness")?,
            extraversion: row.try_get("extraversion")?,
            agreeableness: row.try_get("agreeableness")?,
            neuroticism: row.try_get("neuroticism")?,
            humor_style: row.try_get("humor_style")?,
            curiosity: row.try_get("curiosity")?,
            trust: row.try_get("trust")?,
            conversation_count: row.try_get("conversation_count")?,
            created_at: row.try_get("created_at")?,
            updated_at: row.try_get("updated_at")?,
            last_active_at: row.try_get("last_active_at")?,
        })
    }

    fn into_companion(self) -> Result<Companion, RepositoryError> {
        let id = self
            .id
            .parse::<CompanionId>()
            .map_err(|e| RepositoryError::Query(format!("invalid companion id: {e}")))?;

        let humor_style: HumorStyle = self
            .humor_style
            .parse()
            .map_err(|e: String| RepositoryError::Query(e))?;

        let created_at = parse_datetime(&self.created_at)?;
        let updated_at = parse_datetime(&self.updated_at)?;
        let last_active_at = self
            .last_active_at
            .as_deref()
            .map(parse_datetime)
            .transpose()?;

        Ok(Companion {
            id,
            slug: self.slug,
            user_name: self.user_name,
            companion_name: self.companion_name,
            traits: TraitScores {
                openness: self.openness,
                conscientiousness: self.conscientiousness,
                extraversion: self.extraversion,
                agreeableness: self.agreeableness,
                neuroticism: self.neuroticism,
            },
            humor_style,
            curiosity: self.curiosity,
            trust: self.trust,
            conversation_count: self.conversation_count,
            created_at,
            updated_at,
            last_active_at,
        })
    }
}

fn parse_datetime(s: &str) -> Result<DateTime<Utc>, RepositoryError> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| RepositoryError::Query(format!("invalid datetime: {e}")))
}

fn format_datetime(dt: &DateTime<Utc>) -> String {
    dt.to_rfc3339()
}

impl CompanionRepository for SqliteCompanionRepository {
    async fn create(&self, companion: &Companion) -> Result<Companion, RepositoryError> {
        let result = sqlx::query(
            "INSERT INTO companions (id, slug, user_name, companion_name, openness, conscientiousness, extraversion, agreeableness, neuroticism, humor_style, curiosity, trust, conversation_count, created_at, updated_at, last_active_at)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(companion.id.to_string())
        .bind(&companion.slug)
        .bind(&companion.user_name)
        .bind(&companion.companion_name)
        .bind(companion.traits.openness)
        .bind(companion.traits.conscientiousness)
        .bind(companion.traits.extraversion)
        .bind(companion.traits.agreeableness)
        .bind(companion.traits.neuroticism)
        .bind(companion.humor_style.to_string())
        .bind(companion.curiosity)
        .bind(companion.trust)
        .bind(companion.conversation_count)
        .bind(format_datetime(&companion.created_at))
        .bind(format_datetime(&companion.updated_at))
        .bind(companion.last_active_at.as_ref().map(format_datetime))
        .execute(&self.pool.writer)
        .await;

        match result {
            Ok(_) => Ok(companion.clone()),
            Err(sqlx::Error::Database(db_err)) if db_err.message().contains("UNIQUE") => {
                Err(RepositoryError::Conflict(companion.slug.clone()))
            }
            Err(e) => Err(RepositoryError::Query(e.to_string())),
        }
    }

    async fn get_by_id(&self, id: &CompanionId) -> Result<Option<Companion>, RepositoryError> {
        let row = sqlx::query("SELECT * FROM companions WHERE id = ?")
            .bind(id.to_string())
            .fetch_optional(&self.pool.reader)
            .await
            .map_err(|e| RepositoryError::Query(e.to_string()))?;

        match row {
            Some(row) => {
                let companion_row = CompanionRow::from_row(&row)
                    .map_err(|e| RepositoryError::Query(e.to_string()))?;
                Ok(Some(companion_row.into_companion()?))
            }
            None => Ok(None),
        }
    }

    async fn get_by_slug(&self, slug: &str) -> Result<Option<Companion>, RepositoryError> {
        let row = sqlx::query("SELECT * FROM companions WHERE slug = ?")
            .bind(slug)
            .fetch_optional(&self.pool.reader)
            .await
            .map_err(|e| RepositoryError::Query(e.to_string()))?;

        match row {
            Some(row) => {
                let companion_row = CompanionRow::from_row(&row)
                    .map_err(|e| RepositoryError::Query(e.to_string()))?;
                Ok(Some(companion_row.into_companion()?))
            }
            None => Ok(None),
        }
    }

    async fn list(&self, filter: Option<CompanionFilter>) -> Result<Vec<Companion>, RepositoryError> {
        let filter = filter.unwrap_or_default();

        let sort_field = filter.sort_by.as_deref().unwrap_or("created_at");
        // Whitelist allowed sort fields to prevent SQL injection
        let safe_sort = match sort_field {
            "slug" | "user_name" | "companion_name" | "trust" | "conversation_count"
            | "created_at" | "updated_at" | "last_active_at" => sort_field,
            _ => "created_at",
        };
        let order = match filter.sort_order.unwrap_or_default() {
            SortOrder::Asc => "ASC",
            SortOrder::Desc => "DESC",
        };

        let mut sql = format!("SELECT * FROM companions ORDER BY {safe_sort} {order}");
        if let Some(limit) = filter.limit {
            sql.push_str(&format!(" LIMIT {limit}"));
        }
        if let Some(offset) = filter.offset {
            sql.push_str(&format!(" OFFSET {offset}"));
        }

        let rows = sqlx::query(&sql)
            .fetch_all(&self.pool.reader)
            .await
            .map_err(|e| RepositoryError::Query(e.to_string()))?;

        let mut companions = Vec::with_capacity(rows.len());
        for row in &rows {
            let companion_row =
                CompanionRow::from_row(row).map_err(|e| RepositoryError::Query(e.to_string()))?;
            companions.push(companion_row.into_companion()?);
        }

        Ok(companions)
    }

    async fn update(&self, companion: &Companion) -> Result<Companion, RepositoryError> {
        let result = sqlx::query(
            "UPDATE companions SET slug = ?, user_name = ?, companion_name = ?, openness = ?, conscientiousness = ?, extraversion = ?, agreeableness = ?, neuroticism = ?, humor_style = ?, curiosity = ?, trust = ?, conversation_count = ?, updated_at = ?, last_active_at = ?
             WHERE id = ?",
        )
        .bind(&companion.slug)
        .bind(&companion.user_name)
        .bind(&companion.companion_name)
        .bind(companion.traits.openness)
        .bind(companion.traits.conscientiousness)
        .bind(companion.traits.extraversion)
        .bind(companion.traits.agreeableness)
        .bind(companion.traits.neuroticism)
        .bind(companion.humor_style.to_string())
        .bind(companion.curiosity)
        .bind(companion.trust)
        .bind(companion.conversation_count)
        .bind(format_datetime(&companion.updated_at))
        .bind(companion.last_active_at.as_ref().map(format_datetime))
        .bind(companion.id.to_string())
        .execute(&self.pool.writer)
        .await
        .map_err(|e| RepositoryError::Query(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(companion.clone())
    }

    async fn delete(&self, id: &CompanionId) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM companions WHERE id = ?")
            .bind(id.to_string())
            .execute(&self.pool.writer)
            .await
            .map_err(|e| RepositoryError::Query(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }
}
