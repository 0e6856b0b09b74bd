//! SQLite footprint finding store.
//!
//! Research results are replaced wholesale per companion, so re-running a
//! scan never accumulates duplicate findings.

use chrono::{DateTime, Utc};
use sqlx::Row;

use renexus_core::repository::FootprintRepository;
use renexus_types::companion::CompanionId;
use renexus_types::error::RepositoryError;
use renexus_types::guardian::{FindingId, FindingKind, FootprintFinding, RiskLevel};

use super::pool::DatabasePool;

/// SQLite-backed implementation of `FootprintRepository`.
pub struct SqliteFootprintRepository {
    pool: DatabasePool,
}

impl SqliteFootprintRepository {
    pub fn new(pool: DatabasePool) -> Self {
        Self { pool }
    }
}

struct FindingRow {
    id: String,
    companion_id: String,
    source: String,
    data_type: String,
    content: String,
    privacy_risk: String,
    recommendation: String,
    discovered_at: String,
}

impl FindingRow {
    fn from_row(row: &sqlx::sqlite::SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            id: row.try_get("id")?,
            companion_id: row.try_get("companion_id")?,
            source: row.try_get("source")?,
            data_type: row.try_get("data_type")?,
            content: row.try_get("content")?,
            privacy_risk: row.try_get("privacy_risk")?,
            recommendation: row.try_get("recommendation")?,
            discovered_at: row.try_get("discovered_at")?,
        })
    }

    fn into_finding(self) -> Result<FootprintFinding, RepositoryError> {
        let id = self
            .id
            .parse::<FindingId>()
            .map_err(|e| RepositoryError::Query(format!("invalid finding id: {e}")))?;
        let companion_id = self
            .companion_id
            .parse::<CompanionId>()
            .map_err(|e| RepositoryError::Query(format!("invalid companion id: {e}")))?;
        let kind: FindingKind = self
            .data_type
            .parse()
            .map_err(|e: String| RepositoryError::Query(e))?;
        let risk: RiskLevel = self
            .privacy_risk
            .parse()
            .map_err(|e: String| RepositoryError::Query(e))?;
        let discovered_at = parse_datetime(&self.discovered_at)?;

        Ok(FootprintFinding {
            id,
            companion_id,
            source: self.source,
            kind,
            content: self.content,
            risk,
            recommendation: self.recommendation,
            discovered_at,
        })
    }
}

fn parse_datetime(s: &str) -> Result<DateTime<Utc>, RepositoryError> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| RepositoryError::Query(format!("invalid datetime: {e}")))
}

impl FootprintRepository for SqliteFootprintRepository {
    async fn replace_for(
        &self,
        companion_id: &CompanionId,
        findings: &[FootprintFinding],
    ) -> Result<(), RepositoryError> {
        let mut tx = self
            .pool
            .writer
            .begin()
            .await
            .map_err(|e| RepositoryError::Query(e.to_string()))?;

        sqlx::query("DELETE FROM footprint_findings WHERE companion_id = ?")
            .bind(companion_id.to_string())
            .execute(&mut *tx)
            .await
            .map_err(|e| RepositoryError::Query(e.to_string()))?;

        for finding in findings {
            sqlx::query(
                "INSERT INTO footprint_findings (id, companion_id, source, data_type, content, privacy_risk, recommendation, discovered_at)
                 VALUES (?, ?, ?, ?, ?, ?, ?, ?)",
            )
            .bind(finding.id.to_string())
            .bind(finding.companion_id.to_string())
            .bind(&finding.source)
            .bind(finding.kind.to_string())
            .bind(&finding.content)
            .bind(finding.risk.to_string())
            .bind(&finding.recommendation)
            .bind(finding.discovered_at.to_rfc3339())
            .execute(&mut *tx)
            .await
            .map_err(|e| RepositoryError::Query(e.to_string()))?;
        }

        tx.commit()
            .await
            .map_err(|e| RepositoryError::Query(e.to_string()))?;

        Ok(())
    }

    async fn list_for(
        &self,
        companion_id: &CompanionId,
    ) -> Result<Vec<FootprintFinding>, RepositoryError> {
        // UUID v7 ids preserve discovery order within a shared timestamp.
        let rows = sqlx::query(
            "SELECT * FROM footprint_findings WHERE companion_id = ?
             ORDER BY discovered_at, id",
        )
        .bind(companion_id.to_string())
        .fetch_all(&self.pool.reader)
        .await
        .map_err(|e| RepositoryError::Query(e.to_string()))?;

        let mut findings = Vec::with_capacity(rows.len());
        for row in &rows {
            let finding_row =
                FindingRow::from_row(row).map_err(|e| RepositoryError::Query(e.to_string()))?;
            findings.push(finding_row.into_finding()?);
        }

        Ok(findings)
    }
}
