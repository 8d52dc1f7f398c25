//! PostgreSQL-backed catalog. Each record lives in a JSONB `data` column next
//! to its `id` and unique `name`; rows are decoded one at a time so that a
//! single bad document never takes down a whole listing.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::Value;
use serde::Serialize;
use sqlx::PgPool;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::catalog::memory::InMemoryCatalog;
use crate::catalog::{CatalogProvider, CollegeHints, ScholarshipHints};
use crate::errors::AppError;
use crate::models::catalog::CatalogRow;
use crate::models::college::College;
use crate::models::scholarship::Scholarship;

#[derive(Clone)]
pub struct PgCatalog {
    pool: PgPool,
}

impl PgCatalog {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Imports a seed catalog. Records whose name already exists are left
    /// untouched. Returns the number of rows inserted.
    pub async fn seed(&self, seed: &InMemoryCatalog) -> Result<u64, AppError> {
        let mut inserted = 0;
        for college in seed.college_records() {
            inserted += self.insert("colleges", college.id, &college.name, college).await?;
        }
        for scholarship in seed.scholarship_records() {
            inserted += self
                .insert("scholarships", scholarship.id, &scholarship.name, scholarship)
                .await?;
        }
        info!("Catalog seed imported: {inserted} new rows");
        Ok(inserted)
    }

    async fn insert<T: Serialize>(
        &self,
        table: &str,
        id: Uuid,
        name: &str,
        record: &T,
    ) -> Result<u64, AppError> {
        let data = serde_json::to_value(record).map_err(anyhow::Error::from)?;
        let result = sqlx::query(&format!(
            "INSERT INTO {table} (id, name, data) VALUES ($1, $2, $3) ON CONFLICT (name) DO NOTHING"
        ))
        .bind(id)
        .bind(name)
        .bind(data)
        .execute(&self.pool)
        .await?;
        Ok(result.rows_affected())
    }
}

/// Merges the row's authoritative `id` and `name` into its document and
/// decodes it. `None` (with a warning) when the document does not fit.
pub(crate) fn decode_row<T: DeserializeOwned>(table: &str, row: CatalogRow) -> Option<T> {
    let CatalogRow { id, name, data, .. } = row;
    let mut document = match data {
        Value::Object(map) => map,
        other => {
            warn!("Skipping {table} row {id}: expected a JSON object, got {other}");
            return None;
        }
    };
    document.insert("id".into(), Value::String(id.to_string()));
    document.insert("name".into(), Value::String(name));

    match serde_json::from_value(Value::Object(document)) {
        Ok(record) => Some(record),
        Err(e) => {
            warn!("Skipping malformed {table} row {id}: {e}");
            None
        }
    }
}

#[async_trait]
impl CatalogProvider for PgCatalog {
    async fn colleges(&self, hints: &CollegeHints) -> Result<Vec<College>, AppError> {
        // State and type narrow in SQL; `matches` re-applies every hint after decoding.
        let rows: Vec<CatalogRow> = sqlx::query_as(
            r#"
            SELECT id, name, data, created_at, updated_at
            FROM colleges
            WHERE ($1::text IS NULL OR data->'location'->>'state' ILIKE '%' || $1 || '%')
              AND ($2::text IS NULL OR data->>'type' = $2)
            ORDER BY created_at, name
            "#,
        )
        .bind(hints.state.as_deref())
        .bind(hints.college_type.map(|t| t.as_str()))
        .fetch_all(&self.pool)
        .await?;

        debug!("Fetched {} college rows", rows.len());
        Ok(rows
            .into_iter()
            .filter_map(|row| decode_row::<College>("college", row))
            .filter(|c| hints.matches(c))
            .collect())
    }

    async fn college(&self, id: Uuid) -> Result<Option<College>, AppError> {
        let row: Option<CatalogRow> = sqlx::query_as(
            "SELECT id, name, data, created_at, updated_at FROM colleges WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.and_then(|r| decode_row("college", r)))
    }

    async fn scholarships(&self, hints: &ScholarshipHints) -> Result<Vec<Scholarship>, AppError> {
        let rows: Vec<CatalogRow> = sqlx::query_as(
            r#"
            SELECT id, name, data, created_at, updated_at
            FROM scholarships
            WHERE (NOT $1 OR COALESCE((data->>'isActive')::boolean, TRUE))
            ORDER BY created_at, name
            "#,
        )
        .bind(hints.active_only)
        .fetch_all(&self.pool)
        .await?;

        debug!("Fetched {} scholarship rows", rows.len());
        Ok(rows
            .into_iter()
            .filter_map(|row| decode_row::<Scholarship>("scholarship", row))
            .filter(|s| hints.matches(s))
            .collect())
    }

    async fn scholarship(&self, id: Uuid) -> Result<Option<Scholarship>, AppError> {
        let row: Option<CatalogRow> = sqlx::query_as(
            "SELECT id, name, data, created_at, updated_at FROM scholarships WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.and_then(|r| decode_row("scholarship", r)))
    }

    fn backend(&self) -> &'static str {
        "postgres"
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use serde_json::json;

    use super::*;
    use crate::models::college::CollegeType;

    fn row(name: &str, data: Value) -> CatalogRow {
        CatalogRow {
            id: Uuid::new_v4(),
            name: name.to_string(),
            data,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_decode_row_uses_row_id_and_name() {
        let r = row(
            "Column Name",
            json!({ "id": Uuid::new_v4(), "name": "Document Name", "type": "Deemed" }),
        );
        let id = r.id;
        let college: College = decode_row("college", r).unwrap();
        assert_eq!(college.id, id);
        assert_eq!(college.name, "Column Name");
        assert_eq!(college.college_type, CollegeType::Deemed);
    }

    #[test]
    fn test_decode_row_skips_non_object() {
        let decoded: Option<College> = decode_row("college", row("Array", json!([1, 2, 3])));
        assert!(decoded.is_none());
    }

    #[test]
    fn test_decode_row_skips_malformed_document() {
        let decoded: Option<Scholarship> =
            decode_row("scholarship", row("No Amount", json!({ "provider": "NGO", "type": "Arts" })));
        assert!(decoded.is_none());
    }
}
