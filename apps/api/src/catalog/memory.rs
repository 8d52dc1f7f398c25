use std::collections::HashSet;
use std::path::Path;

use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;
use tracing::{info, warn};
use uuid::Uuid;

use crate::catalog::{CatalogProvider, CollegeHints, ScholarshipHints};
use crate::errors::AppError;
use crate::models::college::College;
use crate::models::scholarship::Scholarship;

/// Seed document layout: `{ "colleges": [...], "scholarships": [...] }`.
#[derive(Debug, Default, Deserialize)]
struct SeedDocument {
    #[serde(default)]
    colleges: Vec<Value>,
    #[serde(default)]
    scholarships: Vec<Value>,
}

/// Catalog held entirely in memory, loaded once at startup.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalog {
    colleges: Vec<College>,
    scholarships: Vec<Scholarship>,
}

impl InMemoryCatalog {
    pub fn new(colleges: Vec<College>, scholarships: Vec<Scholarship>) -> Self {
        Self {
            colleges: dedup_by_name("college", colleges, |c| &c.name),
            scholarships: dedup_by_name("scholarship", scholarships, |s| &s.name),
        }
    }

    /// Parses a seed document. Records that fail to decode are skipped with a
    /// warning; a document that is not valid JSON at all is an error.
    pub fn from_json(raw: &str) -> Result<Self> {
        let doc: SeedDocument = serde_json::from_str(raw).context("Catalog seed is not valid JSON")?;
        let colleges = decode_records("college", doc.colleges);
        let scholarships = decode_records("scholarship", doc.scholarships);
        Ok(Self::new(colleges, scholarships))
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read catalog seed '{}'", path.display()))?;
        let catalog = Self::from_json(&raw)
            .with_context(|| format!("Failed to load catalog seed '{}'", path.display()))?;
        info!(
            "Loaded catalog seed: {} colleges, {} scholarships",
            catalog.colleges.len(),
            catalog.scholarships.len()
        );
        Ok(catalog)
    }

    pub fn college_records(&self) -> &[College] {
        &self.colleges
    }

    pub fn scholarship_records(&self) -> &[Scholarship] {
        &self.scholarships
    }
}

fn decode_records<T: DeserializeOwned>(kind: &str, values: Vec<Value>) -> Vec<T> {
    values
        .into_iter()
        .enumerate()
        .filter_map(|(index, value)| match serde_json::from_value(value) {
            Ok(record) => Some(record),
            Err(e) => {
                warn!("Skipping malformed {kind} record #{index}: {e}");
                None
            }
        })
        .collect()
}

/// Names are unique per entity type; later duplicates are dropped.
fn dedup_by_name<T>(kind: &str, records: Vec<T>, name: impl Fn(&T) -> &String) -> Vec<T> {
    let mut seen = HashSet::new();
    records
        .into_iter()
        .filter(|record| {
            let fresh = seen.insert(name(record).clone());
            if !fresh {
                warn!("Skipping duplicate {kind} '{}'", name(record));
            }
            fresh
        })
        .collect()
}

#[async_trait]
impl CatalogProvider for InMemoryCatalog {
    async fn colleges(&self, hints: &CollegeHints) -> Result<Vec<College>, AppError> {
        Ok(self
            .colleges
            .iter()
            .filter(|c| hints.matches(c))
            .cloned()
            .collect())
    }

    async fn college(&self, id: Uuid) -> Result<Option<College>, AppError> {
        Ok(self.colleges.iter().find(|c| c.id == id).cloned())
    }

    async fn scholarships(&self, hints: &ScholarshipHints) -> Result<Vec<Scholarship>, AppError> {
        Ok(self
            .scholarships
            .iter()
            .filter(|s| hints.matches(s))
            .cloned()
            .collect())
    }

    async fn scholarship(&self, id: Uuid) -> Result<Option<Scholarship>, AppError> {
        Ok(self.scholarships.iter().find(|s| s.id == id).cloned())
    }

    fn backend(&self) -> &'static str {
        "memory"
    }
}
