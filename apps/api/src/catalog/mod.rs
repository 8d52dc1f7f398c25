//! Catalog Provider: read-only access to college and scholarship records.
//!
//! The eligibility engine never talks to storage directly. Handlers fetch a
//! snapshot through `Arc<dyn CatalogProvider>` and hand plain slices to the
//! pure filter/score functions.

pub mod handlers;
pub mod memory;
pub mod postgres;

use async_trait::async_trait;
use serde::Deserialize;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::audience::admits_any;
use crate::models::college::{College, CollegeType};
use crate::models::profile::{Category, Stream};
use crate::models::scholarship::{Provider, Scholarship, ScholarshipType};

// ────────────────────────────────────────────────────────────────────────────
// Hints
// ────────────────────────────────────────────────────────────────────────────

/// Advisory pre-narrowing for college lookups. Providers may ignore any of it;
/// callers re-apply their own rules.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CollegeHints {
    pub state: Option<String>,
    pub stream: Option<Stream>,
    #[serde(rename = "type")]
    pub college_type: Option<CollegeType>,
}

impl CollegeHints {
    pub fn matches(&self, college: &College) -> bool {
        let state_ok = self.state.as_deref().map_or(true, |wanted| {
            college
                .location
                .state
                .to_lowercase()
                .contains(&wanted.to_lowercase())
        });
        let stream_ok = self
            .stream
            .map_or(true, |s| college.courses.iter().any(|c| c.stream == Some(s)));
        let type_ok = self.college_type.map_or(true, |t| college.college_type == t);
        state_ok && stream_ok && type_ok
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScholarshipHints {
    pub provider: Option<Provider>,
    #[serde(rename = "type")]
    pub scholarship_type: Option<ScholarshipType>,
    pub category: Option<Category>,
    pub stream: Option<Stream>,
    #[serde(default)]
    pub active_only: bool,
}

impl ScholarshipHints {
    pub fn active() -> Self {
        Self {
            active_only: true,
            ..Self::default()
        }
    }

    pub fn matches(&self, scholarship: &Scholarship) -> bool {
        let criteria = &scholarship.eligibility_criteria;
        (!self.active_only || scholarship.is_active)
            && self.provider.map_or(true, |p| scholarship.provider == p)
            && self
                .scholarship_type
                .map_or(true, |t| scholarship.scholarship_type == t)
            && self
                .category
                .map_or(true, |c| admits_any(&criteria.category, &c))
            && self.stream.map_or(true, |s| admits_any(&criteria.stream, &s))
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

/// Source of catalog records. Implementations return records in a stable
/// catalog order so that ties downstream stay deterministic.
///
/// Carried in `AppState` as `Arc<dyn CatalogProvider>`.
#[async_trait]
pub trait CatalogProvider: Send + Sync {
    async fn colleges(&self, hints: &CollegeHints) -> Result<Vec<College>, AppError>;

    async fn college(&self, id: Uuid) -> Result<Option<College>, AppError>;

    async fn scholarships(&self, hints: &ScholarshipHints) -> Result<Vec<Scholarship>, AppError>;

    async fn scholarship(&self, id: Uuid) -> Result<Option<Scholarship>, AppError>;

    /// Short backend name for logs and the health endpoint.
    fn backend(&self) -> &'static str;
}
