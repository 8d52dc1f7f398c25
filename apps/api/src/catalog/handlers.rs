use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::catalog::{CollegeHints, ScholarshipHints};
use crate::eligibility::colleges::{filter_colleges_with_limit, rank_key};
use crate::eligibility::scholarships::filter_scholarships_with_limit;
use crate::eligibility::validation::validate_profile;
use crate::errors::AppError;
use crate::models::college::{College, CollegeType};
use crate::models::profile::{Category, ProfileRequest, Stream};
use crate::models::scholarship::{Provider, Scholarship, ScholarshipType};
use crate::state::AppState;

/// Result cap for `POST /api/colleges/search`.
pub const COLLEGE_SEARCH_LIMIT: usize = 50;
/// Result cap for `POST /api/scholarships/search`.
pub const SCHOLARSHIP_SEARCH_LIMIT: usize = 30;

const DEFAULT_PAGE_SIZE: usize = 10;
const MAX_PAGE_SIZE: usize = 100;

// ────────────────────────────────────────────────────────────────────────────
// Pagination
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub current_page: usize,
    pub total_pages: usize,
    pub total_items: usize,
    pub items_per_page: usize,
}

/// Slices one page out of `items`. Page defaults to 1; page size defaults to
/// 10 and is clamped to 1..=100.
pub fn paginate<T>(items: Vec<T>, page: Option<usize>, limit: Option<usize>) -> (Vec<T>, Pagination) {
    let page = page.unwrap_or(1).max(1);
    let per_page = limit.unwrap_or(DEFAULT_PAGE_SIZE).clamp(1, MAX_PAGE_SIZE);
    let total_items = items.len();
    let total_pages = total_items.div_ceil(per_page);

    let data = items
        .into_iter()
        .skip((page - 1).saturating_mul(per_page))
        .take(per_page)
        .collect();

    (
        data,
        Pagination {
            current_page: page,
            total_pages,
            total_items,
            items_per_page: per_page,
        },
    )
}

#[derive(Serialize)]
pub struct PageResponse<T> {
    pub success: bool,
    pub data: Vec<T>,
    pub pagination: Pagination,
}

#[derive(Serialize)]
pub struct ItemResponse<T> {
    pub success: bool,
    pub data: T,
}

#[derive(Serialize)]
pub struct SearchResponse<T> {
    pub success: bool,
    pub data: Vec<T>,
    pub total: usize,
}

// ────────────────────────────────────────────────────────────────────────────
// Colleges
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Default, Deserialize)]
pub struct CollegeListQuery {
    pub page: Option<usize>,
    pub limit: Option<usize>,
    pub state: Option<String>,
    pub stream: Option<Stream>,
    #[serde(rename = "type")]
    pub college_type: Option<CollegeType>,
}

/// GET /api/colleges
pub async fn handle_list_colleges(
    State(state): State<AppState>,
    Query(query): Query<CollegeListQuery>,
) -> Result<Json<PageResponse<College>>, AppError> {
    let hints = CollegeHints {
        state: query.state.filter(|s| !s.trim().is_empty()),
        stream: query.stream,
        college_type: query.college_type,
    };
    let mut colleges = state.catalog.colleges(&hints).await?;
    colleges.sort_by_key(rank_key);

    let (data, pagination) = paginate(colleges, query.page, query.limit);
    Ok(Json(PageResponse {
        success: true,
        data,
        pagination,
    }))
}

/// GET /api/colleges/:id
pub async fn handle_get_college(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ItemResponse<College>>, AppError> {
    let college = state
        .catalog
        .college(id)
        .await?
        .ok_or_else(|| AppError::NotFound("College not found".to_string()))?;
    Ok(Json(ItemResponse {
        success: true,
        data: college,
    }))
}

/// POST /api/colleges/search
pub async fn handle_search_colleges(
    State(state): State<AppState>,
    Json(req): Json<ProfileRequest>,
) -> Result<Json<SearchResponse<College>>, AppError> {
    let profile = validate_profile(req)?;
    let hints = CollegeHints {
        state: profile.state.clone(),
        stream: profile.stream,
        college_type: None,
    };
    let catalog = state.catalog.colleges(&hints).await?;
    let data = filter_colleges_with_limit(&catalog, &profile, COLLEGE_SEARCH_LIMIT);

    info!("College search: {} of {} matched", data.len(), catalog.len());
    Ok(Json(SearchResponse {
        success: true,
        total: data.len(),
        data,
    }))
}

// ────────────────────────────────────────────────────────────────────────────
// Scholarships
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Default, Deserialize)]
pub struct ScholarshipListQuery {
    pub page: Option<usize>,
    pub limit: Option<usize>,
    pub provider: Option<Provider>,
    #[serde(rename = "type")]
    pub scholarship_type: Option<ScholarshipType>,
    pub category: Option<Category>,
    pub stream: Option<Stream>,
}

/// GET /api/scholarships
pub async fn handle_list_scholarships(
    State(state): State<AppState>,
    Query(query): Query<ScholarshipListQuery>,
) -> Result<Json<PageResponse<Scholarship>>, AppError> {
    let hints = ScholarshipHints {
        provider: query.provider,
        scholarship_type: query.scholarship_type,
        category: query.category,
        stream: query.stream,
        active_only: true,
    };
    let mut scholarships = state.catalog.scholarships(&hints).await?;
    scholarships.sort_by(|a, b| b.amount.value.cmp(&a.amount.value));

    let (data, pagination) = paginate(scholarships, query.page, query.limit);
    Ok(Json(PageResponse {
        success: true,
        data,
        pagination,
    }))
}

/// GET /api/scholarships/:id
pub async fn handle_get_scholarship(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ItemResponse<Scholarship>>, AppError> {
    let scholarship = state
        .catalog
        .scholarship(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Scholarship not found".to_string()))?;
    Ok(Json(ItemResponse {
        success: true,
        data: scholarship,
    }))
}

/// POST /api/scholarships/search
pub async fn handle_search_scholarships(
    State(state): State<AppState>,
    Json(req): Json<ProfileRequest>,
) -> Result<Json<SearchResponse<Scholarship>>, AppError> {
    let profile = validate_profile(req)?;
    let catalog = state.catalog.scholarships(&ScholarshipHints::active()).await?;
    let data = filter_scholarships_with_limit(&catalog, &profile, SCHOLARSHIP_SEARCH_LIMIT);

    info!("Scholarship search: {} of {} matched", data.len(), catalog.len());
    Ok(Json(SearchResponse {
        success: true,
        total: data.len(),
        data,
    }))
}
