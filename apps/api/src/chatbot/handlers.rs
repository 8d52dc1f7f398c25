use axum::{extract::State, Json};
use serde::Serialize;

use crate::chatbot::pipeline::{narrate, recommend_from};
use crate::eligibility::validation::validate_profile;
use crate::errors::AppError;
use crate::models::college::College;
use crate::models::profile::{ProfileRequest, StudentProfile};
use crate::models::scholarship::Scholarship;
use crate::narrative::{AiInsights, NarrativeInput};
use crate::scoring::RankedResult;
use crate::state::AppState;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub total_colleges: usize,
    pub total_scholarships: usize,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryData {
    pub student_info: StudentProfile,
    pub eligible_colleges: Vec<RankedResult<College>>,
    pub eligible_scholarships: Vec<RankedResult<Scholarship>>,
    pub summary: Summary,
    pub ai_insights: AiInsights,
    pub action_plan: Vec<String>,
    pub success_tips: Vec<String>,
}

#[derive(Serialize)]
pub struct QueryResponse {
    pub success: bool,
    pub data: QueryData,
    pub message: String,
}

#[derive(Serialize)]
pub struct RankedLists {
    pub colleges: Vec<RankedResult<College>>,
    pub scholarships: Vec<RankedResult<Scholarship>>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeResponse {
    pub success: bool,
    pub analysis: String,
    pub recommendations: RankedLists,
    pub action_plan: Vec<String>,
    pub success_tips: Vec<String>,
    pub is_ai_generated: bool,
}

/// POST /api/chatbot/query
pub async fn handle_query(
    State(state): State<AppState>,
    Json(req): Json<ProfileRequest>,
) -> Result<Json<QueryResponse>, AppError> {
    let profile = validate_profile(req)?;
    let policy = state.config.match_policy();
    let rec = recommend_from(state.catalog.as_ref(), &profile, &policy).await?;

    let narrative = narrate(
        state.composer.as_ref(),
        &NarrativeInput {
            profile: &profile,
            colleges: &rec.colleges,
            scholarships: &rec.scholarships,
        },
    )
    .await;

    Ok(Json(QueryResponse {
        success: true,
        message: narrative.message,
        data: QueryData {
            summary: Summary {
                total_colleges: rec.colleges.len(),
                total_scholarships: rec.scholarships.len(),
            },
            student_info: profile,
            eligible_colleges: rec.colleges,
            eligible_scholarships: rec.scholarships,
            ai_insights: narrative.insights,
            action_plan: narrative.action_plan,
            success_tips: narrative.success_tips,
        },
    }))
}

/// POST /api/chatbot/analyze
pub async fn handle_analyze(
    State(state): State<AppState>,
    Json(req): Json<ProfileRequest>,
) -> Result<Json<AnalyzeResponse>, AppError> {
    let profile = validate_profile(req)?;
    let policy = state.config.match_policy();
    let rec = recommend_from(state.catalog.as_ref(), &profile, &policy).await?;

    let narrative = narrate(
        state.composer.as_ref(),
        &NarrativeInput {
            profile: &profile,
            colleges: &rec.colleges,
            scholarships: &rec.scholarships,
        },
    )
    .await;

    Ok(Json(AnalyzeResponse {
        success: true,
        analysis: narrative.insights.analysis,
        is_ai_generated: narrative.insights.is_ai_generated,
        recommendations: RankedLists {
            colleges: rec.colleges,
            scholarships: rec.scholarships,
        },
        action_plan: narrative.action_plan,
        success_tips: narrative.success_tips,
    }))
}
