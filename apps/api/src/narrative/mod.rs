//! Narrative Composer: turns ranked results into a chat-style message, an
//! analysis block, an action plan and success tips.
//!
//! Default: `RuleBasedComposer` (deterministic, no I/O).
//! Optional: `LlmNarrativeComposer` (counselor analysis via `llm_client`).
//!
//! `AppState` holds an `Arc<dyn NarrativeComposer>`, picked at startup from
//! whether an API key is configured.

pub mod llm;
pub mod prompts;
pub mod rule_based;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::errors::AppError;
use crate::models::college::College;
use crate::models::profile::{Category, StudentProfile};
use crate::models::scholarship::Scholarship;
use crate::scoring::RankedResult;

/// Everything a composer may look at. Results arrive already ranked.
pub struct NarrativeInput<'a> {
    pub profile: &'a StudentProfile,
    pub colleges: &'a [RankedResult<College>],
    pub scholarships: &'a [RankedResult<Scholarship>],
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AiInsights {
    pub analysis: String,
    pub is_ai_generated: bool,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Narrative {
    pub message: String,
    pub insights: AiInsights,
    pub action_plan: Vec<String>,
    pub success_tips: Vec<String>,
}

#[async_trait]
pub trait NarrativeComposer: Send + Sync {
    async fn compose(&self, input: &NarrativeInput<'_>) -> Result<Narrative, AppError>;

    /// Short backend name for logs.
    fn name(&self) -> &'static str;
}

/// "Based on your 87.5% score in Science (SC category)" style lead-in.
pub(crate) fn score_lead_in(profile: &StudentProfile) -> String {
    let mut lead = format!("Based on your {}% score", profile.percentage);
    if let Some(stream) = profile.stream {
        lead.push_str(&format!(" in {stream}"));
    }
    if profile.category != Category::General {
        lead.push_str(&format!(" ({} category)", profile.category));
    }
    lead
}

/// Rupee amount with thousands separators, e.g. `₹250,000`.
pub(crate) fn format_rupees(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("₹{grouped}")
}
