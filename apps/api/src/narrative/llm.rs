use std::fmt::Write;

use async_trait::async_trait;
use chrono::Utc;

use crate::errors::AppError;
use crate::llm_client::prompts::COUNSELOR_SYSTEM;
use crate::llm_client::LlmClient;
use crate::narrative::prompts::{AI_SUCCESS_TIPS, ANALYSIS_PROMPT_TEMPLATE, DEFAULT_ACTION_PLAN};
use crate::narrative::{
    format_rupees, score_lead_in, AiInsights, Narrative, NarrativeComposer, NarrativeInput,
};

/// Records of each kind included in the prompt.
const PROMPT_RECORDS: usize = 8;
/// Leading analysis lines echoed in the chat message.
const SUMMARY_LINES: usize = 8;
const MAX_ACTION_ITEMS: usize = 5;

/// Counselor analysis through the chat-completions API.
pub struct LlmNarrativeComposer {
    llm: LlmClient,
}

impl LlmNarrativeComposer {
    pub fn new(llm: LlmClient) -> Self {
        Self { llm }
    }
}

#[async_trait]
impl NarrativeComposer for LlmNarrativeComposer {
    async fn compose(&self, input: &NarrativeInput<'_>) -> Result<Narrative, AppError> {
        let prompt = build_analysis_prompt(input);
        let analysis = self
            .llm
            .complete(&prompt, COUNSELOR_SYSTEM)
            .await
            .map_err(|e| AppError::Llm(e.to_string()))?;

        Ok(Narrative {
            message: enhanced_message(input, &analysis),
            action_plan: extract_action_plan(&analysis),
            success_tips: AI_SUCCESS_TIPS.iter().map(|s| s.to_string()).collect(),
            insights: AiInsights {
                analysis,
                is_ai_generated: true,
                timestamp: Utc::now(),
            },
        })
    }

    fn name(&self) -> &'static str {
        "llm"
    }
}

pub fn build_analysis_prompt(input: &NarrativeInput<'_>) -> String {
    let profile = input.profile;

    let mut colleges = String::new();
    for (index, ranked) in input.colleges.iter().take(PROMPT_RECORDS).enumerate() {
        let college = &ranked.item;
        let courses: Vec<String> = college
            .courses
            .iter()
            .map(|c| match c.stream {
                Some(stream) => format!("{} ({stream})", c.name),
                None => c.name.clone(),
            })
            .collect();
        let fees = college
            .courses
            .first()
            .and_then(|c| c.fees.as_ref())
            .and_then(|f| f.tuition)
            .map_or_else(|| "N/A".to_string(), format_rupees);

        let _ = writeln!(colleges, "{}. {}", index + 1, college.name);
        let _ = writeln!(
            colleges,
            "   - Location: {}, {}",
            college.location.city, college.location.state
        );
        let _ = writeln!(colleges, "   - Type: {}", college.college_type.as_str());
        let _ = writeln!(
            colleges,
            "   - NIRF Rank: {}",
            college
                .ranking
                .nirf
                .map_or_else(|| "Not ranked".to_string(), |r| r.to_string())
        );
        let _ = writeln!(colleges, "   - Courses: {}", courses.join(", "));
        let _ = writeln!(colleges, "   - Fees: {fees}/year");
    }

    let mut scholarships = String::new();
    for (index, ranked) in input.scholarships.iter().take(PROMPT_RECORDS).enumerate() {
        let scholarship = &ranked.item;
        let minimum = scholarship
            .eligibility_criteria
            .academic_percentage
            .minimum
            .map_or_else(|| "N/A".to_string(), |m| m.to_string());

        let _ = writeln!(scholarships, "{}. {}", index + 1, scholarship.name);
        let _ = writeln!(scholarships, "   - Provider: {}", scholarship.provider);
        let _ = writeln!(scholarships, "   - Type: {}", scholarship.scholarship_type.label());
        let _ = writeln!(
            scholarships,
            "   - Amount: {} ({})",
            format_rupees(scholarship.amount.value),
            scholarship.amount.kind.label()
        );
        let _ = writeln!(scholarships, "   - Min. Percentage: {minimum}%");
    }

    ANALYSIS_PROMPT_TEMPLATE
        .replace("{percentage}", &profile.percentage.to_string())
        .replace(
            "{stream}",
            profile.stream.map_or("Not specified", |s| s.as_str()),
        )
        .replace("{category}", profile.category.as_str())
        .replace("{education_level}", profile.education_level.as_str())
        .replace("{state}", profile.state.as_deref().unwrap_or("No preference"))
        .replace(
            "{family_income}",
            &profile
                .family_income
                .map_or_else(|| "Not provided".to_string(), format_rupees),
        )
        .replace(
            "{age}",
            &profile
                .age
                .map_or_else(|| "Not provided".to_string(), |a| a.to_string()),
        )
        .replace("{gender}", &profile.gender.to_string())
        .replace("{college_count}", &input.colleges.len().to_string())
        .replace("{colleges}", colleges.trim_end())
        .replace("{scholarship_count}", &input.scholarships.len().to_string())
        .replace("{scholarships}", scholarships.trim_end())
}

/// Header, the first lines of the analysis, and a fixed key-insights block.
pub fn enhanced_message(input: &NarrativeInput<'_>, analysis: &str) -> String {
    let summary: Vec<&str> = analysis.lines().take(SUMMARY_LINES).collect();
    format!(
        "**AI-Powered Analysis Complete!**\n\n\
         {}, here's my comprehensive recommendation:\n\n\
         {}\n\n\
         **Key Insights:**\n\
         - Personalized recommendations based on your profile\n\
         - Strategic application approach suggested\n\
         - Timeline and preparation guidance included\n\n",
        score_lead_in(input.profile),
        summary.join("\n")
    )
}

/// Lines that mention an action, step or recommendation, or that open with a
/// numbered-list marker such as `3.`. At most five; defaults when none match.
pub fn extract_action_plan(analysis: &str) -> Vec<String> {
    let items: Vec<String> = analysis
        .lines()
        .filter(|line| is_action_line(line))
        .take(MAX_ACTION_ITEMS)
        .map(str::to_string)
        .collect();

    if items.is_empty() {
        DEFAULT_ACTION_PLAN.iter().map(|s| s.to_string()).collect()
    } else {
        items
    }
}

fn is_action_line(line: &str) -> bool {
    let lower = line.to_lowercase();
    if ["action", "step", "recommendation"]
        .iter()
        .any(|word| lower.contains(word))
    {
        return true;
    }
    let digits = line.chars().take_while(|c| c.is_ascii_digit()).count();
    digits > 0 && line[digits..].starts_with('.')
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::eligibility::colleges::filter_colleges;
    use crate::eligibility::scholarships::filter_scholarships;
    use crate::models::profile::{Category, Stream};
    use crate::scoring::colleges::score_colleges;
    use crate::scoring::scholarships::score_scholarships;
    use crate::test_support::{profile, sample_colleges, sample_scholarships};

    #[test]
    fn test_prompt_lists_profile_and_records() {
        let mut student = profile(92.0);
        student.stream = Some(Stream::Engineering);
        student.family_income = Some(450_000);
        let colleges = score_colleges(filter_colleges(&sample_colleges(), &student), &student);
        let scholarships =
            score_scholarships(filter_scholarships(&sample_scholarships(), &student), &student);

        let prompt = build_analysis_prompt(&NarrativeInput {
            profile: &student,
            colleges: &colleges,
            scholarships: &scholarships,
        });

        assert!(prompt.starts_with("STUDENT PROFILE ANALYSIS REQUEST"));
        assert!(prompt.contains("- Academic Percentage: 92%"));
        assert!(prompt.contains("- Stream: Engineering"));
        assert!(prompt.contains("- State Preference: No preference"));
        assert!(prompt.contains("- Family Income: ₹450,000"));
        assert!(prompt.contains("- Age: Not provided"));
        assert!(prompt.contains(&format!("ELIGIBLE COLLEGES FOUND ({})", colleges.len())));
        assert!(prompt.contains("B.Tech Computer Science (Engineering)"));
        assert!(prompt.contains("- Fees: ₹250,000/year"));
        assert!(prompt.contains("- NIRF Rank: Not ranked"));
        assert!(!prompt.contains('{'));
    }

    #[test]
    fn test_prompt_with_no_results() {
        let student = profile(30.0);
        let prompt = build_analysis_prompt(&NarrativeInput {
            profile: &student,
            colleges: &[],
            scholarships: &[],
        });
        assert!(prompt.contains("ELIGIBLE COLLEGES FOUND (0):"));
        assert!(prompt.contains("ELIGIBLE SCHOLARSHIPS FOUND (0):"));
    }

    #[test]
    fn test_enhanced_message_keeps_first_eight_lines() {
        let analysis: String = (1..=12).map(|i| format!("line {i}\n")).collect();
        let mut student = profile(81.0);
        student.category = Category::Obc;
        let message = enhanced_message(
            &NarrativeInput {
                profile: &student,
                colleges: &[],
                scholarships: &[],
            },
            &analysis,
        );
        assert!(message.contains("Based on your 81% score (OBC category)"));
        assert!(message.contains("line 8"));
        assert!(!message.contains("line 9"));
        assert!(message.contains("**Key Insights:**"));
    }

    #[test]
    fn test_extract_action_plan_picks_matching_lines() {
        let analysis = "Overall Assessment\n\
                        You are doing well.\n\
                        1. Apply to IIT Delhi\n\
                        Next step: gather documents\n\
                        My recommendation is to start early\n\
                        Strategic Action Plan\n\
                        2. Apply to Inspire\n\
                        10. Keep backups";
        let plan = extract_action_plan(analysis);
        assert_eq!(
            plan,
            vec![
                "1. Apply to IIT Delhi",
                "Next step: gather documents",
                "My recommendation is to start early",
                "Strategic Action Plan",
                "2. Apply to Inspire",
            ]
        );
    }

    #[test]
    fn test_extract_action_plan_defaults() {
        let plan = extract_action_plan("Nothing useful here.\nStill nothing.");
        assert_eq!(plan.len(), 5);
        assert_eq!(plan[0], DEFAULT_ACTION_PLAN[0]);
    }

    #[test]
    fn test_numbered_marker_requires_period() {
        assert!(is_action_line("12. Done"));
        assert!(!is_action_line("2024 was a good year"));
        assert!(!is_action_line(". leading dot"));
    }

    #[tokio::test]
    async fn test_unreachable_api_is_llm_error() {
        let llm = LlmClient::new("sk-test".into(), Some("http://127.0.0.1:9/v1/chat".into())).unwrap();
        let composer = LlmNarrativeComposer::new(llm);
        let student = profile(70.0);
        let err = composer
            .compose(&NarrativeInput {
                profile: &student,
                colleges: &[],
                scholarships: &[],
            })
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Llm(_)));
    }
}
