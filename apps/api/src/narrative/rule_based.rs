use std::fmt::Write;

use async_trait::async_trait;
use chrono::Utc;

use crate::errors::AppError;
use crate::models::college::College;
use crate::models::scholarship::Scholarship;
use crate::narrative::{
    format_rupees, score_lead_in, AiInsights, Narrative, NarrativeComposer, NarrativeInput,
};
use crate::scoring::RankedResult;

const COLLEGES_SHOWN: usize = 5;
const SCHOLARSHIPS_SHOWN: usize = 4;
const COURSES_SHOWN: usize = 3;

pub const ACTION_PLAN: [&str; 5] = [
    "1. Apply to colleges within your percentage range",
    "2. Explore both merit and need-based scholarships",
    "3. Prepare required documents early",
    "4. Consider multiple application rounds",
    "5. Have backup options ready",
];

pub const SUCCESS_TIPS: [&str; 5] = [
    "Research thoroughly before applying",
    "Meet all eligibility criteria",
    "Submit applications before deadlines",
    "Keep track of all applications",
    "Stay positive and persistent",
];

/// Deterministic composer. Never fails.
pub struct RuleBasedComposer;

#[async_trait]
impl NarrativeComposer for RuleBasedComposer {
    async fn compose(&self, input: &NarrativeInput<'_>) -> Result<Narrative, AppError> {
        Ok(compose_rule_based(input))
    }

    fn name(&self) -> &'static str {
        "rule-based"
    }
}

/// Synchronous core of `RuleBasedComposer`, also used as the fallback when
/// another composer fails.
pub fn compose_rule_based(input: &NarrativeInput<'_>) -> Narrative {
    let analysis = performance_summary(input);

    let mut message = analysis.clone();
    message.push_str(&college_section(input.colleges));
    message.push_str(&scholarship_section(input.scholarships));

    Narrative {
        message,
        insights: AiInsights {
            analysis,
            is_ai_generated: false,
            timestamp: Utc::now(),
        },
        action_plan: ACTION_PLAN.iter().map(|s| s.to_string()).collect(),
        success_tips: SUCCESS_TIPS.iter().map(|s| s.to_string()).collect(),
    }
}

fn performance_summary(input: &NarrativeInput<'_>) -> String {
    let percentage = input.profile.percentage;
    let tier = if percentage >= 90.0 {
        "Excellent Performance! You're eligible for top-tier institutions and merit scholarships."
    } else if percentage >= 75.0 {
        "Good Performance! You have solid options across multiple institutions."
    } else if percentage >= 60.0 {
        "Fair Performance! Focus on colleges with moderate requirements and need-based scholarships."
    } else {
        "Room for Improvement! Consider improving scores or exploring alternative pathways."
    };

    format!(
        "**Analysis Complete!**\n\n{}, here's my recommendation:\n\n**{tier}**\n\n",
        score_lead_in(input.profile)
    )
}

fn college_section(colleges: &[RankedResult<College>]) -> String {
    let mut out = String::from("COLLEGE RECOMMENDATIONS\n");

    if colleges.is_empty() {
        out.push_str("No Colleges Found for Current Criteria\n\n");
        out.push_str("Suggestions:\n");
        out.push_str("   - Consider broadening your location preferences\n");
        out.push_str("   - Look into private colleges with lower cutoffs\n");
        out.push_str("   - Explore diploma or certificate programs\n");
        out.push_str("   - Consider improving scores and applying next year\n\n");
        return out;
    }

    let _ = writeln!(out, "Found {} Eligible Colleges\n", colleges.len());
    for (index, ranked) in colleges.iter().take(COLLEGES_SHOWN).enumerate() {
        let college = &ranked.item;
        let _ = writeln!(out, "{}. {}", index + 1, college.name);
        let _ = writeln!(
            out,
            "   {} | Location: {}, {}",
            college.college_type.badge(),
            college.location.city,
            college.location.state
        );
        if let Some(rank) = college.ranking.nirf {
            let _ = writeln!(out, "   NIRF Ranking: {rank}");
        }
        if !college.courses.is_empty() {
            let names: Vec<&str> = college
                .courses
                .iter()
                .take(COURSES_SHOWN)
                .map(|c| c.name.as_str())
                .collect();
            let _ = writeln!(out, "   Available Courses: {}", names.join(", "));
            if college.courses.len() > COURSES_SHOWN {
                let _ = writeln!(
                    out,
                    "   ... and {} more courses",
                    college.courses.len() - COURSES_SHOWN
                );
            }
        }
        out.push('\n');
    }
    if colleges.len() > COLLEGES_SHOWN {
        let _ = writeln!(
            out,
            "   {} more colleges available - check the detailed results!\n",
            colleges.len() - COLLEGES_SHOWN
        );
    }
    out
}

fn scholarship_section(scholarships: &[RankedResult<Scholarship>]) -> String {
    let mut out = String::from("SCHOLARSHIP OPPORTUNITIES\n");

    if scholarships.is_empty() {
        out.push_str("No Scholarships Found for Current Criteria\n\n");
        out.push_str("Suggestions:\n");
        out.push_str("   - Check family income eligibility limits\n");
        out.push_str("   - Explore need-based scholarships\n");
        out.push_str("   - Look into category-specific schemes\n");
        out.push_str("   - Consider applying after improving scores\n\n");
        return out;
    }

    let _ = writeln!(out, "Found {} Eligible Scholarships\n", scholarships.len());
    for (index, ranked) in scholarships.iter().take(SCHOLARSHIPS_SHOWN).enumerate() {
        let scholarship = &ranked.item;
        let _ = writeln!(out, "{}. {}", index + 1, scholarship.name);
        let _ = writeln!(
            out,
            "   {} | Provider: {}",
            scholarship.scholarship_type.label(),
            scholarship.provider
        );
        let _ = writeln!(out, "   Amount: {}", format_rupees(scholarship.amount.value));
        if let Some(deadline) = scholarship.application_details.end_date {
            let _ = writeln!(out, "   Deadline: {}", deadline.format("%d %b %Y"));
        }
        out.push('\n');
    }
    if scholarships.len() > SCHOLARSHIPS_SHOWN {
        let _ = writeln!(
            out,
            "   {} more scholarships available - check the detailed results!\n",
            scholarships.len() - SCHOLARSHIPS_SHOWN
        );
    }
    out
}
