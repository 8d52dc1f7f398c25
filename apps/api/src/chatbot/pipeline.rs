use tracing::{debug, info, warn};

use crate::catalog::{CatalogProvider, CollegeHints, ScholarshipHints};
use crate::eligibility::colleges::{filter_colleges_with_limit, COLLEGE_RESULT_LIMIT};
use crate::eligibility::scholarships::{filter_scholarships_with_limit, SCHOLARSHIP_RESULT_LIMIT};
use crate::errors::AppError;
use crate::models::college::College;
use crate::models::profile::StudentProfile;
use crate::models::scholarship::Scholarship;
use crate::narrative::rule_based::compose_rule_based;
use crate::narrative::{Narrative, NarrativeComposer, NarrativeInput};
use crate::scoring::colleges::{score_colleges_with, CourseSelection};
use crate::scoring::scholarships::score_scholarships;
use crate::scoring::RankedResult;

/// Tunables for one matching run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchPolicy {
    pub college_limit: usize,
    pub scholarship_limit: usize,
    pub course_selection: CourseSelection,
}

impl Default for MatchPolicy {
    fn default() -> Self {
        Self {
            college_limit: COLLEGE_RESULT_LIMIT,
            scholarship_limit: SCHOLARSHIP_RESULT_LIMIT,
            course_selection: CourseSelection::First,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Recommendations {
    pub colleges: Vec<RankedResult<College>>,
    pub scholarships: Vec<RankedResult<Scholarship>>,
}

/// Filter, score and rank both catalogs. Pure; same inputs give the same
/// ordered output.
pub fn recommend(
    colleges: &[College],
    scholarships: &[Scholarship],
    profile: &StudentProfile,
    policy: &MatchPolicy,
) -> Recommendations {
    let eligible_colleges = filter_colleges_with_limit(colleges, profile, policy.college_limit);
    let eligible_scholarships =
        filter_scholarships_with_limit(scholarships, profile, policy.scholarship_limit);
    debug!(
        "Filtered {} of {} colleges, {} of {} scholarships",
        eligible_colleges.len(),
        colleges.len(),
        eligible_scholarships.len(),
        scholarships.len()
    );

    Recommendations {
        colleges: score_colleges_with(
            eligible_colleges,
            profile,
            policy.course_selection.selector(),
        ),
        scholarships: score_scholarships(eligible_scholarships, profile),
    }
}

/// Fetches a catalog snapshot and runs `recommend` over it.
pub async fn recommend_from(
    catalog: &dyn CatalogProvider,
    profile: &StudentProfile,
    policy: &MatchPolicy,
) -> Result<Recommendations, AppError> {
    let college_hints = CollegeHints {
        state: profile.state.clone(),
        stream: profile.stream,
        college_type: None,
    };
    let scholarship_hints = ScholarshipHints {
        stream: profile.stream,
        ..ScholarshipHints::active()
    };

    let colleges = catalog.colleges(&college_hints).await?;
    let scholarships = catalog.scholarships(&scholarship_hints).await?;

    let recommendations = recommend(&colleges, &scholarships, profile, policy);
    info!(
        "Matched {} colleges and {} scholarships for {}% ({})",
        recommendations.colleges.len(),
        recommendations.scholarships.len(),
        profile.percentage,
        profile.category
    );
    Ok(recommendations)
}

/// Runs `composer`, falling back to the rule-based narrative on error.
pub async fn narrate(composer: &dyn NarrativeComposer, input: &NarrativeInput<'_>) -> Narrative {
    match composer.compose(input).await {
        Ok(narrative) => narrative,
        Err(e) => {
            warn!(
                "Narrative composer '{}' failed, using rule-based narrative: {e}",
                composer.name()
            );
            compose_rule_based(input)
        }
    }
}
