//! Scholarship eligibility filter.
//!
//! A scholarship passes only if every rule below holds. Rules whose student
//! field is absent are skipped.

use crate::eligibility::Constraint;
use crate::models::audience::admits_any;
use crate::models::profile::{Category, Gender, StudentProfile};
use crate::models::scholarship::{Scholarship, ScholarshipEligibility};

/// Default cap on filtered scholarships per request.
pub const SCHOLARSHIP_RESULT_LIMIT: usize = 15;

pub fn filter_scholarships(catalog: &[Scholarship], profile: &StudentProfile) -> Vec<Scholarship> {
    filter_scholarships_with_limit(catalog, profile, SCHOLARSHIP_RESULT_LIMIT)
}

/// Same as `filter_scholarships` with an explicit result cap. Results are
/// ordered by award amount, largest first.
pub fn filter_scholarships_with_limit(
    catalog: &[Scholarship],
    profile: &StudentProfile,
    limit: usize,
) -> Vec<Scholarship> {
    let mut eligible: Vec<Scholarship> = catalog
        .iter()
        .filter(|s| is_eligible(s, profile))
        .cloned()
        .collect();

    eligible.sort_by(|a, b| b.amount.value.cmp(&a.amount.value));
    eligible.truncate(limit);
    eligible
}

pub fn is_eligible(scholarship: &Scholarship, profile: &StudentProfile) -> bool {
    let criteria = &scholarship.eligibility_criteria;

    scholarship.is_active
        && meets_academic_minimum(criteria, profile)
        && matches_category(criteria, profile)
        && matches_stream(criteria, profile)
        && admits_any(&criteria.education_level, &profile.education_level)
        && within_income_cap(criteria, profile)
        && within_age_range(criteria, profile)
        && matches_gender(criteria, profile)
        && matches_state(criteria, profile)
}

/// A record without a minimum is malformed and never matches. The maximum is
/// advisory and deliberately not checked.
fn meets_academic_minimum(criteria: &ScholarshipEligibility, profile: &StudentProfile) -> bool {
    criteria
        .academic_percentage
        .minimum
        .is_some_and(|min| min <= profile.percentage)
}

/// General-category students skip the category rule entirely.
fn matches_category(criteria: &ScholarshipEligibility, profile: &StudentProfile) -> bool {
    profile.category == Category::General || admits_any(&criteria.category, &profile.category)
}

fn matches_stream(criteria: &ScholarshipEligibility, profile: &StudentProfile) -> bool {
    match profile.stream {
        None => true,
        Some(stream) => admits_any(&criteria.stream, &stream),
    }
}

fn within_income_cap(criteria: &ScholarshipEligibility, profile: &StudentProfile) -> bool {
    match profile.family_income {
        None => true,
        Some(income) => Constraint::at_most(criteria.family_income.maximum).admits(income),
    }
}

fn within_age_range(criteria: &ScholarshipEligibility, profile: &StudentProfile) -> bool {
    match profile.age {
        None => true,
        Some(age) => {
            Constraint::at_least(criteria.age.minimum).admits(age)
                && Constraint::at_most(criteria.age.maximum).admits(age)
        }
    }
}

fn matches_gender(criteria: &ScholarshipEligibility, profile: &StudentProfile) -> bool {
    criteria.gender == profile.gender || criteria.gender == Gender::All
}

/// An empty state list means the scholarship is open to every state.
fn matches_state(criteria: &ScholarshipEligibility, profile: &StudentProfile) -> bool {
    match profile.state.as_deref() {
        None => true,
        Some(state) => criteria.state.is_empty() || criteria.state.iter().any(|s| s == state),
    }
}
