//! College eligibility filter.
//!
//! Algorithm:
//! 1. Keep colleges whose minimum percentage for the student's category is
//!    met (missing threshold passes).
//! 2. If a state is given, keep colleges whose state contains it (case-insensitive).
//! 3. Narrow each college's courses to those matching the requested stream and
//!    any course-level threshold for the category.
//! 4. Drop colleges left without courses, order by NIRF rank (unranked last),
//!    cap the result.

use crate::eligibility::Constraint;
use crate::models::college::{College, Course};
use crate::models::profile::StudentProfile;

/// Default cap on filtered colleges per request.
pub const COLLEGE_RESULT_LIMIT: usize = 20;

pub fn filter_colleges(catalog: &[College], profile: &StudentProfile) -> Vec<College> {
    filter_colleges_with_limit(catalog, profile, COLLEGE_RESULT_LIMIT)
}

/// Same as `filter_colleges` with an explicit result cap.
///
/// Every returned college carries only the courses the student is eligible
/// for, and that list is never empty.
pub fn filter_colleges_with_limit(
    catalog: &[College],
    profile: &StudentProfile,
    limit: usize,
) -> Vec<College> {
    let mut eligible: Vec<College> = catalog
        .iter()
        .filter(|college| meets_college_minimum(college, profile))
        .filter(|college| in_preferred_state(college, profile.state.as_deref()))
        .filter_map(|college| {
            let courses = eligible_courses(college, profile);
            if courses.is_empty() {
                None
            } else {
                Some(College {
                    courses,
                    ..college.clone()
                })
            }
        })
        .collect();

    // Stable: equal ranks keep catalog order.
    eligible.sort_by_key(rank_key);
    eligible.truncate(limit);
    eligible
}

fn meets_college_minimum(college: &College, profile: &StudentProfile) -> bool {
    Constraint::at_least(college.minimum_for(profile.category)).admits(profile.percentage)
}

fn in_preferred_state(college: &College, wanted: Option<&str>) -> bool {
    match wanted {
        None => true,
        Some(state) => college
            .location
            .state
            .to_lowercase()
            .contains(&state.to_lowercase()),
    }
}

fn course_is_eligible(course: &Course, profile: &StudentProfile) -> bool {
    if let Some(stream) = profile.stream {
        if course.stream != Some(stream) {
            return false;
        }
    }
    Constraint::at_least(course.threshold_for(profile.category)).admits(profile.percentage)
}

fn eligible_courses(college: &College, profile: &StudentProfile) -> Vec<Course> {
    college
        .courses
        .iter()
        .filter(|course| course_is_eligible(course, profile))
        .cloned()
        .collect()
}

pub(crate) fn rank_key(college: &College) -> (bool, u32) {
    match college.ranking.nirf {
        Some(rank) => (false, rank),
        None => (true, 0),
    }
}
