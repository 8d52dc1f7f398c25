//! College scoring.
//!
//! Algorithm:
//! 1. Pick a representative course (first listed by default).
//! 2. Academic headroom against the course override, the college minimum, or 50.
//! 3. Stream, state and NIRF prestige bonuses.
//! 4. Affordability of the representative course against family income.

use crate::models::college::{College, Course};
use crate::models::profile::StudentProfile;
use crate::scoring::{rank, RankedResult, ScoreCard};

/// Required percentage assumed when neither course nor college states one.
pub const FALLBACK_REQUIRED_PERCENTAGE: f64 = 50.0;

/// Chooses the course whose threshold and fees stand in for the whole college.
pub trait CourseSelector: Send + Sync {
    fn select<'a>(&self, college: &'a College, profile: &StudentProfile) -> Option<&'a Course>;
}

/// The first listed course.
pub struct FirstCourse;

impl CourseSelector for FirstCourse {
    fn select<'a>(&self, college: &'a College, _profile: &StudentProfile) -> Option<&'a Course> {
        college.courses.first()
    }
}

/// The course with the lowest required percentage for the student's category.
/// Ties go to the earlier course.
pub struct BestEligibleCourse;

impl CourseSelector for BestEligibleCourse {
    fn select<'a>(&self, college: &'a College, profile: &StudentProfile) -> Option<&'a Course> {
        college.courses.iter().min_by(|a, b| {
            required_percentage(college, Some(*a), profile)
                .total_cmp(&required_percentage(college, Some(*b), profile))
        })
    }
}

/// Configurable course selection policy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CourseSelection {
    #[default]
    First,
    BestEligible,
}

impl CourseSelection {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "first" => Some(CourseSelection::First),
            "best" | "besteligible" | "best-eligible" => Some(CourseSelection::BestEligible),
            _ => None,
        }
    }

    pub fn selector(&self) -> &'static dyn CourseSelector {
        match self {
            CourseSelection::First => &FirstCourse,
            CourseSelection::BestEligible => &BestEligibleCourse,
        }
    }
}

pub fn score_colleges(colleges: Vec<College>, profile: &StudentProfile) -> Vec<RankedResult<College>> {
    score_colleges_with(colleges, profile, &FirstCourse)
}

pub fn score_colleges_with(
    colleges: Vec<College>,
    profile: &StudentProfile,
    selector: &dyn CourseSelector,
) -> Vec<RankedResult<College>> {
    let scored = colleges
        .into_iter()
        .map(|college| {
            let card = score_college(&college, profile, selector);
            card.finish(college)
        })
        .collect();
    rank(scored)
}

fn score_college(college: &College, profile: &StudentProfile, selector: &dyn CourseSelector) -> ScoreCard {
    let mut card = ScoreCard::default();
    let course = selector.select(college, profile);

    // Headroom is measured against a representative course only.
    if course.is_some() {
        let headroom = profile.percentage - required_percentage(college, course, profile);
        if headroom >= 20.0 {
            card.award(30, "Excellent academic match - well above requirements");
        } else if headroom >= 10.0 {
            card.award(20, "Good academic fit - comfortably meets requirements");
        } else if headroom >= 0.0 {
            card.award(10, "Meets minimum requirements");
        }
    }

    if let Some(stream) = profile.stream {
        if college.courses.iter().any(|c| c.stream == Some(stream)) {
            card.award(25, format!("Perfect stream match for {stream}"));
        }
    }

    if let Some(state) = profile.state.as_deref() {
        if college.location.state.eq_ignore_ascii_case(state) {
            card.award(15, "Matches your preferred state");
        }
    }

    match college.ranking.nirf {
        Some(rank) if rank <= 10 => {
            card.award(20, format!("Top-tier institution (NIRF Rank: {rank})"));
        }
        Some(rank) if rank <= 50 => {
            card.award(10, format!("Well-ranked institution (NIRF Rank: {rank})"));
        }
        _ => {}
    }

    let annual_fees = course.and_then(|c| c.fees.as_ref()).and_then(|f| f.annual_total());
    // Zero income would make the ratio meaningless.
    if let (Some(fees), Some(income)) = (annual_fees, profile.family_income.filter(|i| *i > 0)) {
        let ratio = fees as f64 / income as f64;
        if ratio <= 0.2 {
            card.award(15, "Highly affordable based on family income");
        } else if ratio <= 0.4 {
            card.award(10, "Reasonably affordable");
        } else if ratio > 0.6 {
            card.award(-10, "May require financial assistance");
        }
    }

    card
}

fn required_percentage(college: &College, course: Option<&Course>, profile: &StudentProfile) -> f64 {
    course
        .and_then(|c| c.threshold_for(profile.category))
        .or_else(|| college.minimum_for(profile.category))
        .unwrap_or(FALLBACK_REQUIRED_PERCENTAGE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::eligibility::colleges::filter_colleges;
    use crate::models::college::Fees;
    use crate::models::profile::Stream;
    use crate::scoring::Priority;
    use crate::test_support::{college, course, profile, sample_colleges};
    use proptest::prelude::*;

    fn reasons(result: &RankedResult<College>) -> Vec<&str> {
        result.reasoning.iter().map(String::as_str).collect()
    }

    #[test]
    fn test_engineering_topper_ranks_iit_high() {
        let mut student = profile(90.0);
        student.stream = Some(Stream::Engineering);

        let ranked = score_colleges(filter_colleges(&sample_colleges(), &student), &student);
        let top = &ranked[0];
        assert!(top.item.name.contains("IIT"));
        // headroom 15 over the CS course (+20), stream (+25), NIRF 2 (+20)
        assert_eq!(top.score, 65);
        assert_eq!(top.priority, Priority::High);
        assert_eq!(
            reasons(top),
            vec![
                "Good academic fit - comfortably meets requirements",
                "Perfect stream match for Engineering",
                "Top-tier institution (NIRF Rank: 2)",
            ]
        );
        for result in ranked.iter().filter(|r| r.priority == Priority::High) {
            assert!(result.score >= 60);
        }
    }

    #[test]
    fn test_fallback_required_percentage_is_fifty() {
        let open = college("Open College", "Kerala", None, None, vec![course(
            "B.A. History",
            Stream::Arts,
            None,
            None,
        )]);
        let ranked = score_colleges(vec![open.clone()], &profile(70.0));
        assert_eq!(ranked[0].score, 30);

        let ranked = score_colleges(vec![open], &profile(49.0));
        assert_eq!(ranked[0].score, 0);
        assert!(ranked[0].reasoning.is_empty());
        assert_eq!(ranked[0].priority, Priority::Low);
    }

    #[test]
    fn test_course_override_beats_college_minimum() {
        let c = college("Override College", "Goa", None, Some(40.0), vec![course(
            "B.Sc Physics",
            Stream::Science,
            Some(75.0),
            None,
        )]);
        // 80 - 75 = 5 headroom, not 80 - 40
        let ranked = score_colleges(vec![c], &profile(80.0));
        assert_eq!(reasons(&ranked[0]), vec!["Meets minimum requirements"]);
    }

    #[test]
    fn test_state_match_is_case_insensitive_equality() {
        let c = college("Pune College", "Maharashtra", None, Some(40.0), vec![course(
            "B.Com",
            Stream::Commerce,
            None,
            None,
        )]);
        let mut student = profile(50.0);
        student.state = Some("maharashtra".into());
        let ranked = score_colleges(vec![c.clone()], &student);
        assert!(reasons(&ranked[0]).contains(&"Matches your preferred state"));

        student.state = Some("Maha".into());
        let ranked = score_colleges(vec![c], &student);
        assert!(!reasons(&ranked[0]).contains(&"Matches your preferred state"));
    }

    #[test]
    fn test_nirf_bands() {
        let build = |nirf| {
            college("Ranked", "Goa", nirf, Some(40.0), vec![course("B.A.", Stream::Arts, None, None)])
        };
        let student = profile(45.0);
        assert_eq!(score_colleges(vec![build(Some(10))], &student)[0].score, 30);
        assert_eq!(score_colleges(vec![build(Some(50))], &student)[0].score, 20);
        assert_eq!(score_colleges(vec![build(Some(51))], &student)[0].score, 10);
        assert_eq!(score_colleges(vec![build(None)], &student)[0].score, 10);
    }

    #[test]
    fn test_affordability_bands() {
        let build = |tuition| {
            college("Fees", "Goa", None, Some(40.0), vec![course("B.A.", Stream::Arts, None, Some(tuition))])
        };
        let mut student = profile(45.0);
        student.family_income = Some(1_000_000);

        let score = |tuition| score_colleges(vec![build(tuition)], &student)[0].score;
        assert_eq!(score(200_000), 25);
        assert_eq!(score(400_000), 20);
        assert_eq!(score(500_000), 10);
        assert_eq!(score(700_000), 0);
    }

    #[test]
    fn test_affordability_sums_all_fee_components() {
        let mut c = college("Fees", "Goa", None, Some(40.0), vec![course("B.A.", Stream::Arts, None, None)]);
        c.courses[0].fees = Some(Fees {
            tuition: Some(100_000),
            hostel: Some(50_000),
            other: Some(60_000),
        });
        let mut student = profile(45.0);
        student.family_income = Some(1_000_000);
        let ranked = score_colleges(vec![c], &student);
        assert!(reasons(&ranked[0]).contains(&"Reasonably affordable"));
    }

    #[test]
    fn test_overflowing_fees_skip_affordability() {
        let mut c = college("Fees", "Goa", None, Some(40.0), vec![course("B.A.", Stream::Arts, None, None)]);
        c.courses[0].fees = Some(Fees {
            tuition: Some(u64::MAX),
            hostel: Some(1),
            other: None,
        });
        let mut student = profile(45.0);
        student.family_income = Some(1_000_000);
        let ranked = score_colleges(vec![c], &student);
        assert_eq!(reasons(&ranked[0]), vec!["Meets minimum requirements"]);
    }

    #[test]
    fn test_college_without_courses_gets_no_headroom_points() {
        let empty = college("Empty College", "Goa", Some(5), Some(40.0), vec![]);
        let ranked = score_colleges(vec![empty.clone()], &profile(70.0));
        assert_eq!(ranked[0].score, 20);
        assert_eq!(reasons(&ranked[0]), vec!["Top-tier institution (NIRF Rank: 5)"]);

        let best = score_colleges_with(vec![empty], &profile(70.0), &BestEligibleCourse);
        assert_eq!(best[0].score, 20);
    }

    #[test]
    fn test_zero_income_skips_affordability() {
        let c = college("Fees", "Goa", None, Some(40.0), vec![course("B.A.", Stream::Arts, None, Some(100_000))]);
        let mut student = profile(45.0);
        student.family_income = Some(0);
        let ranked = score_colleges(vec![c], &student);
        assert_eq!(reasons(&ranked[0]), vec!["Meets minimum requirements"]);
    }

    #[test]
    fn test_best_eligible_course_uses_lowest_threshold() {
        let c = college("Two Courses", "Goa", None, Some(40.0), vec![
            course("Hard", Stream::Science, Some(85.0), None),
            course("Easy", Stream::Science, Some(60.0), None),
        ]);
        let student = profile(86.0);

        let first = score_colleges_with(vec![c.clone()], &student, &FirstCourse);
        assert_eq!(reasons(&first[0]), vec!["Meets minimum requirements"]);

        let best = score_colleges_with(vec![c], &student, CourseSelection::BestEligible.selector());
        assert_eq!(reasons(&best[0]), vec!["Excellent academic match - well above requirements"]);
    }

    #[test]
    fn test_course_selection_parse() {
        assert_eq!(CourseSelection::parse("first"), Some(CourseSelection::First));
        assert_eq!(CourseSelection::parse(" Best "), Some(CourseSelection::BestEligible));
        assert_eq!(CourseSelection::parse("random"), None);
    }

    #[test]
    fn test_scoring_keeps_every_college_field() {
        let catalog = sample_colleges();
        let ranked = score_colleges(catalog.clone(), &profile(99.0));
        assert_eq!(ranked.len(), catalog.len());
        for original in &catalog {
            let found = ranked.iter().find(|r| r.item.id == original.id).unwrap();
            assert_eq!(&found.item, original);
        }
    }

    #[test]
    fn test_scoring_is_idempotent() {
        let mut student = profile(82.0);
        student.family_income = Some(800_000);
        let filtered = filter_colleges(&sample_colleges(), &student);
        assert_eq!(
            score_colleges(filtered.clone(), &student),
            score_colleges(filtered, &student)
        );
    }

    proptest! {
        #[test]
        fn prop_results_sorted_by_score(
            percentage in 0.0f64..=100.0,
            income in proptest::option::of(1u64..5_000_000),
        ) {
            let mut student = profile(percentage);
            student.family_income = income;
            let ranked = score_colleges(filter_colleges(&sample_colleges(), &student), &student);
            for pair in ranked.windows(2) {
                prop_assert!(pair[0].score >= pair[1].score);
            }
        }
    }
}
