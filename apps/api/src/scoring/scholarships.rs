//! Scholarship scoring.

use crate::models::audience::admits_any;
use crate::models::profile::StudentProfile;
use crate::models::scholarship::{Provider, Scholarship};
use crate::scoring::{rank, RankedResult, ScoreCard};

pub fn score_scholarships(
    scholarships: Vec<Scholarship>,
    profile: &StudentProfile,
) -> Vec<RankedResult<Scholarship>> {
    let scored = scholarships
        .into_iter()
        .map(|scholarship| {
            let card = score_scholarship(&scholarship, profile);
            card.finish(scholarship)
        })
        .collect();
    rank(scored)
}

fn score_scholarship(scholarship: &Scholarship, profile: &StudentProfile) -> ScoreCard {
    let mut card = ScoreCard::default();
    let criteria = &scholarship.eligibility_criteria;

    let minimum = criteria.academic_percentage.minimum.unwrap_or(0.0);
    let buffer = profile.percentage - minimum;
    if buffer >= 20.0 {
        card.award(25, "Excellent academic match - high success probability");
    } else if buffer >= 10.0 {
        card.award(15, "Good academic fit");
    } else if buffer >= 0.0 {
        card.award(10, "Meets minimum requirements");
    }

    let amount = scholarship.amount.value;
    if amount >= 75_000 {
        card.award(20, "High-value scholarship");
    } else if amount >= 40_000 {
        card.award(15, "Good financial support");
    } else if amount >= 20_000 {
        card.award(10, "Moderate financial assistance");
    }

    if admits_any(&criteria.category, &profile.category) {
        card.award(15, format!("Perfect category match for {}", profile.category));
    }

    if let (Some(income), Some(cap)) = (profile.family_income, criteria.family_income.maximum) {
        if income <= cap {
            card.award(20, "Income criteria satisfied");
        } else {
            card.award(-30, "Income exceeds eligibility limit");
        }
    }

    if let Some(stream) = profile.stream {
        if admits_any(&criteria.stream, &stream) {
            card.award(10, "Stream requirements met");
        }
    }

    match scholarship.provider {
        Provider::Government => card.award(10, "Government-backed reliability"),
        Provider::Corporate => card.award(5, "Corporate scholarship with additional benefits"),
        _ => {}
    }

    card
}
