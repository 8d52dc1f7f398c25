//! Builders and fixtures shared by unit tests.

use std::sync::Arc;

use uuid::Uuid;

use crate::catalog::memory::InMemoryCatalog;
use crate::config::Config;
use crate::models::audience::Audience;
use crate::models::college::{
    CategoryThresholds, College, CollegeEligibility, CollegeType, Course, Fees, Location, Ranking,
};
use crate::models::profile::{Gender, Stream, StudentProfile};
use crate::models::scholarship::{
    Amount, AmountKind, Provider, Scholarship, ScholarshipEligibility, ScholarshipType,
};
use crate::narrative::rule_based::RuleBasedComposer;
use crate::state::AppState;

pub const SAMPLE_CATALOG: &str = include_str!("../data/catalog.json");

pub fn sample_catalog() -> InMemoryCatalog {
    InMemoryCatalog::from_json(SAMPLE_CATALOG).unwrap()
}

pub fn sample_colleges() -> Vec<College> {
    sample_catalog().college_records().to_vec()
}

pub fn sample_scholarships() -> Vec<Scholarship> {
    sample_catalog().scholarship_records().to_vec()
}

/// Sample catalog in memory, rule-based narrative, default policy.
pub fn test_state() -> AppState {
    let config = Config::from_vars(|key| match key {
        "CATALOG_PATH" => Some("data/catalog.json".to_string()),
        _ => None,
    })
    .unwrap();

    AppState {
        catalog: Arc::new(sample_catalog()),
        composer: Arc::new(RuleBasedComposer),
        config,
    }
}

pub fn profile(percentage: f64) -> StudentProfile {
    StudentProfile::with_percentage(percentage)
}

pub fn course(name: &str, stream: Stream, general: Option<f64>, tuition: Option<u64>) -> Course {
    Course {
        name: name.to_string(),
        stream: Some(stream),
        eligibility_percentage: general.map(|g| CategoryThresholds {
            general: Some(g),
            ..CategoryThresholds::default()
        }),
        fees: tuition.map(|t| Fees {
            tuition: Some(t),
            hostel: None,
            other: None,
        }),
        duration: None,
        seats: None,
    }
}

pub fn college(
    name: &str,
    state: &str,
    nirf: Option<u32>,
    min_general: Option<f64>,
    courses: Vec<Course>,
) -> College {
    College {
        id: Uuid::new_v4(),
        name: name.to_string(),
        location: Location {
            city: String::new(),
            state: state.to_string(),
            pincode: None,
        },
        college_type: CollegeType::Private,
        courses,
        eligibility_criteria: CollegeEligibility {
            minimum_percentage: CategoryThresholds {
                general: min_general,
                ..CategoryThresholds::default()
            },
            ..CollegeEligibility::default()
        },
        contact_info: Default::default(),
        ranking: Ranking { nirf, other: None },
        accreditation: None,
        established: None,
    }
}

/// An open, active, Private-provider scholarship: every audience list is
/// `[All]`, no state restriction, no income or age bounds.
pub fn scholarship(name: &str, minimum: f64, amount: u64) -> Scholarship {
    let mut eligibility = ScholarshipEligibility {
        category: vec![Audience::All],
        stream: vec![Audience::All],
        education_level: vec![Audience::All],
        gender: Gender::All,
        ..ScholarshipEligibility::default()
    };
    eligibility.academic_percentage.minimum = Some(minimum);

    Scholarship {
        id: Uuid::new_v4(),
        name: name.to_string(),
        provider: Provider::Private,
        scholarship_type: ScholarshipType::MeritBased,
        amount: Amount {
            value: amount,
            currency: "INR".to_string(),
            kind: AmountKind::Annual,
        },
        eligibility_criteria: eligibility,
        application_details: Default::default(),
        benefits: Default::default(),
        is_active: true,
        is_recurring: true,
        tags: Vec::new(),
    }
}
