#![allow(dead_code)]

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::profile::{Category, Stream};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CollegeType {
    Government,
    Private,
    Deemed,
    Central,
    State,
}

impl CollegeType {
    /// Wire name, as stored in catalog documents.
    pub fn as_str(&self) -> &'static str {
        match self {
            CollegeType::Government => "Government",
            CollegeType::Private => "Private",
            CollegeType::Deemed => "Deemed",
            CollegeType::Central => "Central",
            CollegeType::State => "State",
        }
    }

    /// Display label used in rendered recommendations.
    pub fn badge(&self) -> &'static str {
        match self {
            CollegeType::Central => "Central University",
            CollegeType::State => "State University",
            CollegeType::Private => "Private Institution",
            CollegeType::Deemed => "Deemed University",
            CollegeType::Government => "Government College",
        }
    }
}

/// Per-category percentage thresholds keyed by lower-cased category name.
/// A missing key means the category is unconstrained.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CategoryThresholds {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub general: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub obc: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sc: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub st: Option<f64>,
}

impl CategoryThresholds {
    pub fn get(&self, category: Category) -> Option<f64> {
        match category.threshold_key() {
            "general" => self.general,
            "obc" => self.obc,
            "sc" => self.sc,
            "st" => self.st,
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Fees {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tuition: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hostel: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub other: Option<u64>,
}

impl Fees {
    /// Tuition plus hostel and other charges. `None` when tuition is unknown
    /// or the sum does not fit in a `u64`.
    pub fn annual_total(&self) -> Option<u64> {
        self.tuition?
            .checked_add(self.hostel.unwrap_or(0))?
            .checked_add(self.other.unwrap_or(0))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub stream: Option<Stream>,
    /// Course-specific override of the college minimum. `None` defers to the college.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub eligibility_percentage: Option<CategoryThresholds>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fees: Option<Fees>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seats: Option<u32>,
}

impl Course {
    pub fn threshold_for(&self, category: Category) -> Option<f64> {
        self.eligibility_percentage
            .as_ref()
            .and_then(|t| t.get(category))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Location {
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub state: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pincode: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollegeEligibility {
    #[serde(default)]
    pub minimum_percentage: CategoryThresholds,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entrance_exam: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age_limit: Option<u32>,
    #[serde(default)]
    pub stream: Vec<Stream>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContactInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Ranking {
    /// National rank; lower is more prestigious.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nirf: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub other: Option<String>,
}

/// A college record from the catalog. Read-only from the engine's point of view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct College {
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
    pub name: String,
    #[serde(default)]
    pub location: Location,
    #[serde(rename = "type")]
    pub college_type: CollegeType,
    #[serde(default)]
    pub courses: Vec<Course>,
    #[serde(default)]
    pub eligibility_criteria: CollegeEligibility,
    #[serde(default)]
    pub contact_info: ContactInfo,
    #[serde(default)]
    pub ranking: Ranking,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accreditation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub established: Option<u16>,
}

impl College {
    pub fn minimum_for(&self, category: Category) -> Option<f64> {
        self.eligibility_criteria.minimum_percentage.get(category)
    }
}
