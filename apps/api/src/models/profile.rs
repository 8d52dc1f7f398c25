#![allow(dead_code)]

use std::fmt;

use serde::{Deserialize, Serialize};

/// Reservation category. Only general/obc/sc/st carry percentage thresholds in
/// college catalogs; the rest see every threshold as unconstrained.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[default]
    General,
    #[serde(rename = "OBC")]
    Obc,
    #[serde(rename = "SC")]
    Sc,
    #[serde(rename = "ST")]
    St,
    #[serde(rename = "EWS")]
    Ews,
    Minority,
    Disabled,
    #[serde(rename = "Girl Child")]
    GirlChild,
}

impl Category {
    /// Lower-cased key used by `minimumPercentage` / `eligibilityPercentage` maps.
    pub fn threshold_key(&self) -> &'static str {
        match self {
            Category::General => "general",
            Category::Obc => "obc",
            Category::Sc => "sc",
            Category::St => "st",
            Category::Ews => "ews",
            Category::Minority => "minority",
            Category::Disabled => "disabled",
            Category::GirlChild => "girl child",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::General => "General",
            Category::Obc => "OBC",
            Category::Sc => "SC",
            Category::St => "ST",
            Category::Ews => "EWS",
            Category::Minority => "Minority",
            Category::Disabled => "Disabled",
            Category::GirlChild => "Girl Child",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Stream {
    Science,
    Commerce,
    Arts,
    Engineering,
    Medical,
    Law,
    Management,
    Others,
}

impl Stream {
    pub fn as_str(&self) -> &'static str {
        match self {
            Stream::Science => "Science",
            Stream::Commerce => "Commerce",
            Stream::Arts => "Arts",
            Stream::Engineering => "Engineering",
            Stream::Medical => "Medical",
            Stream::Law => "Law",
            Stream::Management => "Management",
            Stream::Others => "Others",
        }
    }
}

impl fmt::Display for Stream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EducationLevel {
    #[serde(rename = "10th")]
    Tenth,
    #[default]
    #[serde(rename = "12th")]
    Twelfth,
    Undergraduate,
    Postgraduate,
    Doctorate,
    Diploma,
}

impl EducationLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            EducationLevel::Tenth => "10th",
            EducationLevel::Twelfth => "12th",
            EducationLevel::Undergraduate => "Undergraduate",
            EducationLevel::Postgraduate => "Postgraduate",
            EducationLevel::Doctorate => "Doctorate",
            EducationLevel::Diploma => "Diploma",
        }
    }
}

impl fmt::Display for EducationLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
    #[default]
    All,
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
            Gender::All => "All",
        })
    }
}

/// A validated student profile. Lives for one request; never persisted.
///
/// Build it through `eligibility::validation::validate_profile` so that the
/// percentage is guaranteed to be present and within 0 to 100.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentProfile {
    pub percentage: f64,
    pub stream: Option<Stream>,
    pub category: Category,
    pub education_level: EducationLevel,
    pub state: Option<String>,
    pub family_income: Option<u64>,
    pub age: Option<u32>,
    pub gender: Gender,
}

impl StudentProfile {
    /// Profile with every optional field absent and every enum at its default.
    pub fn with_percentage(percentage: f64) -> Self {
        Self {
            percentage,
            stream: None,
            category: Category::default(),
            education_level: EducationLevel::default(),
            state: None,
            family_income: None,
            age: None,
            gender: Gender::default(),
        }
    }
}

/// Raw profile as received over the wire, before validation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileRequest {
    pub percentage: Option<f64>,
    pub stream: Option<Stream>,
    pub category: Option<Category>,
    pub education_level: Option<EducationLevel>,
    pub state: Option<String>,
    pub family_income: Option<u64>,
    pub age: Option<u32>,
    pub gender: Option<Gender>,
}
