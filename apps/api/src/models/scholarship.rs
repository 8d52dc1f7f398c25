#![allow(dead_code)]

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::audience::Audience;
use crate::models::profile::{Category, EducationLevel, Gender, Stream};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Provider {
    Government,
    Private,
    #[serde(rename = "NGO")]
    Ngo,
    Corporate,
    #[serde(rename = "Educational Institution")]
    EducationalInstitution,
    International,
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Provider::Government => "Government",
            Provider::Private => "Private",
            Provider::Ngo => "NGO",
            Provider::Corporate => "Corporate",
            Provider::EducationalInstitution => "Educational Institution",
            Provider::International => "International",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScholarshipType {
    #[serde(rename = "Merit-based")]
    MeritBased,
    #[serde(rename = "Need-based")]
    NeedBased,
    #[serde(rename = "Category-based")]
    CategoryBased,
    #[serde(alias = "Sports-based")]
    Sports,
    Arts,
    Research,
    Others,
}

impl ScholarshipType {
    /// Display label used in rendered recommendations.
    pub fn label(&self) -> &'static str {
        match self {
            ScholarshipType::MeritBased => "Merit Based",
            ScholarshipType::NeedBased => "Need Based",
            ScholarshipType::CategoryBased => "Category Based",
            ScholarshipType::Sports => "Sports Based",
            ScholarshipType::Arts => "Arts",
            ScholarshipType::Research => "Research",
            ScholarshipType::Others => "Others",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum AmountKind {
    #[serde(rename = "One-time")]
    OneTime,
    #[default]
    Annual,
    Monthly,
    #[serde(rename = "Full-tuition")]
    FullTuition,
    #[serde(rename = "Partial-tuition")]
    PartialTuition,
}

impl AmountKind {
    pub fn label(&self) -> &'static str {
        match self {
            AmountKind::OneTime => "One-time",
            AmountKind::Annual => "Annual",
            AmountKind::Monthly => "Monthly",
            AmountKind::FullTuition => "Full-tuition",
            AmountKind::PartialTuition => "Partial-tuition",
        }
    }
}

fn default_currency() -> String {
    "INR".to_string()
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Amount {
    pub value: u64,
    #[serde(default = "default_currency")]
    pub currency: String,
    #[serde(rename = "type", default)]
    pub kind: AmountKind,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AcademicRange {
    /// Required field in well-formed records; a missing minimum never matches.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minimum: Option<f64>,
    /// Advisory only; the eligibility filter does not enforce it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maximum: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IncomeCap {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maximum: Option<u64>,
    #[serde(default = "default_currency")]
    pub currency: String,
}

impl Default for IncomeCap {
    fn default() -> Self {
        Self {
            maximum: None,
            currency: default_currency(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AgeRange {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minimum: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maximum: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScholarshipEligibility {
    #[serde(default)]
    pub academic_percentage: AcademicRange,
    #[serde(default)]
    pub category: Vec<Audience<Category>>,
    #[serde(default)]
    pub family_income: IncomeCap,
    #[serde(default)]
    pub stream: Vec<Audience<Stream>>,
    #[serde(default)]
    pub education_level: Vec<Audience<EducationLevel>>,
    /// Empty means no state restriction.
    #[serde(default)]
    pub state: Vec<String>,
    #[serde(default)]
    pub age: AgeRange,
    #[serde(default)]
    pub gender: Gender,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ApplicationMode {
    #[default]
    Online,
    Offline,
    Both,
}

/// Display-only metadata; the engine never reads it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationDetails {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub application_mode: ApplicationMode,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(default)]
    pub documents_required: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selection_process: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Benefits {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub additional_benefits: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scholarship {
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
    pub name: String,
    pub provider: Provider,
    #[serde(rename = "type")]
    pub scholarship_type: ScholarshipType,
    pub amount: Amount,
    #[serde(default)]
    pub eligibility_criteria: ScholarshipEligibility,
    #[serde(default)]
    pub application_details: ApplicationDetails,
    #[serde(default)]
    pub benefits: Benefits,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default = "default_true")]
    pub is_recurring: bool,
    #[serde(default)]
    pub tags: Vec<String>,
}
