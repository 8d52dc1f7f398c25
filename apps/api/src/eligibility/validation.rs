use thiserror::Error;

use crate::errors::AppError;
use crate::models::profile::{ProfileRequest, StudentProfile};

#[derive(Debug, Error, PartialEq)]
pub enum ProfileError {
    #[error("Percentage is required")]
    MissingPercentage,

    #[error("Percentage must be between 0 and 100, got {0}")]
    PercentageOutOfRange(f64),
}

impl From<ProfileError> for AppError {
    fn from(err: ProfileError) -> Self {
        AppError::Validation(err.to_string())
    }
}

/// Validates a raw request into a `StudentProfile`.
///
/// The filters and scorers assume a present, in-range percentage; callers
/// must go through here first.
pub fn validate_profile(request: ProfileRequest) -> Result<StudentProfile, ProfileError> {
    let percentage = request.percentage.ok_or(ProfileError::MissingPercentage)?;
    if !percentage.is_finite() || !(0.0..=100.0).contains(&percentage) {
        return Err(ProfileError::PercentageOutOfRange(percentage));
    }

    let state = request
        .state
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty());

    Ok(StudentProfile {
        percentage,
        stream: request.stream,
        category: request.category.unwrap_or_default(),
        education_level: request.education_level.unwrap_or_default(),
        state,
        family_income: request.family_income,
        age: request.age,
        gender: request.gender.unwrap_or_default(),
    })
}
