// libs/sanction-cell/src/models.rs
use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use shared_models::error::AppError;

// ==============================================================================
// CORE SANCTION MODELS
// ==============================================================================

/// A disciplinary record against a patient, identified by name only.
///
/// `patient_id` is synthetic and does not point at any user account.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Sanction {
    pub id: String,
    pub patient_id: String,
    pub patient_name: String,
    pub reason: String,
    pub date: NaiveDate,
    #[serde(rename = "type")]
    pub sanction_type: SanctionType,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum SanctionType {
    #[default]
    Warning,
    Suspension,
}

impl SanctionType {
    pub fn label(&self) -> &'static str {
        match self {
            SanctionType::Warning => "Advertencia",
            SanctionType::Suspension => "Suspensión",
        }
    }
}

impl fmt::Display for SanctionType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SanctionType::Warning => write!(f, "warning"),
            SanctionType::Suspension => write!(f, "suspension"),
        }
    }
}

impl FromStr for SanctionType {
    type Err = SanctionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "warning" => Ok(SanctionType::Warning),
            "suspension" => Ok(SanctionType::Suspension),
            other => Err(SanctionError::InvalidType(other.to_string())),
        }
    }
}

// ==============================================================================
// REQUEST MODELS
// ==============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddSanctionRequest {
    #[serde(default)]
    pub patient_name: String,
    #[serde(default)]
    pub reason: String,
    #[serde(rename = "type")]
    pub sanction_type: Option<String>,
}

impl AddSanctionRequest {
    /// An absent or empty type falls back to a warning.
    pub fn parsed_type(&self) -> Result<Option<SanctionType>, SanctionError> {
        match self.sanction_type.as_deref() {
            None | Some("") => Ok(None),
            Some(raw) => raw.parse().map(Some),
        }
    }
}

// ==============================================================================
// ERROR TYPES
// ==============================================================================

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SanctionError {
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Invalid sanction type: {0}")]
    InvalidType(String),
}

impl From<SanctionError> for AppError {
    fn from(err: SanctionError) -> Self {
        match err {
            SanctionError::ValidationError(msg) => AppError::ValidationError(msg),
            SanctionError::InvalidType(_) => AppError::ValidationError(err.to_string()),
        }
    }
}
