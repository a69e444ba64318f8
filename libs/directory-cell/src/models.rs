use serde::{Deserialize, Serialize};

use shared_models::error::AppError;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Specialist {
    pub id: String,
    pub name: String,
    pub specialty: String,
    pub photo: String,
    pub available: bool,
}

/// Either every specialty or one exact specialty name.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SpecialtyFilter {
    #[default]
    All,
    Only(String),
}

impl SpecialtyFilter {
    pub const ALL: &'static str = "all";

    /// `None`, an empty string and the `all` sentinel all mean no filter.
    pub fn parse(raw: Option<&str>) -> Self {
        match raw {
            None | Some("") | Some(Self::ALL) => SpecialtyFilter::All,
            Some(specialty) => SpecialtyFilter::Only(specialty.to_string()),
        }
    }

    pub fn matches(&self, specialty: &str) -> bool {
        match self {
            SpecialtyFilter::All => true,
            SpecialtyFilter::Only(wanted) => wanted == specialty,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SpecialistSearchQuery {
    pub q: Option<String>,
    pub specialty: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DirectoryError {
    #[error("Specialist not found: {0}")]
    SpecialistNotFound(String),
}

impl From<DirectoryError> for AppError {
    fn from(err: DirectoryError) -> Self {
        match err {
            DirectoryError::SpecialistNotFound(_) => AppError::NotFound(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_parse() {
        assert_eq!(SpecialtyFilter::parse(None), SpecialtyFilter::All);
        assert_eq!(SpecialtyFilter::parse(Some("")), SpecialtyFilter::All);
        assert_eq!(SpecialtyFilter::parse(Some("all")), SpecialtyFilter::All);
        assert_eq!(
            SpecialtyFilter::parse(Some("Neurología")),
            SpecialtyFilter::Only("Neurología".to_string())
        );
    }

    #[test]
    fn test_filter_is_exact() {
        let filter = SpecialtyFilter::Only("Neurología".to_string());
        assert!(filter.matches("Neurología"));
        assert!(!filter.matches("neurología"));
        assert!(!filter.matches("Neuro"));
        assert!(SpecialtyFilter::All.matches("anything"));
    }
}
