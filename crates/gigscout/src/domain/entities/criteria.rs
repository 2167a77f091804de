//! SearchCriteria - What the user is looking for

use serde::{Deserialize, Serialize};

use crate::domain::errors::DomainError;

/// Warning shown when either input is missing
pub const MISSING_INPUT_WARNING: &str = "Please enter both skills and interests to search.";

/// Validated user input for one search action
///
/// Both fields are kept verbatim; validation only rejects empty or
/// whitespace-only input.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SearchCriteria {
    skills: String,
    interest: String,
}

impl SearchCriteria {
    pub fn new(skills: impl Into<String>, interest: impl Into<String>) -> Result<Self, DomainError> {
        let skills = skills.into();
        let interest = interest.into();

        if skills.trim().is_empty() || interest.trim().is_empty() {
            return Err(DomainError::Validation(MISSING_INPUT_WARNING.to_string()));
        }

        Ok(Self { skills, interest })
    }

    pub fn skills(&self) -> &str {
        &self.skills
    }

    pub fn interest(&self) -> &str {
        &self.interest
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_empty_skills() {
        let err = SearchCriteria::new("", "Data Science").unwrap_err();
        assert_eq!(err, DomainError::Validation(MISSING_INPUT_WARNING.to_string()));
    }

    #[test]
    fn test_rejects_blank_interest() {
        assert!(SearchCriteria::new("Python", "   ").is_err());
    }

    #[test]
    fn test_keeps_input_verbatim() {
        let criteria = SearchCriteria::new(" Python, SQL ", "Data Science").unwrap();
        assert_eq!(criteria.skills(), " Python, SQL ");
        assert_eq!(criteria.interest(), "Data Science");
    }
}
