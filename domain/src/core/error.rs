//! Domain error types

use thiserror::Error;

/// Domain-level errors
///
/// The `Display` text of the validation variants is shown to the user as-is,
/// so it mirrors the wording of the travel site's form alerts.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Question cannot be empty")]
    EmptyQuestion,

    #[error("Null entries are not allowed. Please fill in all fields.")]
    IncompleteHotelQuery,

    #[error("Please fill all fields")]
    IncompletePlanRequest,

    #[error("Email address cannot be empty")]
    EmptyEmail,

    #[error("No tour plan has been generated yet")]
    NoPlan,
}

impl DomainError {
    /// Check if this error came from user input validation
    pub fn is_validation(&self) -> bool {
        !matches!(self, DomainError::NoPlan)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hotel_alert_wording() {
        assert_eq!(
            DomainError::IncompleteHotelQuery.to_string(),
            "Null entries are not allowed. Please fill in all fields."
        );
    }

    #[test]
    fn test_plan_alert_wording() {
        assert_eq!(
            DomainError::IncompletePlanRequest.to_string(),
            "Please fill all fields"
        );
    }

    #[test]
    fn test_is_validation() {
        assert!(DomainError::EmptyQuestion.is_validation());
        assert!(DomainError::EmptyEmail.is_validation());
        assert!(!DomainError::NoPlan.is_validation());
    }
}
