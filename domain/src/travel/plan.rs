//! Tour plan request value object

use super::is_blank;
use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// Parameters for a generated tour plan
///
/// Values are kept as entered; the backend interpolates them into its
/// planning prompt ("make a travel plan for {days} days in {budget} pkr ...").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TourPlanRequest {
    pub people: String,
    pub interests: Vec<String>,
    /// Total budget in PKR
    pub budget: String,
    pub days: String,
}

impl TourPlanRequest {
    /// Build a request, failing if any field is empty or no interest is selected
    pub fn try_new(
        people: impl Into<String>,
        interests: Vec<String>,
        budget: impl Into<String>,
        days: impl Into<String>,
    ) -> Result<Self, DomainError> {
        let people = people.into();
        let budget = budget.into();
        let days = days.into();
        let interests: Vec<String> = interests
            .into_iter()
            .filter(|i| !is_blank(i))
            .collect();

        if is_blank(&people) || interests.is_empty() || is_blank(&budget) || is_blank(&days) {
            return Err(DomainError::IncompletePlanRequest);
        }

        Ok(Self {
            people,
            interests,
            budget,
            days,
        })
    }

    /// Interests as a comma-separated list, for display
    pub fn interests_label(&self) -> String {
        self.interests.join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn interests(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_valid_request() {
        let req =
            TourPlanRequest::try_new("2", interests(&["hiking", "food"]), "150000", "5").unwrap();
        assert_eq!(req.interests_label(), "hiking, food");
    }

    #[test]
    fn test_no_interests_rejected() {
        assert_eq!(
            TourPlanRequest::try_new("2", vec![], "150000", "5"),
            Err(DomainError::IncompletePlanRequest)
        );
    }

    #[test]
    fn test_blank_interests_dropped() {
        assert_eq!(
            TourPlanRequest::try_new("2", interests(&["", "  "]), "150000", "5"),
            Err(DomainError::IncompletePlanRequest)
        );
        let req = TourPlanRequest::try_new("2", interests(&["", "culture"]), "9000", "1").unwrap();
        assert_eq!(req.interests, vec!["culture".to_string()]);
    }

    #[test]
    fn test_missing_fields_rejected() {
        for (people, budget, days) in [("", "1", "1"), ("1", "", "1"), ("1", "1", " ")] {
            assert_eq!(
                TourPlanRequest::try_new(people, interests(&["history"]), budget, days),
                Err(DomainError::IncompletePlanRequest)
            );
        }
    }

    #[test]
    fn test_wire_shape() {
        let req = TourPlanRequest::try_new("3", interests(&["lakes"]), "200000", "7").unwrap();
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "people": "3",
                "interests": ["lakes"],
                "budget": "200000",
                "days": "7"
            })
        );
    }
}
