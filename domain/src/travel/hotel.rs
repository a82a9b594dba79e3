//! Hotel search value objects

use super::is_blank;
use crate::core::error::DomainError;
use serde::{Deserialize, Deserializer, Serialize};

/// Hotel search criteria, as entered in the booking form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HotelQuery {
    pub city: String,
    /// Star rating as entered; the backend compares it numerically
    pub ratings: String,
}

impl HotelQuery {
    /// Build a query, failing if either field is left empty
    pub fn try_new(
        city: impl Into<String>,
        ratings: impl Into<String>,
    ) -> Result<Self, DomainError> {
        let city = city.into();
        let ratings = ratings.into();
        if is_blank(&city) || is_blank(&ratings) {
            return Err(DomainError::IncompleteHotelQuery);
        }
        Ok(Self { city, ratings })
    }
}

/// One hotel in the search results
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Hotel {
    #[serde(deserialize_with = "null_as_empty")]
    pub name: String,
    /// Image URL, also used as the card link target
    #[serde(deserialize_with = "null_as_empty")]
    pub img: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub review: String,
}

/// Scraped listings sometimes carry `null` for a field they could not read
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl Hotel {
    pub fn new(name: impl Into<String>, img: impl Into<String>, review: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            img: img.into(),
            review: review.into(),
        }
    }
}
