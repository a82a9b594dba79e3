//! Travel request and response value objects.
//!
//! These mirror the four forms of the travel site (search bar, hotel
//! booking, tour planner, email) and enforce the same presence checks the
//! forms did before anything is sent.

pub mod answer;
pub mod email;
pub mod hotel;
pub mod plan;

pub use answer::RawAnswer;
pub use email::EmailRequest;
pub use hotel::{Hotel, HotelQuery};
pub use plan::TourPlanRequest;

/// True when a form field would count as "not filled in"
pub(crate) fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}
