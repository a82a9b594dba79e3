//! Use cases
//!
//! Application-level operations, one per user action on the travel site.

pub mod ask_question;
pub mod generate_plan;
pub mod search_hotels;
pub mod send_plan_email;
pub(crate) mod shared;

#[cfg(test)]
pub(crate) mod testing;
