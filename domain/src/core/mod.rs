//! Core domain concepts shared across all subdomains.
//!
//! - [`question::Question`]: a validated question for the travel agent
//! - [`error::DomainError`]: domain-level errors

pub mod error;
pub mod question;
