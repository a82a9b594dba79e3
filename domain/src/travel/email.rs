//! Email request value object

use super::is_blank;
use crate::core::error::DomainError;
use crate::markup::FormattedFragment;
use serde::{Deserialize, Serialize};

/// Request to mail a formatted tour plan to the user
///
/// `formatted_text` is the plan fragment itself, not the page wrapper; the
/// backend adds its own heading and footer before converting it to PDF.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailRequest {
    pub email: String,
    pub formatted_text: FormattedFragment,
}

impl EmailRequest {
    pub fn try_new(
        email: impl Into<String>,
        formatted_text: FormattedFragment,
    ) -> Result<Self, DomainError> {
        let email = email.into();
        if is_blank(&email) {
            return Err(DomainError::EmptyEmail);
        }
        Ok(Self {
            email: email.trim().to_string(),
            formatted_text,
        })
    }
}
