//! Send Plan Email use case
//!
//! Mails a previously generated plan fragment to the user.

use super::shared::tracked;
use crate::ports::progress::{NoProgress, RequestProgress, TravelAction};
use crate::ports::travel_gateway::{GatewayError, TravelGateway};
use dekho_domain::{DomainError, EmailRequest, FormattedFragment};
use serde::Serialize;
use std::sync::Arc;
use thiserror::Error;

/// Fallback message when the backend could not be reached or understood
pub const EMAIL_FAILED_MESSAGE: &str = "Error Sending Email";

/// Errors that can occur while sending the plan email
#[derive(Error, Debug)]
pub enum SendPlanEmailError {
    #[error("{0}")]
    InvalidInput(#[from] DomainError),

    /// The backend answered with an error and its own message
    #[error("{0}")]
    Rejected(String),

    #[error("Error Sending Email")]
    Failed(#[source] GatewayError),
}

impl From<GatewayError> for SendPlanEmailError {
    fn from(error: GatewayError) -> Self {
        match error {
            GatewayError::Rejected { message, .. } => SendPlanEmailError::Rejected(message),
            other => SendPlanEmailError::Failed(other),
        }
    }
}

/// Backend confirmation for a sent email
#[derive(Debug, Clone, Serialize)]
pub struct EmailOutput {
    pub email: String,
    pub message: String,
}

/// Use case for emailing a plan
pub struct SendPlanEmailUseCase<G: TravelGateway + 'static> {
    gateway: Arc<G>,
}

impl<G: TravelGateway + 'static> SendPlanEmailUseCase<G> {
    pub fn new(gateway: Arc<G>) -> Self {
        Self { gateway }
    }

    /// Execute the use case with default (no-op) progress
    pub async fn execute(
        &self,
        email: &str,
        plan: &FormattedFragment,
    ) -> Result<EmailOutput, SendPlanEmailError> {
        self.execute_with_progress(email, plan, &NoProgress).await
    }

    /// Execute the use case with progress callbacks
    pub async fn execute_with_progress(
        &self,
        email: &str,
        plan: &FormattedFragment,
        progress: &dyn RequestProgress,
    ) -> Result<EmailOutput, SendPlanEmailError> {
        let request = EmailRequest::try_new(email, plan.clone())?;

        let message = tracked(
            progress,
            TravelAction::SendEmail,
            self.gateway.send_email(&request),
        )
        .await?;

        Ok(EmailOutput {
            email: request.email,
            message,
        })
    }
}
