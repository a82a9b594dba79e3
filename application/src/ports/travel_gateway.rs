//! Travel Gateway port
//!
//! Defines the interface for talking to the travel assistant backend.

use async_trait::async_trait;
use dekho_domain::{EmailRequest, Hotel, HotelQuery, Question, RawAnswer, TourPlanRequest};
use thiserror::Error;

/// Errors that can occur during gateway operations
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Timeout")]
    Timeout,

    /// Non-success status whose body carried a user-facing `message`
    #[error("{message}")]
    Rejected { status: u16, message: String },

    #[error("HTTP {status}: {body}")]
    HttpStatus { status: u16, body: String },

    #[error("Failed to decode response: {0}")]
    DecodeError(String),

    #[error("Other error: {0}")]
    Other(String),
}

impl GatewayError {
    /// HTTP status code, if the backend answered at all
    pub fn status(&self) -> Option<u16> {
        match self {
            GatewayError::Rejected { status, .. } | GatewayError::HttpStatus { status, .. } => {
                Some(*status)
            }
            _ => None,
        }
    }
}

/// Gateway to the travel assistant backend
///
/// One method per backend endpoint. Each call is a single request with no
/// retry; implementations live in the infrastructure layer.
#[async_trait]
pub trait TravelGateway: Send + Sync {
    /// Ask the AI travel agent a free-text question
    async fn ask(&self, question: &Question) -> Result<RawAnswer, GatewayError>;

    /// Look up hotels by city and star rating
    async fn search_hotels(&self, query: &HotelQuery) -> Result<Vec<Hotel>, GatewayError>;

    /// Generate a day-by-day tour plan
    async fn generate_plan(&self, request: &TourPlanRequest) -> Result<RawAnswer, GatewayError>;

    /// Email a formatted plan; returns the backend's confirmation message
    async fn send_email(&self, request: &EmailRequest) -> Result<String, GatewayError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejected_displays_message_only() {
        let err = GatewayError::Rejected {
            status: 500,
            message: "Failed to create PDF".to_string(),
        };
        assert_eq!(err.to_string(), "Failed to create PDF");
        assert_eq!(err.status(), Some(500));
    }

    #[test]
    fn test_status_absent_for_transport_errors() {
        assert_eq!(GatewayError::Timeout.status(), None);
        assert_eq!(
            GatewayError::ConnectionError("refused".into()).status(),
            None
        );
    }
}
