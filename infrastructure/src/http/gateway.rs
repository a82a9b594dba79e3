//! reqwest-backed implementation of the TravelGateway port

use super::error::{HttpGatewayError, Result};
use super::wire::{AnswerBody, HotelsBody, MessageBody, QuestionBody};
use async_trait::async_trait;
use dekho_application::{GatewayError, TravelGateway};
use dekho_domain::{EmailRequest, Hotel, HotelQuery, Question, RawAnswer, TourPlanRequest};
use reqwest::Url;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, trace};

const ASK_PATH: &str = "gemini_search";
const HOTELS_PATH: &str = "search";
const PLAN_PATH: &str = "execute_generateplan";
const EMAIL_PATH: &str = "send_email";

const USER_AGENT: &str = concat!("dekho-pakistan/", env!("CARGO_PKG_VERSION"));

/// Largest error body kept in a [`GatewayError::HttpStatus`]
const MAX_ERROR_BODY: usize = 2 * 1024;

/// Gateway to the travel backend over HTTP
///
/// Every call is a single JSON `POST`; there are no retries. The optional
/// timeout covers the whole request, including reading the body.
#[derive(Debug, Clone)]
pub struct HttpTravelGateway {
    client: reqwest::Client,
    base_url: Url,
}

impl HttpTravelGateway {
    /// Create a gateway without a request timeout
    pub fn new(base_url: &str) -> Result<Self> {
        Self::with_timeout(base_url, None)
    }

    /// Create a gateway with an optional per-request timeout
    pub fn with_timeout(base_url: &str, timeout: Option<Duration>) -> Result<Self> {
        let base_url = parse_base_url(base_url)?;

        let mut builder = reqwest::Client::builder().user_agent(USER_AGENT);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            base_url,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> std::result::Result<Url, GatewayError> {
        self.base_url
            .join(path)
            .map_err(|e| GatewayError::Other(format!("Invalid endpoint '{}': {}", path, e)))
    }

    /// POST a JSON body and decode a JSON reply
    ///
    /// Non-success replies become [`GatewayError::Rejected`] when the body
    /// carries a `message`, otherwise [`GatewayError::HttpStatus`].
    async fn post_json<B, R>(&self, path: &str, body: &B) -> std::result::Result<R, GatewayError>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let url = self.endpoint(path)?;
        debug!("POST {}", url);

        let response = self
            .client
            .post(url)
            .json(body)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        trace!("{} responded {}", path, status);

        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(error_for_status(status.as_u16(), &text));
        }

        response.json::<R>().await.map_err(map_reqwest_error)
    }
}

fn parse_base_url(raw: &str) -> Result<Url> {
    let invalid = |reason: String| HttpGatewayError::InvalidBaseUrl {
        url: raw.to_string(),
        reason,
    };

    // Endpoints are joined relative to the base, so it must end in '/'
    let normalized = if raw.ends_with('/') {
        raw.to_string()
    } else {
        format!("{}/", raw)
    };

    let url = Url::parse(&normalized).map_err(|e| invalid(e.to_string()))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(invalid(format!("unsupported scheme '{}'", other))),
    }
}

fn error_for_status(status: u16, body: &str) -> GatewayError {
    if let Ok(MessageBody {
        message: Some(message),
    }) = serde_json::from_str::<MessageBody>(body)
    {
        return GatewayError::Rejected { status, message };
    }

    let mut end = body.len().min(MAX_ERROR_BODY);
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    GatewayError::HttpStatus {
        status,
        body: body[..end].to_string(),
    }
}

fn map_reqwest_error(error: reqwest::Error) -> GatewayError {
    if error.is_timeout() {
        GatewayError::Timeout
    } else if error.is_connect() {
        GatewayError::ConnectionError(error.to_string())
    } else if error.is_decode() {
        GatewayError::DecodeError(error.to_string())
    } else {
        GatewayError::Other(error.to_string())
    }
}

#[async_trait]
impl TravelGateway for HttpTravelGateway {
    async fn ask(&self, question: &Question) -> std::result::Result<RawAnswer, GatewayError> {
        let body = QuestionBody {
            question: question.content(),
        };
        let reply: AnswerBody = self.post_json(ASK_PATH, &body).await?;
        Ok(reply.into_answer())
    }

    async fn search_hotels(
        &self,
        query: &HotelQuery,
    ) -> std::result::Result<Vec<Hotel>, GatewayError> {
        let reply: HotelsBody = self.post_json(HOTELS_PATH, query).await?;
        Ok(reply.hotel_names)
    }

    async fn generate_plan(
        &self,
        request: &TourPlanRequest,
    ) -> std::result::Result<RawAnswer, GatewayError> {
        let reply: AnswerBody = self.post_json(PLAN_PATH, request).await?;
        Ok(reply.into_answer())
    }

    async fn send_email(&self, request: &EmailRequest) -> std::result::Result<String, GatewayError> {
        let reply: MessageBody = self.post_json(EMAIL_PATH, request).await?;
        Ok(reply.message.unwrap_or_default())
    }
}
