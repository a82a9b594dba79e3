//! Test doubles shared by the use case tests.

use crate::ports::progress::{RequestProgress, TravelAction};
use crate::ports::travel_gateway::{GatewayError, TravelGateway};
use async_trait::async_trait;
use dekho_domain::{EmailRequest, Hotel, HotelQuery, Question, RawAnswer, TourPlanRequest};
use std::sync::Mutex;

/// Canned failure the scripted gateway can return
#[derive(Debug, Clone)]
pub(crate) enum Failure {
    Timeout,
    Rejected(u16, String),
    Status(u16),
}

impl Failure {
    fn to_error(&self) -> GatewayError {
        match self {
            Failure::Timeout => GatewayError::Timeout,
            Failure::Rejected(status, message) => GatewayError::Rejected {
                status: *status,
                message: message.clone(),
            },
            Failure::Status(status) => GatewayError::HttpStatus {
                status: *status,
                body: String::new(),
            },
        }
    }
}

/// Gateway returning scripted responses and recording every call
#[derive(Default)]
pub(crate) struct ScriptedGateway {
    pub answer: String,
    pub hotels: Vec<Hotel>,
    pub email_message: String,
    pub failure: Option<Failure>,
    pub calls: Mutex<Vec<String>>,
    pub last_email: Mutex<Option<EmailRequest>>,
}

impl ScriptedGateway {
    pub fn answering(answer: &str) -> Self {
        Self {
            answer: answer.to_string(),
            ..Default::default()
        }
    }

    pub fn failing(failure: Failure) -> Self {
        Self {
            failure: Some(failure),
            ..Default::default()
        }
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: &str) -> Result<(), GatewayError> {
        self.calls.lock().unwrap().push(call.to_string());
        match &self.failure {
            Some(failure) => Err(failure.to_error()),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl TravelGateway for ScriptedGateway {
    async fn ask(&self, _question: &Question) -> Result<RawAnswer, GatewayError> {
        self.record("ask")?;
        Ok(RawAnswer::new(self.answer.clone()))
    }

    async fn search_hotels(&self, _query: &HotelQuery) -> Result<Vec<Hotel>, GatewayError> {
        self.record("search_hotels")?;
        Ok(self.hotels.clone())
    }

    async fn generate_plan(&self, _request: &TourPlanRequest) -> Result<RawAnswer, GatewayError> {
        self.record("generate_plan")?;
        Ok(RawAnswer::new(self.answer.clone()))
    }

    async fn send_email(&self, request: &EmailRequest) -> Result<String, GatewayError> {
        self.record("send_email")?;
        *self.last_email.lock().unwrap() = Some(request.clone());
        Ok(self.email_message.clone())
    }
}

/// Progress notifier that records events as strings
#[derive(Default)]
pub(crate) struct RecordingProgress {
    pub events: Mutex<Vec<String>>,
}

impl RecordingProgress {
    pub fn events(&self) -> Vec<String> {
        self.events.lock().unwrap().clone()
    }
}

impl RequestProgress for RecordingProgress {
    fn on_request_start(&self, action: TravelAction) {
        self.events.lock().unwrap().push(format!("start:{}", action));
    }

    fn on_request_complete(&self, action: TravelAction, success: bool) {
        self.events
            .lock()
            .unwrap()
            .push(format!("done:{}:{}", action, success));
    }
}
