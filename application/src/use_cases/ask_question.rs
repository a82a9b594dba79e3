//! Ask Question use case
//!
//! Sends a free-text question to the AI travel agent and formats the answer
//! for the search popup.

use super::shared::tracked;
use crate::config::BehaviorConfig;
use crate::ports::progress::{NoProgress, RequestProgress, TravelAction};
use crate::ports::travel_gateway::{GatewayError, TravelGateway};
use dekho_domain::{DomainError, FormattedFragment, MarkupFormatter, Question, RawAnswer};
use serde::Serialize;
use std::sync::Arc;
use thiserror::Error;
use tracing::debug;

/// Errors that can occur while asking a question
#[derive(Error, Debug)]
pub enum AskQuestionError {
    #[error("{0}")]
    InvalidInput(#[from] DomainError),

    #[error("Gateway error: {0}")]
    GatewayError(#[from] GatewayError),
}

/// Result of a travel-agent question
#[derive(Debug, Clone, Serialize)]
pub struct AnswerOutput {
    pub question: String,
    pub raw: RawAnswer,
    pub fragment: FormattedFragment,
}

/// Use case for asking the travel agent a question
pub struct AskQuestionUseCase<G: TravelGateway + 'static> {
    gateway: Arc<G>,
    config: BehaviorConfig,
}

impl<G: TravelGateway + 'static> AskQuestionUseCase<G> {
    pub fn new(gateway: Arc<G>) -> Self {
        Self {
            gateway,
            config: BehaviorConfig::default(),
        }
    }

    pub fn with_config(mut self, config: BehaviorConfig) -> Self {
        self.config = config;
        self
    }

    /// Execute the use case with default (no-op) progress
    pub async fn execute(&self, question: &str) -> Result<AnswerOutput, AskQuestionError> {
        self.execute_with_progress(question, &NoProgress).await
    }

    /// Execute the use case with progress callbacks
    pub async fn execute_with_progress(
        &self,
        question: &str,
        progress: &dyn RequestProgress,
    ) -> Result<AnswerOutput, AskQuestionError> {
        let question = Question::try_new(question)?;
        debug!("Search value: {}", question);

        let raw = tracked(progress, TravelAction::Ask, self.gateway.ask(&question)).await?;

        let fragment = MarkupFormatter::search()
            .with_policy(self.config.escape_policy)
            .format(raw.as_str());

        Ok(AnswerOutput {
            question: question.into_content(),
            raw,
            fragment,
        })
    }
}
