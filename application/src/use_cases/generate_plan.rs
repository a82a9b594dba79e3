//! Generate Plan use case
//!
//! Requests a tour plan from the backend and formats it for the plan page.

use super::shared::tracked;
use crate::config::BehaviorConfig;
use crate::ports::progress::{NoProgress, RequestProgress, TravelAction};
use crate::ports::travel_gateway::{GatewayError, TravelGateway};
use dekho_domain::{
    DomainError, FormattedFragment, MarkupFormatter, RawAnswer, TourPlanRequest, wrap_plan,
};
use serde::Serialize;
use std::sync::Arc;
use thiserror::Error;
use tracing::debug;

/// Errors that can occur while generating a plan
#[derive(Error, Debug)]
pub enum GeneratePlanError {
    #[error("{0}")]
    InvalidInput(#[from] DomainError),

    #[error("Failed to generate tour plan: {0}")]
    Failed(#[from] GatewayError),
}

/// Planner form values, as entered
#[derive(Debug, Clone, Default)]
pub struct GeneratePlanInput {
    pub people: String,
    pub interests: Vec<String>,
    pub budget: String,
    pub days: String,
}

impl GeneratePlanInput {
    pub fn new(
        people: impl Into<String>,
        budget: impl Into<String>,
        days: impl Into<String>,
    ) -> Self {
        Self {
            people: people.into(),
            interests: Vec::new(),
            budget: budget.into(),
            days: days.into(),
        }
    }

    pub fn with_interest(mut self, interest: impl Into<String>) -> Self {
        self.interests.push(interest.into());
        self
    }

    pub fn with_interests<I, S>(mut self, interests: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.interests.extend(interests.into_iter().map(Into::into));
        self
    }
}

/// A generated plan in raw and formatted form
#[derive(Debug, Clone, Serialize)]
pub struct PlanOutput {
    pub request: TourPlanRequest,
    pub raw: RawAnswer,
    /// Formatted plan body; this is what gets emailed
    pub fragment: FormattedFragment,
    /// The body wrapped in its page container
    pub page: String,
}

/// Use case for generating a tour plan
pub struct GeneratePlanUseCase<G: TravelGateway + 'static> {
    gateway: Arc<G>,
    config: BehaviorConfig,
}

impl<G: TravelGateway + 'static> GeneratePlanUseCase<G> {
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
    pub async fn execute(&self, input: GeneratePlanInput) -> Result<PlanOutput, GeneratePlanError> {
        self.execute_with_progress(input, &NoProgress).await
    }

    /// Execute the use case with progress callbacks
    pub async fn execute_with_progress(
        &self,
        input: GeneratePlanInput,
        progress: &dyn RequestProgress,
    ) -> Result<PlanOutput, GeneratePlanError> {
        let request =
            TourPlanRequest::try_new(input.people, input.interests, input.budget, input.days)?;
        debug!(
            "Planning {} days for {} people, budget {}, interests: {}",
            request.days,
            request.people,
            request.budget,
            request.interests_label()
        );

        let raw = tracked(
            progress,
            TravelAction::GeneratePlan,
            self.gateway.generate_plan(&request),
        )
        .await?;

        let fragment = MarkupFormatter::plan()
            .with_policy(self.config.escape_policy)
            .format(raw.as_str());
        let page = wrap_plan(&fragment);

        Ok(PlanOutput {
            request,
            raw,
            fragment,
            page,
        })
    }
}
