//! Search Hotels use case
//!
//! Looks up hotels for a city and rating and renders the result cards
//! and reviews.

use super::shared::tracked;
use crate::config::BehaviorConfig;
use crate::ports::progress::{NoProgress, RequestProgress, TravelAction};
use crate::ports::travel_gateway::{GatewayError, TravelGateway};
use dekho_domain::{
    DomainError, FormattedFragment, Hotel, HotelQuery, render_hotel_cards, render_reviews,
};
use serde::Serialize;
use std::sync::Arc;
use thiserror::Error;
use tracing::info;

/// Errors that can occur during a hotel search
#[derive(Error, Debug)]
pub enum SearchHotelsError {
    #[error("{0}")]
    InvalidInput(#[from] DomainError),

    #[error("Gateway error: {0}")]
    GatewayError(#[from] GatewayError),
}

/// Hotel search results with their rendered markup
#[derive(Debug, Clone, Serialize)]
pub struct HotelsOutput {
    pub query: HotelQuery,
    pub hotels: Vec<Hotel>,
    pub cards: FormattedFragment,
    pub reviews: FormattedFragment,
}

/// Use case for searching hotels
pub struct SearchHotelsUseCase<G: TravelGateway + 'static> {
    gateway: Arc<G>,
    config: BehaviorConfig,
}

impl<G: TravelGateway + 'static> SearchHotelsUseCase<G> {
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
    pub async fn execute(
        &self,
        city: &str,
        ratings: &str,
    ) -> Result<HotelsOutput, SearchHotelsError> {
        self.execute_with_progress(city, ratings, &NoProgress).await
    }

    /// Execute the use case with progress callbacks
    pub async fn execute_with_progress(
        &self,
        city: &str,
        ratings: &str,
        progress: &dyn RequestProgress,
    ) -> Result<HotelsOutput, SearchHotelsError> {
        let query = HotelQuery::try_new(city, ratings)?;

        let hotels = tracked(
            progress,
            TravelAction::SearchHotels,
            self.gateway.search_hotels(&query),
        )
        .await?;
        info!("Found {} hotels in {}", hotels.len(), query.city);

        let policy = self.config.escape_policy;
        let cards = render_hotel_cards(&hotels, policy);
        let reviews = render_reviews(&hotels, policy);

        Ok(HotelsOutput {
            query,
            hotels,
            cards,
            reviews,
        })
    }
}
