//! Shared utilities for use cases.
//!
//! Wraps a single gateway call with progress callbacks and logging.

use crate::ports::progress::{RequestProgress, TravelAction};
use crate::ports::travel_gateway::GatewayError;
use std::future::Future;
use std::time::Instant;
use tracing::{debug, info, warn};

/// Run one backend request, reporting start and completion.
pub(crate) async fn tracked<T, F>(
    progress: &dyn RequestProgress,
    action: TravelAction,
    request: F,
) -> Result<T, GatewayError>
where
    F: Future<Output = Result<T, GatewayError>>,
{
    progress.on_request_start(action);
    debug!("{} request sent", action);
    let started = Instant::now();

    let result = request.await;
    let elapsed_ms = started.elapsed().as_millis();

    match &result {
        Ok(_) => info!("{} completed in {}ms", action, elapsed_ms),
        Err(e) => warn!("{} failed after {}ms: {}", action, elapsed_ms, e),
    }

    progress.on_request_complete(action, result.is_ok());
    result
}
