//! Progress notification port
//!
//! Defines the interface for reporting request progress to the user.

/// The user action a backend request was issued for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TravelAction {
    Ask,
    SearchHotels,
    GeneratePlan,
    SendEmail,
}

impl TravelAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            TravelAction::Ask => "ask",
            TravelAction::SearchHotels => "search_hotels",
            TravelAction::GeneratePlan => "generate_plan",
            TravelAction::SendEmail => "send_email",
        }
    }

    /// Human-readable label shown while the request is in flight
    pub fn label(&self) -> &'static str {
        match self {
            TravelAction::Ask => "Asking the travel agent",
            TravelAction::SearchHotels => "Searching hotels",
            TravelAction::GeneratePlan => "Generating tour plan",
            TravelAction::SendEmail => "Sending email",
        }
    }
}

impl std::fmt::Display for TravelAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Callback for progress updates while a request is outstanding
///
/// Implementations live in the presentation layer.
pub trait RequestProgress: Send + Sync {
    /// Called right before the request is sent
    fn on_request_start(&self, action: TravelAction);

    /// Called once the request has finished, successfully or not
    fn on_request_complete(&self, action: TravelAction, success: bool);
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl RequestProgress for NoProgress {
    fn on_request_start(&self, _action: TravelAction) {}
    fn on_request_complete(&self, _action: TravelAction, _success: bool) {}
}
