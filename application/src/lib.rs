//! Application layer for dekho-pakistan
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::BehaviorConfig;
pub use ports::{
    progress::{NoProgress, RequestProgress, TravelAction},
    travel_gateway::{GatewayError, TravelGateway},
};
pub use use_cases::ask_question::{AnswerOutput, AskQuestionError, AskQuestionUseCase};
pub use use_cases::generate_plan::{
    GeneratePlanError, GeneratePlanInput, GeneratePlanUseCase, PlanOutput,
};
pub use use_cases::search_hotels::{HotelsOutput, SearchHotelsError, SearchHotelsUseCase};
pub use use_cases::send_plan_email::{
    EMAIL_FAILED_MESSAGE, EmailOutput, SendPlanEmailError, SendPlanEmailUseCase,
};
