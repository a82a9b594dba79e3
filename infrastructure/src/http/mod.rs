//! HTTP adapter for the travel backend
//!
//! [`HttpTravelGateway`](gateway::HttpTravelGateway) implements the
//! [`TravelGateway`](dekho_application::TravelGateway) port by POSTing JSON
//! to the backend's four endpoints:
//!
//! | Endpoint | Request | Response |
//! |----------|---------|----------|
//! | `/gemini_search` | `{question}` | `{answer}` |
//! | `/search` | `{city, ratings}` | `{hotel_names: [{name, img, review}]}` |
//! | `/execute_generateplan` | `{people, interests, budget, days}` | `{answer}` |
//! | `/send_email` | `{email, formatted_text}` | `{message}` |

pub mod error;
pub mod gateway;
mod wire;
