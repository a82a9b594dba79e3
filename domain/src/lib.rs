//! Domain layer for dekho-pakistan
//!
//! This crate contains the markup formatter and the travel value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Markup Formatter
//!
//! The travel backend answers in plain text using an emphasis convention:
//!
//! - `**text**` marks a heading or highlight
//! - a bare `*` starts a bullet line
//!
//! [`MarkupFormatter`] turns such a [`RawAnswer`] into a [`FormattedFragment`]
//! that can be injected straight into a page. Formatting is a pure function
//! of the input.
//!
//! ## Travel requests
//!
//! [`Question`], [`HotelQuery`], [`TourPlanRequest`] and [`EmailRequest`]
//! carry the form presence checks; constructing one means it is fit to send.

pub mod config;
pub mod core;
pub mod markup;
pub mod travel;

// Re-export commonly used types
pub use config::OutputFormat;
pub use core::{error::DomainError, question::Question};
pub use markup::{
    EscapePolicy, FormattedFragment, MarkupFormatter, MarkupStyle, escape_html,
    render_hotel_cards, render_reviews, wrap_plan,
};
pub use travel::{EmailRequest, Hotel, HotelQuery, RawAnswer, TourPlanRequest};
