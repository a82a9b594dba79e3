//! Markup formatting for backend answers.
//!
//! The travel backend answers in plain text that uses a lightweight emphasis
//! convention (`**strong**` and bare `*` bullets). This module turns that
//! text into HTML fragments ready to be dropped into a page, and renders the
//! hotel search results the same way the site does.
//!
//! - [`formatter::MarkupFormatter`]: emphasis markers to markup
//! - [`fragment::FormattedFragment`]: the formatted output
//! - [`escape::EscapePolicy`]: optional HTML escaping of untrusted text
//! - [`hotels`]: hotel card and review rendering

pub mod escape;
pub mod formatter;
pub mod fragment;
pub mod hotels;

pub use escape::{EscapePolicy, escape_html};
pub use formatter::{MarkupFormatter, MarkupStyle, wrap_plan};
pub use fragment::FormattedFragment;
pub use hotels::{render_hotel_cards, render_reviews};
