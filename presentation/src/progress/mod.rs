//! Progress reporters for in-flight backend requests

pub mod reporter;
