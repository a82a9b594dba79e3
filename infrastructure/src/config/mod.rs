//! Configuration file loading for dekho-pakistan
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `DEKHO_*` environment variables (`DEKHO_BACKEND__BASE_URL`, ...)
//! 2. `--config <path>` specified file
//! 3. Project root: `./dekho.toml` or `./.dekho.toml`
//! 4. Global config: `$XDG_CONFIG_HOME/dekho-pakistan/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, DEFAULT_BASE_URL, FileBackendConfig, FileConfig, FileOutputConfig,
    FileReplConfig,
};
pub use loader::ConfigLoader;
