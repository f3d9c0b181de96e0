pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::config::{toml_config::TomlConfig, ProbeConfig};
pub use crate::core::{checker::HealthChecker, prober::HttpProber};
pub use crate::domain::model::{ProbeOutcome, ProbeTarget};
pub use crate::utils::error::{ProbeError, Result};
