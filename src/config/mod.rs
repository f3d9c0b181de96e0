pub mod toml_config;

use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use std::time::Duration;
use toml_config::TomlConfig;

#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use std::path::PathBuf;

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8787";
pub const DEFAULT_HEALTH_PATH: &str = "/health";
pub const DEFAULT_TIMEOUT_SECONDS: f64 = 2.0;

const MIN_TIMEOUT_SECONDS: f64 = 0.001;
const MAX_TIMEOUT_SECONDS: f64 = 300.0;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Default, Parser)]
#[command(name = "r-addin-probe", version)]
#[command(about = "Check whether the RStudio addin server is running and reachable")]
pub struct CliConfig {
    /// Base URL of the addin server [default: http://127.0.0.1:8787]
    #[arg(long)]
    pub base_url: Option<String>,

    /// Health check path [default: /health]
    #[arg(long)]
    pub health_path: Option<String>,

    /// Connection and response timeout in seconds [default: 2.0]
    #[arg(long)]
    pub timeout: Option<f64>,

    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Write logs to stderr as JSON lines")]
    pub log_json: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// 依序套用：預設值 -> 設定檔 -> 命令列參數
    pub fn resolve(&self) -> Result<ProbeConfig> {
        let mut config = ProbeConfig::default();

        if let Some(path) = &self.config {
            let file = TomlConfig::from_file(path)?;
            config = config.merge_file(&file);
        }

        if let Some(base_url) = &self.base_url {
            config.base_url = base_url.clone();
        }
        if let Some(health_path) = &self.health_path {
            config.health_path = health_path.clone();
        }
        if let Some(timeout) = self.timeout {
            config.timeout_seconds = timeout;
        }

        Ok(config)
    }
}

/// Fully resolved probe settings.
#[derive(Debug, Clone, PartialEq)]
pub struct ProbeConfig {
    pub base_url: String,
    pub health_path: String,
    pub timeout_seconds: f64,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            health_path: DEFAULT_HEALTH_PATH.to_string(),
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
        }
    }
}

impl ProbeConfig {
    pub fn merge_file(mut self, file: &TomlConfig) -> Self {
        if let Some(base_url) = file.base_url() {
            self.base_url = base_url.to_string();
        }
        if let Some(health_path) = file.health_path() {
            self.health_path = health_path.to_string();
        }
        if let Some(timeout) = file.timeout_seconds() {
            self.timeout_seconds = timeout;
        }
        self
    }
}

impl ConfigProvider for ProbeConfig {
    fn base_url(&self) -> &str {
        &self.base_url
    }

    fn health_path(&self) -> &str {
        &self.health_path
    }

    fn timeout(&self) -> Duration {
        // 未驗證的數值 (NaN、負數) 回退到預設逾時
        Duration::try_from_secs_f64(self.timeout_seconds)
            .unwrap_or_else(|_| Duration::from_secs_f64(DEFAULT_TIMEOUT_SECONDS))
    }
}

impl Validate for ProbeConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_url("base_url", &self.base_url)?;
        validation::validate_health_path("health_path", &self.health_path)?;
        validation::validate_range(
            "timeout",
            self.timeout_seconds,
            MIN_TIMEOUT_SECONDS,
            MAX_TIMEOUT_SECONDS,
        )?;
        Ok(())
    }
}
