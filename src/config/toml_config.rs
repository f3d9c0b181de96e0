use crate::utils::error::Result;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::LazyLock;

static ENV_VAR_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\{([^}]+)\}").expect("env var pattern is a valid regex"));

/// Optional file-based settings. Every key may be omitted.
///
/// ```toml
/// [server]
/// base_url = "http://127.0.0.1:8787"
/// health_path = "/health"
/// timeout_seconds = 2.0
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    pub server: Option<ServerConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServerConfig {
    pub base_url: Option<String>,
    pub health_path: Option<String>,
    pub timeout_seconds: Option<f64>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);
        Ok(toml::from_str(&processed_content)?)
    }

    /// 替換環境變數 (例如 ${R_ADDIN_PORT})，未設定的保留原樣
    fn substitute_env_vars(content: &str) -> String {
        ENV_VAR_PATTERN
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }

    pub fn base_url(&self) -> Option<&str> {
        self.server.as_ref()?.base_url.as_deref()
    }

    pub fn health_path(&self) -> Option<&str> {
        self.server.as_ref()?.health_path.as_deref()
    }

    pub fn timeout_seconds(&self) -> Option<f64> {
        self.server.as_ref()?.timeout_seconds
    }
}
