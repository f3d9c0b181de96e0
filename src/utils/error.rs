use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProbeError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("HTTP client error: {0}")]
    HttpClientError(#[from] reqwest::Error),

    #[error("Invalid value for '{field}': '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl ProbeError {
    pub fn user_friendly_message(&self) -> String {
        match self {
            ProbeError::IoError(e) => format!("Could not read configuration file: {}", e),
            ProbeError::TomlError(e) => format!("Configuration file is not valid TOML: {}", e),
            ProbeError::HttpClientError(e) => format!("Could not set up the HTTP client: {}", e),
            ProbeError::InvalidConfigValueError { field, reason, .. } => {
                format!("Invalid setting '{}': {}", field, reason)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            ProbeError::IoError(_) => "Check that the --config path exists and is readable",
            ProbeError::TomlError(_) => "Fix the TOML syntax in the configuration file",
            ProbeError::HttpClientError(_) => "Check the TLS setup of this machine and try again",
            ProbeError::InvalidConfigValueError { .. } => {
                "Use an http(s) base URL, a health path starting with '/', and a timeout between 0.001 and 300 seconds"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, ProbeError>;
