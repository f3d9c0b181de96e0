use std::time::Duration;

/// 探測目標：伺服器位址、健康檢查路徑與逾時
#[derive(Debug, Clone, PartialEq)]
pub struct ProbeTarget {
    pub base_url: String,
    pub health_path: String,
    pub timeout: Duration,
}

impl ProbeTarget {
    pub fn new(base_url: impl Into<String>, health_path: impl Into<String>, timeout: Duration) -> Self {
        Self {
            base_url: base_url.into(),
            health_path: health_path.into(),
            timeout,
        }
    }

    /// Joins base URL and health path with exactly one `/` between them.
    pub fn health_url(&self) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            self.health_path.trim_start_matches('/')
        )
    }
}

/// Result of a single health probe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeOutcome {
    /// Server answered 200.
    Healthy,
    /// Server answered, but not with 200.
    Unhealthy { status: u16 },
    /// No TCP connection could be established.
    Unreachable,
    /// Anything else: timeouts, protocol errors, malformed responses.
    Error { message: String },
}

impl ProbeOutcome {
    pub fn is_healthy(&self) -> bool {
        matches!(self, ProbeOutcome::Healthy)
    }

    pub fn kind(&self) -> &'static str {
        match self {
            ProbeOutcome::Healthy => "healthy",
            ProbeOutcome::Unhealthy { .. } => "unhealthy",
            ProbeOutcome::Unreachable => "unreachable",
            ProbeOutcome::Error { .. } => "error",
        }
    }
}
