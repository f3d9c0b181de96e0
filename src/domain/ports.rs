use crate::domain::model::{ProbeOutcome, ProbeTarget};
use async_trait::async_trait;
use std::time::Duration;

pub trait ConfigProvider: Send + Sync {
    fn base_url(&self) -> &str;
    fn health_path(&self) -> &str;
    fn timeout(&self) -> Duration;

    fn target(&self) -> ProbeTarget {
        ProbeTarget::new(self.base_url(), self.health_path(), self.timeout())
    }
}

/// A single-shot health probe. Transport failures are folded into the
/// returned outcome rather than surfaced as errors.
#[async_trait]
pub trait Prober: Send + Sync {
    fn target(&self) -> &ProbeTarget;
    async fn probe(&self) -> ProbeOutcome;
}
