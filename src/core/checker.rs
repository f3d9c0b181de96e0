use crate::core::report::write_report;
use crate::core::{ProbeOutcome, Prober};
use std::io::{self, Write};

pub struct HealthChecker<P: Prober> {
    prober: P,
}

impl<P: Prober> HealthChecker<P> {
    pub fn new(prober: P) -> Self {
        Self { prober }
    }

    pub async fn check(&self) -> ProbeOutcome {
        let outcome = self.prober.probe().await;
        let target = self.prober.target();

        match &outcome {
            ProbeOutcome::Healthy => {
                tracing::info!("R server healthy at {}", target.base_url)
            }
            ProbeOutcome::Unhealthy { status } => {
                tracing::warn!("R server at {} returned status {}", target.base_url, status)
            }
            ProbeOutcome::Unreachable => {
                tracing::warn!("Nothing is listening at {}", target.base_url)
            }
            ProbeOutcome::Error { message } => {
                tracing::warn!("Health check against {} failed: {}", target.health_url(), message)
            }
        }

        outcome
    }

    /// Probes once, writes the report to `out`, and returns whether the server is healthy.
    pub async fn run_with_writer<W: Write>(&self, out: &mut W) -> io::Result<bool> {
        let outcome = self.check().await;
        write_report(out, &outcome, &self.prober.target().base_url)?;
        Ok(outcome.is_healthy())
    }

    pub async fn run(&self) -> bool {
        let outcome = self.check().await;
        let stdout = io::stdout();
        let mut handle = stdout.lock();

        if let Err(e) = write_report(&mut handle, &outcome, &self.prober.target().base_url) {
            tracing::error!("Failed to write report to stdout: {}", e);
        }

        outcome.is_healthy()
    }
}
