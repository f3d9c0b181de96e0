use crate::core::{ConfigProvider, ProbeOutcome, ProbeTarget, Prober};
use crate::utils::error::Result;
use reqwest::redirect::Policy;
use reqwest::{Client, StatusCode};
use std::error::Error as StdError;
use std::time::Instant;

pub struct HttpProber {
    target: ProbeTarget,
    client: Client,
}

impl HttpProber {
    pub fn new(target: ProbeTarget) -> Result<Self> {
        // 本機探測不走系統代理，也不跟隨重新導向：3xx 直接視為非 200 狀態
        let client = Client::builder()
            .connect_timeout(target.timeout)
            .timeout(target.timeout)
            .no_proxy()
            .redirect(Policy::none())
            .build()?;

        Ok(Self { target, client })
    }

    pub fn from_config<C: ConfigProvider>(config: &C) -> Result<Self> {
        Self::new(config.target())
    }
}

#[async_trait::async_trait]
impl Prober for HttpProber {
    fn target(&self) -> &ProbeTarget {
        &self.target
    }

    async fn probe(&self) -> ProbeOutcome {
        let url = self.target.health_url();
        tracing::debug!("Probing {} (timeout {:?})", url, self.target.timeout);

        let started = Instant::now();
        match self.client.get(&url).send().await {
            Ok(response) => {
                let status = response.status();
                tracing::debug!(
                    "Health response status: {} after {:?}",
                    status,
                    started.elapsed()
                );

                // 不讀取回應內容
                if status == StatusCode::OK {
                    ProbeOutcome::Healthy
                } else {
                    ProbeOutcome::Unhealthy {
                        status: status.as_u16(),
                    }
                }
            }
            Err(e) => {
                let outcome = classify_error(&e);
                tracing::debug!(
                    "Health request failed after {:?} (connect: {}, timeout: {}, kind: {})",
                    started.elapsed(),
                    e.is_connect(),
                    e.is_timeout(),
                    outcome.kind()
                );
                outcome
            }
        }
    }
}

/// A refused connection means nothing is listening. A connect timeout is
/// reported as a plain error, like any other transport failure.
fn classify_error(err: &reqwest::Error) -> ProbeOutcome {
    if err.is_connect() && !err.is_timeout() {
        ProbeOutcome::Unreachable
    } else {
        ProbeOutcome::Error {
            message: describe_error(err),
        }
    }
}

/// Display text of the error followed by its source chain, joined with ": ".
pub(crate) fn describe_error(err: &(dyn StdError + 'static)) -> String {
    let mut message = err.to_string();
    let mut source = err.source();

    while let Some(cause) = source {
        let text = cause.to_string();
        // hyper 與 reqwest 有時會重複同一段訊息
        if !message.ends_with(&text) {
            message.push_str(": ");
            message.push_str(&text);
        }
        source = cause.source();
    }

    message
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fmt;

    #[derive(Debug)]
    struct Layer {
        text: &'static str,
        inner: Option<Box<Layer>>,
    }

    impl fmt::Display for Layer {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str(self.text)
        }
    }

    impl StdError for Layer {
        fn source(&self) -> Option<&(dyn StdError + 'static)> {
            self.inner.as_deref().map(|e| e as &(dyn StdError + 'static))
        }
    }

    #[test]
    fn test_describe_error_walks_source_chain() {
        let err = Layer {
            text: "error sending request",
            inner: Some(Box::new(Layer {
                text: "connection closed before message completed",
                inner: None,
            })),
        };

        assert_eq!(
            describe_error(&err),
            "error sending request: connection closed before message completed"
        );
    }

    #[test]
    fn test_describe_error_skips_repeated_cause() {
        let err = Layer {
            text: "operation timed out",
            inner: Some(Box::new(Layer {
                text: "operation timed out",
                inner: None,
            })),
        };

        assert_eq!(describe_error(&err), "operation timed out");
    }
}
