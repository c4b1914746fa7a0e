use async_trait::async_trait;
use reqwest::redirect::Policy;
use std::error::Error as StdError;
use std::time::Duration;

use crate::config::Config;
use crate::core::constants::{defaults, error_messages, http_status};
use crate::core::error::Result;

/// Status and reason text produced by one probe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeOutcome {
    pub status: u16,
    pub reason: String,
}

impl ProbeOutcome {
    pub fn response(status: u16, reason: impl Into<String>) -> Self {
        Self {
            status,
            reason: reason.into(),
        }
    }

    pub fn transport_failure(reason: impl Into<String>) -> Self {
        let reason = reason.into();
        Self {
            status: http_status::TRANSPORT_FAILURE,
            reason: if reason.is_empty() {
                error_messages::UNKNOWN_ERROR.to_string()
            } else {
                reason
            },
        }
    }
}

/// Anything that can turn a URL into a [`ProbeOutcome`].
///
/// Implementations must not fail: transport errors are reported through
/// a status of 0 and the error text as the reason.
#[async_trait]
pub trait Probe: Send + Sync {
    async fn probe(&self, url: &str) -> ProbeOutcome;
}

/// GET prober backed by a shared reqwest client.
#[derive(Debug, Clone)]
pub struct HttpProber {
    client: reqwest::Client,
}

impl HttpProber {
    /// Build a prober from configuration: timeout, user agent and TLS settings.
    pub fn from_config(config: &Config) -> Result<Self> {
        let user_agent = config.user_agent.as_deref().unwrap_or(concat!(
            env!("CARGO_PKG_NAME"),
            "/",
            env!("CARGO_PKG_VERSION")
        ));

        let mut client_builder = reqwest::Client::builder()
            .timeout(config.timeout_duration())
            .redirect(Policy::limited(defaults::MAX_REDIRECTS))
            .user_agent(user_agent)
            .pool_max_idle_per_host(config.worker_count().min(20))
            .pool_idle_timeout(Duration::from_secs(30));

        if config.skip_ssl_verification.unwrap_or(false) {
            client_builder = client_builder.danger_accept_invalid_certs(true);
        }

        Ok(Self {
            client: client_builder.build()?,
        })
    }

    /// Build a prober with a specific timeout and defaults for everything else.
    pub fn with_timeout(timeout: Duration) -> Result<Self> {
        let config = Config {
            timeout: Some(timeout.as_secs().max(1)),
            ..Default::default()
        };
        Self::from_config(&config)
    }
}

#[async_trait]
impl Probe for HttpProber {
    async fn probe(&self, url: &str) -> ProbeOutcome {
        match self.client.get(url).send().await {
            Ok(response) => {
                let status = response.status();
                ProbeOutcome::response(
                    status.as_u16(),
                    status
                        .canonical_reason()
                        .unwrap_or(error_messages::UNKNOWN_REASON),
                )
            }
            Err(err) => ProbeOutcome::transport_failure(describe_error(&err)),
        }
    }
}

/// Render an error together with its source chain.
fn describe_error(err: &reqwest::Error) -> String {
    let mut description = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let cause_text = cause.to_string();
        if !cause_text.is_empty() && !description.contains(&cause_text) {
            description.push_str(": ");
            description.push_str(&cause_text);
        }
        source = cause.source();
    }
    description
}
