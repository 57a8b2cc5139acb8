use crate::prelude::*;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

const PING_TIMEOUT: Duration = Duration::from_secs(30);

/// Periodic GET against a configured URL
///
/// Keeps hosting platforms that idle quiet processes from putting the server
/// to sleep. The task shares nothing with request handling: failures are
/// logged and otherwise ignored.
#[derive(Debug, Clone)]
pub struct KeepAlive {
    http: reqwest::Client,
    url: String,
    interval: Duration,
}

impl KeepAlive {
    pub fn new(url: impl Into<String>, interval: Duration) -> Result<Self> {
        if interval.is_zero() {
            return Err(eyre!("Keep-alive interval must be greater than zero"));
        }

        let http = reqwest::Client::builder()
            .timeout(PING_TIMEOUT)
            .build()
            .context("Failed to build keep-alive HTTP client")?;

        Ok(Self {
            http,
            url: url.into(),
            interval,
        })
    }

    /// `None` when no URL is configured, which disables the ping entirely
    pub fn from_options(url: Option<String>, interval: Duration) -> Result<Option<Self>> {
        match url {
            Some(url) if !url.trim().is_empty() => Self::new(url, interval).map(Some),
            _ => {
                log::info!("KEEP_ALIVE_URL is not set, keep-alive ping disabled");
                Ok(None)
            }
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Send one ping and report the response status
    pub async fn ping(&self) -> Result<u16, Error> {
        let response = self
            .http
            .get(&self.url)
            .send()
            .await
            .map_err(|e| Error::Network(f!("Keep-alive ping to {} failed: {e}", self.url)))?;

        Ok(response.status().as_u16())
    }

    /// Run the ping on a fixed schedule until the handle is aborted
    ///
    /// The first ping fires one full interval after spawning.
    pub fn spawn(self) -> JoinHandle<()> {
        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(self.interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            ticker.tick().await;

            loop {
                ticker.tick().await;
                match self.ping().await {
                    Ok(status) => log::info!("Keep-alive ping to {} returned {status}", self.url),
                    Err(e) => log::warn!("{e}"),
                }
            }
        })
    }
}
