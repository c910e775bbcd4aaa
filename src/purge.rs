// ABOUTME: CDN cache purge after a production deploy.
// ABOUTME: Cloudflare client that empties the whole cache for one zone.

use crate::config::{CdnConfig, EnvValue, MissingEnvVar};
use async_trait::async_trait;
use reqwest::{Client, header};
use serde::Serialize;

/// Errors from a cache purge.
#[derive(Debug, thiserror::Error)]
pub enum PurgeError {
    /// Credential or zone not configured. Raised before any request is sent.
    #[error(transparent)]
    MissingEnvVar(#[from] MissingEnvVar),

    /// The API answered with a non-2xx status.
    #[error("purge request returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    /// The request could not be sent or the response could not be read.
    #[error("purge request failed: {0}")]
    Request(#[from] reqwest::Error),
}

impl PurgeError {
    /// HTTP status of a rejected purge, if the API answered.
    pub fn status(&self) -> Option<u16> {
        match self {
            PurgeError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Invalidates everything cached at the CDN edge.
#[async_trait]
pub trait CachePurger: Send + Sync {
    async fn purge(&self) -> Result<(), PurgeError>;
}

#[derive(Serialize)]
struct PurgeRequest {
    purge_everything: bool,
}

/// Cloudflare `purge_cache` client. Credentials are resolved on every call.
#[derive(Debug, Clone)]
pub struct CloudflarePurger {
    api_base: String,
    token: EnvValue,
    zone: EnvValue,
}

impl CloudflarePurger {
    pub fn new(config: &CdnConfig) -> Self {
        Self {
            api_base: config.api_base.trim_end_matches('/').to_string(),
            token: config.token.clone(),
            zone: config.zone.clone(),
        }
    }

    fn purge_url(&self, zone: &str) -> String {
        format!("{}/zones/{}/purge_cache", self.api_base, zone)
    }
}

#[async_trait]
impl CachePurger for CloudflarePurger {
    async fn purge(&self) -> Result<(), PurgeError> {
        let token = self.token.resolve()?;
        let zone = self.zone.resolve()?;

        let url = self.purge_url(&zone);
        tracing::debug!("POST {}", url);

        let client = Client::builder().build()?;
        let response = client
            .post(&url)
            .header(header::AUTHORIZATION, format!("Bearer {}", token))
            .json(&PurgeRequest {
                purge_everything: true,
            })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::error!("Cache purge failed: {} - {}", status, body);
            return Err(PurgeError::Status {
                status: status.as_u16(),
                body,
            });
        }

        tracing::info!("Cache purged for zone {} ({})", zone, status);
        Ok(())
    }
}
