// src/loader.rs
//! Document loader: retrieves the localized CV document for a language code.
//!
//! The resource is addressed by convention as `cv_<lang>.json` under a base
//! URL or local directory. Every failure class collapses into
//! [`Error::LoadFailure`]; a partial document is never surfaced.

use crate::error::{Error, Result};
use crate::types::cv_data::CvDocument;
use std::path::PathBuf;
use std::time::Duration;
use tracing::{debug, warn};

const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Where localized documents are fetched from.
#[derive(Debug, Clone)]
pub enum DocumentSource {
    /// `GET <base>/cv_<lang>.json`.
    Remote(String),
    /// `<dir>/cv_<lang>.json` on the local filesystem.
    Local(PathBuf),
}

/// Conventional resource name for a language code.
pub fn resource_name(lang: &str) -> String {
    format!("cv_{}.json", lang)
}

pub struct DocumentLoader {
    source: DocumentSource,
    client: reqwest::Client,
}

impl DocumentLoader {
    pub fn new(source: DocumentSource) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()
            .map_err(|e| Error::LoadFailure {
                reason: format!("failed to build HTTP client: {}", e),
            })?;

        Ok(Self { source, client })
    }

    pub fn source(&self) -> &DocumentSource {
        &self.source
    }

    /// Load the document for a language code. Idempotent and safe to repeat;
    /// the language code is passed through to the resource lookup unchanged.
    pub async fn load(&self, lang: &str) -> Result<CvDocument> {
        let body = match &self.source {
            DocumentSource::Remote(base) => self.fetch_remote(base, lang).await?,
            DocumentSource::Local(dir) => self.read_local(dir, lang).await?,
        };

        match serde_json::from_str(&body) {
            Ok(document) => Ok(document),
            Err(e) => {
                warn!("Malformed CV document for '{}': {}", lang, e);
                Err(Error::LoadFailure {
                    reason: format!("malformed document for '{}': {}", lang, e),
                })
            }
        }
    }

    async fn fetch_remote(&self, base: &str, lang: &str) -> Result<String> {
        let url = format!("{}/{}", base.trim_end_matches('/'), resource_name(lang));
        debug!("Fetching CV document: {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| Error::LoadFailure {
                reason: format!("request to {} failed: {}", url, e),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::LoadFailure {
                reason: format!("unexpected status {} for {}", status, url),
            });
        }

        response.text().await.map_err(|e| Error::LoadFailure {
            reason: format!("failed to read body from {}: {}", url, e),
        })
    }

    async fn read_local(&self, dir: &PathBuf, lang: &str) -> Result<String> {
        let path = dir.join(resource_name(lang));
        debug!("Reading CV document: {}", path.display());

        tokio::fs::read_to_string(&path)
            .await
            .map_err(|e| Error::LoadFailure {
                reason: format!("failed to read {}: {}", path.display(), e),
            })
    }
}
