// src/publish.rs
//! Publish pipeline: per-language YAML CV sources become the localized JSON
//! documents the viewer loads.
//!
//! Non-base languages are parsed as overrides over the base-language source
//! (deep merge, id-matched lists), validated, combined with the shared UI
//! translations and written out sanitized: PII fields are dropped and the
//! email address is obfuscated so the public document is less scrapable.

use crate::error::{Error, Result};
use crate::loader;
use crate::merge::deep_merge;
use crate::types::cv_data::{CvDocument, SectionLabels};
use crate::validator;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

pub const BASE_LANGUAGE: &str = "en";

pub struct Publisher {
    data_dir: PathBuf,
    public_dir: PathBuf,
    languages: Vec<String>,
}

impl Publisher {
    pub fn new(data_dir: PathBuf, public_dir: PathBuf, languages: Vec<String>) -> Self {
        Self {
            data_dir,
            public_dir,
            languages,
        }
    }

    pub fn source_path(&self, lang: &str) -> PathBuf {
        self.data_dir.join(format!("cv_{}.yml", lang))
    }

    async fn parse_source(&self, path: &Path) -> Result<serde_json::Value> {
        let content = tokio::fs::read_to_string(path).await?;
        Ok(serde_yaml::from_str(&content)?)
    }

    /// Parse a language source. Non-base languages only carry overrides and
    /// are merged over the base-language source.
    async fn parse_with_base(&self, lang: &str) -> Result<serde_json::Value> {
        let source = self.parse_source(&self.source_path(lang)).await?;
        if lang == BASE_LANGUAGE {
            return Ok(source);
        }

        let base = self.parse_source(&self.source_path(BASE_LANGUAGE)).await?;
        Ok(deep_merge(base, source))
    }

    async fn load_translations(&self) -> Result<HashMap<String, SectionLabels>> {
        let path = self.data_dir.join("ui_translations.yml");
        let content = tokio::fs::read_to_string(&path).await?;
        Ok(serde_yaml::from_str(&content)?)
    }

    /// Build the publishable document for one language: merge, validate,
    /// attach translations, sanitize.
    pub async fn build_document(&self, lang: &str) -> Result<CvDocument> {
        let merged = self.parse_with_base(lang).await?;
        let mut document: CvDocument = serde_json::from_value(merged).map_err(|e| {
            Error::Validation(format!("cv_{}.yml does not match the CV schema: {}", lang, e))
        })?;
        document.translations = self.load_translations().await?;

        let report = validator::check_document(&document, &self.languages);
        for warning in &report.warnings {
            warn!("{}: {}", lang, warning);
        }
        if !report.is_ok() {
            return Err(Error::Validation(format!(
                "cv_{}.yml: {}",
                lang,
                report.errors.join("; ")
            )));
        }

        sanitize_public(&mut document);
        Ok(document)
    }

    /// Publish every configured language. Returns the files written; a
    /// missing source file skips its language rather than failing the run.
    pub async fn publish(&self) -> Result<Vec<PathBuf>> {
        tokio::fs::create_dir_all(&self.public_dir).await?;

        let mut written = Vec::new();
        for lang in &self.languages {
            let source = self.source_path(lang);
            if !source.exists() {
                warn!("Skipping {}: {} not found", lang, source.display());
                continue;
            }

            let document = self.build_document(lang).await?;
            let json = serde_json::to_string_pretty(&document)? + "\n";
            let target = self.public_dir.join(loader::resource_name(lang));
            tokio::fs::write(&target, json).await?;

            info!("Published {}", target.display());
            written.push(target);
        }

        Ok(written)
    }
}

/// Strip PII from the public document and obfuscate the email address.
pub fn sanitize_public(document: &mut CvDocument) {
    document.personal.phone = None;
    document.personal.birth_date = None;
    if let Some(email) = document.personal.email.take() {
        document.personal.email = Some(obfuscate_email(&email));
    }
}

/// Obfuscate an email: each part around the `@` is reversed, base64-encoded,
/// and the encoding reversed again. Values without an `@` pass through.
pub fn obfuscate_email(email: &str) -> String {
    match email.split_once('@') {
        Some((user, domain)) => format!("{}@{}", obfuscate_part(user), obfuscate_part(domain)),
        None => email.to_string(),
    }
}

fn obfuscate_part(part: &str) -> String {
    let reversed: String = part.chars().rev().collect();
    BASE64.encode(reversed.as_bytes()).chars().rev().collect()
}
