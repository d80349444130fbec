// src/config.rs
use crate::export::ExportOptions;
use crate::loader::DocumentSource;
use std::path::PathBuf;

/// Languages the selector offers.
pub const SUPPORTED_LANGUAGES: [&str; 3] = ["en", "fr", "it"];

pub const DEFAULT_LANGUAGE: &str = "en";

/// Configuration for one viewer session.
pub struct ViewerConfig {
    pub source: DocumentSource,
    pub initial_language: String,
    pub languages: Vec<String>,
    pub workspace_root: PathBuf,
    pub export: ExportOptions,
}

impl ViewerConfig {
    pub fn new(source: DocumentSource) -> Self {
        Self {
            source,
            initial_language: DEFAULT_LANGUAGE.to_string(),
            languages: SUPPORTED_LANGUAGES.iter().map(|l| l.to_string()).collect(),
            workspace_root: PathBuf::from("out"),
            export: ExportOptions::default(),
        }
    }

    pub fn with_initial_language(mut self, lang: &str) -> Self {
        self.initial_language = lang.to_string();
        self
    }

    pub fn with_languages(mut self, languages: Vec<String>) -> Self {
        self.languages = languages;
        self
    }

    pub fn with_workspace_root(mut self, dir: PathBuf) -> Self {
        self.workspace_root = dir;
        self
    }

    pub fn with_export_options(mut self, export: ExportOptions) -> Self {
        self.export = export;
        self
    }
}
