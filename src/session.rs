// src/session.rs
//! One viewer session: owns the state snapshot and drives loads and exports.
//!
//! All shared mutable state of the system lives here, behind one lock: the
//! current snapshot with its document and the chrome visibility flags the
//! exporter toggles. Loads run as spawned tasks; their results pass through
//! the token-gated reducer so the last selection wins regardless of arrival
//! order.

use crate::config::ViewerConfig;
use crate::error::Result;
use crate::export::PdfExporter;
use crate::loader::DocumentLoader;
use crate::render::{self, RenderedView};
use crate::state::{AppEvent, AppState, TokenSource};
use crate::utils::normalize_language;
use std::sync::{Arc, RwLock};
use tracing::warn;

pub struct ViewerSession {
    state: RwLock<AppState>,
    loader: DocumentLoader,
    exporter: PdfExporter,
    tokens: TokenSource,
    languages: Vec<String>,
}

impl ViewerSession {
    pub fn new(config: ViewerConfig) -> Result<Self> {
        let loader = DocumentLoader::new(config.source.clone())?;
        let exporter = PdfExporter::new(config.workspace_root).with_options(config.export);

        Ok(Self {
            state: RwLock::new(AppState::new(&config.initial_language)),
            loader,
            exporter,
            tokens: TokenSource::default(),
            languages: config.languages,
        })
    }

    pub fn languages(&self) -> &[String] {
        &self.languages
    }

    /// Apply one event to the session state.
    pub fn apply(&self, event: AppEvent) {
        self.state
            .write()
            .expect("viewer state lock poisoned")
            .apply(event);
    }

    /// Clone the current snapshot.
    pub fn snapshot(&self) -> AppState {
        self.state
            .read()
            .expect("viewer state lock poisoned")
            .clone()
    }

    /// Select a language and drive its load to completion. The previous
    /// document is discarded immediately; the fresh result is applied only
    /// if no later selection superseded this one in the meantime.
    pub async fn select_language(&self, lang: &str) {
        let lang = normalize_language(lang);
        let token = self.tokens.next();
        self.apply(AppEvent::LanguageChanged {
            lang: lang.clone(),
            token,
        });

        match self.loader.load(&lang).await {
            Ok(document) => self.apply(AppEvent::DocumentLoaded {
                token,
                document: Box::new(document),
            }),
            Err(e) => {
                warn!("Load failed for '{}': {}", lang, e);
                self.apply(AppEvent::LoadFailed { token });
            }
        }
    }

    /// Fire-and-forget variant for the interactive path: the load runs as a
    /// spawned task and reports back through the reducer.
    pub fn select_language_detached(self: &Arc<Self>, lang: &str) {
        let session = Arc::clone(self);
        let lang = lang.to_string();
        tokio::spawn(async move {
            session.select_language(&lang).await;
        });
    }

    pub fn toggle_theme(&self) {
        self.apply(AppEvent::ThemeToggled);
    }

    /// Render the current snapshot.
    pub fn render(&self) -> RenderedView {
        let state = self.state.read().expect("viewer state lock poisoned");
        render::render(&state)
    }

    /// Export the currently rendered view. The write lock is held for the
    /// duration, so overlapping export requests run one at a time and the
    /// chrome override cannot interleave with other state transitions.
    pub fn export(&self) -> Result<(Vec<u8>, String)> {
        let mut state = self.state.write().expect("viewer state lock poisoned");
        self.exporter.export(&mut state)
    }
}
