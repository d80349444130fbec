// src/state.rs
//! Viewer state machine.
//!
//! The viewer holds an explicit state snapshot advanced by discrete events
//! rather than ad hoc mutation. Load results carry the token issued when
//! their language selection happened; the reducer only applies a result
//! whose token is still the latest one, so a stale in-flight response can
//! never overwrite a newer selection.

use crate::types::cv_data::{CvDocument, SectionLabels};
use std::sync::atomic::{AtomicU64, Ordering};

/// Token identifying one load request. Monotonically increasing per session.
pub type LoadToken = u64;

/// Issues load tokens.
#[derive(Debug, Default)]
pub struct TokenSource(AtomicU64);

impl TokenSource {
    pub fn next(&self) -> LoadToken {
        self.0.fetch_add(1, Ordering::SeqCst) + 1
    }
}

/// Cosmetic appearance toggle; carried through to a CSS class on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

/// Whether the currently selected document is available.
#[derive(Debug, Clone, Default)]
pub enum DocumentState {
    /// A load is (conceptually) in flight; nothing has failed yet.
    #[default]
    Loading,
    /// The most recent load for the current language failed.
    Failed,
    /// The document for the current language.
    Ready(Box<CvDocument>),
}

/// Visibility of the interactive chrome. Both regions are hidden for the
/// duration of an export and restored afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChromeVisibility {
    pub nav: bool,
    pub header_actions: bool,
}

impl Default for ChromeVisibility {
    fn default() -> Self {
        Self {
            nav: true,
            header_actions: true,
        }
    }
}

impl ChromeVisibility {
    pub const HIDDEN: Self = Self {
        nav: false,
        header_actions: false,
    };
}

/// Discrete state transitions.
#[derive(Debug)]
pub enum AppEvent {
    LanguageChanged { lang: String, token: LoadToken },
    DocumentLoaded { token: LoadToken, document: Box<CvDocument> },
    LoadFailed { token: LoadToken },
    ThemeToggled,
}

/// One immutable snapshot of the viewer. Cloned out for rendering; mutated
/// only through [`apply`](AppState::apply).
#[derive(Debug, Clone)]
pub struct AppState {
    pub language: String,
    pub document: DocumentState,
    pub theme: Theme,
    pub chrome: ChromeVisibility,
    token: LoadToken,
}

/// The three mutually exclusive render states, derived from a snapshot.
#[derive(Debug)]
pub enum RenderStatus<'a> {
    Loading,
    LoadFailed,
    TranslationMissing { lang: &'a str },
    Ready {
        document: &'a CvDocument,
        labels: &'a SectionLabels,
    },
}

impl AppState {
    pub fn new(language: &str) -> Self {
        Self {
            language: language.to_string(),
            document: DocumentState::Loading,
            theme: Theme::default(),
            chrome: ChromeVisibility::default(),
            token: 0,
        }
    }

    /// Token of the latest accepted language selection.
    pub fn current_token(&self) -> LoadToken {
        self.token
    }

    pub fn apply(&mut self, event: AppEvent) {
        match event {
            AppEvent::LanguageChanged { lang, token } => {
                if token < self.token {
                    return;
                }
                self.language = lang;
                self.document = DocumentState::Loading;
                self.token = token;
            }
            AppEvent::DocumentLoaded { token, document } => {
                if token != self.token {
                    return;
                }
                self.document = DocumentState::Ready(document);
            }
            AppEvent::LoadFailed { token } => {
                if token != self.token {
                    return;
                }
                self.document = DocumentState::Failed;
            }
            AppEvent::ThemeToggled => {
                self.theme = self.theme.toggled();
            }
        }
    }

    pub fn render_status(&self) -> RenderStatus<'_> {
        match &self.document {
            DocumentState::Loading => RenderStatus::Loading,
            DocumentState::Failed => RenderStatus::LoadFailed,
            DocumentState::Ready(document) => match document.labels(&self.language) {
                Some(labels) => RenderStatus::Ready { document, labels },
                None => RenderStatus::TranslationMissing {
                    lang: &self.language,
                },
            },
        }
    }

    pub fn is_ready(&self) -> bool {
        matches!(self.render_status(), RenderStatus::Ready { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::cv_data::{CvDocument, Personal, SectionLabels};
    use std::collections::HashMap;

    fn document_with_translations(langs: &[&str]) -> Box<CvDocument> {
        let mut translations = HashMap::new();
        for lang in langs {
            translations.insert(
                lang.to_string(),
                SectionLabels {
                    summary: None,
                    experience: "Experience".to_string(),
                    education: "Education".to_string(),
                    skills: "Skills".to_string(),
                    projects: "Projects".to_string(),
                    certifications: "Certifications".to_string(),
                },
            );
        }
        Box::new(CvDocument {
            personal: Personal {
                name: "Test Person".to_string(),
                email: None,
                phone: None,
                location: None,
                birth_date: None,
            },
            summary: None,
            experience: Vec::new(),
            education: Vec::new(),
            skills: Vec::new(),
            projects: None,
            certifications: None,
            translations,
        })
    }

    #[test]
    fn test_initial_state_is_loading() {
        let state = AppState::new("en");
        assert!(matches!(state.render_status(), RenderStatus::Loading));
    }

    #[test]
    fn test_loaded_document_becomes_ready() {
        let mut state = AppState::new("en");
        let tokens = TokenSource::default();
        let token = tokens.next();
        state.apply(AppEvent::LanguageChanged {
            lang: "en".to_string(),
            token,
        });
        state.apply(AppEvent::DocumentLoaded {
            token,
            document: document_with_translations(&["en"]),
        });
        assert!(state.is_ready());
    }

    #[test]
    fn test_missing_translations_is_error_state() {
        let mut state = AppState::new("en");
        let tokens = TokenSource::default();
        let token = tokens.next();
        state.apply(AppEvent::LanguageChanged {
            lang: "de".to_string(),
            token,
        });
        state.apply(AppEvent::DocumentLoaded {
            token,
            document: document_with_translations(&["en", "fr"]),
        });
        match state.render_status() {
            RenderStatus::TranslationMissing { lang } => assert_eq!(lang, "de"),
            other => panic!("expected TranslationMissing, got {:?}", other),
        }
    }

    #[test]
    fn test_stale_result_is_discarded() {
        let mut state = AppState::new("en");
        let tokens = TokenSource::default();

        let first = tokens.next();
        state.apply(AppEvent::LanguageChanged {
            lang: "fr".to_string(),
            token: first,
        });
        let second = tokens.next();
        state.apply(AppEvent::LanguageChanged {
            lang: "it".to_string(),
            token: second,
        });

        // The abandoned fr load arrives after the it selection.
        state.apply(AppEvent::DocumentLoaded {
            token: first,
            document: document_with_translations(&["fr"]),
        });
        assert!(matches!(state.render_status(), RenderStatus::Loading));
        assert_eq!(state.language, "it");

        state.apply(AppEvent::DocumentLoaded {
            token: second,
            document: document_with_translations(&["it"]),
        });
        assert!(state.is_ready());
    }

    #[test]
    fn test_stale_failure_is_discarded() {
        let mut state = AppState::new("en");
        let tokens = TokenSource::default();

        let first = tokens.next();
        state.apply(AppEvent::LanguageChanged {
            lang: "fr".to_string(),
            token: first,
        });
        let second = tokens.next();
        state.apply(AppEvent::LanguageChanged {
            lang: "en".to_string(),
            token: second,
        });
        state.apply(AppEvent::LoadFailed { token: first });
        assert!(matches!(state.render_status(), RenderStatus::Loading));
    }

    #[test]
    fn test_theme_toggle_round_trip() {
        let mut state = AppState::new("en");
        assert_eq!(state.theme, Theme::Light);
        state.apply(AppEvent::ThemeToggled);
        assert_eq!(state.theme, Theme::Dark);
        state.apply(AppEvent::ThemeToggled);
        assert_eq!(state.theme, Theme::Light);
    }
}
