//! Shared fixtures for the integration tests.
#![allow(dead_code)]

use cv_viewer::state::{AppEvent, AppState, TokenSource};
use cv_viewer::CvDocument;

pub fn sample_json() -> &'static str {
    r#"{
        "personal": {
            "name": "Jane Q. Public",
            "email": "jane@example.org",
            "location": "Geneva, Switzerland"
        },
        "summary": "Systems engineer with a decade of backend work.",
        "experience": [
            {
                "id": "acme",
                "company": "Acme Systems",
                "title": "Senior Engineer",
                "period": "2020 - Present",
                "location": "Geneva",
                "technologies": ["Rust", "PostgreSQL"],
                "description": "Owns the billing platform."
            },
            {
                "id": "globex",
                "company": "Globex",
                "title": "Engineer",
                "period": "2016 - 2020",
                "description": "Built data pipelines."
            }
        ],
        "education": [
            {"id": "msc", "degree": "MSc Computer Science", "school": "EPFL", "graduation_year": 2016}
        ],
        "skills": [
            {"category": "Languages", "items": ["Rust", "Python"]},
            {"category": "Infrastructure", "items": ["Docker", "Kubernetes"]}
        ],
        "projects": [
            {
                "id": "cviewer",
                "title": "CV Viewer",
                "description": "Localized CV rendering.",
                "technologies": ["Rust"],
                "url": "https://example.org/cviewer"
            }
        ],
        "certifications": [
            {"id": "cka", "title": "Certified Kubernetes Administrator", "issuer": "CNCF", "issued_date": "2022-06-01"}
        ],
        "translations": {
            "en": {
                "summary": "Summary",
                "experience": "Experience",
                "education": "Education",
                "skills": "Skills",
                "projects": "Projects",
                "certifications": "Certifications"
            },
            "fr": {
                "summary": "Résumé",
                "experience": "Expérience",
                "education": "Formation",
                "skills": "Compétences",
                "projects": "Projets",
                "certifications": "Certifications"
            }
        }
    }"#
}

pub fn sample_document() -> CvDocument {
    serde_json::from_str(sample_json()).expect("fixture document must parse")
}

/// A state in the Ready condition for the given language.
pub fn ready_state(lang: &str) -> AppState {
    let mut state = AppState::new(lang);
    let tokens = TokenSource::default();
    let token = tokens.next();
    state.apply(AppEvent::LanguageChanged {
        lang: lang.to_string(),
        token,
    });
    state.apply(AppEvent::DocumentLoaded {
        token,
        document: Box::new(sample_document()),
    });
    state
}
