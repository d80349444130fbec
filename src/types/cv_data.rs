// src/types/cv_data.rs
//! Localized CV document structures shared by the loader, renderer and
//! publish pipeline.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// ===== Localized CV Document =====

/// One localized CV document. Immutable once loaded; a language change
/// replaces the whole document rather than merging into it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CvDocument {
    pub personal: Personal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    pub experience: Vec<Experience>,
    pub education: Vec<Education>,
    pub skills: Vec<SkillGroup>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub projects: Option<Vec<Project>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub certifications: Option<Vec<Certification>>,
    #[serde(default)]
    pub translations: HashMap<String, SectionLabels>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Personal {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub birth_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Experience {
    pub id: String,
    pub company: String,
    pub title: String,
    pub period: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub technologies: Option<Vec<String>>,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Education {
    pub id: String,
    pub degree: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub school: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub graduation_year: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillGroup {
    pub category: String,
    pub items: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub technologies: Option<Vec<String>>,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Certification {
    pub id: String,
    pub title: String,
    pub issuer: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub issued_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_date: Option<NaiveDate>,
}

/// Display labels for the five navigation sections, per language. The
/// summary label is only used by the paginated export layout.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SectionLabels {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    pub experience: String,
    pub education: String,
    pub skills: String,
    pub projects: String,
    pub certifications: String,
}

impl CvDocument {
    /// Section labels for a language, if the document carries them.
    pub fn labels(&self, lang: &str) -> Option<&SectionLabels> {
        self.translations.get(lang)
    }

    /// Projects section renders only when the list is present and non-empty.
    pub fn has_projects(&self) -> bool {
        self.projects.as_ref().is_some_and(|p| !p.is_empty())
    }

    /// Same rule as [`has_projects`](Self::has_projects) for certifications.
    pub fn has_certifications(&self) -> bool {
        self.certifications.as_ref().is_some_and(|c| !c.is_empty())
    }

    /// Summary section renders only for non-empty text.
    pub fn has_summary(&self) -> bool {
        self.summary.as_deref().is_some_and(|s| !s.trim().is_empty())
    }
}
