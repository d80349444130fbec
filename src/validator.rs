// src/validator.rs
//! Data-quality checks over parsed CV documents.
//!
//! Duplicate ids and duplicate badge strings are reported as warnings: they
//! break display keying but the renderer does not guard against them at
//! runtime. Structural problems are errors and block publishing.

use crate::types::cv_data::CvDocument;
use std::collections::HashSet;

#[derive(Debug, Default)]
pub struct ValidationReport {
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl ValidationReport {
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }
}

pub fn check_document(document: &CvDocument, languages: &[String]) -> ValidationReport {
    let mut report = ValidationReport::default();

    if document.personal.name.trim().is_empty() {
        report
            .errors
            .push("personal.name must not be empty".to_string());
    }

    for (section, is_empty) in [
        ("experience", document.experience.is_empty()),
        ("education", document.education.is_empty()),
        ("skills", document.skills.is_empty()),
    ] {
        if is_empty {
            report
                .errors
                .push(format!("{} must not be empty", section));
        }
    }

    check_unique(
        &mut report,
        "experience",
        document.experience.iter().map(|e| e.id.as_str()),
    );
    check_unique(
        &mut report,
        "education",
        document.education.iter().map(|e| e.id.as_str()),
    );
    if let Some(projects) = &document.projects {
        check_unique(&mut report, "projects", projects.iter().map(|p| p.id.as_str()));
    }
    if let Some(certifications) = &document.certifications {
        check_unique(
            &mut report,
            "certifications",
            certifications.iter().map(|c| c.id.as_str()),
        );
    }

    for exp in &document.experience {
        if let Some(technologies) = &exp.technologies {
            check_unique_items(&mut report, &format!("experience '{}'", exp.id), technologies);
        }
    }
    if let Some(projects) = &document.projects {
        for project in projects {
            if let Some(technologies) = &project.technologies {
                check_unique_items(&mut report, &format!("project '{}'", project.id), technologies);
            }
        }
    }
    for group in &document.skills {
        check_unique_items(&mut report, &format!("skills '{}'", group.category), &group.items);
    }

    for lang in languages {
        if document.labels(lang).is_none() {
            report
                .errors
                .push(format!("translations missing for language '{}'", lang));
        }
    }

    report
}

fn check_unique<'a>(
    report: &mut ValidationReport,
    section: &str,
    ids: impl Iterator<Item = &'a str>,
) {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            report
                .warnings
                .push(format!("duplicate id '{}' in {}", id, section));
        }
    }
}

fn check_unique_items(report: &mut ValidationReport, context: &str, items: &[String]) {
    let mut seen = HashSet::new();
    for item in items {
        if !seen.insert(item.as_str()) {
            report
                .warnings
                .push(format!("duplicate item '{}' in {}", item, context));
        }
    }
}
