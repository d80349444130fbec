//! Integration tests for the YAML-to-JSON publish pipeline.

use cv_viewer::publish::Publisher;
use cv_viewer::CvDocument;
use std::path::Path;

const CV_EN: &str = r#"
personal:
  name: Jane Q. Public
  email: jane@example.org
  phone: "+41 00 000 00 00"
  location: Geneva, Switzerland
  birth_date: "1990-04-12"
summary: Systems engineer.
experience:
  - id: acme
    company: Acme Systems
    title: Senior Engineer
    period: 2020 - Present
    technologies: [Rust, PostgreSQL]
    description: Owns the billing platform.
education:
  - id: msc
    degree: MSc Computer Science
    school: EPFL
    graduation_year: 2016
skills:
  - category: Languages
    items: [Rust, Python]
"#;

const CV_FR: &str = r#"
summary: Ingénieure systèmes.
experience:
  - id: acme
    title: Ingénieure senior
    description: Responsable de la plateforme de facturation.
"#;

const UI_TRANSLATIONS: &str = r#"
en:
  summary: Summary
  experience: Experience
  education: Education
  skills: Skills
  projects: Projects
  certifications: Certifications
fr:
  summary: Résumé
  experience: Expérience
  education: Formation
  skills: Compétences
  projects: Projets
  certifications: Certifications
it:
  summary: Riepilogo
  experience: Esperienza
  education: Istruzione
  skills: Competenze
  projects: Progetti
  certifications: Certificazioni
"#;

fn write_sources(dir: &Path) {
    std::fs::write(dir.join("cv_en.yml"), CV_EN).unwrap();
    std::fs::write(dir.join("cv_fr.yml"), CV_FR).unwrap();
    std::fs::write(dir.join("ui_translations.yml"), UI_TRANSLATIONS).unwrap();
}

fn languages() -> Vec<String> {
    vec!["en".to_string(), "fr".to_string(), "it".to_string()]
}

#[tokio::test]
async fn publish_writes_one_document_per_available_language() {
    let data = tempfile::tempdir().unwrap();
    let public = tempfile::tempdir().unwrap();
    write_sources(data.path());

    let publisher = Publisher::new(
        data.path().to_path_buf(),
        public.path().to_path_buf(),
        languages(),
    );
    let written = publisher.publish().await.unwrap();

    // cv_it.yml does not exist and is skipped, not an error.
    assert_eq!(written.len(), 2);
    assert!(public.path().join("cv_en.json").exists());
    assert!(public.path().join("cv_fr.json").exists());
    assert!(!public.path().join("cv_it.json").exists());
}

#[tokio::test]
async fn non_base_language_merges_over_the_base() {
    let data = tempfile::tempdir().unwrap();
    let public = tempfile::tempdir().unwrap();
    write_sources(data.path());

    let publisher = Publisher::new(
        data.path().to_path_buf(),
        public.path().to_path_buf(),
        languages(),
    );
    publisher.publish().await.unwrap();

    let json = std::fs::read_to_string(public.path().join("cv_fr.json")).unwrap();
    let document: CvDocument = serde_json::from_str(&json).unwrap();

    // Overridden fields take the French text, untouched fields keep the base.
    assert_eq!(document.summary.as_deref(), Some("Ingénieure systèmes."));
    assert_eq!(document.experience[0].title, "Ingénieure senior");
    assert_eq!(document.experience[0].company, "Acme Systems");
    assert_eq!(document.experience[0].period, "2020 - Present");

    // Shared UI translations are injected for every language.
    assert_eq!(document.labels("it").unwrap().experience, "Esperienza");
}

#[tokio::test]
async fn published_documents_carry_no_pii() {
    let data = tempfile::tempdir().unwrap();
    let public = tempfile::tempdir().unwrap();
    write_sources(data.path());

    let publisher = Publisher::new(
        data.path().to_path_buf(),
        public.path().to_path_buf(),
        languages(),
    );
    publisher.publish().await.unwrap();

    let json = std::fs::read_to_string(public.path().join("cv_en.json")).unwrap();
    assert!(!json.contains("+41 00 000 00 00"));
    assert!(!json.contains("1990-04-12"));
    assert!(!json.contains("jane@example.org"));

    let document: CvDocument = serde_json::from_str(&json).unwrap();
    assert!(document.personal.email.is_some(), "email is obfuscated, not dropped");
}

#[tokio::test]
async fn schema_violation_fails_the_publish() {
    let data = tempfile::tempdir().unwrap();
    let public = tempfile::tempdir().unwrap();
    write_sources(data.path());
    // Drop the mandatory skills section from the base source.
    std::fs::write(
        data.path().join("cv_en.yml"),
        CV_EN.replace("skills:\n  - category: Languages\n    items: [Rust, Python]\n", ""),
    )
    .unwrap();

    let publisher = Publisher::new(
        data.path().to_path_buf(),
        public.path().to_path_buf(),
        languages(),
    );
    assert!(publisher.publish().await.is_err());
}
