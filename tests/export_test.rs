//! Integration tests for the export precondition and the chrome override.
//!
//! The rasterization engine itself is not exercised here; a nonexistent
//! engine binary stands in for the failure path.

mod common;

use common::ready_state;
use cv_viewer::export::{ExportOptions, PdfExporter};
use cv_viewer::state::{AppState, ChromeVisibility};
use cv_viewer::Error;

fn failing_exporter(root: &std::path::Path) -> PdfExporter {
    let options = ExportOptions {
        engine: "cviewer-test-missing-engine".to_string(),
        ..ExportOptions::default()
    };
    PdfExporter::new(root.to_path_buf()).with_options(options)
}

#[test]
fn export_from_loading_state_fails_closed() {
    let dir = tempfile::tempdir().unwrap();
    let exporter = failing_exporter(dir.path());

    let mut state = AppState::new("en");
    let before = state.chrome;

    match exporter.export(&mut state) {
        Err(Error::ExportPrecondition(_)) => {}
        other => panic!("expected ExportPrecondition, got {:?}", other.map(|_| ())),
    }
    // Rejected before any visibility mutation.
    assert_eq!(state.chrome, before);
}

#[test]
fn chrome_is_restored_when_the_engine_fails() {
    let dir = tempfile::tempdir().unwrap();
    let exporter = failing_exporter(dir.path());

    let mut state = ready_state("en");
    assert_eq!(state.chrome, ChromeVisibility::default());

    match exporter.export(&mut state) {
        Err(Error::ExportFailed(_)) => {}
        other => panic!("expected ExportFailed, got {:?}", other.map(|_| ())),
    }

    // Both regions visible again after the failure path.
    assert!(state.chrome.nav);
    assert!(state.chrome.header_actions);
}

#[test]
fn prior_visibility_is_restored_not_forced_on() {
    let dir = tempfile::tempdir().unwrap();
    let exporter = failing_exporter(dir.path());

    let mut state = ready_state("en");
    state.chrome.nav = false;

    let _ = exporter.export(&mut state);
    assert!(!state.chrome.nav, "restoration must return the saved state");
    assert!(state.chrome.header_actions);
}

#[test]
fn export_workspace_is_cleaned_up_after_failure() {
    let dir = tempfile::tempdir().unwrap();
    let exporter = failing_exporter(dir.path());

    let mut state = ready_state("en");
    let _ = exporter.export(&mut state);

    let leftovers: Vec<_> = std::fs::read_dir(dir.path()).unwrap().collect();
    assert!(leftovers.is_empty(), "workspace must not leak: {:?}", leftovers);
}
