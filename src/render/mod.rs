// src/render/mod.rs
//! Pure rendering of a viewer state snapshot to the single-page CV layout.
//!
//! `render` is a function of its input snapshot only; it performs no I/O and
//! holds no memory between calls. Two snapshots that compare equal render to
//! identical output.

mod page;

use crate::state::{AppState, RenderStatus};

pub use page::export_document;

/// Which of the three mutually exclusive states the view was rendered in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewStatus {
    Loading,
    LoadFailed,
    TranslationMissing,
    Ready,
}

impl ViewStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            ViewStatus::Loading => "loading",
            ViewStatus::LoadFailed => "load_failed",
            ViewStatus::TranslationMissing => "translation_missing",
            ViewStatus::Ready => "ready",
        }
    }
}

/// The rendered layout plus the state it was produced in.
#[derive(Debug, Clone)]
pub struct RenderedView {
    pub status: ViewStatus,
    pub html: String,
}

pub fn render(state: &AppState) -> RenderedView {
    match state.render_status() {
        RenderStatus::Loading => RenderedView {
            status: ViewStatus::Loading,
            html: page::render_placeholder("Loading..."),
        },
        RenderStatus::LoadFailed => RenderedView {
            status: ViewStatus::LoadFailed,
            html: page::render_placeholder("Failed to load CV data"),
        },
        RenderStatus::TranslationMissing { lang } => RenderedView {
            status: ViewStatus::TranslationMissing,
            html: page::render_placeholder(&format!("Error: Translations not found for {}", lang)),
        },
        RenderStatus::Ready { document, labels } => RenderedView {
            status: ViewStatus::Ready,
            html: page::render_page(document, labels, state.theme, state.chrome),
        },
    }
}
