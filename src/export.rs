// src/export.rs
//! Export of the currently rendered view to a paginated PDF.
//!
//! The exporter works on the live view, not on the data model: it hides the
//! interactive chrome, snapshots the rendered layout, hands it to the
//! rasterization engine, and restores the chrome on every exit path.

use crate::error::{Error, Result};
use crate::render;
use crate::state::{AppState, ChromeVisibility, RenderStatus};
use crate::utils::collapse_whitespace;
use crate::workspace::ExportWorkspace;
use std::path::PathBuf;
use std::process::Command;
use tracing::info;

/// Fixed rasterization configuration: US Letter, portrait, half-inch
/// margins, 2x raster scale, 98 JPEG quality for embedded imagery.
#[derive(Debug, Clone)]
pub struct ExportOptions {
    pub page_size: String,
    pub orientation: String,
    pub margin_in: f64,
    pub raster_scale: u32,
    pub jpeg_quality: u8,
    /// Rasterization engine binary, invoked as `<engine> <in.html> <out.pdf>`.
    pub engine: String,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            page_size: "letter".to_string(),
            orientation: "portrait".to_string(),
            margin_in: 0.5,
            raster_scale: 2,
            jpeg_quality: 98,
            engine: "weasyprint".to_string(),
        }
    }
}

impl ExportOptions {
    /// Raster resolution: CSS reference 96dpi times the scale factor.
    pub fn dpi(&self) -> u32 {
        96 * self.raster_scale
    }

    /// Page geometry as a CSS rule for the export document.
    pub fn page_rule(&self) -> String {
        format!(
            "@page {{ size: {} {}; margin: {}in; }}",
            self.page_size, self.orientation, self.margin_in
        )
    }
}

/// Derive the artifact name from the personal name: whitespace runs collapse
/// to a single underscore, suffixed with the language code.
pub fn export_filename(name: &str, lang: &str) -> String {
    format!("{}_CV_{}.pdf", collapse_whitespace(name), lang)
}

/// Scoped visibility override for the navigation row and header action
/// controls. The prior visibility is restored when the override is dropped,
/// including on the failure path of the export transform.
pub struct ChromeOverride<'a> {
    state: &'a mut AppState,
    saved: ChromeVisibility,
}

impl<'a> ChromeOverride<'a> {
    pub fn hide_for_export(state: &'a mut AppState) -> Self {
        let saved = state.chrome;
        state.chrome = ChromeVisibility::HIDDEN;
        Self { state, saved }
    }

    pub fn state(&self) -> &AppState {
        self.state
    }
}

impl Drop for ChromeOverride<'_> {
    fn drop(&mut self) {
        self.state.chrome = self.saved;
    }
}

pub struct PdfExporter {
    options: ExportOptions,
    workspace_root: PathBuf,
}

impl PdfExporter {
    pub fn new(workspace_root: PathBuf) -> Self {
        Self {
            options: ExportOptions::default(),
            workspace_root,
        }
    }

    pub fn with_options(mut self, options: ExportOptions) -> Self {
        self.options = options;
        self
    }

    pub fn options(&self) -> &ExportOptions {
        &self.options
    }

    /// Export the currently rendered view. Rejected before any chrome
    /// mutation when the view is not Ready; a refused export must not leave
    /// the page without its controls.
    pub fn export(&self, state: &mut AppState) -> Result<(Vec<u8>, String)> {
        let name = match state.render_status() {
            RenderStatus::Ready { document, .. } => document.personal.name.clone(),
            RenderStatus::Loading => {
                return Err(Error::ExportPrecondition("document is still loading"))
            }
            RenderStatus::LoadFailed => {
                return Err(Error::ExportPrecondition("document failed to load"))
            }
            RenderStatus::TranslationMissing { .. } => {
                return Err(Error::ExportPrecondition(
                    "translations missing for the active language",
                ))
            }
        };
        if name.trim().is_empty() {
            return Err(Error::ExportPrecondition("personal name is empty"));
        }

        let filename = export_filename(&name, &state.language);

        let chrome = ChromeOverride::hide_for_export(state);
        let view = render::render(chrome.state());
        let html = render::export_document(&view.html, &self.options.page_rule());
        let data = self.rasterize(&html)?;
        drop(chrome);

        info!("Exported {} ({} bytes)", filename, data.len());
        Ok((data, filename))
    }

    fn rasterize(&self, html: &str) -> Result<Vec<u8>> {
        let workspace = ExportWorkspace::prepare(&self.workspace_root)?;
        let result = self.run_engine(&workspace, html);
        workspace.cleanup();
        result
    }

    fn run_engine(&self, workspace: &ExportWorkspace, html: &str) -> Result<Vec<u8>> {
        workspace.write_source(html)?;

        let output = Command::new(&self.options.engine)
            .arg(workspace.source_path())
            .arg(workspace.artifact_path())
            .arg("--dpi")
            .arg(self.options.dpi().to_string())
            .arg("--jpeg-quality")
            .arg(self.options.jpeg_quality.to_string())
            .output()
            .map_err(|e| {
                Error::ExportFailed(format!("failed to run {}: {}", self.options.engine, e))
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(Error::ExportFailed(format!(
                "{} exited with {}: {}",
                self.options.engine, output.status, stderr
            )));
        }

        workspace.read_artifact()
    }
}
