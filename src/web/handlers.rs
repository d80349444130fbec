// src/web/handlers.rs
//! Request handlers for the viewer API.

use crate::error::Error;
use crate::session::ViewerSession;
use crate::web::types::{
    DataResponse, LanguageRequest, PdfResponse, StandardErrorResponse, TextResponse, ViewInfo,
};
use rocket::response::content::RawHtml;
use rocket::serde::json::Json;
use rocket::State;
use std::sync::Arc;
use tracing::{error, info};

fn view_info(session: &ViewerSession) -> ViewInfo {
    let snapshot = session.snapshot();
    ViewInfo {
        language: snapshot.language.clone(),
        status: session.render().status.as_str(),
        theme: snapshot.theme.css_class(),
    }
}

pub async fn health_handler() -> Json<TextResponse> {
    Json(TextResponse::success("CV viewer is running".to_string()))
}

pub async fn languages_handler(session: &State<Arc<ViewerSession>>) -> Json<DataResponse<Vec<String>>> {
    Json(DataResponse::success(
        "Supported languages".to_string(),
        session.languages().to_vec(),
    ))
}

pub async fn view_handler(session: &State<Arc<ViewerSession>>) -> RawHtml<String> {
    RawHtml(session.render().html)
}

pub async fn select_language_handler(
    request: Json<LanguageRequest>,
    session: &State<Arc<ViewerSession>>,
) -> Json<DataResponse<ViewInfo>> {
    info!("Language selected: {}", request.lang);

    // The load outcome lands in the state either way; a failed load renders
    // as the placeholder rather than as an HTTP error.
    session.select_language(&request.lang).await;

    Json(DataResponse::success(
        format!("Language set to {}", request.lang),
        view_info(session),
    ))
}

pub async fn toggle_theme_handler(
    session: &State<Arc<ViewerSession>>,
) -> Json<DataResponse<ViewInfo>> {
    session.toggle_theme();
    Json(DataResponse::success(
        "Theme toggled".to_string(),
        view_info(session),
    ))
}

pub async fn export_handler(
    session: &State<Arc<ViewerSession>>,
) -> Result<PdfResponse, Json<StandardErrorResponse>> {
    match session.export() {
        Ok((data, filename)) => {
            info!("Export completed: {} ({} bytes)", filename, data.len());
            Ok(PdfResponse::with_filename(data, filename))
        }
        Err(e @ Error::ExportPrecondition(_)) => Err(Json(StandardErrorResponse::new(
            e.to_string(),
            "EXPORT_PRECONDITION".to_string(),
            vec![
                "Select a language and wait for the document to load".to_string(),
                "Check that the document carries translations for the language".to_string(),
            ],
        ))),
        Err(e) => {
            error!("Export failed: {}", e);
            Err(Json(StandardErrorResponse::new(
                format!("PDF export failed: {}", e),
                "EXPORT_ERROR".to_string(),
                vec![
                    "Check that the rasterization engine is installed".to_string(),
                    "Try again in a few moments".to_string(),
                ],
            )))
        }
    }
}
