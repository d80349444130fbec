// src/web/mod.rs

pub mod handlers;
pub mod types;

pub use types::*;

use crate::session::ViewerSession;
use anyhow::Result;
use rocket::fairing::{Fairing, Info, Kind};
use rocket::http::{Header, Status};
use rocket::response::content::RawHtml;
use rocket::serde::json::Json;
use rocket::{catchers, get, options, post, routes, Request, Response, State};
use std::sync::Arc;
use tracing::info;

// CORS Fairing
pub struct Cors;

#[rocket::async_trait]
impl Fairing for Cors {
    fn info(&self) -> Info {
        Info {
            name: "Add CORS headers to responses",
            kind: Kind::Response,
        }
    }

    async fn on_response<'r>(&self, _request: &'r Request<'_>, response: &mut Response<'r>) {
        response.set_header(Header::new("Access-Control-Allow-Origin", "*"));
        response.set_header(Header::new(
            "Access-Control-Allow-Methods",
            "POST, GET, OPTIONS",
        ));
        response.set_header(Header::new("Access-Control-Allow-Headers", "*"));
    }
}

#[get("/health")]
pub async fn health() -> Json<TextResponse> {
    handlers::health_handler().await
}

#[get("/languages")]
pub async fn languages(session: &State<Arc<ViewerSession>>) -> Json<DataResponse<Vec<String>>> {
    handlers::languages_handler(session).await
}

#[get("/view")]
pub async fn view(session: &State<Arc<ViewerSession>>) -> RawHtml<String> {
    handlers::view_handler(session).await
}

#[post("/language", data = "<request>")]
pub async fn select_language(
    request: Json<LanguageRequest>,
    session: &State<Arc<ViewerSession>>,
) -> Json<DataResponse<ViewInfo>> {
    handlers::select_language_handler(request, session).await
}

#[post("/theme")]
pub async fn toggle_theme(session: &State<Arc<ViewerSession>>) -> Json<DataResponse<ViewInfo>> {
    handlers::toggle_theme_handler(session).await
}

#[post("/export")]
pub async fn export(
    session: &State<Arc<ViewerSession>>,
) -> Result<PdfResponse, Json<StandardErrorResponse>> {
    handlers::export_handler(session).await
}

#[options("/<_..>")]
pub async fn options_route() -> Status {
    Status::Ok
}

// Error catchers
#[rocket::catch(400)]
pub fn bad_request() -> Json<StandardErrorResponse> {
    Json(StandardErrorResponse::new(
        "Invalid request format".to_string(),
        "BAD_REQUEST".to_string(),
        vec![
            "Check your request JSON format".to_string(),
            "Verify all required fields are present".to_string(),
        ],
    ))
}

#[rocket::catch(500)]
pub fn internal_error() -> Json<StandardErrorResponse> {
    Json(StandardErrorResponse::new(
        "Internal server error".to_string(),
        "INTERNAL_ERROR".to_string(),
        vec!["Try again in a few moments".to_string()],
    ))
}

// Main server start function
pub async fn start_web_server(session: ViewerSession, port: u16) -> Result<()> {
    let session = Arc::new(session);

    // Kick off the initial load for the default language.
    let initial_lang = session.snapshot().language;
    session.select_language_detached(&initial_lang);

    info!("Starting CV viewer server on port {}", port);

    let figment = rocket::Config::figment().merge(("port", port));

    let _rocket = rocket::custom(figment)
        .attach(Cors)
        .manage(session)
        .register("/api", catchers![bad_request, internal_error])
        .mount(
            "/api",
            routes![
                health,
                languages,
                view,
                select_language,
                toggle_theme,
                export,
                options_route,
            ],
        )
        .launch()
        .await;

    Ok(())
}
