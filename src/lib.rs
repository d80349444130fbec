// src/lib.rs
pub mod cli;
pub mod config;
pub mod environment;
pub mod error;
pub mod export;
pub mod loader;
pub mod merge;
pub mod publish;
pub mod render;
pub mod session;
pub mod state;
pub mod types;
pub mod utils;
pub mod validator;
pub mod web;
pub mod workspace;

pub use config::ViewerConfig;
pub use error::{Error, Result};
pub use export::{ExportOptions, PdfExporter};
pub use loader::{DocumentLoader, DocumentSource};
pub use session::ViewerSession;
pub use state::{AppEvent, AppState, DocumentState, Theme};
pub use types::cv_data::CvDocument;
pub use web::start_web_server;
