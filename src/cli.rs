// src/cli.rs
use crate::config::{ViewerConfig, SUPPORTED_LANGUAGES};
use crate::environment::EnvironmentConfig;
use crate::loader::DocumentSource;
use crate::publish::Publisher;
use crate::session::ViewerSession;
use crate::web::start_web_server;
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "cviewer")]
#[command(about = "Localized CV viewer and PDF exporter")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Start the viewer API server
    Serve {
        #[arg(long)]
        port: Option<u16>,
    },
    /// Generate the localized JSON documents from the YAML CV sources
    Publish {
        #[arg(long)]
        data_dir: Option<PathBuf>,
        #[arg(long)]
        public_dir: Option<PathBuf>,
        /// Languages to publish; defaults to the supported set
        #[arg(long)]
        langs: Vec<String>,
    },
    /// Export one language to PDF without going through the server
    Export {
        lang: String,
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Validate the YAML CV sources for every supported language
    Validate {
        #[arg(long)]
        data_dir: Option<PathBuf>,
    },
}

pub async fn handle_command(cli: Cli) -> Result<()> {
    let environment = EnvironmentConfig::load()?;
    environment.ensure_directories().await?;

    match cli.command {
        Command::Serve { port } => {
            let port = match port {
                Some(port) => port,
                None => std::env::var("ROCKET_PORT")
                    .ok()
                    .and_then(|p| p.parse().ok())
                    .unwrap_or(8000),
            };

            let config = ViewerConfig::new(document_source(&environment))
                .with_workspace_root(environment.output_path.clone());
            let session = ViewerSession::new(config)?;

            start_web_server(session, port).await
        }

        Command::Publish {
            data_dir,
            public_dir,
            langs,
        } => {
            let languages = if langs.is_empty() {
                default_languages()
            } else {
                langs
            };
            let publisher = Publisher::new(
                data_dir.unwrap_or_else(|| environment.cv_data_path.clone()),
                public_dir.unwrap_or_else(|| environment.public_path.clone()),
                languages,
            );

            let written = publisher.publish().await?;
            info!("Published {} document(s)", written.len());
            Ok(())
        }

        Command::Export { lang, output } => {
            let config = ViewerConfig::new(document_source(&environment))
                .with_workspace_root(environment.output_path.clone());
            let session = ViewerSession::new(config)?;

            session.select_language(&lang).await;
            let (data, filename) = session.export()?;

            let target = output.unwrap_or_else(|| environment.output_path.join(&filename));
            tokio::fs::write(&target, &data)
                .await
                .with_context(|| format!("Failed to write {}", target.display()))?;

            info!("Wrote {} ({} bytes)", target.display(), data.len());
            Ok(())
        }

        Command::Validate { data_dir } => {
            let publisher = Publisher::new(
                data_dir.unwrap_or_else(|| environment.cv_data_path.clone()),
                environment.public_path.clone(),
                default_languages(),
            );

            let mut failures = 0;
            for lang in SUPPORTED_LANGUAGES {
                match publisher.build_document(lang).await {
                    Ok(_) => info!("{}: valid", lang),
                    Err(e) => {
                        failures += 1;
                        error!("{}: {}", lang, e);
                    }
                }
            }

            if failures > 0 {
                anyhow::bail!("{} language(s) failed validation", failures);
            }
            info!("All CV sources are valid");
            Ok(())
        }
    }
}

/// The viewer fetches from CV_DATA_URL when set, otherwise from the local
/// public directory the publish step writes into.
fn document_source(environment: &EnvironmentConfig) -> DocumentSource {
    match std::env::var("CV_DATA_URL") {
        Ok(base) => DocumentSource::Remote(base),
        Err(_) => DocumentSource::Local(environment.public_path.clone()),
    }
}

fn default_languages() -> Vec<String> {
    SUPPORTED_LANGUAGES.iter().map(|l| l.to_string()).collect()
}
