use anyhow::Result;
use clap::Parser;
use cv_viewer::cli::{handle_command, Cli};

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Registry};

#[tokio::main]
async fn main() -> Result<()> {
    Registry::default()
        .with(tracing_subscriber::fmt::layer())
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or(EnvFilter::new("cv_viewer=INFO,rocket::server=OFF")),
        )
        .init();

    let cli = Cli::parse();
    handle_command(cli).await
}
