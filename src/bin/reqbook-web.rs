//! Reqbook Web Server Binary
//!
//! This binary starts the Reqbook web server that provides a REST API
//! for downloading and importing requirement workbooks.
//!
//! # Usage
//!
//! ```bash
//! # Start with default settings (port 3002, models under ~/.config/Reqbook/models/)
//! reqbook-web
//!
//! # Specify port and workspace
//! reqbook-web --port 8080 --workspace ~/requirements
//! ```

use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use reqbook::config::Config;
use reqbook::web;

/// Reqbook Web Server - REST API for requirement workbooks
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Port to listen on
    #[arg(short, long, default_value = "3002")]
    port: u16,

    /// Host to bind to
    #[arg(long, default_value = "127.0.0.1")]
    host: String,

    /// Workspace directory containing model files.
    /// Defaults to `paths.workspace` from the config file, then the
    /// platform-specific models directory (e.g. ~/.config/Reqbook/models/).
    #[arg(short, long)]
    workspace: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Initialize tracing
    let filter = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::load().unwrap_or_default();

    let workspace_root = match args.workspace {
        Some(path) => path,
        None => config.workspace_dir()?,
    };

    if !workspace_root.exists() {
        std::fs::create_dir_all(&workspace_root).context(format!(
            "Failed to create workspace directory: {}",
            workspace_root.display()
        ))?;
    }

    info!("Workspace root: {}", workspace_root.display());

    let addr: SocketAddr = format!("{}:{}", args.host, args.port).parse()?;

    web::run_server(config, workspace_root, addr).await
}
