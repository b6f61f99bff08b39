// src/main.rs
//
// sitekit binary: pick a preset (or an explicit module list), apply CLI
// overrides, build the app, and serve it.

use anyhow::Context;
use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use sitekit::application::{create_app, DashboardKind, PresetKind, SiteConfig};
use sitekit::domain::ModuleId;
use sitekit::error::AppError;

#[derive(Parser, Debug)]
#[command(name = "sitekit", about = "Modular web-application toolkit")]
struct Cli {
    /// Site flavor to start from
    #[arg(long, env = "APP_TYPE", value_enum, default_value = "blog")]
    preset: PresetKind,

    /// Comma-separated module list, replacing the preset's modules
    #[arg(long, value_delimiter = ',')]
    modules: Option<Vec<String>>,

    #[arg(long)]
    site_name: Option<String>,

    #[arg(long)]
    theme: Option<String>,

    #[arg(long, value_enum)]
    dashboard: Option<DashboardKind>,

    /// SQLite database file (defaults to the per-user data directory)
    #[arg(long)]
    db_path: Option<PathBuf>,

    /// Directory served under /static
    #[arg(long)]
    static_dir: Option<PathBuf>,

    #[arg(long, default_value = "127.0.0.1")]
    host: String,

    #[arg(long, env = "PORT", default_value_t = 5000)]
    port: u16,
}

impl Cli {
    fn into_request(self) -> (Vec<ModuleId>, SiteConfig, String, u16) {
        let preset = self.preset.build();

        let modules = match self.modules {
            Some(names) => names.into_iter().map(ModuleId::from).collect(),
            None => preset.modules,
        };

        let mut config = preset.config;
        if self.site_name.is_some() {
            config.site_name = self.site_name;
        }
        if let Some(theme) = self.theme {
            config.theme = theme;
        }
        if let Some(dashboard) = self.dashboard {
            config.dashboard = dashboard;
        }
        if self.db_path.is_some() {
            config.database_path = self.db_path;
        }
        if let Some(static_dir) = self.static_dir {
            config.static_dir = static_dir;
        }

        (modules, config, self.host, self.port)
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("sitekit=info,tower_http=info")),
        )
        .init();

    let (modules, config, host, port) = Cli::parse().into_request();

    let app = match create_app(&modules, config) {
        Ok(app) => app,
        Err(AppError::ModuleResolution(errors)) => {
            // Surface every collected problem before giving up
            for error in &errors {
                eprintln!("error: {error}");
            }
            anyhow::bail!("module dependency validation failed");
        }
        Err(err) => return Err(err).context("failed to assemble application"),
    };

    let addr: SocketAddr = format!("{host}:{port}")
        .parse()
        .with_context(|| format!("invalid bind address {host}:{port}"))?;
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    tracing::info!(
        addr = %addr,
        site = app.state.config.site_name_display(),
        modules = ?app.state.modules.iter().map(|m| m.as_str()).collect::<Vec<_>>(),
        "sitekit listening"
    );

    axum::serve(listener, app.router)
        .await
        .context("server error")?;

    Ok(())
}
