//! Development server implementation.

use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use axum::middleware::from_fn_with_state;
use axum::Router;
use tower_http::services::ServeDir;

use pagelift_pages::{Project, ResolveError};

use crate::middleware::{serve_page, PagesContext};

/// Configuration for the development server.
#[derive(Debug, Clone)]
pub struct DevServerConfig {
    /// Pages directory relative to the project root; auto-detected when unset
    pub pages_dir: Option<String>,

    /// Port to listen on
    pub port: u16,

    /// Host to bind to
    pub host: String,

    /// Open browser on start
    pub open: bool,
}

impl Default for DevServerConfig {
    fn default() -> Self {
        Self {
            pages_dir: None,
            port: 3000,
            host: "127.0.0.1".to_string(),
            open: true,
        }
    }
}

/// Errors that can occur with the server.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Failed to bind to {0}: {1}")]
    BindError(SocketAddr, String),

    #[error("Invalid listen address {0}: {1}")]
    InvalidAddr(String, String),

    #[error(transparent)]
    Resolve(#[from] ResolveError),
}

/// Development server.
pub struct DevServer {
    config: DevServerConfig,
}

impl DevServer {
    /// Create a new development server.
    pub fn new(config: DevServerConfig) -> Self {
        Self { config }
    }

    /// Start the development server in the discovered project.
    pub async fn start(self) -> Result<(), ServerError> {
        let project = Project::discover()?;
        self.start_in(project).await
    }

    /// Start the development server for a specific project.
    ///
    /// The pages directory is resolved and validated before the listener
    /// binds, so a bad configuration aborts startup instead of failing
    /// per-request.
    pub async fn start_in(self, project: Project) -> Result<(), ServerError> {
        let pages_dir = project.locate_pages_dir(self.config.pages_dir.as_deref())?;
        tracing::info!("serving pages from {}", pages_dir.display());

        let listen = format!("{}:{}", self.config.host, self.config.port);
        let addr: SocketAddr = listen
            .parse()
            .map_err(|e: std::net::AddrParseError| ServerError::InvalidAddr(listen, e.to_string()))?;

        let app = dev_router(project.root(), pages_dir);

        tracing::info!("Starting dev server at http://{}", addr);

        if self.config.open {
            let url = format!("http://{}", addr);
            let _ = open::that(&url);
        }

        let listener = tokio::net::TcpListener::bind(addr)
            .await
            .map_err(|e| ServerError::BindError(addr, e.to_string()))?;

        axum::serve(listener, app)
            .await
            .map_err(|e| ServerError::BindError(addr, e.to_string()))?;

        Ok(())
    }
}

/// Build the dev router: page interception layered over static serving of
/// the project root.
pub fn dev_router(project_root: &Path, pages_dir: PathBuf) -> Router {
    let ctx = Arc::new(PagesContext::new(pages_dir));

    Router::new()
        .fallback_service(ServeDir::new(project_root))
        .layer(from_fn_with_state(ctx, serve_page))
}
