//! Page request interception.

use std::path::PathBuf;
use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::header,
    middleware::Next,
    response::{IntoResponse, Response},
};

/// Immutable per-server state shared by every in-flight request.
#[derive(Debug, Clone)]
pub struct PagesContext {
    pages_dir: PathBuf,
}

impl PagesContext {
    /// Create the context from an already-validated pages directory.
    pub fn new(pages_dir: PathBuf) -> Self {
        Self { pages_dir }
    }
}

/// Serve `*.html` requests from the pages directory.
///
/// The request path loses a single leading `/` and is joined onto the pages
/// directory. When the resulting file exists, its raw bytes are returned
/// with a `text/html` content type, terminating the request. Anything else
/// falls through to the inner service untouched; no 404 is synthesized here.
pub async fn serve_page(
    State(ctx): State<Arc<PagesContext>>,
    request: Request,
    next: Next,
) -> Response {
    let path = request.uri().path();

    if path.ends_with(".html") {
        let relative = path.strip_prefix('/').unwrap_or(path);
        let candidate = ctx.pages_dir.join(relative);

        if candidate.is_file() {
            match tokio::fs::read(&candidate).await {
                Ok(bytes) => {
                    tracing::debug!("serving {} from pages directory", path);
                    return ([(header::CONTENT_TYPE, "text/html")], bytes).into_response();
                }
                Err(e) => {
                    tracing::warn!("failed to read {}: {}", candidate.display(), e);
                }
            }
        }
    }

    next.run(request).await
}
