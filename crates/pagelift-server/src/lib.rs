//! Development server for multi-page sites.
//!
//! Page requests are served straight from the pages directory; everything
//! else falls back to static serving of the project root.

pub mod middleware;
pub mod server;

pub use middleware::{serve_page, PagesContext};
pub use server::{dev_router, DevServer, DevServerConfig, ServerError};
