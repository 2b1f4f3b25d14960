//! HTTP layer: a composable axum router over the template store plus the
//! server lifecycle that runs it.
//!
//! `/api/*` carries the JSON/HTML endpoints, `/` and `/editor/:name` are the
//! server-rendered pages, `/files/*` exposes the raw templates directory.

pub mod endpoints;
pub mod error;
pub mod pages;
pub mod router;
pub mod server;
pub mod types;

pub use router::app_router;
pub use server::AppServer;
pub use types::ApiContext;
