//! Application router.
//!
//! Returns a composable `Router` that can be mounted on any axum server.
//! No auth middleware — this is an internal staff tool bound to loopback
//! by default; there is nothing stateful or destructive behind any route.

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use tower_http::services::ServeDir;

use crate::api::endpoints;
use crate::api::pages;
use crate::api::types::ApiContext;
use crate::templates::TemplateStore;

/// Build the full application router.
///
/// NOTE: Path params use `:param` syntax (matchit 0.7 / axum 0.7).
pub fn app_router(store: Arc<TemplateStore>) -> Router {
    let ctx = ApiContext::new(store.clone());

    let api = Router::new()
        .route("/health", get(endpoints::health::check))
        .route("/templates", get(endpoints::templates::list))
        .route("/templates/:name", get(endpoints::templates::fetch))
        .route("/templates/:name/fill", post(endpoints::templates::fill))
        .with_state(ctx.clone());

    let ui = Router::new()
        .route("/", get(pages::home))
        .route("/editor/:name", get(pages::editor))
        .with_state(ctx);

    Router::new()
        .nest("/api", api)
        .merge(ui)
        // Raw access to the templates directory, for sidecar assets the
        // PDF conversion leaves next to the HTML files.
        .nest_service("/files", ServeDir::new(store.dir().to_path_buf()))
}
