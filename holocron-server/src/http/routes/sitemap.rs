//! Sitemap - lists every route the server answers

use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;

use super::{ADMIN_ROUTES, PUBLIC_ROUTES};
use crate::http::server::AppState;

#[derive(Serialize)]
pub struct SitemapResponse {
    pub name: &'static str,
    pub version: &'static str,
    pub endpoints: Vec<&'static str>,
}

/// GET /
async fn sitemap(State(state): State<Arc<AppState>>) -> Json<SitemapResponse> {
    let mut endpoints = PUBLIC_ROUTES.to_vec();
    if state.admin_enabled {
        endpoints.extend_from_slice(ADMIN_ROUTES);
    }

    Json(SitemapResponse {
        name: "holocron",
        version: env!("CARGO_PKG_VERSION"),
        endpoints,
    })
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/", get(sitemap))
}
