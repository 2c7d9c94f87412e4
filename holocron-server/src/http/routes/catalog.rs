//! People and planet endpoints (read-only)

use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};

use crate::db::repos::{NamedRecord, NamedRepo};
use crate::http::error::ApiError;
use crate::http::extractors::ValidId;
use crate::http::server::AppState;

/// GET /people
async fn list_people(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<NamedRecord>>, ApiError> {
    let people = NamedRepo::people(&state.pool).list().await?;
    Ok(Json(people))
}

/// GET /people/{id}
async fn get_person(
    State(state): State<Arc<AppState>>,
    ValidId(id): ValidId,
) -> Result<Json<NamedRecord>, ApiError> {
    let person = NamedRepo::people(&state.pool).get(id).await?;
    Ok(Json(person))
}

/// GET /planets
async fn list_planets(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<NamedRecord>>, ApiError> {
    let planets = NamedRepo::planets(&state.pool).list().await?;
    Ok(Json(planets))
}

/// GET /planets/{id}
async fn get_planet(
    State(state): State<Arc<AppState>>,
    ValidId(id): ValidId,
) -> Result<Json<NamedRecord>, ApiError> {
    let planet = NamedRepo::planets(&state.pool).get(id).await?;
    Ok(Json(planet))
}

/// Catalog routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/people", get(list_people))
        .route("/people/{id}", get(get_person))
        .route("/planets", get(list_planets))
        .route("/planets/{id}", get(get_planet))
}
