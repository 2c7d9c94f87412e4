//! Admin endpoints - direct table editing for all four catalog tables
//!
//! Mounted under `/admin` unless the server runs with admin disabled.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    routing::{delete, get},
    Extension, Json, Router,
};
use serde::Deserialize;

use crate::db::repos::{Catalog, Favorite, FavoriteRepo, NamedRecord, NamedRepo, UserRepo, UserRow};
use crate::http::error::ApiError;
use crate::http::extractors::{ValidId, ValidJson};
use crate::http::server::AppState;
use crate::models::{EntityName, FavoriteTarget, Username};

/// Create or rename user request
#[derive(Deserialize)]
pub struct UserRequest {
    pub username: String,
}

/// Create or rename person/planet request
#[derive(Deserialize)]
pub struct NamedRequest {
    pub name: String,
}

/// Create favorite request. Exactly one target id must be present.
#[derive(Deserialize)]
pub struct FavoriteRequest {
    pub user_id: i64,
    #[serde(default)]
    pub people_id: Option<i64>,
    #[serde(default)]
    pub planet_id: Option<i64>,
}

// ============================================================================
// Users
// ============================================================================

async fn list_users(State(state): State<Arc<AppState>>) -> Result<Json<Vec<UserRow>>, ApiError> {
    Ok(Json(UserRepo::new(&state.pool).list().await?))
}

async fn create_user(
    State(state): State<Arc<AppState>>,
    ValidJson(req): ValidJson<UserRequest>,
) -> Result<(StatusCode, Json<UserRow>), ApiError> {
    let username = Username::new(&req.username)?;
    let user = UserRepo::new(&state.pool).create(&username).await?;
    Ok((StatusCode::CREATED, Json(user)))
}

async fn get_user(
    State(state): State<Arc<AppState>>,
    ValidId(id): ValidId,
) -> Result<Json<UserRow>, ApiError> {
    Ok(Json(UserRepo::new(&state.pool).get(id).await?))
}

async fn rename_user(
    State(state): State<Arc<AppState>>,
    ValidId(id): ValidId,
    ValidJson(req): ValidJson<UserRequest>,
) -> Result<Json<UserRow>, ApiError> {
    let username = Username::new(&req.username)?;
    Ok(Json(UserRepo::new(&state.pool).rename(id, &username).await?))
}

async fn delete_user(
    State(state): State<Arc<AppState>>,
    ValidId(id): ValidId,
) -> Result<StatusCode, ApiError> {
    UserRepo::new(&state.pool).delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// ============================================================================
// People and planets
// ============================================================================

async fn list_named(
    State(state): State<Arc<AppState>>,
    Extension(catalog): Extension<Catalog>,
) -> Result<Json<Vec<NamedRecord>>, ApiError> {
    Ok(Json(NamedRepo::new(&state.pool, catalog).list().await?))
}

async fn create_named(
    State(state): State<Arc<AppState>>,
    Extension(catalog): Extension<Catalog>,
    ValidJson(req): ValidJson<NamedRequest>,
) -> Result<(StatusCode, Json<NamedRecord>), ApiError> {
    let name = EntityName::new(&req.name)?;
    let record = NamedRepo::new(&state.pool, catalog).create(&name).await?;
    Ok((StatusCode::CREATED, Json(record)))
}

async fn get_named(
    State(state): State<Arc<AppState>>,
    Extension(catalog): Extension<Catalog>,
    ValidId(id): ValidId,
) -> Result<Json<NamedRecord>, ApiError> {
    Ok(Json(NamedRepo::new(&state.pool, catalog).get(id).await?))
}

async fn rename_named(
    State(state): State<Arc<AppState>>,
    Extension(catalog): Extension<Catalog>,
    ValidId(id): ValidId,
    ValidJson(req): ValidJson<NamedRequest>,
) -> Result<Json<NamedRecord>, ApiError> {
    let name = EntityName::new(&req.name)?;
    Ok(Json(NamedRepo::new(&state.pool, catalog).rename(id, &name).await?))
}

async fn delete_named(
    State(state): State<Arc<AppState>>,
    Extension(catalog): Extension<Catalog>,
    ValidId(id): ValidId,
) -> Result<StatusCode, ApiError> {
    NamedRepo::new(&state.pool, catalog).delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// People and planets share handlers; the table comes from the extension
fn named_router(catalog: Catalog) -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(list_named).post(create_named))
        .route(
            "/{id}",
            get(get_named).put(rename_named).delete(delete_named),
        )
        .layer(Extension(catalog))
}

// ============================================================================
// Favorites
// ============================================================================

async fn list_favorites(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Favorite>>, ApiError> {
    Ok(Json(FavoriteRepo::new(&state.pool).list().await?))
}

async fn create_favorite(
    State(state): State<Arc<AppState>>,
    ValidJson(req): ValidJson<FavoriteRequest>,
) -> Result<(StatusCode, Json<Favorite>), ApiError> {
    let target = FavoriteTarget::from_columns(req.people_id, req.planet_id)?;
    let favorite = FavoriteRepo::new(&state.pool).add(req.user_id, target).await?;
    Ok((StatusCode::CREATED, Json(favorite)))
}

async fn delete_favorite(
    State(state): State<Arc<AppState>>,
    ValidId(id): ValidId,
) -> Result<StatusCode, ApiError> {
    FavoriteRepo::new(&state.pool).delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Admin routes, to be nested under `/admin`
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/users", get(list_users).post(create_user))
        .route(
            "/users/{id}",
            get(get_user).put(rename_user).delete(delete_user),
        )
        .nest("/people", named_router(Catalog::People))
        .nest("/planets", named_router(Catalog::Planets))
        .route("/favorites", get(list_favorites).post(create_favorite))
        .route("/favorites/{id}", delete(delete_favorite))
}
