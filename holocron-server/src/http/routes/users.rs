//! User and favorite endpoints

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;

use crate::db::repos::{Favorite, FavoriteRepo, UserRepo, UserWithFavorites};
use crate::http::error::ApiError;
use crate::http::extractors::{FavoritePath, ValidId};
use crate::http::server::AppState;

/// Confirmation body for removals
#[derive(Serialize)]
pub struct MessageResponse {
    pub message: String,
}

/// GET /users - users with their favorites nested
async fn list_users(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<UserWithFavorites>>, ApiError> {
    let users = UserRepo::new(&state.pool).list_with_favorites().await?;
    Ok(Json(users))
}

/// GET /users/{id}/favorites
async fn list_favorites(
    State(state): State<Arc<AppState>>,
    ValidId(user_id): ValidId,
) -> Result<Json<Vec<Favorite>>, ApiError> {
    let favorites = FavoriteRepo::new(&state.pool).list_for_user(user_id).await?;
    Ok(Json(favorites))
}

/// POST /users/{id}/favorite/{kind}/{target_id}
async fn add_favorite(
    State(state): State<Arc<AppState>>,
    path: FavoritePath,
) -> Result<(StatusCode, Json<Favorite>), ApiError> {
    let favorite = FavoriteRepo::new(&state.pool)
        .add(path.user_id, path.target)
        .await?;

    Ok((StatusCode::CREATED, Json(favorite)))
}

/// DELETE /users/{id}/favorite/{kind}/{target_id}
async fn remove_favorite(
    State(state): State<Arc<AppState>>,
    path: FavoritePath,
) -> Result<Json<MessageResponse>, ApiError> {
    let kind = path.target.kind();
    FavoriteRepo::new(&state.pool)
        .remove(path.user_id, path.target)
        .await?;

    Ok(Json(MessageResponse {
        message: format!("{} {} removed from favorites", kind.resource(), path.target.id()),
    }))
}

/// User routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/users", get(list_users))
        .route("/users/{id}/favorites", get(list_favorites))
        .route(
            "/users/{id}/favorite/{kind}/{target_id}",
            post(add_favorite).delete(remove_favorite),
        )
}
