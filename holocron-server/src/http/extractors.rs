//! Custom Axum extractors
//!
//! Path parameters and request bodies are parsed here so malformed input
//! produces the same JSON error body as every other failure.

use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::http::request::Parts;
use axum::Json;
use serde::de::DeserializeOwned;

use super::error::ApiError;
use crate::models::{FavoriteKind, FavoriteTarget, ValidationError};

fn parse_id(field: &'static str, raw: &str) -> Result<i64, ValidationError> {
    raw.parse::<i64>().map_err(|_| ValidationError::InvalidFormat {
        field,
        reason: "must be an integer",
    })
}

/// Extract a single integer id from path
pub struct ValidId(pub i64);

impl<S> FromRequestParts<S> for ValidId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id): Path<String> = Path::from_request_parts(parts, state)
            .await
            .map_err(|_| {
                ApiError::Validation(ValidationError::InvalidFormat {
                    field: "id",
                    reason: "must be an integer",
                })
            })?;

        Ok(Self(parse_id("id", &id)?))
    }
}

/// Extract `/users/{user_id}/favorite/{kind}/{target_id}`
#[derive(Debug)]
pub struct FavoritePath {
    pub user_id: i64,
    pub target: FavoriteTarget,
}

impl<S> FromRequestParts<S> for FavoritePath
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path((user_id, kind, target_id)): Path<(String, String, String)> =
            Path::from_request_parts(parts, state).await.map_err(|_| {
                ApiError::Validation(ValidationError::InvalidFormat {
                    field: "path",
                    reason: "expected /users/{id}/favorite/{kind}/{target_id}",
                })
            })?;

        let user_id = parse_id("user id", &user_id)?;
        let kind: FavoriteKind = kind.parse()?;
        let target_id = parse_id("target id", &target_id)?;

        Ok(Self {
            user_id,
            target: FavoriteTarget::new(kind, target_id),
        })
    }
}

/// JSON body whose rejections (bad syntax, missing fields, wrong content
/// type) become `validation_error` responses instead of plain text
pub struct ValidJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection: JsonRejection| {
                ApiError::Validation(ValidationError::MalformedBody {
                    detail: rejection.body_text(),
                })
            })?;

        Ok(Self(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use axum::routing::{get, post};
    use axum::Router;
    use serde::Deserialize;
    use tower::ServiceExt;

    async fn extract(uri: &str) -> StatusCode {
        async fn handler(path: FavoritePath) -> String {
            format!("{} {:?}", path.user_id, path.target)
        }

        let app: Router = Router::new().route("/users/{id}/favorite/{kind}/{target_id}", get(handler));
        app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
            .status()
    }

    #[test]
    fn parses_ids() {
        assert_eq!(parse_id("id", "17").unwrap(), 17);
        assert!(parse_id("id", "abc").is_err());
        assert!(parse_id("id", "").is_err());
    }

    #[tokio::test]
    async fn favorite_path_accepts_known_kinds() {
        assert_eq!(extract("/users/1/favorite/planet/2").await, 200);
        assert_eq!(extract("/users/1/favorite/people/2").await, 200);
    }

    #[tokio::test]
    async fn favorite_path_rejects_bad_segments() {
        assert_eq!(extract("/users/1/favorite/starship/2").await, 400);
        assert_eq!(extract("/users/luke/favorite/planet/2").await, 400);
        assert_eq!(extract("/users/1/favorite/planet/x").await, 400);
    }

    #[tokio::test]
    async fn valid_id_rejects_non_integer() {
        async fn handler(ValidId(id): ValidId) -> String {
            id.to_string()
        }

        let app: Router = Router::new().route("/planets/{id}", get(handler));
        let response = app
            .oneshot(Request::builder().uri("/planets/hoth").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["message"], "id: must be an integer");
    }

    #[derive(Deserialize)]
    struct Rename {
        name: String,
    }

    async fn post_body(
        content_type: Option<&str>,
        body: &'static str,
    ) -> (StatusCode, serde_json::Value) {
        async fn handler(ValidJson(req): ValidJson<Rename>) -> String {
            req.name
        }

        let app: Router = Router::new().route("/rename", post(handler));
        let mut builder = Request::builder().method("POST").uri("/rename");
        if let Some(content_type) = content_type {
            builder = builder.header("content-type", content_type);
        }

        let response = app.oneshot(builder.body(Body::from(body)).unwrap()).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null))
    }

    #[tokio::test]
    async fn valid_json_accepts_matching_body() {
        let (status, _) = post_body(Some("application/json"), r#"{"name": "Bespin"}"#).await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn valid_json_rejections_are_json_400() {
        for (content_type, body) in [
            (Some("application/json"), "{not json"),
            (Some("application/json"), r#"{"title": "Bespin"}"#),
            (None, r#"{"name": "Bespin"}"#),
        ] {
            let (status, json) = post_body(content_type, body).await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "{body}");
            assert_eq!(json["error"], "validation_error");
            assert_eq!(json["status"], 400);
        }
    }
}
