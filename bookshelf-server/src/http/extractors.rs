//! Custom Axum extractors

use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::http::request::Parts;
use axum::Json;

use super::error::ApiError;
use crate::models::BookPayload;

/// Extract a numeric book id from path
pub struct BookId(pub i64);

impl<S> FromRequestParts<S> for BookId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw): Path<String> = Path::from_request_parts(parts, state)
            .await
            .map_err(|_| ApiError::InvalidId)?;

        let id = raw.parse::<i64>().map_err(|_| ApiError::InvalidId)?;
        Ok(Self(id))
    }
}

/// JSON book body. Every rejection collapses to a plain 400.
pub struct BookBody(pub BookPayload);

impl<S> FromRequest<S> for BookBody
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(payload) = Json::<BookPayload>::from_request(req, state)
            .await
            .map_err(|rejection| {
                tracing::debug!(%rejection, "rejected book body");
                ApiError::InvalidRequest
            })?;

        Ok(Self(payload))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{header, Request as HttpRequest, StatusCode};
    use axum::routing::{get, post};
    use axum::Router;
    use tower::ServiceExt;

    async fn echo_id(BookId(id): BookId) -> String {
        id.to_string()
    }

    async fn echo_title(BookBody(payload): BookBody) -> String {
        payload.title
    }

    fn app() -> Router {
        Router::new()
            .route("/books/{id}", get(echo_id))
            .route("/books", post(echo_title))
    }

    fn post_body(body: &'static str) -> HttpRequest<Body> {
        HttpRequest::builder()
            .method("POST")
            .uri("/books")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body))
            .unwrap()
    }

    #[tokio::test]
    async fn numeric_id_is_accepted() {
        let response = app()
            .oneshot(HttpRequest::builder().uri("/books/42").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn non_numeric_id_is_rejected() {
        let response = app()
            .oneshot(HttpRequest::builder().uri("/books/abc").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn malformed_json_is_400() {
        let response = app().oneshot(post_body("{not json")).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn wrong_shape_is_400_not_422() {
        let response = app()
            .oneshot(post_body(r#"{"title":"Dune","isbn":"x","author":"H","release":1}"#))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn missing_content_type_is_400() {
        let request = HttpRequest::builder()
            .method("POST")
            .uri("/books")
            .body(Body::from(r#"{"title":"Dune","isbn":1,"author":"H","release":1}"#))
            .unwrap();

        let response = app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
