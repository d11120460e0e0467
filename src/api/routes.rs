//! HTTP route definitions.

use axum::{routing::get, Router};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use super::handlers::{delete_items, list_items, put_items, root, update_items, AppState};
use crate::config::REQUEST_TIMEOUT;

/// Create the service router.
///
/// Dispatch is exact on (path, method): five registrations, no path
/// parameters, no fallback. Unknown paths get the router's default 404 and
/// unregistered methods on `/items` its default 405, neither with a
/// Response body.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .route(
            "/items",
            get(list_items)
                .put(put_items)
                .post(update_items)
                .delete(delete_items),
        )
        .layer(TimeoutLayer::new(REQUEST_TIMEOUT))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Method, Request, StatusCode};
    use serde_json::Value;
    use tower::ServiceExt;

    fn test_router() -> Router {
        create_router(AppState::new("test-service", "test-host"))
    }

    async fn send(method: Method, uri: &str) -> (StatusCode, Option<Value>) {
        let response = test_router()
            .oneshot(
                Request::builder()
                    .method(method)
                    .uri(uri)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        let status = response.status();
        let is_json = response
            .headers()
            .get(header::CONTENT_TYPE)
            .map(|v| v.to_str().unwrap().starts_with("application/json"))
            .unwrap_or(false);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();

        if bytes.is_empty() {
            (status, None)
        } else {
            assert!(is_json, "{uri} body should be JSON");
            (status, Some(serde_json::from_slice(&bytes).unwrap()))
        }
    }

    #[tokio::test]
    async fn root_returns_ok_with_deployment_banner() {
        let (status, body) = send(Method::GET, "/").await;
        let body = body.expect("root should reply with a body");

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["service-name"], "test-service");
        assert_eq!(body["hostname"], "test-host");
        assert!(body["message"]
            .as_str()
            .unwrap()
            .contains("This is a http service[test-service]!"));
    }

    #[tokio::test]
    async fn list_items_returns_ok() {
        let (status, body) = send(Method::GET, "/items").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.unwrap()["message"], "list items request received");
    }

    #[tokio::test]
    async fn put_items_returns_created() {
        let (status, body) = send(Method::PUT, "/items").await;

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body.unwrap()["message"], "put items request received");
    }

    #[tokio::test]
    async fn post_items_returns_accepted() {
        let (status, body) = send(Method::POST, "/items").await;

        assert_eq!(status, StatusCode::ACCEPTED);
        assert_eq!(body.unwrap()["message"], "update items request received");
    }

    #[tokio::test]
    async fn delete_items_returns_no_content() {
        let (status, body) = send(Method::DELETE, "/items").await;

        assert_eq!(status, StatusCode::NO_CONTENT);
        // The handler constructs a body even though hyper drops it for 204.
        assert_eq!(body.unwrap()["message"], "received delete items request");
    }

    #[tokio::test]
    async fn identity_fields_are_identical_across_routes() {
        let routes = [
            (Method::GET, "/"),
            (Method::GET, "/items"),
            (Method::PUT, "/items"),
            (Method::POST, "/items"),
            (Method::DELETE, "/items"),
        ];

        for (method, uri) in routes {
            let (_, body) = send(method.clone(), uri).await;
            let body = body.expect("every registered route replies with a body");

            assert_eq!(body["service-name"], "test-service", "{method} {uri}");
            assert_eq!(body["hostname"], "test-host", "{method} {uri}");
        }
    }

    #[tokio::test]
    async fn unknown_path_gets_default_not_found() {
        let (status, body) = send(Method::GET, "/nope").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body.is_none(), "404 must not carry a Response body");
    }

    #[tokio::test]
    async fn unregistered_method_gets_default_method_not_allowed() {
        let (status, body) = send(Method::PATCH, "/items").await;

        assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
        assert!(body.is_none(), "405 must not carry a Response body");
    }
}
