//! HTTP request handlers.
//!
//! Every route answers with the same fixed shape; the handlers never touch
//! the request body or query and have no failure path.

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde::Serialize;
use tracing::info;

use crate::metrics;

/// Read-only service identity shared with every handler.
///
/// Cloned per request by Axum's `State` extractor; both fields are
/// `Arc`-backed so the clone is cheap. Nothing here is mutable after
/// startup.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Name reported in the `service-name` field.
    pub service_name: Arc<str>,
    /// Host name resolved once at process start.
    pub hostname: Arc<str>,
}

impl AppState {
    /// Create state from the resolved configuration.
    pub fn new(service_name: &str, hostname: &str) -> Self {
        Self {
            service_name: service_name.into(),
            hostname: hostname.into(),
        }
    }

    fn respond(&self, message: String) -> ServiceResponse {
        ServiceResponse {
            service_name: self.service_name.to_string(),
            message,
            hostname: self.hostname.to_string(),
        }
    }
}

/// Fixed response shape returned by every route.
#[derive(Debug, Clone, Serialize)]
pub struct ServiceResponse {
    /// Name of the service that produced the reply.
    #[serde(rename = "service-name")]
    pub service_name: String,
    /// Route-specific message.
    pub message: String,
    /// Host the process is running on.
    pub hostname: String,
}

/// `GET /` - deployment smoke check.
pub async fn root(State(state): State<AppState>) -> impl IntoResponse {
    info!("received a GET request on /");
    metrics::inc_requests("GET", "/");

    let message = format!(
        "This is a http service[{}]! If you see this then the service is \
         deployed as working as expected :)",
        state.service_name
    );

    (StatusCode::OK, Json(state.respond(message)))
}

/// `GET /items` - list placeholder; nothing is actually listed.
pub async fn list_items(State(state): State<AppState>) -> impl IntoResponse {
    info!("received a GET request on /items");
    metrics::inc_requests("GET", "/items");

    (
        StatusCode::OK,
        Json(state.respond("list items request received".to_string())),
    )
}

/// `PUT /items` - create placeholder; nothing is actually created.
pub async fn put_items(State(state): State<AppState>) -> impl IntoResponse {
    info!("received a PUT request on /items");
    metrics::inc_requests("PUT", "/items");

    (
        StatusCode::CREATED,
        Json(state.respond("put items request received".to_string())),
    )
}

/// `POST /items` - update placeholder; nothing is actually updated.
pub async fn update_items(State(state): State<AppState>) -> impl IntoResponse {
    info!("received a POST request on /items");
    metrics::inc_requests("POST", "/items");

    (
        StatusCode::ACCEPTED,
        Json(state.respond("update items request received".to_string())),
    )
}

/// `DELETE /items` - delete placeholder; nothing is actually deleted.
///
/// The handler still builds a Response body; hyper omits it on the wire
/// because a 204 carries no content.
pub async fn delete_items(State(state): State<AppState>) -> impl IntoResponse {
    info!("received a DELETE request on /items");
    metrics::inc_requests("DELETE", "/items");

    (
        StatusCode::NO_CONTENT,
        Json(state.respond("received delete items request".to_string())),
    )
}
