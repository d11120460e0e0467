//! HTTP API module: fixed-response routes over a read-only identity.

pub mod handlers;
pub mod routes;

pub use handlers::AppState;
pub use routes::create_router;
