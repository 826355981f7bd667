//! gallery-api library - Gallery layout service
//!
//! Serves room geometry, wall layouts and navigation steps to the scene
//! renderer and list views. Stateless apart from the configuration it was
//! started with.

use axum::extract::DefaultBodyLimit;
use axum::http::{header, HeaderValue, Method};
use axum::Router;
use gallery_common::config::ServiceConfig;
use gallery_common::Room;
use std::sync::Arc;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::warn;

pub mod api;
pub mod dump;
pub mod error;

pub use error::{ApiError, ApiResult};

/// Largest accepted request body (assign payloads carry artwork metadata)
pub const MAX_BODY_BYTES: usize = 1024 * 1024;

/// Application state shared across HTTP handlers
///
/// Built once at startup and handed to the router; handlers never reach for
/// globals.
#[derive(Clone)]
pub struct AppState {
    /// Room every layout is computed for
    pub room: Room,
    /// Resolved service configuration
    pub config: Arc<ServiceConfig>,
}

impl AppState {
    /// Create new application state for the reference room
    pub fn new(config: ServiceConfig) -> Self {
        Self {
            room: Room::REFERENCE,
            config: Arc::new(config),
        }
    }
}

/// CORS policy restricted to the configured frontend origins
pub fn cors_layer(origins: &[String]) -> CorsLayer {
    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(e) => {
                warn!("Ignoring invalid CORS origin {:?}: {}", origin, e);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(allowed))
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE])
}

/// Build application router
pub fn build_router(state: AppState) -> Router {
    use axum::routing::{get, post};

    let cors = cors_layer(&state.config.cors_allowed_origins);

    let api_routes: Router<AppState> = Router::new()
        .route("/api/room", get(api::get_room))
        .route("/api/layout", get(api::get_layout))
        .route("/api/layout/assign", post(api::assign_layout))
        .route("/api/navigation/step", post(api::navigation_step));

    Router::new()
        .route("/", get(api::welcome))
        .merge(api::health_routes())
        .merge(api_routes)
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
