use axum::{
    http::Uri,
    routing::{get, post},
    Router,
};
use serde::Serialize;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::error::AppError;
use crate::handlers;
use crate::state::AppState;

pub mod health;

/// API response wrapper
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub code: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            code: true,
            message: "success".to_string(),
            data: Some(data),
        }
    }
}

/// Create the main router
pub fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // API routes
    let api_routes = Router::new()
        // Health check
        .route("/health", get(health::health_check))
        // Config routes
        .route("/config", get(handlers::config::get_config))
        // Preference routes
        .route("/preferences", get(handlers::preferences::get_preferences))
        .route("/preferences/update", post(handlers::preferences::update_preferences))
        // Organization chart routes
        .route("/org-chart", get(handlers::org_chart::get_org_chart))
        .route("/org-chart/svg", get(handlers::org_chart::get_org_chart_svg))
        // Directory routes
        .route("/administrators", get(handlers::directory::list_administrators))
        .route("/administrators/:id", get(handlers::directory::get_administrator))
        .route(
            "/administrators/:id/org-chart",
            get(handlers::org_chart::get_administrator_org_chart),
        )
        .route(
            "/administrators/:id/org-chart/svg",
            get(handlers::org_chart::get_administrator_org_chart_svg),
        )
        .route("/buildings", get(handlers::directory::list_buildings));

    Router::new()
        .nest("/api", api_routes)
        .fallback(fallback)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Fallback handler for 404
pub async fn fallback(uri: Uri) -> AppError {
    AppError::NotFound(format!("route {}", uri.path()))
}
