//! UI preference handlers

use axum::{extract::State, response::Json};

use crate::config::UiPreferences;
use crate::routes::ApiResponse;
use crate::state::AppState;

/// GET /api/preferences
pub async fn get_preferences(State(state): State<AppState>) -> Json<ApiResponse<UiPreferences>> {
    Json(ApiResponse::success(state.preferences().await))
}

/// POST /api/preferences/update
pub async fn update_preferences(
    State(state): State<AppState>,
    Json(req): Json<UiPreferences>,
) -> Json<ApiResponse<UiPreferences>> {
    tracing::info!(dark_mode = req.dark_mode, "Updating UI preferences");
    state.update_preferences(req.clone()).await;
    Json(ApiResponse::success(req))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;

    use axum::{
        body::{to_bytes, Body},
        http::{header, Method, Request, StatusCode},
    };
    use tower::ServiceExt;

    use crate::config::Config;
    use crate::directory::{DirectorySeed, InMemoryDirectory};
    use crate::routes::create_router;
    use crate::state::AppState;

    #[tokio::test]
    async fn test_dark_mode_switches_chart_theme() {
        let directory = Arc::new(InMemoryDirectory::new(DirectorySeed::demo(), Duration::ZERO));
        let state = AppState::new(directory, Config::default());
        let app = create_router(state.clone());

        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method(Method::POST)
                    .uri("/api/preferences/update")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(r#"{"darkMode":true}"#))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert!(state.preferences().await.dark_mode);

        let response = app
            .oneshot(Request::builder().uri("/api/org-chart/svg").body(Body::empty()).unwrap())
            .await
            .unwrap();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let svg = String::from_utf8(body.to_vec()).unwrap();
        assert!(svg.contains("fill=\"#121212\""));
    }
}
