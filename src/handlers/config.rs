//! Configuration handlers
//!
//! Returns public configuration settings to the frontend

use axum::{extract::State, response::Json};
use serde::Serialize;

use crate::render::zoom::SCALE_STEP;
use crate::render::Zoom;
use crate::routes::ApiResponse;
use crate::state::AppState;

/// Zoom bounds the chart surface should offer
#[derive(Debug, Serialize)]
pub struct ZoomBounds {
    pub min: Zoom,
    pub max: Zoom,
    pub step: f32,
    pub default: Zoom,
    /// Next level up from `default`, absent at the maximum
    #[serde(rename = "zoomIn", skip_serializing_if = "Option::is_none")]
    pub zoom_in: Option<Zoom>,
    /// Next level down from `default`, absent at the minimum
    #[serde(rename = "zoomOut", skip_serializing_if = "Option::is_none")]
    pub zoom_out: Option<Zoom>,
}

impl ZoomBounds {
    fn around(default: Zoom) -> Self {
        Self {
            min: Zoom::MIN,
            max: Zoom::MAX,
            step: SCALE_STEP,
            default,
            zoom_in: default.can_zoom_in().then(|| default.zoom_in()),
            zoom_out: default.can_zoom_out().then(|| default.zoom_out()),
        }
    }
}

/// Public configuration response
#[derive(Debug, Serialize)]
pub struct PublicConfig {
    /// Manager the default chart is rooted at
    #[serde(rename = "defaultRoot")]
    pub default_root: String,
    pub zoom: ZoomBounds,
    #[serde(rename = "darkMode")]
    pub dark_mode: bool,
}

/// GET /api/config
/// Returns public configuration settings
pub async fn get_config(State(state): State<AppState>) -> Json<ApiResponse<PublicConfig>> {
    let prefs = state.preferences().await;
    Json(ApiResponse::success(PublicConfig {
        default_root: state.config.chart.default_root.clone(),
        zoom: ZoomBounds::around(
            Zoom::nearest(state.config.chart.default_scale).unwrap_or_default(),
        ),
        dark_mode: prefs.dark_mode,
    }))
}
