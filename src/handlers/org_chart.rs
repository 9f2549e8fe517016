//! Organization chart handlers
//!
//! Every request builds a fresh tree; nothing is cached between calls.

use axum::{
    extract::{Path, Query, State},
    http::header,
    response::{IntoResponse, Json, Response},
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::org::{AdministratorView, BuiltTree, ChartView, Diagnostic, OrgNode};
use crate::render::{self, Zoom};
use crate::routes::ApiResponse;
use crate::state::AppState;

/// Query for manager-level charts
#[derive(Debug, Default, Deserialize)]
pub struct OrgChartQuery {
    #[serde(rename = "rootId")]
    pub root_id: Option<String>,
    #[serde(rename = "viewMode")]
    pub view_mode: Option<String>,
    pub scale: Option<f32>,
}

/// Query for administrator-level charts
#[derive(Debug, Default, Deserialize)]
pub struct AdminChartQuery {
    #[serde(rename = "viewMode")]
    pub view_mode: Option<String>,
    pub scale: Option<f32>,
}

/// Chart response
#[derive(Debug, Serialize)]
pub struct ChartResponse {
    #[serde(rename = "viewMode")]
    pub view_mode: String,
    #[serde(rename = "nodeCount")]
    pub node_count: usize,
    pub depth: usize,
    pub root: OrgNode,
    pub diagnostics: Vec<Diagnostic>,
    #[serde(rename = "generatedAt")]
    pub generated_at: DateTime<Utc>,
}

impl ChartResponse {
    fn new(view_mode: impl Into<String>, tree: BuiltTree) -> Self {
        Self {
            view_mode: view_mode.into(),
            node_count: tree.root.count(),
            depth: tree.root.depth(),
            root: tree.root,
            diagnostics: tree.diagnostics,
            generated_at: Utc::now(),
        }
    }
}

fn chart_view(raw: Option<&str>) -> AppResult<ChartView> {
    raw.map(str::parse::<ChartView>).transpose().map(Option::unwrap_or_default)
}

fn administrator_view(raw: Option<&str>) -> AppResult<AdministratorView> {
    raw.map(str::parse::<AdministratorView>).transpose().map(Option::unwrap_or_default)
}

/// Requested scale snapped to the zoom grid, or the configured default
fn zoom(state: &AppState, scale: Option<f32>) -> AppResult<Zoom> {
    match scale {
        Some(scale) => Zoom::nearest(scale).ok_or_else(|| {
            AppError::Validation(format!(
                "scale {} outside {}..={}",
                scale,
                render::zoom::MIN_SCALE,
                render::zoom::MAX_SCALE
            ))
        }),
        None => Ok(Zoom::nearest(state.config.chart.default_scale).unwrap_or_default()),
    }
}

fn svg_response(svg: String) -> Response {
    ([(header::CONTENT_TYPE, "image/svg+xml")], svg).into_response()
}

async fn manager_chart(state: &AppState, query: &OrgChartQuery) -> AppResult<(ChartView, BuiltTree)> {
    let view = chart_view(query.view_mode.as_deref())?;
    let root_id = query
        .root_id
        .as_deref()
        .unwrap_or(&state.config.chart.default_root);
    let tree = state.org.get_organization_chart(root_id, view).await?;
    Ok((view, tree))
}

/// GET /api/org-chart
pub async fn get_org_chart(
    State(state): State<AppState>,
    Query(query): Query<OrgChartQuery>,
) -> AppResult<Json<ApiResponse<ChartResponse>>> {
    let (view, tree) = manager_chart(&state, &query).await?;
    Ok(Json(ApiResponse::success(ChartResponse::new(view.as_str(), tree))))
}

/// GET /api/org-chart/svg
pub async fn get_org_chart_svg(
    State(state): State<AppState>,
    Query(query): Query<OrgChartQuery>,
) -> AppResult<Response> {
    let zoom = zoom(&state, query.scale)?;
    let (_, tree) = manager_chart(&state, &query).await?;
    let theme = state.theme().await;
    Ok(svg_response(render::render_svg(&tree.root, &theme, zoom)))
}

/// GET /api/administrators/:id/org-chart
pub async fn get_administrator_org_chart(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(query): Query<AdminChartQuery>,
) -> AppResult<Json<ApiResponse<ChartResponse>>> {
    let view = administrator_view(query.view_mode.as_deref())?;
    let tree = state.org.get_administrator_organization_chart(&id, view).await?;
    Ok(Json(ApiResponse::success(ChartResponse::new(view.as_str(), tree))))
}

/// GET /api/administrators/:id/org-chart/svg
pub async fn get_administrator_org_chart_svg(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(query): Query<AdminChartQuery>,
) -> AppResult<Response> {
    let view = administrator_view(query.view_mode.as_deref())?;
    let zoom = zoom(&state, query.scale)?;
    let tree = state.org.get_administrator_organization_chart(&id, view).await?;
    let theme = state.theme().await;
    Ok(svg_response(render::render_svg(&tree.root, &theme, zoom)))
}
