//! Directory browsing handlers

use axum::{
    extract::{Path, State},
    response::Json,
};

use crate::entity::{Administrator, Building};
use crate::error::{AppResult, OptionExt};
use crate::routes::ApiResponse;
use crate::state::AppState;

/// GET /api/administrators
pub async fn list_administrators(
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<Vec<Administrator>>>> {
    let administrators = state.directory.administrators().await?;
    Ok(Json(ApiResponse::success(administrators)))
}

/// GET /api/administrators/:id
pub async fn get_administrator(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<ApiResponse<Administrator>>> {
    let administrator = state
        .directory
        .administrators()
        .await?
        .into_iter()
        .find(|a| a.id == id)
        .ok_or_not_found(format!("administrator {}", id))?;
    Ok(Json(ApiResponse::success(administrator)))
}

/// GET /api/buildings
pub async fn list_buildings(
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<Vec<Building>>>> {
    let buildings = state.directory.buildings().await?;
    Ok(Json(ApiResponse::success(buildings)))
}
