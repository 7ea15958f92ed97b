use axum::extract::State;

use crate::api::ApiResult;
use crate::core::AppState;
use crate::db::raw_material;
use shared::ApiResponse;
use shared::models::RawMaterial;

/// All raw materials by name
pub async fn list(State(state): State<AppState>) -> ApiResult<Vec<RawMaterial>> {
    let materials = raw_material::list_all(state.pool()).await?;
    Ok(ApiResponse::list(materials))
}
