//! Employee API Handlers

use axum::extract::State;

use crate::api::ApiResult;
use crate::core::AppState;
use crate::db::employee;
use shared::ApiResponse;
use shared::models::Employee;

/// List active employees
pub async fn list(State(state): State<AppState>) -> ApiResult<Vec<Employee>> {
    let employees = employee::list_active(state.pool()).await?;
    Ok(ApiResponse::list(employees))
}
