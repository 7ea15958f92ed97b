//! Dish API Handlers

use axum::extract::State;

use crate::api::{ApiResult, Created, created};
use crate::core::AppState;
use crate::db::dish;
use crate::error::ServiceResult;
use crate::utils::{AppJson, AppPath};
use shared::error::{ApiResponse, AppError, ErrorCode};
use shared::models::{Dish, DishCreate};

pub async fn list(State(state): State<AppState>) -> ApiResult<Vec<Dish>> {
    let dishes = dish::list_available(state.pool()).await?;
    Ok(ApiResponse::list(dishes))
}

pub async fn get_by_id(
    State(state): State<AppState>,
    AppPath(id): AppPath<i64>,
) -> ApiResult<Dish> {
    let dish = dish::find_by_id(state.pool(), id)
        .await?
        .ok_or_else(|| AppError::new(ErrorCode::DishNotFound).with_detail("dish_id", id))?;
    Ok(ApiResponse::success(dish))
}

pub async fn create(
    State(state): State<AppState>,
    AppJson(payload): AppJson<DishCreate>,
) -> ServiceResult<Created<Dish>> {
    payload.validate()?;
    let dish = dish::create(state.pool(), &payload).await?;
    tracing::info!(dish_id = dish.dish_id, name = %dish.name, price = %dish.sale_price, "Dish created");
    Ok(created("Dish created successfully", dish))
}
