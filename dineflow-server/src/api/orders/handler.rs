//! Order API Handlers

use axum::extract::State;
use serde::Deserialize;

use crate::api::{ApiResult, Created, created};
use crate::core::AppState;
use crate::error::ServiceResult;
use crate::orders::Checkout;
use crate::utils::{AppJson, AppPath, AppQuery};
use shared::ApiResponse;
use shared::billing::Bill;
use shared::models::{
    Order, OrderCreate, OrderDetail, OrderItemCreate, OrderItemDetail, OrderStatusUpdate,
    OrderSummary,
};

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub status: Option<String>,
}

pub async fn create(
    State(state): State<AppState>,
    AppJson(payload): AppJson<OrderCreate>,
) -> ServiceResult<Created<Order>> {
    let order = state.orders.create_order(payload).await?;
    Ok(created("Order created successfully", order))
}

pub async fn list(
    State(state): State<AppState>,
    AppQuery(query): AppQuery<ListQuery>,
) -> ApiResult<Vec<OrderSummary>> {
    let orders = state.orders.list_orders(query.status.as_deref()).await?;
    tracing::debug!(count = orders.len(), status = ?query.status, "Listed orders");
    Ok(ApiResponse::list(orders))
}

pub async fn get_by_id(
    State(state): State<AppState>,
    AppPath(id): AppPath<i64>,
) -> ApiResult<OrderDetail> {
    let detail = state.orders.get_order(id).await?;
    Ok(ApiResponse::success(detail))
}

pub async fn bill(State(state): State<AppState>, AppPath(id): AppPath<i64>) -> ApiResult<Bill> {
    let bill = state.orders.get_bill(id).await?;
    Ok(ApiResponse::success(bill))
}

pub async fn add_item(
    State(state): State<AppState>,
    AppPath(id): AppPath<i64>,
    AppJson(payload): AppJson<OrderItemCreate>,
) -> ServiceResult<Created<OrderItemDetail>> {
    let item = state.orders.add_item(id, payload).await?;
    Ok(created("Item added to order", item))
}

pub async fn remove_item(
    State(state): State<AppState>,
    AppPath((id, item_id)): AppPath<(i64, i64)>,
) -> ApiResult<OrderDetail> {
    let detail = state.orders.remove_item(id, item_id).await?;
    Ok(ApiResponse::success_with_message("Item removed from order", detail))
}

pub async fn update_status(
    State(state): State<AppState>,
    AppPath(id): AppPath<i64>,
    AppJson(payload): AppJson<OrderStatusUpdate>,
) -> ApiResult<Order> {
    let order = state.orders.set_status(id, &payload.status).await?;
    Ok(ApiResponse::success_with_message(
        format!("Order status updated to {}", order.status),
        order,
    ))
}

pub async fn checkout(
    State(state): State<AppState>,
    AppPath(id): AppPath<i64>,
) -> ApiResult<Checkout> {
    let checkout = state.orders.checkout(id).await?;
    Ok(ApiResponse::success_with_message("Order paid", checkout))
}
