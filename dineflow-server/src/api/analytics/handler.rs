use axum::extract::State;
use serde::Deserialize;

use crate::api::ApiResult;
use crate::core::AppState;
use crate::db::analytics;
use crate::utils::AppQuery;
use shared::error::{ApiResponse, AppError, AppResult, ErrorCode};
use shared::models::{
    DishProfitMargin, EmployeePerformance, InventoryStatus, OrderStatusSummary, PaymentRecord,
    SalesPeriod, SalesReport, TopDish,
};

pub const DEFAULT_TOP_DISHES: i64 = 10;
pub const MAX_TOP_DISHES: i64 = 100;

#[derive(Debug, Deserialize)]
pub struct SalesQuery {
    pub period: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct TopDishesQuery {
    pub limit: Option<i64>,
}

fn parse_period(raw: Option<&str>) -> AppResult<SalesPeriod> {
    match raw {
        None => Ok(SalesPeriod::default()),
        Some(value) => SalesPeriod::parse(value).ok_or_else(|| {
            AppError::invalid_request(format!(
                "Invalid period '{value}', expected daily or weekly"
            ))
            .with_detail("period", value)
        }),
    }
}

fn top_dishes_limit(raw: Option<i64>) -> AppResult<i64> {
    let limit = raw.unwrap_or(DEFAULT_TOP_DISHES);
    if !(1..=MAX_TOP_DISHES).contains(&limit) {
        return Err(AppError::with_message(
            ErrorCode::ValueOutOfRange,
            format!("limit must be between 1 and {MAX_TOP_DISHES}"),
        )
        .with_detail("limit", limit));
    }
    Ok(limit)
}

/// Revenue of paid orders per day or week
pub async fn sales(
    State(state): State<AppState>,
    AppQuery(query): AppQuery<SalesQuery>,
) -> ApiResult<SalesReport> {
    let period = parse_period(query.period.as_deref())?;
    let report = analytics::sales(state.pool(), period).await?;
    Ok(ApiResponse::success(report))
}

pub async fn order_summary(State(state): State<AppState>) -> ApiResult<Vec<OrderStatusSummary>> {
    Ok(ApiResponse::list(analytics::order_summary(state.pool()).await?))
}

pub async fn employee_performance(
    State(state): State<AppState>,
) -> ApiResult<Vec<EmployeePerformance>> {
    Ok(ApiResponse::list(
        analytics::employee_performance(state.pool()).await?,
    ))
}

pub async fn profit_margin(State(state): State<AppState>) -> ApiResult<Vec<DishProfitMargin>> {
    Ok(ApiResponse::list(analytics::profit_margin(state.pool()).await?))
}

pub async fn top_dishes(
    State(state): State<AppState>,
    AppQuery(query): AppQuery<TopDishesQuery>,
) -> ApiResult<Vec<TopDish>> {
    let limit = top_dishes_limit(query.limit)?;
    Ok(ApiResponse::list(analytics::top_dishes(state.pool(), limit).await?))
}

/// Raw materials with LOW / MEDIUM / HIGH stock level, LOW first
pub async fn inventory_status(State(state): State<AppState>) -> ApiResult<Vec<InventoryStatus>> {
    Ok(ApiResponse::list(analytics::inventory_status(state.pool()).await?))
}

/// Latest payments
pub async fn payments(State(state): State<AppState>) -> ApiResult<Vec<PaymentRecord>> {
    Ok(ApiResponse::list(analytics::payments(state.pool()).await?))
}
