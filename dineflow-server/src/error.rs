//! Service-layer error type
//!
//! `ServiceError` lets handlers propagate storage errors (`sqlx::Error`,
//! [`StoreError`]) and domain errors ([`OrderError`], [`AppError`]) with `?`.
//! Storage errors are logged once, when they are turned into an `AppError`.

use axum::response::IntoResponse;
use shared::error::AppError;
use shared::order::{OrderError, StoreError};

/// Service-layer error with two variants
///
/// - `Db`: storage failure; constraint violations keep their own code,
///   everything else becomes `database_error`
/// - `App`: business-rule error, passed through to the client
#[derive(Debug)]
pub enum ServiceError {
    Db(StoreError),
    App(AppError),
}

impl From<sqlx::Error> for ServiceError {
    fn from(e: sqlx::Error) -> Self {
        ServiceError::Db(e.into())
    }
}

impl From<StoreError> for ServiceError {
    fn from(e: StoreError) -> Self {
        ServiceError::Db(e)
    }
}

impl From<OrderError> for ServiceError {
    fn from(e: OrderError) -> Self {
        match e {
            OrderError::Persistence(store) => ServiceError::Db(store),
            other => ServiceError::App(other.into()),
        }
    }
}

impl From<AppError> for ServiceError {
    fn from(e: AppError) -> Self {
        ServiceError::App(e)
    }
}

impl From<ServiceError> for AppError {
    fn from(e: ServiceError) -> Self {
        match e {
            ServiceError::App(app_err) => app_err,
            ServiceError::Db(store_err) => store_err.into(),
        }
    }
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> axum::response::Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}

pub type ServiceResult<T> = Result<T, ServiceError>;
