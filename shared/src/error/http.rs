//! HTTP status code mapping for error codes

use super::codes::ErrorCode;
use http::StatusCode;

impl ErrorCode {
    /// Get the appropriate HTTP status code for this error code
    pub fn http_status(&self) -> StatusCode {
        match self {
            // 404 Not Found
            Self::RouteNotFound
            | Self::OrderNotFound
            | Self::OrderItemNotFound
            | Self::DishNotFound => StatusCode::NOT_FOUND,

            // 409 Conflict
            Self::DuplicateEntry => StatusCode::CONFLICT,

            // 503 Service Unavailable
            Self::ServiceUnavailable => StatusCode::SERVICE_UNAVAILABLE,

            // 500 Internal Server Error
            Self::DatabaseError => StatusCode::INTERNAL_SERVER_ERROR,

            // 400 Bad Request (validation, state and reference errors)
            Self::ValidationFailed
            | Self::InvalidRequest
            | Self::RequiredField
            | Self::ValueOutOfRange
            | Self::ReferenceNotFound
            | Self::OrderClosed
            | Self::OrderEmpty
            | Self::InvalidOrderStatus
            | Self::InvalidStatusTransition
            | Self::InvalidOrderType
            | Self::InvalidQuantity
            | Self::DishInvalidPrice => StatusCode::BAD_REQUEST,
        }
    }
}
