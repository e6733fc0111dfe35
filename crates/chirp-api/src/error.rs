use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::{error, warn};

use chirp_core::ServiceError;

/// Maps service failure kinds onto transport status codes. Failure bodies
/// are empty, matching the original wire contract.
pub struct ApiError(ServiceError);

impl From<ServiceError> for ApiError {
    fn from(err: ServiceError) -> Self {
        Self(err)
    }
}

impl ApiError {
    pub fn internal(err: impl Into<anyhow::Error>) -> Self {
        Self(ServiceError::Store(err.into()))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            ServiceError::InvalidInput(_)
            | ServiceError::InvalidMessage(_)
            | ServiceError::NotFound => StatusCode::BAD_REQUEST,
            ServiceError::DuplicateUsername => StatusCode::CONFLICT,
            ServiceError::AuthenticationFailed => StatusCode::UNAUTHORIZED,
            ServiceError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        match &self.0 {
            ServiceError::Store(e) => error!("store failure: {:#}", e),
            e => warn!("request rejected: {}", e),
        }

        status.into_response()
    }
}
