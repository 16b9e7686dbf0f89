use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::Serialize;
use tracing::{error, warn};
use uuid::Uuid;

use crate::domain::errors::DomainError;

pub type ApiResult<T> = Result<T, ApiProblem>;

/// Error response in `application/problem+json` form.
///
/// `detail` is shown to the caller. `cause` is only logged, so storage and
/// encoding failures never leak their underlying message.
#[derive(Debug)]
pub struct ApiProblem {
    status: StatusCode,
    title: &'static str,
    detail: String,
    kind: &'static str,
    cause: Option<String>,
    correlation_id: String,
}

impl ApiProblem {
    pub fn from_domain(error: DomainError) -> Self {
        match error {
            DomainError::Validation(detail) => Self::new(
                StatusCode::BAD_REQUEST,
                "Validation failed",
                "https://comments.dev/problems/validation",
                detail,
            ),
            DomainError::NotFound(detail) => Self::new(
                StatusCode::NOT_FOUND,
                "Not found",
                "https://comments.dev/problems/not-found",
                detail,
            ),
            DomainError::Storage(cause) => Self::new(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Storage error",
                "https://comments.dev/problems/storage",
                "the comment store could not complete the request",
            )
            .with_cause(cause),
            DomainError::Internal(cause) => Self::internal(cause),
        }
    }

    pub fn from_json_rejection(rejection: JsonRejection) -> Self {
        Self::from_domain(DomainError::validation(rejection.body_text()))
    }

    pub fn internal(cause: impl Into<String>) -> Self {
        Self::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            "Internal server error",
            "https://comments.dev/problems/internal",
            "the server failed to handle the request",
        )
        .with_cause(cause)
    }

    pub fn unavailable(error: DomainError) -> Self {
        Self::new(
            StatusCode::SERVICE_UNAVAILABLE,
            "Service unavailable",
            "https://comments.dev/problems/unavailable",
            "the comment store is not ready",
        )
        .with_cause(error.to_string())
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    fn new(
        status: StatusCode,
        title: &'static str,
        kind: &'static str,
        detail: impl Into<String>,
    ) -> Self {
        Self {
            status,
            title,
            detail: detail.into(),
            kind,
            cause: None,
            correlation_id: Uuid::new_v4().to_string(),
        }
    }

    fn with_cause(mut self, cause: impl Into<String>) -> Self {
        self.cause = Some(cause.into());
        self
    }
}

#[derive(Debug, Serialize)]
struct ProblemDetails {
    #[serde(rename = "type")]
    kind: String,
    title: String,
    status: u16,
    detail: String,
    correlation_id: String,
}

impl IntoResponse for ApiProblem {
    fn into_response(self) -> Response {
        let cause = self.cause.as_deref().unwrap_or(&self.detail);
        if self.status.is_server_error() {
            error!(
                status = self.status.as_u16(),
                correlation_id = %self.correlation_id,
                error = %cause,
                "request failed"
            );
        } else if self.status != StatusCode::NOT_FOUND {
            warn!(
                status = self.status.as_u16(),
                correlation_id = %self.correlation_id,
                detail = %self.detail,
                "request rejected"
            );
        }

        let payload = ProblemDetails {
            kind: self.kind.to_string(),
            title: self.title.to_string(),
            status: self.status.as_u16(),
            detail: self.detail,
            correlation_id: self.correlation_id,
        };

        let mut response = (self.status, Json(payload)).into_response();
        response.headers_mut().insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/problem+json"),
        );

        response
    }
}
