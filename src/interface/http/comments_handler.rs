use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::Serialize;
use tracing::info;

use crate::{
    application::dto::{
        CommentResponse, CreateCommentRequest, DeleteCommentResponse, HealthResponse,
        UpdateCommentRequest,
    },
    domain::errors::DomainError,
    interface::http::problem::{ApiProblem, ApiResult},
    state::AppState,
};

pub async fn healthcheck() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

pub async fn readiness(State(state): State<AppState>) -> ApiResult<Json<HealthResponse>> {
    state
        .comment_service
        .ping()
        .await
        .map_err(ApiProblem::unavailable)?;
    Ok(Json(HealthResponse { status: "ready" }))
}

pub async fn post_comment(
    State(state): State<AppState>,
    payload: Result<Json<CreateCommentRequest>, JsonRejection>,
) -> ApiResult<Response> {
    let Json(request) = payload.map_err(ApiProblem::from_json_rejection)?;
    request.validate().map_err(ApiProblem::from_domain)?;

    let created = state
        .comment_service
        .post_comment(request.into_draft())
        .await
        .map_err(ApiProblem::from_domain)?;

    info!(comment_id = %created.id, "comment created");
    encode_json(&CommentResponse::from(created))
}

pub async fn get_comment(
    State(state): State<AppState>,
    id: Option<Path<String>>,
) -> ApiResult<Response> {
    let id = require_id(id)?;
    let comment = state
        .comment_service
        .get_comment(&id)
        .await
        .map_err(ApiProblem::from_domain)?;

    encode_json(&CommentResponse::from(comment))
}

pub async fn update_comment(
    State(state): State<AppState>,
    id: Option<Path<String>>,
    payload: Result<Json<UpdateCommentRequest>, JsonRejection>,
) -> ApiResult<Response> {
    let id = require_id(id)?;
    let Json(request) = payload.map_err(ApiProblem::from_json_rejection)?;

    let updated = state
        .comment_service
        .update_comment(&id, request.into_draft())
        .await
        .map_err(ApiProblem::from_domain)?;

    info!(comment_id = %updated.id, "comment updated");
    encode_json(&CommentResponse::from(updated))
}

pub async fn delete_comment(
    State(state): State<AppState>,
    id: Option<Path<String>>,
) -> ApiResult<Response> {
    let id = require_id(id)?;
    state
        .comment_service
        .delete_comment(&id)
        .await
        .map_err(ApiProblem::from_domain)?;

    info!(comment_id = %id, "comment deleted");
    encode_json(&DeleteCommentResponse::deleted())
}

/// The id routes are also mounted without a segment, in which case the path
/// extractor yields nothing and the request is rejected here.
fn require_id(id: Option<Path<String>>) -> ApiResult<String> {
    match id {
        Some(Path(id)) if !id.trim().is_empty() => Ok(id),
        _ => Err(ApiProblem::from_domain(DomainError::validation(
            "comment id is required",
        ))),
    }
}

/// Encodes the body up front so a serialization failure becomes a logged 500
/// rather than a half-written response.
fn encode_json<T: Serialize>(value: &T) -> ApiResult<Response> {
    let body = serde_json::to_vec(value)
        .map_err(|err| ApiProblem::internal(format!("failed to encode response: {err}")))?;

    Ok((
        StatusCode::OK,
        [(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/json"),
        )],
        body,
    )
        .into_response())
}
