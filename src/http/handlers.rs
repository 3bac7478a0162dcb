//! Method dispatch for the single provider route.
//!
//! # Responsibilities
//! - GET: read the `id` query parameter, fetch one project
//! - POST/PUT: decode the JSON body, create a project
//! - DELETE: read the `id` query parameter, delete the project
//!
//! # Design Decisions
//! - The `id` value is forwarded unvalidated; the Atlas API rejects bad
//!   ids and the error path relays that
//! - Malformed JSON bodies are a 400, not a silently-defaulted create
//! - Each handler builds a fresh Atlas client and issues exactly one call

use axum::extract::rejection::JsonRejection;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Deserialize;

use crate::atlas::ProjectRequest;
use crate::http::error::ApiError;
use crate::http::server::AppState;

/// Query parameters for GET and DELETE.
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct IdQuery {
    pub id: String,
}

/// GET `/?id=<projectId>` — fetch one project.
pub async fn get_project(
    State(state): State<AppState>,
    Query(query): Query<IdQuery>,
) -> Result<Response, ApiError> {
    let client = state.atlas_client()?;

    match client.get_project(&query.id).await {
        Ok(project) => Ok((StatusCode::OK, Json(project)).into_response()),
        Err(e) => {
            tracing::error!(id = %query.id, error = %e, "GET failed");
            Err(ApiError::from_upstream(e, "GET failed"))
        }
    }
}

/// POST/PUT `/` — create a project from the JSON body.
pub async fn create_project(
    State(state): State<AppState>,
    payload: Result<Json<ProjectRequest>, JsonRejection>,
) -> Result<Response, ApiError> {
    let Json(request) = payload.map_err(|rejection| {
        tracing::warn!(error = %rejection.body_text(), "Rejecting malformed create body");
        ApiError::new(
            StatusCode::BAD_REQUEST,
            "invalid_body",
            rejection.body_text(),
        )
    })?;

    let client = state.atlas_client()?;

    match client.create_project(&request).await {
        Ok(project) => Ok((StatusCode::OK, Json(project)).into_response()),
        Err(e) => {
            tracing::error!(name = %request.name, org_id = %request.org_id, error = %e, "Create failed");
            Err(ApiError::from_upstream(e, "create failed"))
        }
    }
}

/// DELETE `/?id=<projectId>` — delete a project.
pub async fn delete_project(
    State(state): State<AppState>,
    Query(query): Query<IdQuery>,
) -> Result<Response, ApiError> {
    let client = state.atlas_client()?;

    match client.delete_project(&query.id).await {
        Ok(()) => Ok((StatusCode::OK, "Success").into_response()),
        Err(e) => {
            tracing::error!(id = %query.id, error = %e, "DELETE failed");
            Err(ApiError::from_upstream(e, "DELETE failed"))
        }
    }
}
