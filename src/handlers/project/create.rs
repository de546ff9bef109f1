use axum::{extract::State, http::StatusCode, response::IntoResponse, Extension, Json};
use serde_json::Value;

use crate::database::models::project::NewProjectData;
use crate::error::ApiError;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;
use crate::validation;

/// POST /project/new - validate and create a project owned by the caller
///
/// Responds 201 with the newly assigned identifier only, not the full entity.
pub async fn project_create(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Json(body): Json<Value>,
) -> Result<impl IntoResponse, ApiError> {
    validation::validate_new_project(&body).map_err(ApiError::validation_error)?;

    // Deserialization keeps only the declared field set; anything else in the
    // request body is dropped, never persisted.
    let data: NewProjectData = serde_json::from_value(body)
        .map_err(|e| ApiError::internal_server_error(format!("Failed to read payload: {e}")))?;

    let project = state.repository.create(user.user_id, data).await?;

    Ok((StatusCode::CREATED, project.id.to_string()))
}
