use axum::{extract::State, response::IntoResponse, Extension, Json};

use crate::error::ApiError;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// GET /project - list the caller's own projects
pub async fn project_list(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
) -> Result<impl IntoResponse, ApiError> {
    let projects = state.repository.list_by_owner(user.user_id).await?;

    Ok(Json(projects))
}
