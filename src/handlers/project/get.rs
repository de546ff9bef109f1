use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Extension, Json,
};

use crate::error::ApiError;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;
use crate::validation;

/// GET /project/:project_id - fetch a single project by id
///
/// Unlike the listing route, this lookup is not owner-scoped: any
/// authenticated user may read any project by id. A well-formed id with no
/// matching project answers 400, not 404.
pub async fn project_get(
    State(state): State<AppState>,
    Extension(_user): Extension<AuthUser>,
    Path(project_id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let id = validation::parse_project_id(&project_id)
        .ok_or_else(|| ApiError::bad_request(format!("{project_id} is not a valid ID")))?;

    let project = state.repository.find_by_id(id).await?.ok_or_else(|| {
        ApiError::bad_request(format!("ID {project_id} is not associated with any project"))
    })?;

    Ok(Json(project))
}
