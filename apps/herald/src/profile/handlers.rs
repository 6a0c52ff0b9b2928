//! Axum route handlers for the saved-profile endpoints.

use axum::{extract::State, Json};
use serde_json::{json, Value};
use tracing::debug;

use crate::errors::AppError;
use crate::models::profile::CandidateProfile;
use crate::state::AppState;

/// GET /personal-info
///
/// Returns the saved profile. With nothing saved this serializes to an
/// empty object — unset fields are absent, never null.
pub async fn handle_get_personal_info(State(state): State<AppState>) -> Json<CandidateProfile> {
    Json(state.profiles.current().await.unwrap_or_default())
}

/// POST /update-personal-info
///
/// Replaces the saved profile wholesale. Partial payloads are accepted;
/// fields absent from the payload are absent from the new profile — there
/// is no merging with the previous one.
pub async fn handle_update_personal_info(
    State(state): State<AppState>,
    payload: Option<Json<CandidateProfile>>,
) -> Result<Json<Value>, AppError> {
    let Some(Json(profile)) = payload else {
        return Err(AppError::Validation("No data provided".to_string()));
    };

    debug!(
        name_set = profile.name.is_some(),
        skills = profile.skills.len(),
        experience = profile.experience.len(),
        projects = profile.projects.len(),
        "personal info update received"
    );

    state.profiles.replace(profile).await;

    Ok(Json(json!({ "status": "success" })))
}
