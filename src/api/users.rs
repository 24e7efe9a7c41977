//! User handlers

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Json,
};
use serde_json::Value;
use tracing::debug;

use super::handlers::AppState;
use crate::error::{ApiError, Result, BAD_REQUEST, SECURITY_QUESTIONS_ANSWERED};
use crate::models::{MessageResponse, SecurityAnswer, User};
use crate::validation::{validate_array, SECURITY_ANSWERS_SCHEMA};

/// Handler for GET /api/users
pub async fn list_users(State(state): State<AppState>) -> Json<Vec<User>> {
    Json(state.users.find_all().to_vec())
}

/// Handler for POST /api/users/:email/verify-security-question
///
/// The body is checked against the answer schema before the user is
/// looked up, so a malformed body is a 400 even for unknown emails.
pub async fn verify_security_questions(
    State(state): State<AppState>,
    Path(email): Path<String>,
    payload: std::result::Result<Json<Value>, JsonRejection>,
) -> Result<Json<MessageResponse>> {
    let answers = parse_answers(payload)?;

    state.users.verify_security_answers(&email, &answers)?;

    debug!(%email, "Security questions answered");
    Ok(Json(MessageResponse::new(SECURITY_QUESTIONS_ANSWERED)))
}

fn parse_answers(
    payload: std::result::Result<Json<Value>, JsonRejection>,
) -> Result<Vec<SecurityAnswer>> {
    let bad_request = || ApiError::Validation(BAD_REQUEST.to_string());

    let Json(body) = payload.map_err(|rejection| {
        debug!(error = %rejection, "Unreadable security answers body");
        bad_request()
    })?;

    validate_array(&SECURITY_ANSWERS_SCHEMA, &body).map_err(|violation| {
        debug!(%violation, "Security answers failed schema validation");
        bad_request()
    })?;

    serde_json::from_value(body).map_err(|_| bad_request())
}
