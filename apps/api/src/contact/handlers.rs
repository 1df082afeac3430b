//! Axum route handler for the contact endpoint.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::contact::relay;
use crate::errors::AppError;
use crate::state::AppState;

/// Contact-form submission. Absent fields default to empty strings; this
/// endpoint performs no validation and forwards whatever it was given.
#[derive(Debug, Deserialize)]
pub struct ContactRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct ContactResponse {
    pub success: bool,
}

/// POST /send
pub async fn handle_send(
    State(state): State<AppState>,
    Json(request): Json<ContactRequest>,
) -> Result<Json<ContactResponse>, AppError> {
    relay::notify(
        &request.name,
        &request.email,
        &request.message,
        state.mailer.as_ref(),
    )
    .await?;

    Ok(Json(ContactResponse { success: true }))
}
