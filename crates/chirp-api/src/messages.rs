use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::error;

use chirp_core::ServiceError;
use chirp_types::api::{CreateMessage, UpdateMessage};
use chirp_types::models::Message;

use crate::error::ApiError;
use crate::{AppState, run_blocking};

pub async fn create_message(
    State(state): State<AppState>,
    Json(req): Json<CreateMessage>,
) -> Result<Json<Message>, ApiError> {
    let message = run_blocking(move || {
        let text = req.message_text.as_deref().unwrap_or("");
        state
            .messages
            .create(text, req.posted_by, req.time_posted_epoch.unwrap_or(0))
    })
    .await?;

    Ok(Json(message))
}

pub async fn get_all_messages(
    State(state): State<AppState>,
) -> Result<Json<Vec<Message>>, ApiError> {
    let messages = run_blocking(move || state.messages.get_all()).await?;
    Ok(Json(messages))
}

/// An unknown id answers 200 with an empty body rather than an error status,
/// matching the original controller.
pub async fn get_message_by_id(
    State(state): State<AppState>,
    Path(message_id): Path<i64>,
) -> Result<Response, ApiError> {
    let result = tokio::task::spawn_blocking(move || state.messages.get_by_id(message_id))
        .await
        .map_err(|e| {
            error!("spawn_blocking join error: {}", e);
            ApiError::internal(e)
        })?;

    match result {
        Ok(message) => Ok(Json(message).into_response()),
        Err(ServiceError::NotFound) => Ok(StatusCode::OK.into_response()),
        Err(e) => Err(e.into()),
    }
}

/// Body is the number of rows removed: 1, or 0 when the id is unknown.
/// Both answer 200.
pub async fn delete_message_by_id(
    State(state): State<AppState>,
    Path(message_id): Path<i64>,
) -> Result<Json<u64>, ApiError> {
    let deleted = run_blocking(move || state.messages.delete_by_id(message_id)).await?;
    Ok(Json(deleted))
}

pub async fn update_message_text(
    State(state): State<AppState>,
    Path(message_id): Path<i64>,
    Json(req): Json<UpdateMessage>,
) -> Result<Json<u64>, ApiError> {
    let updated = run_blocking(move || {
        let text = req.message_text.as_deref().unwrap_or("");
        state.messages.update_text(message_id, text)
    })
    .await?;

    Ok(Json(updated))
}

pub async fn get_messages_by_account(
    State(state): State<AppState>,
    Path(account_id): Path<i64>,
) -> Result<Json<Vec<Message>>, ApiError> {
    let messages =
        run_blocking(move || state.messages.get_all_by_account_id(account_id)).await?;
    Ok(Json(messages))
}
