use axum::{Json, extract::State};

use chirp_types::api::Credentials;
use chirp_types::models::Account;

use crate::error::ApiError;
use crate::{AppState, run_blocking};

pub async fn register(
    State(state): State<AppState>,
    Json(req): Json<Credentials>,
) -> Result<Json<Account>, ApiError> {
    let account = run_blocking(move || {
        let username = req.username.as_deref().unwrap_or("");
        let password = req.password.as_deref().unwrap_or("");
        state.accounts.register(username, password)
    })
    .await?;

    Ok(Json(account))
}

pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<Credentials>,
) -> Result<Json<Account>, ApiError> {
    let account = run_blocking(move || {
        let username = req.username.as_deref().unwrap_or("");
        let password = req.password.as_deref().unwrap_or("");
        state.accounts.login(username, password)
    })
    .await?;

    Ok(Json(account))
}
