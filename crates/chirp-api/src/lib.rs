pub mod accounts;
pub mod error;
pub mod messages;

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use tracing::error;

use chirp_core::{AccountService, MessageService, ServiceError};

use crate::error::ApiError;

pub type AppState = Arc<AppStateInner>;

pub struct AppStateInner {
    pub accounts: AccountService,
    pub messages: MessageService,
}

/// One route per service operation.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/register", post(accounts::register))
        .route("/login", post(accounts::login))
        .route(
            "/messages",
            get(messages::get_all_messages).post(messages::create_message),
        )
        .route(
            "/messages/{message_id}",
            get(messages::get_message_by_id)
                .delete(messages::delete_message_by_id)
                .patch(messages::update_message_text),
        )
        .route(
            "/accounts/{account_id}/messages",
            get(messages::get_messages_by_account),
        )
        .with_state(state)
}

/// Runs a blocking service call off the async runtime.
pub(crate) async fn run_blocking<T, F>(f: F) -> Result<T, ApiError>
where
    F: FnOnce() -> Result<T, ServiceError> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(f)
        .await
        .map_err(|e| {
            error!("spawn_blocking join error: {}", e);
            ApiError::internal(e)
        })?
        .map_err(ApiError::from)
}
