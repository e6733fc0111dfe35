use thiserror::Error;

/// Expected-outcome failures of the service layer. The HTTP layer owns the
/// mapping to status codes; nothing here encodes one.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("invalid registration input: {0}")]
    InvalidInput(&'static str),

    #[error("username already exists")]
    DuplicateUsername,

    #[error("invalid username or password")]
    AuthenticationFailed,

    #[error("invalid message: {0}")]
    InvalidMessage(&'static str),

    #[error("message does not exist")]
    NotFound,

    /// Infrastructure failure in the store, not part of the business-rule
    /// taxonomy.
    #[error(transparent)]
    Store(#[from] anyhow::Error),
}
