use sea_orm::DbErr;
use thiserror::Error;

/// Domain error taxonomy returned to the web layer, which maps variants to
/// status codes and flash messages.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("{0} not found")]
    NotFound(&'static str),

    #[error("invalid state: {0}")]
    InvalidState(&'static str),

    #[error("permission denied: {0}")]
    PermissionDenied(&'static str),

    #[error("validation error: {0}")]
    Validation(String),

    #[error("database error: {0}")]
    Database(#[from] DbErr),
}
