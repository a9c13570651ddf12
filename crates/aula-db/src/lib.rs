pub mod certificate;
pub mod course;
pub mod enrollment;
pub mod quiz;
pub mod user;

pub use sea_orm;
use sea_orm::{DbErr, TransactionError};
use std::error::Error;

/// Collapses `TransactionError<E>` into the domain error type, folding the
/// connection-level `DbErr` into `E`.
pub trait FlattenTransactionResultExt<T> {
    fn flatten_res(self) -> T;
}

impl<T, E> FlattenTransactionResultExt<Result<T, E>> for Result<T, TransactionError<E>>
where
    E: From<DbErr> + Error,
{
    fn flatten_res(self) -> Result<T, E> {
        self.map_err(|err| match err {
            TransactionError::Connection(err) => err.into(),
            TransactionError::Transaction(err) => err,
        })
    }
}

pub trait RequireRecord<T> {
    /// Turns a missing row into `DbErr::RecordNotFound` with the given label.
    fn require(self, what: &str) -> Result<T, DbErr>;
}

impl<T> RequireRecord<T> for Result<Option<T>, DbErr> {
    fn require(self, what: &str) -> Result<T, DbErr> {
        self?.ok_or_else(|| DbErr::RecordNotFound(format!("{what} not found")))
    }
}
