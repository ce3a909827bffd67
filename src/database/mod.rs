pub mod connection;
pub mod repository;

use thiserror::Error;

/// Errors from the storage layer. NotFound is not an error here: repository
/// operations report it as a first-class outcome instead.
#[derive(Debug, Error)]
pub enum DbError {
    #[error(transparent)]
    Driver(#[from] mongodb::error::Error),

    #[error("Failed to encode document: {0}")]
    Encode(#[from] mongodb::bson::ser::Error),

    #[error("Insert did not return a document id")]
    MissingInsertedId,
}
