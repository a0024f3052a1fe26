use thiserror::Error;

pub mod content;
pub mod database;
pub mod settings;

pub use content::ContentError;
pub use database::DatabaseError;
pub use settings::SettingsError;

/// Internal error type for store and service operations
///
/// Hybrid design separates infrastructure errors (shared) from domain errors
/// (store-specific). Callers embedding this crate decide how to present them.
#[derive(Error, Debug)]
pub enum InternalError {
    #[error(transparent)]
    Database(#[from] DatabaseError),

    #[error(transparent)]
    Settings(#[from] SettingsError),

    #[error(transparent)]
    Content(#[from] ContentError),
}

impl InternalError {
    pub fn database(operation: &str, source: sea_orm::DbErr) -> InternalError {
        InternalError::Database(DatabaseError::Operation {
            operation: operation.to_string(),
            source,
        })
    }
}
