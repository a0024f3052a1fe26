use thiserror::Error;

/// Infrastructure-level database errors shared by all stores
#[derive(Error, Debug)]
pub enum DatabaseError {
    #[error("Database operation '{operation}' failed: {source}")]
    Operation {
        operation: String,
        #[source]
        source: sea_orm::DbErr,
    },
}
