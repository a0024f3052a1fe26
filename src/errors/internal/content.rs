use thiserror::Error;

/// Domain errors for the content record stores
#[derive(Error, Debug)]
pub enum ContentError {
    #[error("{entity} with id {id} not found")]
    NotFound { entity: &'static str, id: i32 },
}

impl ContentError {
    pub fn not_found(entity: &'static str, id: i32) -> Self {
        ContentError::NotFound { entity, id }
    }
}
