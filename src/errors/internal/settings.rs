use thiserror::Error;

/// Domain errors for the site-settings store
#[derive(Error, Debug)]
pub enum SettingsError {
    /// A bulk save failed partway through. Entries before `key` were applied
    /// and stay applied; callers should re-fetch to reconcile.
    #[error("Bulk settings save failed at '{key}' after {applied} entries were applied: {source}")]
    PartialUpsert {
        applied: usize,
        key: String,
        #[source]
        source: sea_orm::DbErr,
    },

    #[error("Unknown setting key: {key}")]
    UnknownKey { key: String },
}
