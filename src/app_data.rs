use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::stores::{
    ArtistStore, DonationStore, DsClientStore, EnquiryStore, EventStore, MediaStore, SettingsStore,
};

/// Centralized application data following the main-owned stores pattern
///
/// All stores are created once at startup and shared across consumers, so
/// embedders and the CLI see the same repository surface.
pub struct AppData {
    pub db: DatabaseConnection,
    pub settings_store: Arc<SettingsStore>,
    pub artist_store: Arc<ArtistStore>,
    pub event_store: Arc<EventStore>,
    pub ds_client_store: Arc<DsClientStore>,
    pub media_store: Arc<MediaStore>,
    pub enquiry_store: Arc<EnquiryStore>,
    pub donation_store: Arc<DonationStore>,
}

impl AppData {
    /// Wire up all stores over an already-connected, migrated database.
    pub fn init(db: DatabaseConnection) -> Self {
        tracing::debug!("Creating stores...");
        let app_data = Self {
            db,
            settings_store: Arc::new(SettingsStore::new()),
            artist_store: Arc::new(ArtistStore::new()),
            event_store: Arc::new(EventStore::new()),
            ds_client_store: Arc::new(DsClientStore::new()),
            media_store: Arc::new(MediaStore::new()),
            enquiry_store: Arc::new(EnquiryStore::new()),
            donation_store: Arc::new(DonationStore::new()),
        };
        tracing::debug!("Stores created");
        app_data
    }
}
