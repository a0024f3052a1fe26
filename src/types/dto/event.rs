use serde::{Deserialize, Serialize};

/// Payload for creating an event
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct NewEvent {
    pub name: String,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub date: Option<String>,
    pub venue: Option<String>,
    pub time: Option<String>,
    pub end_date: Option<String>,
    pub end_time: Option<String>,
    pub address: Option<String>,
    pub google_maps_url: Option<String>,
    pub ticket_url: Option<String>,
    pub visible_fields: Option<String>,
}

/// Partial update; only provided fields are written
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct EventPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub date: Option<String>,
    pub venue: Option<String>,
    pub time: Option<String>,
    pub end_date: Option<String>,
    pub end_time: Option<String>,
    pub address: Option<String>,
    pub google_maps_url: Option<String>,
    pub ticket_url: Option<String>,
    pub visible_fields: Option<String>,
}
