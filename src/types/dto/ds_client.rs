use serde::{Deserialize, Serialize};

/// Payload for creating a DS client
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct NewDsClient {
    pub name: String,
    pub genre: Option<String>,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub image_url_2: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub social_links: Option<String>,
    pub time_slot: Option<String>,
    pub promoter_image_url: Option<String>,
    pub origin: Option<String>,
    pub members: Option<String>,
    pub bio: Option<String>,
    pub website: Option<String>,
    pub song_link_1: Option<String>,
    pub song_link_2: Option<String>,
    pub video_link_1: Option<String>,
    pub video_link_2: Option<String>,
    pub custom_link_1: Option<String>,
    pub custom_link_2: Option<String>,
    pub custom_link_3: Option<String>,
    pub custom_link_4: Option<String>,
    pub custom_link_5: Option<String>,
    pub visible_fields: Option<String>,
}

/// Partial update; only provided fields are written
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct DsClientPatch {
    pub name: Option<String>,
    pub genre: Option<String>,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub image_url_2: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub social_links: Option<String>,
    pub time_slot: Option<String>,
    pub promoter_image_url: Option<String>,
    pub origin: Option<String>,
    pub members: Option<String>,
    pub bio: Option<String>,
    pub website: Option<String>,
    pub song_link_1: Option<String>,
    pub song_link_2: Option<String>,
    pub video_link_1: Option<String>,
    pub video_link_2: Option<String>,
    pub custom_link_1: Option<String>,
    pub custom_link_2: Option<String>,
    pub custom_link_3: Option<String>,
    pub custom_link_4: Option<String>,
    pub custom_link_5: Option<String>,
    pub visible_fields: Option<String>,
}
