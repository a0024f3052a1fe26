use serde::{Deserialize, Serialize};

/// Payload for creating a media embed
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct NewMediaItem {
    pub title: String,
    pub artist: Option<String>,
    #[serde(rename = "type", default = "default_media_kind")]
    pub kind: String,
    pub embed_url: String,
    pub thumbnail_url: Option<String>,
    pub duration: Option<String>,
    #[serde(default)]
    pub sort_order: i32,
}

fn default_media_kind() -> String {
    "youtube".to_string()
}

/// Partial update; only provided fields are written
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct MediaItemPatch {
    pub title: Option<String>,
    pub artist: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub embed_url: Option<String>,
    pub thumbnail_url: Option<String>,
    pub duration: Option<String>,
    pub sort_order: Option<i32>,
}
