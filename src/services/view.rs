use crate::services::visibility::{EntityKind, VisibilityMap};
use crate::types::db::{artist, ds_client, event};

/// Admin-facing display labels for artist fields.
pub const ARTIST_FIELD_LABELS: &[(&'static str, &'static str)] = &[
    ("name", "Band Name"),
    ("image_url", "Image 1"),
    ("image_url_2", "Image 2"),
    ("origin", "Origin"),
    ("members", "Members"),
    ("bio", "Bio"),
    ("website", "Website"),
    ("phone", "Phone"),
    ("email", "Email"),
    ("genre", "Genre"),
    ("description", "Description"),
    ("time_slot", "Time Slot"),
    ("social_links", "Social Links"),
    ("promoter_image_url", "Promoter Image"),
    ("song_link_1", "Song Link 1"),
    ("song_link_2", "Song Link 2"),
    ("video_link_1", "Video Link 1"),
    ("video_link_2", "Video Link 2"),
    ("custom_link_1", "Custom Link 1"),
    ("custom_link_2", "Custom Link 2"),
    ("custom_link_3", "Custom Link 3"),
    ("custom_link_4", "Custom Link 4"),
    ("custom_link_5", "Custom Link 5"),
];

pub const EVENT_FIELD_LABELS: &[(&'static str, &'static str)] = &[
    ("name", "Event Name"),
    ("description", "Description"),
    ("image_url", "Event Image"),
    ("date", "Start Date"),
    ("time", "Start Time"),
    ("end_date", "End Date"),
    ("end_time", "End Time"),
    ("venue", "Venue"),
    ("address", "Address"),
    ("google_maps_url", "Google Maps URL"),
    ("ticket_url", "Ticket Link"),
];

/// DS clients reuse the artist labels except for the leading name label.
pub const DS_CLIENT_FIELD_LABELS: &[(&'static str, &'static str)] = &[
    ("name", "Name"),
    ("image_url", "Image 1"),
    ("image_url_2", "Image 2"),
    ("origin", "Origin"),
    ("members", "Members"),
    ("bio", "Bio"),
    ("website", "Website"),
    ("phone", "Phone"),
    ("email", "Email"),
    ("genre", "Genre"),
    ("description", "Description"),
    ("time_slot", "Time Slot"),
    ("social_links", "Social Links"),
    ("promoter_image_url", "Promoter Image"),
    ("song_link_1", "Song Link 1"),
    ("song_link_2", "Song Link 2"),
    ("video_link_1", "Video Link 1"),
    ("video_link_2", "Video Link 2"),
    ("custom_link_1", "Custom Link 1"),
    ("custom_link_2", "Custom Link 2"),
    ("custom_link_3", "Custom Link 3"),
    ("custom_link_4", "Custom Link 4"),
    ("custom_link_5", "Custom Link 5"),
];

/// One renderable field of a public detail view.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldView {
    pub name: &'static str,
    pub label: &'static str,
    pub value: String,
}

fn label_for(labels: &'static [(&'static str, &'static str)], name: &'static str) -> &'static str {
    labels
        .iter()
        .find(|(field, _)| *field == name)
        .map(|(_, label)| *label)
        .unwrap_or(name)
}

fn project(
    kind: EntityKind,
    labels: &'static [(&'static str, &'static str)],
    visibility: &VisibilityMap,
    value_of: impl Fn(&'static str) -> Option<String>,
) -> Vec<FieldView> {
    kind.fields()
        .iter()
        .copied()
        .filter(|name| visibility.is_visible(name))
        .filter_map(|name| {
            value_of(name).filter(|v| !v.is_empty()).map(|value| FieldView {
                name,
                label: label_for(labels, name),
                value,
            })
        })
        .collect()
}

/// Fields of an artist the public detail page renders, in display order.
/// Hidden and unpopulated fields are skipped.
pub fn artist_view(record: &artist::Model) -> Vec<FieldView> {
    let visibility = EntityKind::Artist.resolve(record.visible_fields.as_deref());
    project(EntityKind::Artist, ARTIST_FIELD_LABELS, &visibility, |name| {
        artist_field(record, name)
    })
}

pub fn event_view(record: &event::Model) -> Vec<FieldView> {
    let visibility = EntityKind::Event.resolve(record.visible_fields.as_deref());
    project(EntityKind::Event, EVENT_FIELD_LABELS, &visibility, |name| {
        event_field(record, name)
    })
}

pub fn ds_client_view(record: &ds_client::Model) -> Vec<FieldView> {
    let visibility = EntityKind::DsClient.resolve(record.visible_fields.as_deref());
    project(
        EntityKind::DsClient,
        DS_CLIENT_FIELD_LABELS,
        &visibility,
        |name| ds_client_field(record, name),
    )
}

fn artist_field(a: &artist::Model, name: &str) -> Option<String> {
    match name {
        "name" => Some(a.name.clone()),
        "genre" => Some(a.genre.clone()),
        "description" => Some(a.description.clone()),
        "image_url" => Some(a.image_url.clone()),
        "image_url_2" => a.image_url_2.clone(),
        "email" => a.email.clone(),
        "phone" => a.phone.clone(),
        "social_links" => a.social_links.clone(),
        "time_slot" => a.time_slot.clone(),
        "promoter_image_url" => a.promoter_image_url.clone(),
        "origin" => a.origin.clone(),
        "members" => a.members.clone(),
        "bio" => a.bio.clone(),
        "website" => a.website.clone(),
        "song_link_1" => a.song_link_1.clone(),
        "song_link_2" => a.song_link_2.clone(),
        "video_link_1" => a.video_link_1.clone(),
        "video_link_2" => a.video_link_2.clone(),
        "custom_link_1" => a.custom_link_1.clone(),
        "custom_link_2" => a.custom_link_2.clone(),
        "custom_link_3" => a.custom_link_3.clone(),
        "custom_link_4" => a.custom_link_4.clone(),
        "custom_link_5" => a.custom_link_5.clone(),
        _ => None,
    }
}

fn event_field(e: &event::Model, name: &str) -> Option<String> {
    match name {
        "name" => Some(e.name.clone()),
        "description" => e.description.clone(),
        "image_url" => e.image_url.clone(),
        "date" => e.date.clone(),
        "venue" => e.venue.clone(),
        "time" => e.time.clone(),
        "end_date" => e.end_date.clone(),
        "end_time" => e.end_time.clone(),
        "address" => e.address.clone(),
        "google_maps_url" => e.google_maps_url.clone(),
        "ticket_url" => e.ticket_url.clone(),
        _ => None,
    }
}

fn ds_client_field(c: &ds_client::Model, name: &str) -> Option<String> {
    match name {
        "name" => Some(c.name.clone()),
        "genre" => c.genre.clone(),
        "description" => c.description.clone(),
        "image_url" => c.image_url.clone(),
        "image_url_2" => c.image_url_2.clone(),
        "email" => c.email.clone(),
        "phone" => c.phone.clone(),
        "social_links" => c.social_links.clone(),
        "time_slot" => c.time_slot.clone(),
        "promoter_image_url" => c.promoter_image_url.clone(),
        "origin" => c.origin.clone(),
        "members" => c.members.clone(),
        "bio" => c.bio.clone(),
        "website" => c.website.clone(),
        "song_link_1" => c.song_link_1.clone(),
        "song_link_2" => c.song_link_2.clone(),
        "video_link_1" => c.video_link_1.clone(),
        "video_link_2" => c.video_link_2.clone(),
        "custom_link_1" => c.custom_link_1.clone(),
        "custom_link_2" => c.custom_link_2.clone(),
        "custom_link_3" => c.custom_link_3.clone(),
        "custom_link_4" => c.custom_link_4.clone(),
        "custom_link_5" => c.custom_link_5.clone(),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_artist() -> artist::Model {
        artist::Model {
            id: 1,
            name: "Vox Luna".to_string(),
            genre: "Indie Pop / Electronic".to_string(),
            description: "Ethereal vocals over electronic beats".to_string(),
            image_url: "/uploads/vox.jpg".to_string(),
            image_url_2: None,
            email: Some("voxluna@example.com".to_string()),
            phone: None,
            social_links: None,
            time_slot: Some("20:00 - 21:30".to_string()),
            featured: true,
            promoter_image_url: None,
            origin: None,
            members: None,
            bio: None,
            website: None,
            song_link_1: None,
            song_link_2: None,
            video_link_1: None,
            video_link_2: None,
            custom_link_1: None,
            custom_link_2: None,
            custom_link_3: None,
            custom_link_4: None,
            custom_link_5: None,
            visible_fields: None,
        }
    }

    #[test]
    fn null_override_renders_all_populated_fields() {
        let fields = artist_view(&sample_artist());
        let names: Vec<&str> = fields.iter().map(|f| f.name).collect();
        assert_eq!(
            names,
            vec!["name", "image_url", "email", "genre", "description", "time_slot"]
        );
    }

    #[test]
    fn hidden_field_is_skipped() {
        let mut record = sample_artist();
        record.visible_fields = Some(r#"{"email":false}"#.to_string());

        let fields = artist_view(&record);
        assert!(fields.iter().all(|f| f.name != "email"));
        assert!(fields.iter().any(|f| f.name == "name"));
    }

    #[test]
    fn malformed_override_renders_like_no_override() {
        let mut record = sample_artist();
        record.visible_fields = Some("{broken".to_string());
        assert_eq!(artist_view(&record), artist_view(&sample_artist()));
    }

    #[test]
    fn labels_come_from_the_label_table() {
        let fields = artist_view(&sample_artist());
        let name = fields.iter().find(|f| f.name == "name").expect("name field");
        assert_eq!(name.label, "Band Name");
    }
}
