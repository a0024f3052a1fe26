mod common;

use stagedoor_backend::errors::{ContentError, InternalError};
use stagedoor_backend::services::view;
use stagedoor_backend::stores::{
    ArtistStore, DonationStore, DsClientStore, EnquiryStore, EventStore, MediaStore,
};
use stagedoor_backend::types::dto::{
    ArtistPatch, NewArtist, NewDonation, NewDsClient, NewEnquiry, NewEvent, NewMediaItem,
};

fn new_artist(name: &str) -> NewArtist {
    NewArtist {
        name: name.to_string(),
        genre: "House".to_string(),
        description: "Late night sets".to_string(),
        image_url: "/uploads/a.jpg".to_string(),
        email: Some("artist@example.com".to_string()),
        ..Default::default()
    }
}

#[tokio::test]
async fn artist_crud_roundtrip() {
    let db = common::setup_test_db().await;
    let store = ArtistStore::new();

    let created = store.create(&db, new_artist("DJ Momentum")).await.unwrap();
    assert!(created.id > 0);
    assert!(!created.featured);

    let fetched = store.get_by_id(&db, created.id).await.unwrap();
    assert_eq!(fetched.name, "DJ Momentum");

    let patched = store
        .patch(
            &db,
            created.id,
            ArtistPatch {
                genre: Some("Deep House".to_string()),
                featured: Some(true),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(patched.genre, "Deep House");
    assert!(patched.featured);
    // Untouched fields survive the patch
    assert_eq!(patched.name, "DJ Momentum");
    assert_eq!(patched.email.as_deref(), Some("artist@example.com"));

    store.delete(&db, created.id).await.unwrap();
    match store.get_by_id(&db, created.id).await {
        Err(InternalError::Content(ContentError::NotFound { entity, id })) => {
            assert_eq!(entity, "artist");
            assert_eq!(id, created.id);
        }
        other => panic!("Expected NotFound, got {other:?}"),
    }

    // Deleting again is a no-op
    store.delete(&db, created.id).await.unwrap();
}

#[tokio::test]
async fn hidden_email_is_skipped_on_the_public_view() {
    let db = common::setup_test_db().await;
    let store = ArtistStore::new();

    let mut new = new_artist("Vox Luna");
    new.visible_fields = Some(r#"{"email":false}"#.to_string());
    let created = store.create(&db, new).await.unwrap();

    let fields = view::artist_view(&created);
    assert!(fields.iter().all(|f| f.name != "email"));
    // Every other populated field still renders
    for name in ["name", "genre", "description", "image_url"] {
        assert!(fields.iter().any(|f| f.name == name), "{name} should render");
    }
}

#[tokio::test]
async fn new_event_without_overrides_renders_all_populated_fields() {
    let db = common::setup_test_db().await;
    let store = EventStore::new();

    let created = store
        .create(
            &db,
            NewEvent {
                name: "Midnight Sessions".to_string(),
                description: Some("Late-night showcase".to_string()),
                date: Some("August 22, 2026".to_string()),
                venue: Some("The Warehouse".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(created.visible_fields, None);

    let names: Vec<&str> = view::event_view(&created).iter().map(|f| f.name).collect();
    assert_eq!(names, vec!["name", "description", "date", "venue"]);
}

#[tokio::test]
async fn visibility_toggle_writes_back_the_full_resolved_map() {
    let db = common::setup_test_db().await;
    let store = ArtistStore::new();

    let created = store.create(&db, new_artist("Bass Theory")).await.unwrap();
    let updated = store
        .set_field_visibility(&db, created.id, "phone", false)
        .await
        .unwrap();

    let raw = updated.visible_fields.expect("override persisted");
    let parsed: std::collections::BTreeMap<String, bool> =
        serde_json::from_str(&raw).expect("valid JSON");

    // All default fields are pinned, not just the toggled one
    assert_eq!(
        parsed.len(),
        stagedoor_backend::services::visibility::ARTIST_FIELDS.len()
    );
    assert_eq!(parsed["phone"], false);
    assert_eq!(parsed["email"], true);

    // Toggling back to visible keeps the full map
    let reverted = store
        .set_field_visibility(&db, created.id, "phone", true)
        .await
        .unwrap();
    let parsed: std::collections::BTreeMap<String, bool> =
        serde_json::from_str(&reverted.visible_fields.unwrap()).expect("valid JSON");
    assert_eq!(parsed["phone"], true);
}

#[tokio::test]
async fn malformed_override_never_breaks_the_read_path() {
    let db = common::setup_test_db().await;
    let store = DsClientStore::new();

    let created = store
        .create(
            &db,
            NewDsClient {
                name: "Aurora Keys".to_string(),
                bio: Some("Classical crossover".to_string()),
                visible_fields: Some("{definitely not json".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    // Malformed override resolves to defaults: everything renders
    let names: Vec<&str> = view::ds_client_view(&created)
        .iter()
        .map(|f| f.name)
        .collect();
    assert_eq!(names, vec!["name", "bio"]);
}

#[tokio::test]
async fn media_items_come_back_in_sort_order() {
    let db = common::setup_test_db().await;
    let store = MediaStore::new();

    for (title, sort_order) in [("Second", 2), ("First", 1), ("Third", 3)] {
        store
            .create(
                &db,
                NewMediaItem {
                    title: title.to_string(),
                    artist: None,
                    kind: "youtube".to_string(),
                    embed_url: "https://www.youtube.com/watch?v=x".to_string(),
                    thumbnail_url: None,
                    duration: None,
                    sort_order,
                },
            )
            .await
            .unwrap();
    }

    let titles: Vec<String> = store
        .get_all(&db)
        .await
        .unwrap()
        .into_iter()
        .map(|m| m.title)
        .collect();
    assert_eq!(titles, vec!["First", "Second", "Third"]);
}

#[tokio::test]
async fn submissions_are_stamped_and_listed_newest_first() {
    let db = common::setup_test_db().await;
    let enquiries = EnquiryStore::new();
    let donations = DonationStore::new();

    let enquiry = enquiries
        .create(
            &db,
            NewEnquiry {
                name: "Visitor".to_string(),
                email: "visitor@example.com".to_string(),
                message: None,
            },
        )
        .await
        .unwrap();
    assert!(enquiry.created_at > 0);

    let donation = donations
        .create(
            &db,
            NewDonation {
                name: "Donor".to_string(),
                email: "donor@example.com".to_string(),
                amount: "25.00".to_string(),
                message: Some("Keep it up".to_string()),
            },
        )
        .await
        .unwrap();
    assert!(donation.created_at > 0);

    assert_eq!(enquiries.get_all(&db).await.unwrap().len(), 1);
    assert_eq!(donations.get_all(&db).await.unwrap().len(), 1);
}
