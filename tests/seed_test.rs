mod common;

use stagedoor_backend::seed;
use stagedoor_backend::stores::{ArtistStore, EventStore, SettingsStore};
use stagedoor_backend::types::dto::NewArtist;

#[tokio::test]
async fn default_settings_seed_is_idempotent() {
    let db = common::setup_test_db().await;

    let first = seed::ensure_default_settings(&db).await.unwrap();
    assert!(first > 0);

    let second = seed::ensure_default_settings(&db).await.unwrap();
    assert_eq!(second, 0);

    // The navigation toggles all arrived as boolean strings
    let store = SettingsStore::new();
    let navigation = store.get_by_section(&db, "navigation").await.unwrap();
    assert!(!navigation.is_empty());
    for setting in navigation.iter().filter(|s| s.kind == "toggle") {
        assert!(setting.value == "true" || setting.value == "false");
    }
}

#[tokio::test]
async fn demo_content_fills_an_empty_directory_only() {
    let db = common::setup_test_db().await;
    let artists = ArtistStore::new();
    let events = EventStore::new();

    seed::seed_demo_content(&db).await.unwrap();
    let seeded = artists.get_all(&db).await.unwrap();
    assert_eq!(seeded.len(), 8);
    assert_eq!(events.get_all(&db).await.unwrap().len(), 2);
    assert!(seeded.iter().any(|a| a.name == "DJ Momentum" && a.featured));

    // A second run leaves the directory alone
    seed::seed_demo_content(&db).await.unwrap();
    assert_eq!(artists.get_all(&db).await.unwrap().len(), 8);
}

#[tokio::test]
async fn demo_content_respects_existing_records() {
    let db = common::setup_test_db().await;
    let artists = ArtistStore::new();

    artists
        .create(
            &db,
            NewArtist {
                name: "Resident Act".to_string(),
                genre: "Jazz".to_string(),
                description: "The house band".to_string(),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    seed::seed_demo_content(&db).await.unwrap();
    let all = artists.get_all(&db).await.unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].name, "Resident Act");
}
