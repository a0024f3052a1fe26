mod common;

use stagedoor_backend::errors::{InternalError, SettingsError};
use stagedoor_backend::seed;
use stagedoor_backend::services::SettingsDraft;
use stagedoor_backend::stores::SettingsStore;
use stagedoor_backend::types::dto::{SettingType, SettingUpsert};

fn entry(key: &str, value: &str, section: &str) -> SettingUpsert {
    SettingUpsert::new(key, value, SettingType::Text, section, "")
}

#[tokio::test]
async fn seed_defaults_inserts_once_and_never_overwrites() {
    let db = common::setup_test_db().await;
    let store = SettingsStore::new();

    let defaults = seed::default_settings();
    let inserted = store.seed_defaults(&db, &defaults).await.unwrap();
    assert_eq!(inserted, defaults.len());

    // Change a value, then re-seed; the edit must survive
    store
        .upsert(&db, &entry("global_company_name", "Night Owl Collective", "global"))
        .await
        .unwrap();

    let inserted_again = store.seed_defaults(&db, &defaults).await.unwrap();
    assert_eq!(inserted_again, 0);

    let setting = store
        .get(&db, "global_company_name")
        .await
        .unwrap()
        .expect("seeded key exists");
    assert_eq!(setting.value, "Night Owl Collective");
}

#[tokio::test]
async fn upsert_inserts_then_updates_by_key() {
    let db = common::setup_test_db().await;
    let store = SettingsStore::new();

    let created = store
        .upsert(
            &db,
            &SettingUpsert::new("events_page_title", "Events", SettingType::Text, "events", "Page Title"),
        )
        .await
        .unwrap();
    assert_eq!(created.value, "Events");
    assert_eq!(created.section, "events");

    let updated = store
        .upsert(
            &db,
            &SettingUpsert::new("events_page_title", "What's On", SettingType::Text, "events", "Page Title"),
        )
        .await
        .unwrap();
    assert_eq!(updated.value, "What's On");

    // Still exactly one row for the key
    let all = store.get_all(&db).await.unwrap();
    assert_eq!(all.iter().filter(|s| s.key == "events_page_title").count(), 1);
}

#[tokio::test]
async fn get_by_section_filters_and_orders() {
    let db = common::setup_test_db().await;
    let store = SettingsStore::new();

    store
        .upsert_many(
            &db,
            &[
                entry("b_key", "2", "style"),
                entry("a_key", "1", "style"),
                entry("other", "3", "social"),
            ],
        )
        .await
        .unwrap();

    let style = store.get_by_section(&db, "style").await.unwrap();
    let keys: Vec<&str> = style.iter().map(|s| s.key.as_str()).collect();
    assert_eq!(keys, vec!["a_key", "b_key"]);
}

#[tokio::test]
async fn upsert_many_can_introduce_new_keys() {
    let db = common::setup_test_db().await;
    let store = SettingsStore::new();

    // The integrations surface adds sheet-target keys beyond the seed list
    store
        .upsert_many(
            &db,
            &[SettingUpsert::new(
                "google_sheet_bookings",
                "sheet-id|Bookings",
                SettingType::Text,
                "integrations_sheets",
                "Bookings Sheet",
            )],
        )
        .await
        .unwrap();

    let setting = store
        .get(&db, "google_sheet_bookings")
        .await
        .unwrap()
        .expect("new key persisted");
    assert_eq!(setting.section, "integrations_sheets");
}

#[tokio::test]
async fn unknown_widget_type_is_stored_verbatim() {
    let db = common::setup_test_db().await;
    let store = SettingsStore::new();

    let mut custom = entry("weird_widget", "x", "global");
    custom.kind = "hologram".to_string();
    store.upsert(&db, &custom).await.unwrap();

    let stored = store.get(&db, "weird_widget").await.unwrap().unwrap();
    assert_eq!(stored.kind, "hologram");

    // Reading it back degrades to a plain text widget
    let reread: SettingUpsert = SettingUpsert {
        key: stored.key,
        value: stored.value,
        kind: stored.kind,
        section: stored.section,
        label: stored.label,
    };
    assert_eq!(reread.setting_type(), SettingType::Text);
}

#[tokio::test]
async fn section_scoped_save_excludes_out_of_section_edits() {
    let db = common::setup_test_db().await;
    let store = SettingsStore::new();

    store
        .upsert_many(&db, &[entry("k1", "a", "s"), entry("k2", "x", "other")])
        .await
        .unwrap();

    // Editor edits k1 and k2 but saves only section "s"
    let mut draft = SettingsDraft::new(store.get_all(&db).await.unwrap());
    draft.edit("k1", "b");
    draft.edit("k2", "c");
    store
        .upsert_many(&db, &draft.section_payload("s"))
        .await
        .unwrap();

    let k1 = store.get(&db, "k1").await.unwrap().unwrap();
    let k2 = store.get(&db, "k2").await.unwrap().unwrap();
    assert_eq!(k1.value, "b");
    // The out-of-section edit never reached the store
    assert_eq!(k2.value, "x");
}

#[tokio::test]
async fn settings_cli_set_refuses_unknown_keys() {
    let db = common::setup_test_db().await;
    let app_data = stagedoor_backend::AppData::init(db);

    let result =
        stagedoor_backend::cli::settings::set(&app_data, "never_created", "value").await;

    match result {
        Err(InternalError::Settings(SettingsError::UnknownKey { key })) => {
            assert_eq!(key, "never_created");
        }
        other => panic!("Expected UnknownKey error, got {other:?}"),
    }
}
