use sea_orm::{ConnectionTrait, EntityTrait, PaginatorTrait};

use crate::errors::InternalError;
use crate::stores::{ArtistStore, EventStore, SettingsStore};
use crate::types::db::{artist, event};
use crate::types::dto::SettingType::{Color, Font, Image, Text, Toggle};
use crate::types::dto::{NewArtist, NewEvent, SettingType, SettingUpsert};

/// Seed list: (key, value, widget, section, label).
///
/// This is the full set of keys an install starts with; `upsert_many` may
/// still introduce keys beyond it at runtime.
const DEFAULT_SETTINGS: &[(&str, &str, SettingType, &str, &str)] = &[
    // Navigation toggles
    ("menu_show_home", "true", Toggle, "navigation", "Show Home in Menu"),
    ("menu_show_artists", "true", Toggle, "navigation", "Show Artists in Menu"),
    ("menu_show_events", "true", Toggle, "navigation", "Show Events in Menu"),
    ("menu_show_ds", "true", Toggle, "navigation", "Show DS in Menu"),
    ("menu_show_profile", "true", Toggle, "navigation", "Show Profile in Menu"),
    ("menu_show_donate", "true", Toggle, "navigation", "Show Donate in Menu"),
    ("menu_show_admin", "true", Toggle, "navigation", "Show Admin in Menu"),
    ("menu_show_integrations", "true", Toggle, "navigation", "Show Integrations in Menu"),
    // Navigation labels
    ("nav_home_label", "Home", Text, "navigation", "Home Button Label"),
    ("nav_artists_label", "Artists", Text, "navigation", "Artists Button Label"),
    ("nav_events_label", "Events", Text, "navigation", "Events Button Label"),
    ("nav_ds_label", "DS", Text, "navigation", "DS Button Label"),
    ("nav_profile_label", "Profile", Text, "navigation", "Profile Button Label"),
    // Global branding
    ("global_company_name", "[ Company Name ]", Text, "global", "Company Name"),
    ("global_logo_image", "", Image, "global", "Logo / Header Image"),
    // Style
    ("global_primary_color", "#000000", Color, "style", "Primary Color"),
    ("global_secondary_color", "#ffffff", Color, "style", "Secondary Color"),
    ("global_accent_color", "#666666", Color, "style", "Accent Color"),
    ("global_font_heading", "Inter", Font, "style", "Heading Font"),
    ("global_font_body", "Inter", Font, "style", "Body Font"),
    ("custom_font_name", "", Text, "style", "Custom Font Name"),
    ("custom_font_url", "", Text, "style", "Custom Font File URL"),
    // Login page
    ("login_welcome_text", "Welcome", Text, "login", "Welcome Heading"),
    ("login_subtitle", "Sign in to access the platform", Text, "login", "Subtitle"),
    ("login_header_image", "", Image, "login", "Header Image"),
    // Landing page
    ("landing_heading_text", "[ Heading Text ]", Text, "landing", "Heading Banner Text"),
    ("landing_search_placeholder", "Search artists...", Text, "landing", "Search Placeholder"),
    ("landing_banner_image", "", Image, "landing", "Bottom Banner Image"),
    ("landing_enquiry_title", "Enquire / Subscribe", Text, "landing", "Enquiry Section Title"),
    // Section pages
    ("artists_page_title", "Artists", Text, "artists_dir", "Page Title"),
    ("events_page_title", "Events", Text, "events", "Page Title"),
    ("ds_page_title", "DS", Text, "ds", "Page Title"),
    ("ds_content_text", "[ DS content area - customisable ]", Text, "ds", "Content Text"),
    ("ds_content_image", "", Image, "ds", "Content Image"),
    // Integrations
    ("google_sheet_enquiries", "", Text, "integrations_sheets", "Enquiries Sheet (ID|SheetName)"),
    ("google_sheet_donations", "", Text, "integrations_sheets", "Donations Sheet (ID|SheetName)"),
    // Wallpapers
    ("bg_landing", "", Image, "wallpapers", "Landing Page Background"),
    ("bg_artists", "", Image, "wallpapers", "Artists Page Background"),
    ("bg_events", "", Image, "wallpapers", "Events Page Background"),
    ("bg_ds", "", Image, "wallpapers", "DS Page Background"),
    ("bg_login", "", Image, "wallpapers", "Login Page Background"),
    // Animation boxes
    ("anim_box_1_text", "", Text, "animations", "Animation Box 1 Text"),
    ("anim_box_1_style", "fade-in", Text, "animations", "Animation Box 1 Style"),
    ("anim_box_1_bg", "", Image, "animations", "Animation Box 1 Background"),
    ("anim_box_2_text", "", Text, "animations", "Animation Box 2 Text"),
    ("anim_box_2_style", "slide-up", Text, "animations", "Animation Box 2 Style"),
    ("anim_box_2_bg", "", Image, "animations", "Animation Box 2 Background"),
    ("anim_box_3_text", "", Text, "animations", "Animation Box 3 Text"),
    ("anim_box_3_style", "slide-left", Text, "animations", "Animation Box 3 Style"),
    ("anim_box_3_bg", "", Image, "animations", "Animation Box 3 Background"),
];

pub fn default_settings() -> Vec<SettingUpsert> {
    DEFAULT_SETTINGS
        .iter()
        .map(|(key, value, kind, section, label)| SettingUpsert::new(key, value, *kind, section, label))
        .collect()
}

/// Ensure every default setting exists, never touching existing values.
/// Returns how many keys were newly inserted.
pub async fn ensure_default_settings(
    conn: &impl ConnectionTrait,
) -> Result<usize, InternalError> {
    let store = SettingsStore::new();
    let inserted = store.seed_defaults(conn, &default_settings()).await?;
    if inserted > 0 {
        tracing::info!(inserted, "Seeded default site settings");
    }
    Ok(inserted)
}

/// Insert demo artists and events when the directory is empty.
pub async fn seed_demo_content(conn: &impl ConnectionTrait) -> Result<(), InternalError> {
    let existing = artist::Entity::find()
        .count(conn)
        .await
        .map_err(|e| InternalError::database("count_artists", e))?;
    if existing > 0 {
        tracing::debug!("Artists already present, skipping demo content");
        return Ok(());
    }

    tracing::info!("Seeding demo artists and events");
    let artists = ArtistStore::new();
    for new in demo_artists() {
        artists.create(conn, new).await?;
    }

    let event_count = event::Entity::find()
        .count(conn)
        .await
        .map_err(|e| InternalError::database("count_events", e))?;
    if event_count == 0 {
        let events = EventStore::new();
        for new in demo_events() {
            events.create(conn, new).await?;
        }
    }

    Ok(())
}

fn demo_artist(
    name: &str,
    genre: &str,
    description: &str,
    email: &str,
    phone: &str,
    social: &str,
    time_slot: &str,
    featured: bool,
) -> NewArtist {
    NewArtist {
        name: name.to_string(),
        genre: genre.to_string(),
        description: description.to_string(),
        image_url: String::new(),
        email: Some(email.to_string()),
        phone: Some(phone.to_string()),
        social_links: Some(social.to_string()),
        time_slot: Some(time_slot.to_string()),
        featured,
        promoter_image_url: Some(String::new()),
        ..Default::default()
    }
}

fn demo_artists() -> Vec<NewArtist> {
    vec![
        demo_artist(
            "DJ Momentum",
            "House / Deep House",
            "DJ Momentum brings pulsating deep house rhythms that move the crowd from the first beat. Known for seamless transitions and an instinct for the dancefloor, Momentum has played at festivals across the country.",
            "momentum@example.com",
            "+1 555-0101",
            "https://instagram.com/djmomentum",
            "22:00 - 00:00",
            true,
        ),
        demo_artist(
            "Vox Luna",
            "Indie Pop / Electronic",
            "Vox Luna blends ethereal vocals with electronic beats to create a dreamy sonic landscape. Her live performances weave looping and layering into a captivating one-woman show.",
            "voxluna@example.com",
            "+1 555-0102",
            "https://instagram.com/voxluna",
            "20:00 - 21:30",
            true,
        ),
        demo_artist(
            "The Brass Assembly",
            "Jazz / Funk",
            "A seven-piece brass ensemble that fuses classic jazz with modern funk grooves. The Brass Assembly brings high energy and tight arrangements to every performance.",
            "brass@example.com",
            "+1 555-0103",
            "https://instagram.com/brassassembly",
            "18:00 - 19:30",
            true,
        ),
        demo_artist(
            "Neon Pulse",
            "Synthwave / Retro",
            "Neon Pulse takes audiences on a journey through retro-futuristic soundscapes. Combining analogue synths with modern production, each set feels like a soundtrack to a film that hasn't been made yet.",
            "neonpulse@example.com",
            "+1 555-0104",
            "https://instagram.com/neonpulse",
            "00:00 - 02:00",
            true,
        ),
        demo_artist(
            "Roots Collective",
            "Reggae / Dub",
            "Roots Collective brings authentic reggae and dub vibrations with live instrumentation.",
            "roots@example.com",
            "+1 555-0105",
            "https://instagram.com/rootscollective",
            "16:00 - 17:30",
            false,
        ),
        demo_artist(
            "MC Frequency",
            "Hip Hop / Spoken Word",
            "MC Frequency delivers sharp lyricism and powerful spoken word over original beats.",
            "frequency@example.com",
            "+1 555-0106",
            "https://instagram.com/mcfrequency",
            "19:30 - 20:00",
            false,
        ),
        demo_artist(
            "Aurora Keys",
            "Classical Crossover",
            "Aurora Keys reimagines classical piano pieces with electronic arrangements.",
            "aurora@example.com",
            "+1 555-0107",
            "https://instagram.com/aurorakeys",
            "15:00 - 16:00",
            false,
        ),
        demo_artist(
            "Bass Theory",
            "Drum & Bass / Jungle",
            "Bass Theory delivers relentless drum and bass sets that push the boundaries of tempo and texture.",
            "basstheory@example.com",
            "+1 555-0108",
            "https://instagram.com/basstheory",
            "02:00 - 04:00",
            false,
        ),
    ]
}

fn demo_events() -> Vec<NewEvent> {
    vec![
        NewEvent {
            name: "Summer Sound Festival 2026".to_string(),
            description: Some("A full day of live music across three stages.".to_string()),
            image_url: Some(String::new()),
            date: Some("July 15, 2026".to_string()),
            venue: Some("Riverside Park Amphitheatre".to_string()),
            ..Default::default()
        },
        NewEvent {
            name: "Midnight Sessions".to_string(),
            description: Some("An intimate late-night electronic music showcase.".to_string()),
            image_url: Some(String::new()),
            date: Some("August 22, 2026".to_string()),
            venue: Some("The Warehouse, Downtown".to_string()),
            ..Default::default()
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    #[test]
    fn seed_keys_are_unique() {
        let keys: BTreeSet<&str> = DEFAULT_SETTINGS.iter().map(|(k, ..)| *k).collect();
        assert_eq!(keys.len(), DEFAULT_SETTINGS.len());
    }

    #[test]
    fn toggle_values_are_booleans_encoded_as_strings() {
        for (key, value, kind, ..) in DEFAULT_SETTINGS {
            if *kind == SettingType::Toggle {
                assert!(
                    *value == "true" || *value == "false",
                    "toggle {key} must seed a boolean string"
                );
            }
        }
    }

    #[test]
    fn sheet_target_keys_live_in_the_integrations_section() {
        for key in [
            crate::services::sheets::ENQUIRIES_SHEET_KEY,
            crate::services::sheets::DONATIONS_SHEET_KEY,
        ] {
            let entry = DEFAULT_SETTINGS
                .iter()
                .find(|(k, ..)| *k == key)
                .expect("sheet key seeded");
            assert_eq!(entry.3, "integrations_sheets");
        }
    }
}
