use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Entity kinds that carry a per-record visibility override.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EntityKind {
    Artist,
    Event,
    DsClient,
}

/// Public-facing fields of an artist record, in display order.
pub const ARTIST_FIELDS: &[&str] = &[
    "name",
    "image_url",
    "image_url_2",
    "origin",
    "members",
    "bio",
    "website",
    "phone",
    "email",
    "genre",
    "description",
    "time_slot",
    "social_links",
    "promoter_image_url",
    "song_link_1",
    "song_link_2",
    "video_link_1",
    "video_link_2",
    "custom_link_1",
    "custom_link_2",
    "custom_link_3",
    "custom_link_4",
    "custom_link_5",
];

/// Public-facing fields of an event record, in display order.
pub const EVENT_FIELDS: &[&str] = &[
    "name",
    "description",
    "image_url",
    "date",
    "time",
    "end_date",
    "end_time",
    "venue",
    "address",
    "google_maps_url",
    "ticket_url",
];

/// DS clients share the artist field set minus the featured flag, which was
/// never visibility-controlled to begin with.
pub const DS_CLIENT_FIELDS: &[&str] = ARTIST_FIELDS;

impl EntityKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::Artist => "artist",
            EntityKind::Event => "event",
            EntityKind::DsClient => "ds_client",
        }
    }

    /// The closed set of field identifiers this kind exposes publicly.
    pub fn fields(&self) -> &'static [&'static str] {
        match self {
            EntityKind::Artist => ARTIST_FIELDS,
            EntityKind::Event => EVENT_FIELDS,
            EntityKind::DsClient => DS_CLIENT_FIELDS,
        }
    }

    /// Default visibility map for this kind: every field visible.
    pub fn default_visibility(&self) -> VisibilityMap {
        VisibilityMap(self.fields().iter().map(|f| (f.to_string(), true)).collect())
    }

    /// Effective visibility of a record of this kind given its raw override.
    pub fn resolve(&self, raw: Option<&str>) -> VisibilityMap {
        VisibilityMap::resolve(raw, &self.default_visibility())
    }
}

/// Resolved field-name to visibility mapping.
///
/// Resolution never fails: a missing or malformed override leaves the
/// defaults untouched, so a visibility glitch cannot break page rendering.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VisibilityMap(BTreeMap<String, bool>);

impl VisibilityMap {
    /// Merge a raw JSON override over a default map.
    ///
    /// Keys present in the parsed override replace the default; override keys
    /// unknown to the defaults are retained so a caller can probe them later.
    /// Overrides must be a JSON object of booleans; anything else (null,
    /// non-object, non-bool values, truncated text) is treated as no override.
    pub fn resolve(raw: Option<&str>, defaults: &VisibilityMap) -> VisibilityMap {
        let mut resolved = defaults.clone();
        if let Some(raw) = raw {
            if let Ok(overrides) = serde_json::from_str::<BTreeMap<String, bool>>(raw) {
                for (field, visible) in overrides {
                    resolved.0.insert(field, visible);
                }
            }
        }
        resolved
    }

    /// Absent keys default to visible.
    pub fn is_visible(&self, field: &str) -> bool {
        self.0.get(field).copied().unwrap_or(true)
    }

    pub fn set(&mut self, field: &str, visible: bool) {
        self.0.insert(field.to_string(), visible);
    }

    /// Serialized form persisted in a record's `visible_fields` column.
    /// Always the full resolved map, never a diff.
    pub fn to_json(&self) -> String {
        serde_json::to_string(&self.0).unwrap_or_else(|_| "{}".to_string())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, bool)> {
        self.0.iter().map(|(k, v)| (k.as_str(), *v))
    }
}

/// Compute the next persisted override after an admin toggles one field.
///
/// The stored JSON reflects the full resolved map at time of toggle, which
/// freezes the then-current defaults into the record: fields added to the
/// default map later only affect records that were never toggled.
pub fn toggle_field(
    raw: Option<&str>,
    defaults: &VisibilityMap,
    field: &str,
    visible: bool,
) -> String {
    let mut resolved = VisibilityMap::resolve(raw, defaults);
    resolved.set(field, visible);
    resolved.to_json()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn defaults_ab() -> VisibilityMap {
        let mut map = VisibilityMap::default();
        map.set("a", true);
        map.set("b", true);
        map
    }

    #[test]
    fn resolve_none_returns_defaults() {
        let defaults = defaults_ab();
        assert_eq!(VisibilityMap::resolve(None, &defaults), defaults);
    }

    #[test]
    fn resolve_malformed_json_returns_defaults() {
        let defaults = defaults_ab();
        assert_eq!(VisibilityMap::resolve(Some("not json"), &defaults), defaults);
        assert_eq!(VisibilityMap::resolve(Some(""), &defaults), defaults);
        assert_eq!(VisibilityMap::resolve(Some("[1,2]"), &defaults), defaults);
        // Non-bool values reject the whole override
        assert_eq!(
            VisibilityMap::resolve(Some(r#"{"a":"yes"}"#), &defaults),
            defaults
        );
    }

    #[test]
    fn resolve_override_replaces_default() {
        let defaults = defaults_ab();
        let resolved = VisibilityMap::resolve(Some(r#"{"a":false}"#), &defaults);
        assert!(!resolved.is_visible("a"));
        assert!(resolved.is_visible("b"));
        assert_eq!(resolved.len(), 2);
    }

    #[test]
    fn resolve_retains_unknown_override_keys() {
        let defaults = defaults_ab();
        let resolved = VisibilityMap::resolve(Some(r#"{"c":false}"#), &defaults);
        assert!(!resolved.is_visible("c"));
        assert!(resolved.is_visible("a"));
        assert_eq!(resolved.len(), 3);
    }

    #[test]
    fn absent_key_defaults_to_visible() {
        let resolved = VisibilityMap::resolve(None, &defaults_ab());
        assert!(resolved.is_visible("never_heard_of_it"));
    }

    #[test]
    fn toggle_to_current_value_is_idempotent() {
        let defaults = defaults_ab();
        let raw = r#"{"a":false}"#;
        let before = VisibilityMap::resolve(Some(raw), &defaults);
        let rewritten = toggle_field(Some(raw), &defaults, "a", before.is_visible("a"));
        assert_eq!(VisibilityMap::resolve(Some(&rewritten), &defaults), before);
    }

    #[test]
    fn resolve_serialize_resolve_is_fixed_point() {
        let defaults = defaults_ab();
        let resolved = VisibilityMap::resolve(Some(r#"{"b":false,"z":true}"#), &defaults);
        let reresolved = VisibilityMap::resolve(Some(&resolved.to_json()), &defaults);
        assert_eq!(reresolved, resolved);
    }

    #[test]
    fn toggle_persists_full_resolved_map() {
        let defaults = defaults_ab();
        let written = toggle_field(None, &defaults, "a", false);
        let parsed: std::collections::BTreeMap<String, bool> =
            serde_json::from_str(&written).expect("toggle output is valid JSON");
        // Both defaults are present, not just the toggled field
        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed["a"], false);
        assert_eq!(parsed["b"], true);
    }

    #[test]
    fn entity_defaults_are_all_visible() {
        for kind in [EntityKind::Artist, EntityKind::Event, EntityKind::DsClient] {
            let defaults = kind.default_visibility();
            assert_eq!(defaults.len(), kind.fields().len());
            assert!(defaults.iter().all(|(_, visible)| visible));
        }
    }
}
