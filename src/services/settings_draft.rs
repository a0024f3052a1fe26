use std::collections::BTreeMap;

use crate::types::db::site_setting;
use crate::types::dto::SettingUpsert;

/// In-progress edits over a fetched settings snapshot.
///
/// Editor surfaces fetch every setting once, overlay pending edits locally,
/// and on save submit only the entries belonging to the active section. The
/// draft is an explicit value handed to the caller; nothing here reads or
/// writes ambient state.
#[derive(Debug, Default)]
pub struct SettingsDraft {
    persisted: BTreeMap<String, site_setting::Model>,
    dirty: BTreeMap<String, String>,
    added: Vec<SettingUpsert>,
}

impl SettingsDraft {
    pub fn new(settings: Vec<site_setting::Model>) -> Self {
        Self {
            persisted: settings.into_iter().map(|s| (s.key.clone(), s)).collect(),
            dirty: BTreeMap::new(),
            added: Vec::new(),
        }
    }

    /// Record a pending value for an existing key.
    pub fn edit(&mut self, key: &str, value: &str) {
        if let Some(entry) = self.added.iter_mut().find(|e| e.key == key) {
            entry.value = value.to_string();
            return;
        }
        self.dirty.insert(key.to_string(), value.to_string());
    }

    /// Introduce a key not present in the snapshot.
    ///
    /// The entry carries its section explicitly; there is no inference from
    /// the key name. Re-adding a known key is treated as an edit.
    pub fn add_setting(&mut self, entry: SettingUpsert) {
        if self.persisted.contains_key(&entry.key) {
            self.dirty.insert(entry.key, entry.value);
            return;
        }
        if let Some(existing) = self.added.iter_mut().find(|e| e.key == entry.key) {
            *existing = entry;
            return;
        }
        self.added.push(entry);
    }

    /// Effective displayed value: pending edit first, then persisted value.
    pub fn effective_value(&self, key: &str) -> Option<&str> {
        if let Some(pending) = self.dirty.get(key) {
            return Some(pending);
        }
        if let Some(entry) = self.added.iter().find(|e| e.key == key) {
            return Some(&entry.value);
        }
        self.persisted.get(key).map(|s| s.value.as_str())
    }

    pub fn has_pending_changes(&self) -> bool {
        !self.dirty.is_empty() || !self.added.is_empty()
    }

    /// The save payload for one section.
    ///
    /// Every persisted setting of the section is included at its effective
    /// value, so the store-level bulk upsert overwrites the whole section.
    /// Pending edits to keys outside the section are excluded. Newly added
    /// entries are included only when their own section matches.
    pub fn section_payload(&self, section: &str) -> Vec<SettingUpsert> {
        let mut payload: Vec<SettingUpsert> = self
            .persisted
            .values()
            .filter(|s| s.section == section)
            .map(|s| SettingUpsert {
                key: s.key.clone(),
                value: self
                    .dirty
                    .get(&s.key)
                    .cloned()
                    .unwrap_or_else(|| s.value.clone()),
                kind: s.kind.clone(),
                section: s.section.clone(),
                label: s.label.clone(),
            })
            .collect();

        payload.extend(self.added.iter().filter(|e| e.section == section).cloned());
        payload
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::dto::SettingType;

    fn setting(key: &str, value: &str, section: &str) -> site_setting::Model {
        site_setting::Model {
            key: key.to_string(),
            value: value.to_string(),
            kind: "text".to_string(),
            section: section.to_string(),
            label: String::new(),
            created_at: 0,
            updated_at: 0,
        }
    }

    #[test]
    fn effective_value_prefers_pending_edit() {
        let mut draft = SettingsDraft::new(vec![setting("k1", "a", "global")]);
        assert_eq!(draft.effective_value("k1"), Some("a"));

        draft.edit("k1", "b");
        assert_eq!(draft.effective_value("k1"), Some("b"));
        assert_eq!(draft.effective_value("missing"), None);
    }

    #[test]
    fn section_payload_excludes_out_of_section_edits() {
        // Persisted {k1:"a"} in section S; pending edits {k1:"b", k2:"c"}
        // where k2 is not in S. Saving S must carry k1=b and drop k2.
        let mut draft = SettingsDraft::new(vec![
            setting("k1", "a", "s"),
            setting("k2", "x", "other"),
        ]);
        draft.edit("k1", "b");
        draft.edit("k2", "c");

        let payload = draft.section_payload("s");
        assert_eq!(payload.len(), 1);
        assert_eq!(payload[0].key, "k1");
        assert_eq!(payload[0].value, "b");
    }

    #[test]
    fn unedited_section_keys_are_still_submitted() {
        let mut draft = SettingsDraft::new(vec![
            setting("k1", "a", "s"),
            setting("k2", "b", "s"),
        ]);
        draft.edit("k1", "changed");

        let payload = draft.section_payload("s");
        assert_eq!(payload.len(), 2);
        let k2 = payload.iter().find(|e| e.key == "k2").expect("k2 present");
        assert_eq!(k2.value, "b");
    }

    #[test]
    fn added_keys_carry_explicit_section() {
        let mut draft = SettingsDraft::new(vec![setting("k1", "a", "s")]);
        draft.add_setting(SettingUpsert::new(
            "google_sheet_bookings",
            "sheet-id|Bookings",
            SettingType::Text,
            "integrations_sheets",
            "Bookings Sheet",
        ));

        // The new key only appears in its own section's payload
        assert!(draft.section_payload("s").iter().all(|e| e.key == "k1"));
        let integrations = draft.section_payload("integrations_sheets");
        assert_eq!(integrations.len(), 1);
        assert_eq!(integrations[0].key, "google_sheet_bookings");
        assert_eq!(
            draft.effective_value("google_sheet_bookings"),
            Some("sheet-id|Bookings")
        );
    }

    #[test]
    fn re_adding_known_key_is_an_edit() {
        let mut draft = SettingsDraft::new(vec![setting("k1", "a", "s")]);
        draft.add_setting(SettingUpsert::new("k1", "b", SettingType::Text, "elsewhere", ""));

        // The key keeps its persisted section; only the value changed
        let payload = draft.section_payload("s");
        assert_eq!(payload.len(), 1);
        assert_eq!(payload[0].value, "b");
        assert!(draft.section_payload("elsewhere").is_empty());
    }
}
