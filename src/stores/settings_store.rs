use chrono::Utc;
use sea_orm::sea_query::OnConflict;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder,
    Set,
};

use crate::errors::internal::SettingsError;
use crate::errors::InternalError;
use crate::types::db::site_setting::{self, ActiveModel, Column, Entity as SiteSetting};
use crate::types::dto::SettingUpsert;

/// SettingsStore manages the flat key/value site-settings table
///
/// Keys are globally unique; values are always strings. Settings are created
/// by seeding or bulk upserts and never deleted.
pub struct SettingsStore {}

impl SettingsStore {
    pub fn new() -> Self {
        Self {}
    }

    /// Fetch every setting, ordered by key.
    pub async fn get_all(
        &self,
        conn: &impl ConnectionTrait,
    ) -> Result<Vec<site_setting::Model>, InternalError> {
        SiteSetting::find()
            .order_by_asc(Column::Key)
            .all(conn)
            .await
            .map_err(|e| InternalError::database("get_all_settings", e))
    }

    /// Fetch the settings of one editor section, ordered by key.
    pub async fn get_by_section(
        &self,
        conn: &impl ConnectionTrait,
        section: &str,
    ) -> Result<Vec<site_setting::Model>, InternalError> {
        SiteSetting::find()
            .filter(Column::Section.eq(section))
            .order_by_asc(Column::Key)
            .all(conn)
            .await
            .map_err(|e| InternalError::database("get_settings_by_section", e))
    }

    /// Fetch a single setting by key.
    pub async fn get(
        &self,
        conn: &impl ConnectionTrait,
        key: &str,
    ) -> Result<Option<site_setting::Model>, InternalError> {
        SiteSetting::find_by_id(key)
            .one(conn)
            .await
            .map_err(|e| InternalError::database("get_setting", e))
    }

    /// Insert-or-update one entry keyed by `key`.
    ///
    /// The widget type travels verbatim; an unknown name is stored as-is and
    /// only degrades which editor widget a UI picks.
    pub async fn upsert(
        &self,
        conn: &impl ConnectionTrait,
        entry: &SettingUpsert,
    ) -> Result<site_setting::Model, InternalError> {
        self.upsert_one(conn, entry)
            .await
            .map_err(|e| InternalError::database("upsert_setting", e))?;

        SiteSetting::find_by_id(entry.key.as_str())
            .one(conn)
            .await
            .map_err(|e| InternalError::database("get_setting_after_upsert", e))?
            .ok_or_else(|| {
                InternalError::database(
                    "get_setting_after_upsert",
                    DbErr::RecordNotFound(entry.key.clone()),
                )
            })
    }

    /// Apply a bulk save entry by entry.
    ///
    /// There is no transaction boundary: entries are independent upserts and
    /// a failure mid-list leaves earlier entries applied. The error reports
    /// how far the save got so callers can re-fetch and reconcile.
    pub async fn upsert_many(
        &self,
        conn: &impl ConnectionTrait,
        entries: &[SettingUpsert],
    ) -> Result<(), InternalError> {
        for (applied, entry) in entries.iter().enumerate() {
            if let Err(source) = self.upsert_one(conn, entry).await {
                return Err(SettingsError::PartialUpsert {
                    applied,
                    key: entry.key.clone(),
                    source,
                }
                .into());
            }
        }
        Ok(())
    }

    /// Seed defaults: insert any entry whose key is absent, leave existing
    /// values untouched. Returns how many entries were inserted.
    pub async fn seed_defaults(
        &self,
        conn: &impl ConnectionTrait,
        entries: &[SettingUpsert],
    ) -> Result<usize, InternalError> {
        let mut inserted = 0;
        for entry in entries {
            let existing = SiteSetting::find_by_id(entry.key.as_str())
                .one(conn)
                .await
                .map_err(|e| InternalError::database("check_setting_exists", e))?;
            if existing.is_some() {
                continue;
            }

            let now = Utc::now().timestamp();
            let model = ActiveModel {
                key: Set(entry.key.clone()),
                value: Set(entry.value.clone()),
                kind: Set(entry.kind.clone()),
                section: Set(entry.section.clone()),
                label: Set(entry.label.clone()),
                created_at: Set(now),
                updated_at: Set(now),
            };
            model
                .insert(conn)
                .await
                .map_err(|e| InternalError::database("seed_setting", e))?;
            inserted += 1;
        }
        Ok(inserted)
    }

    async fn upsert_one(
        &self,
        conn: &impl ConnectionTrait,
        entry: &SettingUpsert,
    ) -> Result<(), DbErr> {
        let now = Utc::now().timestamp();
        let model = ActiveModel {
            key: Set(entry.key.clone()),
            value: Set(entry.value.clone()),
            kind: Set(entry.kind.clone()),
            section: Set(entry.section.clone()),
            label: Set(entry.label.clone()),
            created_at: Set(now),
            updated_at: Set(now),
        };

        SiteSetting::insert(model)
            .on_conflict(
                OnConflict::column(Column::Key)
                    .update_columns([
                        Column::Value,
                        Column::Kind,
                        Column::Section,
                        Column::Label,
                        Column::UpdatedAt,
                    ])
                    .to_owned(),
            )
            .exec_without_returning(conn)
            .await?;
        Ok(())
    }
}

impl Default for SettingsStore {
    fn default() -> Self {
        Self::new()
    }
}
