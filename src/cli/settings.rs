use crate::app_data::AppData;
use crate::errors::internal::SettingsError;
use crate::errors::InternalError;
use crate::types::dto::SettingUpsert;

/// Print settings, optionally restricted to one section.
pub async fn list(app_data: &AppData, section: Option<&str>) -> Result<(), InternalError> {
    let settings = match section {
        Some(section) => {
            app_data
                .settings_store
                .get_by_section(&app_data.db, section)
                .await?
        }
        None => app_data.settings_store.get_all(&app_data.db).await?,
    };

    if settings.is_empty() {
        println!("No settings found");
        return Ok(());
    }

    for setting in settings {
        println!(
            "{}/{} [{}] = {:?}  ({})",
            setting.section, setting.key, setting.kind, setting.value, setting.label
        );
    }
    Ok(())
}

/// Update the value of an existing setting.
///
/// Unknown keys are refused: new keys carry their section explicitly at
/// creation time, which happens through seeding or a bulk editor save.
pub async fn set(app_data: &AppData, key: &str, value: &str) -> Result<(), InternalError> {
    let existing = app_data
        .settings_store
        .get(&app_data.db, key)
        .await?
        .ok_or_else(|| SettingsError::UnknownKey {
            key: key.to_string(),
        })?;

    let updated = app_data
        .settings_store
        .upsert(
            &app_data.db,
            &SettingUpsert {
                key: existing.key,
                value: value.to_string(),
                kind: existing.kind,
                section: existing.section,
                label: existing.label,
            },
        )
        .await?;

    println!(
        "{}/{} = {:?}",
        updated.section, updated.key, updated.value
    );
    Ok(())
}
