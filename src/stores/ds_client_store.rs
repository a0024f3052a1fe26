use sea_orm::{ActiveModelTrait, ConnectionTrait, EntityTrait, Set};

use crate::errors::internal::ContentError;
use crate::errors::InternalError;
use crate::services::visibility::{self, EntityKind};
use crate::types::db::ds_client::{self, ActiveModel, Entity as DsClient};
use crate::types::dto::{DsClientPatch, NewDsClient};

/// DsClientStore manages the secondary "DS" client directory
pub struct DsClientStore {}

impl DsClientStore {
    pub fn new() -> Self {
        Self {}
    }

    pub async fn get_all(
        &self,
        conn: &impl ConnectionTrait,
    ) -> Result<Vec<ds_client::Model>, InternalError> {
        DsClient::find()
            .all(conn)
            .await
            .map_err(|e| InternalError::database("get_ds_clients", e))
    }

    pub async fn get_by_id(
        &self,
        conn: &impl ConnectionTrait,
        id: i32,
    ) -> Result<ds_client::Model, InternalError> {
        DsClient::find_by_id(id)
            .one(conn)
            .await
            .map_err(|e| InternalError::database("get_ds_client", e))?
            .ok_or_else(|| ContentError::not_found("ds_client", id).into())
    }

    pub async fn create(
        &self,
        conn: &impl ConnectionTrait,
        new: NewDsClient,
    ) -> Result<ds_client::Model, InternalError> {
        let model = ActiveModel {
            name: Set(new.name),
            genre: Set(new.genre),
            description: Set(new.description),
            image_url: Set(new.image_url),
            image_url_2: Set(new.image_url_2),
            email: Set(new.email),
            phone: Set(new.phone),
            social_links: Set(new.social_links),
            time_slot: Set(new.time_slot),
            promoter_image_url: Set(new.promoter_image_url),
            origin: Set(new.origin),
            members: Set(new.members),
            bio: Set(new.bio),
            website: Set(new.website),
            song_link_1: Set(new.song_link_1),
            song_link_2: Set(new.song_link_2),
            video_link_1: Set(new.video_link_1),
            video_link_2: Set(new.video_link_2),
            custom_link_1: Set(new.custom_link_1),
            custom_link_2: Set(new.custom_link_2),
            custom_link_3: Set(new.custom_link_3),
            custom_link_4: Set(new.custom_link_4),
            custom_link_5: Set(new.custom_link_5),
            visible_fields: Set(new.visible_fields),
            ..Default::default()
        };

        model
            .insert(conn)
            .await
            .map_err(|e| InternalError::database("create_ds_client", e))
    }

    /// Apply a partial update; only provided fields are written.
    pub async fn patch(
        &self,
        conn: &impl ConnectionTrait,
        id: i32,
        patch: DsClientPatch,
    ) -> Result<ds_client::Model, InternalError> {
        let model = self.get_by_id(conn, id).await?;
        let mut active: ActiveModel = model.into();

        if let Some(v) = patch.name {
            active.name = Set(v);
        }
        if let Some(v) = patch.genre {
            active.genre = Set(Some(v));
        }
        if let Some(v) = patch.description {
            active.description = Set(Some(v));
        }
        if let Some(v) = patch.image_url {
            active.image_url = Set(Some(v));
        }
        if let Some(v) = patch.image_url_2 {
            active.image_url_2 = Set(Some(v));
        }
        if let Some(v) = patch.email {
            active.email = Set(Some(v));
        }
        if let Some(v) = patch.phone {
            active.phone = Set(Some(v));
        }
        if let Some(v) = patch.social_links {
            active.social_links = Set(Some(v));
        }
        if let Some(v) = patch.time_slot {
            active.time_slot = Set(Some(v));
        }
        if let Some(v) = patch.promoter_image_url {
            active.promoter_image_url = Set(Some(v));
        }
        if let Some(v) = patch.origin {
            active.origin = Set(Some(v));
        }
        if let Some(v) = patch.members {
            active.members = Set(Some(v));
        }
        if let Some(v) = patch.bio {
            active.bio = Set(Some(v));
        }
        if let Some(v) = patch.website {
            active.website = Set(Some(v));
        }
        if let Some(v) = patch.song_link_1 {
            active.song_link_1 = Set(Some(v));
        }
        if let Some(v) = patch.song_link_2 {
            active.song_link_2 = Set(Some(v));
        }
        if let Some(v) = patch.video_link_1 {
            active.video_link_1 = Set(Some(v));
        }
        if let Some(v) = patch.video_link_2 {
            active.video_link_2 = Set(Some(v));
        }
        if let Some(v) = patch.custom_link_1 {
            active.custom_link_1 = Set(Some(v));
        }
        if let Some(v) = patch.custom_link_2 {
            active.custom_link_2 = Set(Some(v));
        }
        if let Some(v) = patch.custom_link_3 {
            active.custom_link_3 = Set(Some(v));
        }
        if let Some(v) = patch.custom_link_4 {
            active.custom_link_4 = Set(Some(v));
        }
        if let Some(v) = patch.custom_link_5 {
            active.custom_link_5 = Set(Some(v));
        }
        if let Some(v) = patch.visible_fields {
            active.visible_fields = Set(Some(v));
        }

        active
            .update(conn)
            .await
            .map_err(|e| InternalError::database("update_ds_client", e))
    }

    /// Delete by id. Deleting an absent id is a no-op.
    pub async fn delete(&self, conn: &impl ConnectionTrait, id: i32) -> Result<(), InternalError> {
        DsClient::delete_by_id(id)
            .exec(conn)
            .await
            .map_err(|e| InternalError::database("delete_ds_client", e))?;
        Ok(())
    }

    /// Toggle one field's public visibility, persisting the full resolved map.
    pub async fn set_field_visibility(
        &self,
        conn: &impl ConnectionTrait,
        id: i32,
        field: &str,
        visible: bool,
    ) -> Result<ds_client::Model, InternalError> {
        let model = self.get_by_id(conn, id).await?;
        let next = visibility::toggle_field(
            model.visible_fields.as_deref(),
            &EntityKind::DsClient.default_visibility(),
            field,
            visible,
        );

        let mut active: ActiveModel = model.into();
        active.visible_fields = Set(Some(next));
        active
            .update(conn)
            .await
            .map_err(|e| InternalError::database("update_ds_client_visibility", e))
    }
}

impl Default for DsClientStore {
    fn default() -> Self {
        Self::new()
    }
}
