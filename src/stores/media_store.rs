use sea_orm::{ActiveModelTrait, ConnectionTrait, EntityTrait, QueryOrder, Set};

use crate::errors::internal::ContentError;
use crate::errors::InternalError;
use crate::types::db::media_item::{self, ActiveModel, Column, Entity as MediaItem};
use crate::types::dto::{MediaItemPatch, NewMediaItem};

/// MediaStore manages the embeddable media gallery
pub struct MediaStore {}

impl MediaStore {
    pub fn new() -> Self {
        Self {}
    }

    pub async fn get_all(
        &self,
        conn: &impl ConnectionTrait,
    ) -> Result<Vec<media_item::Model>, InternalError> {
        MediaItem::find()
            .order_by_asc(Column::SortOrder)
            .order_by_asc(Column::Id)
            .all(conn)
            .await
            .map_err(|e| InternalError::database("get_media_items", e))
    }

    pub async fn get_by_id(
        &self,
        conn: &impl ConnectionTrait,
        id: i32,
    ) -> Result<media_item::Model, InternalError> {
        MediaItem::find_by_id(id)
            .one(conn)
            .await
            .map_err(|e| InternalError::database("get_media_item", e))?
            .ok_or_else(|| ContentError::not_found("media_item", id).into())
    }

    pub async fn create(
        &self,
        conn: &impl ConnectionTrait,
        new: NewMediaItem,
    ) -> Result<media_item::Model, InternalError> {
        let model = ActiveModel {
            title: Set(new.title),
            artist: Set(new.artist),
            kind: Set(new.kind),
            embed_url: Set(new.embed_url),
            thumbnail_url: Set(new.thumbnail_url),
            duration: Set(new.duration),
            sort_order: Set(new.sort_order),
            ..Default::default()
        };

        model
            .insert(conn)
            .await
            .map_err(|e| InternalError::database("create_media_item", e))
    }

    /// Apply a partial update; only provided fields are written.
    pub async fn patch(
        &self,
        conn: &impl ConnectionTrait,
        id: i32,
        patch: MediaItemPatch,
    ) -> Result<media_item::Model, InternalError> {
        let model = self.get_by_id(conn, id).await?;
        let mut active: ActiveModel = model.into();

        if let Some(v) = patch.title {
            active.title = Set(v);
        }
        if let Some(v) = patch.artist {
            active.artist = Set(Some(v));
        }
        if let Some(v) = patch.kind {
            active.kind = Set(v);
        }
        if let Some(v) = patch.embed_url {
            active.embed_url = Set(v);
        }
        if let Some(v) = patch.thumbnail_url {
            active.thumbnail_url = Set(Some(v));
        }
        if let Some(v) = patch.duration {
            active.duration = Set(Some(v));
        }
        if let Some(v) = patch.sort_order {
            active.sort_order = Set(v);
        }

        active
            .update(conn)
            .await
            .map_err(|e| InternalError::database("update_media_item", e))
    }

    /// Delete by id. Deleting an absent id is a no-op.
    pub async fn delete(&self, conn: &impl ConnectionTrait, id: i32) -> Result<(), InternalError> {
        MediaItem::delete_by_id(id)
            .exec(conn)
            .await
            .map_err(|e| InternalError::database("delete_media_item", e))?;
        Ok(())
    }
}

impl Default for MediaStore {
    fn default() -> Self {
        Self::new()
    }
}
