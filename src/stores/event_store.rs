use sea_orm::{ActiveModelTrait, ConnectionTrait, EntityTrait, Set};

use crate::errors::internal::ContentError;
use crate::errors::InternalError;
use crate::services::visibility::{self, EntityKind};
use crate::types::db::event::{self, ActiveModel, Entity as Event};
use crate::types::dto::{EventPatch, NewEvent};

/// EventStore manages the events listing records
pub struct EventStore {}

impl EventStore {
    pub fn new() -> Self {
        Self {}
    }

    pub async fn get_all(
        &self,
        conn: &impl ConnectionTrait,
    ) -> Result<Vec<event::Model>, InternalError> {
        Event::find()
            .all(conn)
            .await
            .map_err(|e| InternalError::database("get_events", e))
    }

    pub async fn get_by_id(
        &self,
        conn: &impl ConnectionTrait,
        id: i32,
    ) -> Result<event::Model, InternalError> {
        Event::find_by_id(id)
            .one(conn)
            .await
            .map_err(|e| InternalError::database("get_event", e))?
            .ok_or_else(|| ContentError::not_found("event", id).into())
    }

    pub async fn create(
        &self,
        conn: &impl ConnectionTrait,
        new: NewEvent,
    ) -> Result<event::Model, InternalError> {
        let model = ActiveModel {
            name: Set(new.name),
            description: Set(new.description),
            image_url: Set(new.image_url),
            date: Set(new.date),
            venue: Set(new.venue),
            time: Set(new.time),
            end_date: Set(new.end_date),
            end_time: Set(new.end_time),
            address: Set(new.address),
            google_maps_url: Set(new.google_maps_url),
            ticket_url: Set(new.ticket_url),
            visible_fields: Set(new.visible_fields),
            ..Default::default()
        };

        model
            .insert(conn)
            .await
            .map_err(|e| InternalError::database("create_event", e))
    }

    /// Apply a partial update; only provided fields are written.
    pub async fn patch(
        &self,
        conn: &impl ConnectionTrait,
        id: i32,
        patch: EventPatch,
    ) -> Result<event::Model, InternalError> {
        let model = self.get_by_id(conn, id).await?;
        let mut active: ActiveModel = model.into();

        if let Some(v) = patch.name {
            active.name = Set(v);
        }
        if let Some(v) = patch.description {
            active.description = Set(Some(v));
        }
        if let Some(v) = patch.image_url {
            active.image_url = Set(Some(v));
        }
        if let Some(v) = patch.date {
            active.date = Set(Some(v));
        }
        if let Some(v) = patch.venue {
            active.venue = Set(Some(v));
        }
        if let Some(v) = patch.time {
            active.time = Set(Some(v));
        }
        if let Some(v) = patch.end_date {
            active.end_date = Set(Some(v));
        }
        if let Some(v) = patch.end_time {
            active.end_time = Set(Some(v));
        }
        if let Some(v) = patch.address {
            active.address = Set(Some(v));
        }
        if let Some(v) = patch.google_maps_url {
            active.google_maps_url = Set(Some(v));
        }
        if let Some(v) = patch.ticket_url {
            active.ticket_url = Set(Some(v));
        }
        if let Some(v) = patch.visible_fields {
            active.visible_fields = Set(Some(v));
        }

        active
            .update(conn)
            .await
            .map_err(|e| InternalError::database("update_event", e))
    }

    /// Delete by id. Deleting an absent id is a no-op.
    pub async fn delete(&self, conn: &impl ConnectionTrait, id: i32) -> Result<(), InternalError> {
        Event::delete_by_id(id)
            .exec(conn)
            .await
            .map_err(|e| InternalError::database("delete_event", e))?;
        Ok(())
    }

    /// Toggle one field's public visibility, persisting the full resolved map.
    pub async fn set_field_visibility(
        &self,
        conn: &impl ConnectionTrait,
        id: i32,
        field: &str,
        visible: bool,
    ) -> Result<event::Model, InternalError> {
        let model = self.get_by_id(conn, id).await?;
        let next = visibility::toggle_field(
            model.visible_fields.as_deref(),
            &EntityKind::Event.default_visibility(),
            field,
            visible,
        );

        let mut active: ActiveModel = model.into();
        active.visible_fields = Set(Some(next));
        active
            .update(conn)
            .await
            .map_err(|e| InternalError::database("update_event_visibility", e))
    }
}

impl Default for EventStore {
    fn default() -> Self {
        Self::new()
    }
}
