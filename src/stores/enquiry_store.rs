use chrono::Utc;
use sea_orm::{ActiveModelTrait, ConnectionTrait, EntityTrait, QueryOrder, Set};

use crate::errors::InternalError;
use crate::types::db::enquiry::{self, ActiveModel, Column, Entity as Enquiry};
use crate::types::dto::NewEnquiry;

/// EnquiryStore manages visitor enquiry submissions
pub struct EnquiryStore {}

impl EnquiryStore {
    pub fn new() -> Self {
        Self {}
    }

    /// Fetch every enquiry, newest first.
    pub async fn get_all(
        &self,
        conn: &impl ConnectionTrait,
    ) -> Result<Vec<enquiry::Model>, InternalError> {
        Enquiry::find()
            .order_by_desc(Column::CreatedAt)
            .all(conn)
            .await
            .map_err(|e| InternalError::database("get_enquiries", e))
    }

    pub async fn create(
        &self,
        conn: &impl ConnectionTrait,
        new: NewEnquiry,
    ) -> Result<enquiry::Model, InternalError> {
        let model = ActiveModel {
            name: Set(new.name),
            email: Set(new.email),
            message: Set(new.message),
            created_at: Set(Utc::now().timestamp()),
            ..Default::default()
        };

        model
            .insert(conn)
            .await
            .map_err(|e| InternalError::database("create_enquiry", e))
    }
}

impl Default for EnquiryStore {
    fn default() -> Self {
        Self::new()
    }
}
