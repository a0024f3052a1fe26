use chrono::Utc;
use sea_orm::{ActiveModelTrait, ConnectionTrait, EntityTrait, QueryOrder, Set};

use crate::errors::InternalError;
use crate::types::db::donation::{self, ActiveModel, Column, Entity as Donation};
use crate::types::dto::NewDonation;

/// DonationStore manages donation submissions
pub struct DonationStore {}

impl DonationStore {
    pub fn new() -> Self {
        Self {}
    }

    /// Fetch every donation, newest first.
    pub async fn get_all(
        &self,
        conn: &impl ConnectionTrait,
    ) -> Result<Vec<donation::Model>, InternalError> {
        Donation::find()
            .order_by_desc(Column::CreatedAt)
            .all(conn)
            .await
            .map_err(|e| InternalError::database("get_donations", e))
    }

    pub async fn create(
        &self,
        conn: &impl ConnectionTrait,
        new: NewDonation,
    ) -> Result<donation::Model, InternalError> {
        let model = ActiveModel {
            name: Set(new.name),
            email: Set(new.email),
            amount: Set(new.amount),
            message: Set(new.message),
            created_at: Set(Utc::now().timestamp()),
            ..Default::default()
        };

        model
            .insert(conn)
            .await
            .map_err(|e| InternalError::database("create_donation", e))
    }
}

impl Default for DonationStore {
    fn default() -> Self {
        Self::new()
    }
}
