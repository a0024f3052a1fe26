use sea_orm::entity::prelude::*;
use serde::Serialize;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "ds_clients")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub genre: Option<String>,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub image_url_2: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub social_links: Option<String>,
    pub time_slot: Option<String>,
    pub promoter_image_url: Option<String>,
    pub origin: Option<String>,
    pub members: Option<String>,
    pub bio: Option<String>,
    pub website: Option<String>,
    pub song_link_1: Option<String>,
    pub song_link_2: Option<String>,
    pub video_link_1: Option<String>,
    pub video_link_2: Option<String>,
    pub custom_link_1: Option<String>,
    pub custom_link_2: Option<String>,
    pub custom_link_3: Option<String>,
    pub custom_link_4: Option<String>,
    pub custom_link_5: Option<String>,
    pub visible_fields: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
