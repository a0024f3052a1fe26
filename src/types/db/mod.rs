// Database entities - SeaORM models
pub mod artist;
pub mod donation;
pub mod ds_client;
pub mod enquiry;
pub mod event;
pub mod media_item;
pub mod site_setting;
