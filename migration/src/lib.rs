pub use sea_orm_migration::prelude::*;

mod m20260601_000001_create_directory_tables;
mod m20260601_000002_create_site_settings;
mod m20260601_000003_create_engagement_tables;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260601_000001_create_directory_tables::Migration),
            Box::new(m20260601_000002_create_site_settings::Migration),
            Box::new(m20260601_000003_create_engagement_tables::Migration),
        ]
    }
}
