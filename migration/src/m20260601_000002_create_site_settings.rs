use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Create site_settings table
        manager
            .create_table(
                Table::create()
                    .table(SiteSettings::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(SiteSettings::Key)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(SiteSettings::Value)
                            .string()
                            .not_null()
                            .default(""),
                    )
                    .col(
                        ColumnDef::new(SiteSettings::Type)
                            .string()
                            .not_null()
                            .default("text"),
                    )
                    .col(
                        ColumnDef::new(SiteSettings::Section)
                            .string()
                            .not_null()
                            .default("global"),
                    )
                    .col(
                        ColumnDef::new(SiteSettings::Label)
                            .string()
                            .not_null()
                            .default(""),
                    )
                    .col(
                        ColumnDef::new(SiteSettings::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(SiteSettings::UpdatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // Create index on section for efficient per-editor-surface filtering
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_site_settings_section")
                    .table(SiteSettings::Table)
                    .col(SiteSettings::Section)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(SiteSettings::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum SiteSettings {
    Table,
    Key,
    Value,
    Type,
    Section,
    Label,
    CreatedAt,
    UpdatedAt,
}
