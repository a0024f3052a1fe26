use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Media embeds shown on the public site
        manager
            .create_table(
                Table::create()
                    .table(MediaItems::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(MediaItems::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(MediaItems::Title).string().not_null())
                    .col(ColumnDef::new(MediaItems::Artist).string().null())
                    .col(
                        ColumnDef::new(MediaItems::Type)
                            .string()
                            .not_null()
                            .default("youtube"),
                    )
                    .col(ColumnDef::new(MediaItems::EmbedUrl).string().not_null())
                    .col(ColumnDef::new(MediaItems::ThumbnailUrl).string().null())
                    .col(ColumnDef::new(MediaItems::Duration).string().null())
                    .col(
                        ColumnDef::new(MediaItems::SortOrder)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .to_owned(),
            )
            .await?;

        // Visitor enquiries
        manager
            .create_table(
                Table::create()
                    .table(Enquiries::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Enquiries::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Enquiries::Name).string().not_null())
                    .col(ColumnDef::new(Enquiries::Email).string().not_null())
                    .col(ColumnDef::new(Enquiries::Message).string().null())
                    .col(
                        ColumnDef::new(Enquiries::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // Donations
        manager
            .create_table(
                Table::create()
                    .table(Donations::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Donations::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Donations::Name).string().not_null())
                    .col(ColumnDef::new(Donations::Email).string().not_null())
                    .col(ColumnDef::new(Donations::Amount).string().not_null())
                    .col(ColumnDef::new(Donations::Message).string().null())
                    .col(
                        ColumnDef::new(Donations::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Donations::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Enquiries::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(MediaItems::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum MediaItems {
    Table,
    Id,
    Title,
    Artist,
    Type,
    EmbedUrl,
    ThumbnailUrl,
    Duration,
    SortOrder,
}

#[derive(DeriveIden)]
enum Enquiries {
    Table,
    Id,
    Name,
    Email,
    Message,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Donations {
    Table,
    Id,
    Name,
    Email,
    Amount,
    Message,
    CreatedAt,
}
