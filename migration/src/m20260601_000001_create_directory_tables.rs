use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Artists table
        manager
            .create_table(
                Table::create()
                    .table(Artists::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Artists::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Artists::Name).string().not_null())
                    .col(ColumnDef::new(Artists::Genre).string().not_null())
                    .col(ColumnDef::new(Artists::Description).string().not_null())
                    .col(ColumnDef::new(Artists::ImageUrl).string().not_null())
                    .col(ColumnDef::new(Artists::ImageUrl2).string().null())
                    .col(ColumnDef::new(Artists::Email).string().null())
                    .col(ColumnDef::new(Artists::Phone).string().null())
                    .col(ColumnDef::new(Artists::SocialLinks).string().null())
                    .col(ColumnDef::new(Artists::TimeSlot).string().null())
                    .col(
                        ColumnDef::new(Artists::Featured)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(ColumnDef::new(Artists::PromoterImageUrl).string().null())
                    .col(ColumnDef::new(Artists::Origin).string().null())
                    .col(ColumnDef::new(Artists::Members).string().null())
                    .col(ColumnDef::new(Artists::Bio).string().null())
                    .col(ColumnDef::new(Artists::Website).string().null())
                    .col(ColumnDef::new(Artists::SongLink1).string().null())
                    .col(ColumnDef::new(Artists::SongLink2).string().null())
                    .col(ColumnDef::new(Artists::VideoLink1).string().null())
                    .col(ColumnDef::new(Artists::VideoLink2).string().null())
                    .col(ColumnDef::new(Artists::CustomLink1).string().null())
                    .col(ColumnDef::new(Artists::CustomLink2).string().null())
                    .col(ColumnDef::new(Artists::CustomLink3).string().null())
                    .col(ColumnDef::new(Artists::CustomLink4).string().null())
                    .col(ColumnDef::new(Artists::CustomLink5).string().null())
                    .col(ColumnDef::new(Artists::VisibleFields).string().null())
                    .to_owned(),
            )
            .await?;

        // Events table
        manager
            .create_table(
                Table::create()
                    .table(Events::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Events::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Events::Name).string().not_null())
                    .col(ColumnDef::new(Events::Description).string().null())
                    .col(ColumnDef::new(Events::ImageUrl).string().null())
                    .col(ColumnDef::new(Events::Date).string().null())
                    .col(ColumnDef::new(Events::Venue).string().null())
                    .col(ColumnDef::new(Events::Time).string().null())
                    .col(ColumnDef::new(Events::EndDate).string().null())
                    .col(ColumnDef::new(Events::EndTime).string().null())
                    .col(ColumnDef::new(Events::Address).string().null())
                    .col(ColumnDef::new(Events::GoogleMapsUrl).string().null())
                    .col(ColumnDef::new(Events::TicketUrl).string().null())
                    .col(ColumnDef::new(Events::VisibleFields).string().null())
                    .to_owned(),
            )
            .await?;

        // DS clients table, same shape as artists minus the featured flag
        manager
            .create_table(
                Table::create()
                    .table(DsClients::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(DsClients::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(DsClients::Name).string().not_null())
                    .col(ColumnDef::new(DsClients::Genre).string().null())
                    .col(ColumnDef::new(DsClients::Description).string().null())
                    .col(ColumnDef::new(DsClients::ImageUrl).string().null())
                    .col(ColumnDef::new(DsClients::ImageUrl2).string().null())
                    .col(ColumnDef::new(DsClients::Email).string().null())
                    .col(ColumnDef::new(DsClients::Phone).string().null())
                    .col(ColumnDef::new(DsClients::SocialLinks).string().null())
                    .col(ColumnDef::new(DsClients::TimeSlot).string().null())
                    .col(ColumnDef::new(DsClients::PromoterImageUrl).string().null())
                    .col(ColumnDef::new(DsClients::Origin).string().null())
                    .col(ColumnDef::new(DsClients::Members).string().null())
                    .col(ColumnDef::new(DsClients::Bio).string().null())
                    .col(ColumnDef::new(DsClients::Website).string().null())
                    .col(ColumnDef::new(DsClients::SongLink1).string().null())
                    .col(ColumnDef::new(DsClients::SongLink2).string().null())
                    .col(ColumnDef::new(DsClients::VideoLink1).string().null())
                    .col(ColumnDef::new(DsClients::VideoLink2).string().null())
                    .col(ColumnDef::new(DsClients::CustomLink1).string().null())
                    .col(ColumnDef::new(DsClients::CustomLink2).string().null())
                    .col(ColumnDef::new(DsClients::CustomLink3).string().null())
                    .col(ColumnDef::new(DsClients::CustomLink4).string().null())
                    .col(ColumnDef::new(DsClients::CustomLink5).string().null())
                    .col(ColumnDef::new(DsClients::VisibleFields).string().null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(DsClients::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Events::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Artists::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Artists {
    Table,
    Id,
    Name,
    Genre,
    Description,
    ImageUrl,
    #[sea_orm(iden = "image_url_2")]
    ImageUrl2,
    Email,
    Phone,
    SocialLinks,
    TimeSlot,
    Featured,
    PromoterImageUrl,
    Origin,
    Members,
    Bio,
    Website,
    #[sea_orm(iden = "song_link_1")]
    SongLink1,
    #[sea_orm(iden = "song_link_2")]
    SongLink2,
    #[sea_orm(iden = "video_link_1")]
    VideoLink1,
    #[sea_orm(iden = "video_link_2")]
    VideoLink2,
    #[sea_orm(iden = "custom_link_1")]
    CustomLink1,
    #[sea_orm(iden = "custom_link_2")]
    CustomLink2,
    #[sea_orm(iden = "custom_link_3")]
    CustomLink3,
    #[sea_orm(iden = "custom_link_4")]
    CustomLink4,
    #[sea_orm(iden = "custom_link_5")]
    CustomLink5,
    VisibleFields,
}

#[derive(DeriveIden)]
enum Events {
    Table,
    Id,
    Name,
    Description,
    ImageUrl,
    Date,
    Venue,
    Time,
    EndDate,
    EndTime,
    Address,
    GoogleMapsUrl,
    TicketUrl,
    VisibleFields,
}

#[derive(DeriveIden)]
enum DsClients {
    Table,
    Id,
    Name,
    Genre,
    Description,
    ImageUrl,
    #[sea_orm(iden = "image_url_2")]
    ImageUrl2,
    Email,
    Phone,
    SocialLinks,
    TimeSlot,
    PromoterImageUrl,
    Origin,
    Members,
    Bio,
    Website,
    #[sea_orm(iden = "song_link_1")]
    SongLink1,
    #[sea_orm(iden = "song_link_2")]
    SongLink2,
    #[sea_orm(iden = "video_link_1")]
    VideoLink1,
    #[sea_orm(iden = "video_link_2")]
    VideoLink2,
    #[sea_orm(iden = "custom_link_1")]
    CustomLink1,
    #[sea_orm(iden = "custom_link_2")]
    CustomLink2,
    #[sea_orm(iden = "custom_link_3")]
    CustomLink3,
    #[sea_orm(iden = "custom_link_4")]
    CustomLink4,
    #[sea_orm(iden = "custom_link_5")]
    CustomLink5,
    VisibleFields,
}
