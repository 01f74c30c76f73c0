use sea_orm_migration::prelude::*;
use sea_orm_migration::sea_query::{ColumnDef, Index, Table};

#[derive(DeriveMigrationName)]
pub struct Migration;

// ----- Iden enums for tables & columns -----
#[derive(Iden)]
enum Games {
    Table,
    Id,
    Title,
    ReleaseYear,
    Platforms,
    Genre,
    Description,
    Developer,
    MainCharacters,
    Enemies,
    Locations,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum Characters {
    Table,
    Id,
    Name,
    Age,
    Description,
    Nationality,
    Height,
    Weight,
    Occupations,
    Games,
    Organizations,
    CreatedAt,
    UpdatedAt,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // games: record ids are app-generated 24-char hex tokens, and the
        // reference lists are stored as JSON arrays of raw ids.
        manager
            .create_table(
                Table::create()
                    .table(Games::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Games::Id)
                            .char_len(24)
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Games::Title).string().not_null())
                    .col(ColumnDef::new(Games::ReleaseYear).integer().not_null())
                    .col(ColumnDef::new(Games::Platforms).json().not_null())
                    .col(ColumnDef::new(Games::Genre).string().not_null())
                    .col(ColumnDef::new(Games::Description).text().not_null())
                    .col(ColumnDef::new(Games::Developer).string().not_null())
                    .col(ColumnDef::new(Games::MainCharacters).json().not_null())
                    .col(ColumnDef::new(Games::Enemies).json().not_null())
                    .col(ColumnDef::new(Games::Locations).json().not_null())
                    .col(
                        ColumnDef::new(Games::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Games::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // titles are unique across the whole collection
        manager
            .create_index(
                Index::create()
                    .name("uq_games_title")
                    .table(Games::Table)
                    .col(Games::Title)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Characters::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Characters::Id)
                            .char_len(24)
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Characters::Name).string().not_null())
                    .col(ColumnDef::new(Characters::Age).integer().not_null())
                    .col(ColumnDef::new(Characters::Description).text().not_null())
                    .col(ColumnDef::new(Characters::Nationality).string().not_null())
                    .col(ColumnDef::new(Characters::Height).string().not_null())
                    .col(ColumnDef::new(Characters::Weight).string().not_null())
                    .col(ColumnDef::new(Characters::Occupations).json().not_null())
                    .col(ColumnDef::new(Characters::Games).json().not_null())
                    .col(ColumnDef::new(Characters::Organizations).json().not_null())
                    .col(
                        ColumnDef::new(Characters::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Characters::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Characters::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Games::Table).to_owned())
            .await?;
        Ok(())
    }
}
