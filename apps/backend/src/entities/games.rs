use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use super::StringList;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "games")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_type = "Char(Some(24))")]
    pub id: String,
    #[sea_orm(unique)]
    pub title: String,
    #[sea_orm(column_name = "release_year")]
    pub release_year: i32,
    #[sea_orm(column_type = "Json")]
    pub platforms: StringList,
    pub genre: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub developer: String,
    /// Raw character ids; resolved to projections at read time.
    #[sea_orm(column_name = "main_characters", column_type = "Json")]
    pub main_characters: StringList,
    #[sea_orm(column_type = "Json")]
    pub enemies: StringList,
    #[sea_orm(column_type = "Json")]
    pub locations: StringList,
    #[sea_orm(column_name = "created_at")]
    pub created_at: OffsetDateTime,
    #[sea_orm(column_name = "updated_at")]
    pub updated_at: OffsetDateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
