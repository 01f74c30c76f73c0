use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use super::StringList;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "characters")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_type = "Char(Some(24))")]
    pub id: String,
    pub name: String,
    pub age: i32,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub nationality: String,
    pub height: String,
    pub weight: String,
    #[sea_orm(column_type = "Json")]
    pub occupations: StringList,
    /// Raw game ids; resolved to projections at read time.
    #[sea_orm(column_type = "Json")]
    pub games: StringList,
    #[sea_orm(column_type = "Json")]
    pub organizations: StringList,
    #[sea_orm(column_name = "created_at")]
    pub created_at: OffsetDateTime,
    #[sea_orm(column_name = "updated_at")]
    pub updated_at: OffsetDateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
