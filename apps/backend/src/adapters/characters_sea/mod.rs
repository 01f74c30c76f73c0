//! SeaORM adapter for the characters collection - generic over ConnectionTrait.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, PaginatorTrait, QueryFilter,
    QuerySelect, Set,
};

use crate::entities::characters;

pub mod dto;

pub use dto::CharacterCreate;

// Adapter functions return DbErr; the repos layer maps to AppError via From<DbErr>.

pub async fn find_by_ids<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    character_ids: &[String],
) -> Result<Vec<characters::Model>, sea_orm::DbErr> {
    if character_ids.is_empty() {
        return Ok(Vec::new());
    }
    characters::Entity::find()
        .filter(characters::Column::Id.is_in(character_ids.iter().cloned()))
        .all(conn)
        .await
}

pub async fn count_all<C: ConnectionTrait + Send + Sync>(conn: &C) -> Result<u64, sea_orm::DbErr> {
    characters::Entity::find().count(conn).await
}

/// Fetch one page in natural storage order.
pub async fn fetch_page<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    offset: u64,
    limit: u64,
) -> Result<Vec<characters::Model>, sea_orm::DbErr> {
    characters::Entity::find()
        .offset(offset)
        .limit(limit)
        .all(conn)
        .await
}

pub async fn insert_character<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: &str,
    dto: CharacterCreate,
) -> Result<characters::Model, sea_orm::DbErr> {
    let now = time::OffsetDateTime::now_utc();
    let character_active = characters::ActiveModel {
        id: Set(id.to_string()),
        name: Set(dto.name),
        age: Set(dto.age),
        description: Set(dto.description),
        nationality: Set(dto.nationality),
        height: Set(dto.height),
        weight: Set(dto.weight),
        occupations: Set(dto.occupations.into()),
        games: Set(dto.games.into()),
        organizations: Set(dto.organizations.into()),
        created_at: Set(now),
        updated_at: Set(now),
    };

    character_active.insert(conn).await
}
