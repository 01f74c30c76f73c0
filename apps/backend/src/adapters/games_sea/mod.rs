//! SeaORM adapter for the games collection - generic over ConnectionTrait.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, PaginatorTrait, QueryFilter,
    QuerySelect, Set,
};

use crate::entities::games;

pub mod dto;

pub use dto::{GameCreate, GamePatch, GameReplace};

// Adapter functions return DbErr; the repos layer maps to AppError via From<DbErr>.

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: &str,
) -> Result<Option<games::Model>, sea_orm::DbErr> {
    games::Entity::find_by_id(game_id.to_string()).one(conn).await
}

pub async fn find_by_ids<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_ids: &[String],
) -> Result<Vec<games::Model>, sea_orm::DbErr> {
    if game_ids.is_empty() {
        return Ok(Vec::new());
    }
    games::Entity::find()
        .filter(games::Column::Id.is_in(game_ids.iter().cloned()))
        .all(conn)
        .await
}

pub async fn count_all<C: ConnectionTrait + Send + Sync>(conn: &C) -> Result<u64, sea_orm::DbErr> {
    games::Entity::find().count(conn).await
}

/// Fetch one page in natural storage order.
pub async fn fetch_page<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    offset: u64,
    limit: u64,
) -> Result<Vec<games::Model>, sea_orm::DbErr> {
    games::Entity::find().offset(offset).limit(limit).all(conn).await
}

pub async fn insert_game<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: &str,
    dto: GameCreate,
) -> Result<games::Model, sea_orm::DbErr> {
    let now = time::OffsetDateTime::now_utc();
    let game_active = games::ActiveModel {
        id: Set(id.to_string()),
        title: Set(dto.title),
        release_year: Set(dto.release_year),
        platforms: Set(dto.platforms.into()),
        genre: Set(dto.genre),
        description: Set(dto.description),
        developer: Set(dto.developer),
        main_characters: Set(dto.main_characters.into()),
        enemies: Set(dto.enemies.into()),
        locations: Set(dto.locations.into()),
        created_at: Set(now),
        updated_at: Set(now),
    };

    game_active.insert(conn).await
}

/// Replace the seven updatable fields. Returns `None` when the id does not
/// resolve to an existing record.
pub async fn replace_game<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: &str,
    dto: GameReplace,
) -> Result<Option<games::Model>, sea_orm::DbErr> {
    let Some(model) = find_by_id(conn, id).await? else {
        return Ok(None);
    };

    let mut active: games::ActiveModel = model.into();
    active.title = Set(dto.title);
    active.release_year = Set(dto.release_year);
    active.platforms = Set(dto.platforms.into());
    active.genre = Set(dto.genre);
    active.description = Set(dto.description);
    active.developer = Set(dto.developer);
    active.main_characters = Set(dto.main_characters.into());
    active.updated_at = Set(time::OffsetDateTime::now_utc());

    active.update(conn).await.map(Some)
}

/// Apply a sparse update. An empty patch is a no-op that still returns the
/// (unchanged) record.
pub async fn patch_game<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: &str,
    dto: GamePatch,
) -> Result<Option<games::Model>, sea_orm::DbErr> {
    if dto.is_empty() {
        return find_by_id(conn, id).await;
    }

    let Some(model) = find_by_id(conn, id).await? else {
        return Ok(None);
    };

    let mut active: games::ActiveModel = model.into();
    if let Some(title) = dto.title {
        active.title = Set(title);
    }
    if let Some(release_year) = dto.release_year {
        active.release_year = Set(release_year);
    }
    if let Some(platforms) = dto.platforms {
        active.platforms = Set(platforms.into());
    }
    if let Some(genre) = dto.genre {
        active.genre = Set(genre);
    }
    if let Some(description) = dto.description {
        active.description = Set(description);
    }
    if let Some(developer) = dto.developer {
        active.developer = Set(developer);
    }
    if let Some(main_characters) = dto.main_characters {
        active.main_characters = Set(main_characters.into());
    }
    active.updated_at = Set(time::OffsetDateTime::now_utc());

    active.update(conn).await.map(Some)
}

/// Delete by id, reporting how many rows went away (0 or 1).
pub async fn delete_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: &str,
) -> Result<u64, sea_orm::DbErr> {
    let result = games::Entity::delete_by_id(id.to_string()).exec(conn).await?;
    Ok(result.rows_affected)
}
