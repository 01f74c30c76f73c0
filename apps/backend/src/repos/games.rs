//! Game repository functions for domain layer.

use std::collections::HashMap;

use sea_orm::ConnectionTrait;
use time::OffsetDateTime;

use crate::adapters::games_sea as games_adapter;
use crate::adapters::games_sea::{GameCreate, GamePatch, GameReplace};
use crate::domain::pagination::PageParams;
use crate::domain::record_id::RecordId;
use crate::entities::games;
use crate::error::AppError;

/// Game domain model
///
/// This represents a game in the domain layer. It's converted from the
/// database model (games::Model) when loaded through repos functions.
/// `main_characters` holds raw character ids; resolving them into
/// projections is a separate read-time step.
#[derive(Debug, Clone, PartialEq)]
pub struct Game {
    pub id: String,
    pub title: String,
    pub release_year: i32,
    pub platforms: Vec<String>,
    pub genre: String,
    pub description: String,
    pub developer: String,
    pub main_characters: Vec<String>,
    pub enemies: Vec<String>,
    pub locations: Vec<String>,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
}

// Free functions (generic) talking to the adapter layer

pub async fn create<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: GameCreate,
) -> Result<Game, AppError> {
    let id = RecordId::generate();
    let game = games_adapter::insert_game(conn, id.as_str(), dto).await?;
    Ok(Game::from(game))
}

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: &RecordId,
) -> Result<Option<Game>, AppError> {
    let game = games_adapter::find_by_id(conn, game_id.as_str()).await?;
    Ok(game.map(Game::from))
}

pub async fn find_by_ids<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_ids: &[String],
) -> Result<Vec<Game>, AppError> {
    let models = games_adapter::find_by_ids(conn, game_ids).await?;
    Ok(models.into_iter().map(Game::from).collect())
}

pub async fn count<C: ConnectionTrait + Send + Sync>(conn: &C) -> Result<u64, AppError> {
    Ok(games_adapter::count_all(conn).await?)
}

pub async fn list_page<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    params: PageParams,
) -> Result<Vec<Game>, AppError> {
    let models = games_adapter::fetch_page(conn, params.offset(), params.limit).await?;
    Ok(models.into_iter().map(Game::from).collect())
}

/// Full replace (PUT). Returns `None` when the id is unknown.
pub async fn replace<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: &RecordId,
    dto: GameReplace,
) -> Result<Option<Game>, AppError> {
    let game = games_adapter::replace_game(conn, game_id.as_str(), dto).await?;
    Ok(game.map(Game::from))
}

/// Sparse update (PATCH). Returns `None` when the id is unknown.
pub async fn apply_patch<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: &RecordId,
    dto: GamePatch,
) -> Result<Option<Game>, AppError> {
    let game = games_adapter::patch_game(conn, game_id.as_str(), dto).await?;
    Ok(game.map(Game::from))
}

/// Delete by id. Returns whether a record was actually removed.
pub async fn delete<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: &RecordId,
) -> Result<bool, AppError> {
    let rows_affected = games_adapter::delete_by_id(conn, game_id.as_str()).await?;
    Ok(rows_affected > 0)
}

/// Resolve game ids to titles for read-time population. Ids that no longer
/// resolve are simply absent from the map; callers drop them silently.
pub async fn titles_by_ids<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_ids: &[String],
) -> Result<HashMap<String, String>, AppError> {
    let models = games_adapter::find_by_ids(conn, game_ids).await?;
    Ok(models.into_iter().map(|m| (m.id, m.title)).collect())
}

// Conversions between SeaORM models and domain models

impl From<games::Model> for Game {
    fn from(model: games::Model) -> Self {
        Self {
            id: model.id,
            title: model.title,
            release_year: model.release_year,
            platforms: model.platforms.into_vec(),
            genre: model.genre,
            description: model.description,
            developer: model.developer,
            main_characters: model.main_characters.into_vec(),
            enemies: model.enemies.into_vec(),
            locations: model.locations.into_vec(),
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
