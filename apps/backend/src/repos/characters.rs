//! Character repository functions for domain layer.

use std::collections::HashMap;

use sea_orm::ConnectionTrait;
use time::OffsetDateTime;

use crate::adapters::characters_sea as characters_adapter;
use crate::adapters::characters_sea::CharacterCreate;
use crate::domain::pagination::PageParams;
use crate::domain::record_id::RecordId;
use crate::entities::characters;
use crate::error::AppError;

/// Character domain model
///
/// `games` holds raw game ids; resolving them into projections is a
/// separate read-time step.
#[derive(Debug, Clone, PartialEq)]
pub struct Character {
    pub id: String,
    pub name: String,
    pub age: i32,
    pub description: String,
    pub nationality: String,
    pub height: String,
    pub weight: String,
    pub occupations: Vec<String>,
    pub games: Vec<String>,
    pub organizations: Vec<String>,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
}

pub async fn create<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: CharacterCreate,
) -> Result<Character, AppError> {
    let id = RecordId::generate();
    let character = characters_adapter::insert_character(conn, id.as_str(), dto).await?;
    Ok(Character::from(character))
}

pub async fn count<C: ConnectionTrait + Send + Sync>(conn: &C) -> Result<u64, AppError> {
    Ok(characters_adapter::count_all(conn).await?)
}

pub async fn list_page<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    params: PageParams,
) -> Result<Vec<Character>, AppError> {
    let models = characters_adapter::fetch_page(conn, params.offset(), params.limit).await?;
    Ok(models.into_iter().map(Character::from).collect())
}

/// Resolve character ids to names for read-time population. Ids that no
/// longer resolve are simply absent from the map; callers drop them silently.
pub async fn names_by_ids<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    character_ids: &[String],
) -> Result<HashMap<String, String>, AppError> {
    let models = characters_adapter::find_by_ids(conn, character_ids).await?;
    Ok(models.into_iter().map(|m| (m.id, m.name)).collect())
}

// Conversions between SeaORM models and domain models

impl From<characters::Model> for Character {
    fn from(model: characters::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            age: model.age,
            description: model.description,
            nationality: model.nationality,
            height: model.height,
            weight: model.weight,
            occupations: model.occupations.into_vec(),
            games: model.games.into_vec(),
            organizations: model.organizations.into_vec(),
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
