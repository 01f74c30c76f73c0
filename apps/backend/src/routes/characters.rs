//! Character-related HTTP routes.
//!
//! Characters expose only create and list; there are no per-id routes.

use std::collections::HashMap;

use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};

use crate::adapters::characters_sea::CharacterCreate;
use crate::db::require_db;
use crate::domain::pagination::PageQuery;
use crate::domain::record_id::RecordId;
use crate::domain::required::{ensure_required, has_list, has_text, nonzero};
use crate::error::AppError;
use crate::errors::ErrorCode;
use crate::extractors::ValidatedJson;
use crate::repos::characters as characters_repo;
use crate::repos::characters::Character;
use crate::repos::games as games_repo;
use crate::routes::games::GameResponse;
use crate::state::app_state::AppState;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterBody {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub age: Option<i32>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub nationality: Option<String>,
    #[serde(default)]
    pub height: Option<String>,
    #[serde(default)]
    pub weight: Option<String>,
    #[serde(default)]
    pub occupations: Option<Vec<String>>,
    #[serde(default)]
    pub games: Option<Vec<String>>,
    #[serde(default)]
    pub organizations: Option<Vec<String>>,
}

/// The created character, with `games` resolved into full game records.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterResponse {
    pub id: String,
    pub name: String,
    pub age: i32,
    pub description: String,
    pub nationality: String,
    pub height: String,
    pub weight: String,
    pub occupations: Vec<String>,
    pub games: Vec<GameResponse>,
    pub organizations: Vec<String>,
    pub created_at: String,
    pub updated_at: String,
}

/// A game reference resolved for a list response: title only.
#[derive(Debug, Serialize)]
pub struct GameRefResponse {
    pub id: String,
    pub title: String,
}

/// One character in a list response, with `games` populated.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterListItem {
    pub id: String,
    pub name: String,
    pub age: i32,
    pub description: String,
    pub nationality: String,
    pub height: String,
    pub weight: String,
    pub occupations: Vec<String>,
    pub games: Vec<GameRefResponse>,
    pub organizations: Vec<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl CharacterListItem {
    /// Project the stored reference list through the id -> title map,
    /// silently dropping ids that no longer resolve.
    fn project(character: Character, titles: &HashMap<String, String>) -> Self {
        let games = character
            .games
            .into_iter()
            .filter_map(|id| {
                titles.get(&id).map(|title| GameRefResponse {
                    id,
                    title: title.clone(),
                })
            })
            .collect();

        Self {
            id: character.id,
            name: character.name,
            age: character.age,
            description: character.description,
            nationality: character.nationality,
            height: character.height,
            weight: character.weight,
            occupations: character.occupations,
            games,
            organizations: character.organizations,
            created_at: character.created_at.to_string(),
            updated_at: character.updated_at.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListCharactersResponse {
    pub page: u64,
    pub limit: u64,
    pub total_characters: u64,
    pub characters: Vec<CharacterListItem>,
}

fn validate_create(body: &CharacterBody) -> Result<(), AppError> {
    ensure_required(&[
        ("name", has_text(&body.name)),
        ("age", nonzero(&body.age)),
        ("description", has_text(&body.description)),
        ("nationality", has_text(&body.nationality)),
        ("height", has_text(&body.height)),
        ("weight", has_text(&body.weight)),
        ("occupations", has_list(&body.occupations)),
    ])
}

/// POST /api/v1/characters/create
///
/// Game references are shape-checked before persistence; the referenced
/// games are not required to exist. The created record is returned with its
/// `games` list populated.
async fn create_character(
    app_state: web::Data<AppState>,
    body: ValidatedJson<CharacterBody>,
) -> Result<HttpResponse, AppError> {
    let payload = body.into_inner();
    validate_create(&payload)?;

    let games = payload.games.unwrap_or_default();
    if !games.iter().all(|id| RecordId::is_valid(id)) {
        return Err(AppError::bad_request(
            ErrorCode::InvalidGameId,
            "Invalid game ID(s) in the 'games' field",
        ));
    }

    let db = require_db(&app_state)?;
    let dto = CharacterCreate {
        name: payload.name.unwrap_or_default(),
        age: payload.age.unwrap_or_default(),
        description: payload.description.unwrap_or_default(),
        nationality: payload.nationality.unwrap_or_default(),
        height: payload.height.unwrap_or_default(),
        weight: payload.weight.unwrap_or_default(),
        occupations: payload.occupations.unwrap_or_default(),
        games,
        organizations: payload.organizations.unwrap_or_default(),
    };

    let character = characters_repo::create(db, dto).await?;

    // Resolve the stored game ids into full records for the response.
    let resolved = games_repo::find_by_ids(db, &character.games).await?;
    let mut by_id: HashMap<String, GameResponse> = resolved
        .into_iter()
        .map(|game| (game.id.clone(), GameResponse::from(game)))
        .collect();
    let games: Vec<GameResponse> = character
        .games
        .iter()
        .filter_map(|id| by_id.remove(id))
        .collect();

    Ok(HttpResponse::Created().json(CharacterResponse {
        id: character.id,
        name: character.name,
        age: character.age,
        description: character.description,
        nationality: character.nationality,
        height: character.height,
        weight: character.weight,
        occupations: character.occupations,
        games,
        organizations: character.organizations,
        created_at: character.created_at.to_string(),
        updated_at: character.updated_at.to_string(),
    }))
}

/// GET /api/v1/characters
///
/// Paginated list with `games` resolved to title-only projections.
async fn list_characters(
    app_state: web::Data<AppState>,
    query: web::Query<PageQuery>,
) -> Result<HttpResponse, AppError> {
    let params = query.into_inner().resolve()?;
    let db = require_db(&app_state)?;

    let total_characters = characters_repo::count(db).await?;
    let characters = characters_repo::list_page(db, params).await?;

    let referenced: Vec<String> = characters
        .iter()
        .flat_map(|character| character.games.iter().cloned())
        .collect();
    let titles = games_repo::titles_by_ids(db, &referenced).await?;

    let characters: Vec<CharacterListItem> = characters
        .into_iter()
        .map(|character| CharacterListItem::project(character, &titles))
        .collect();

    Ok(HttpResponse::Ok().json(ListCharactersResponse {
        page: params.page,
        limit: params.limit,
        total_characters,
        characters,
    }))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/create").route(web::post().to(create_character)));
    cfg.service(web::resource("").route(web::get().to(list_characters)));
}
