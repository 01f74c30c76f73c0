//! Game-related HTTP routes.

use std::collections::HashMap;

use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};

use crate::adapters::games_sea::{GameCreate, GamePatch, GameReplace};
use crate::db::require_db;
use crate::domain::pagination::PageQuery;
use crate::domain::required::{ensure_required, has_list, has_text, nonzero};
use crate::error::AppError;
use crate::errors::ErrorCode;
use crate::extractors::game_id::GameId;
use crate::extractors::ValidatedJson;
use crate::repos::characters as characters_repo;
use crate::repos::games as games_repo;
use crate::repos::games::Game;
use crate::state::app_state::AppState;

/// Inbound game fields. One shape serves create, full update and patch;
/// which fields must be present (and truthy) differs per operation.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameBody {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub release_year: Option<i32>,
    #[serde(default)]
    pub platforms: Option<Vec<String>>,
    #[serde(default)]
    pub genre: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub developer: Option<String>,
    #[serde(default)]
    pub main_characters: Option<Vec<String>>,
    #[serde(default)]
    pub enemies: Option<Vec<String>>,
    #[serde(default)]
    pub locations: Option<Vec<String>>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameResponse {
    pub id: String,
    pub title: String,
    pub release_year: i32,
    pub platforms: Vec<String>,
    pub genre: String,
    pub description: String,
    pub developer: String,
    /// Raw character ids; list responses resolve these to projections.
    pub main_characters: Vec<String>,
    pub enemies: Vec<String>,
    pub locations: Vec<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl From<Game> for GameResponse {
    fn from(value: Game) -> Self {
        Self {
            id: value.id,
            title: value.title,
            release_year: value.release_year,
            platforms: value.platforms,
            genre: value.genre,
            description: value.description,
            developer: value.developer,
            main_characters: value.main_characters,
            enemies: value.enemies,
            locations: value.locations,
            created_at: value.created_at.to_string(),
            updated_at: value.updated_at.to_string(),
        }
    }
}

/// A character reference resolved for a list response: name only.
#[derive(Debug, Serialize)]
pub struct CharacterRefResponse {
    pub id: String,
    pub name: String,
}

/// One game in a list response, with `mainCharacters` populated.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameListItem {
    pub id: String,
    pub title: String,
    pub release_year: i32,
    pub platforms: Vec<String>,
    pub genre: String,
    pub description: String,
    pub developer: String,
    pub main_characters: Vec<CharacterRefResponse>,
    pub enemies: Vec<String>,
    pub locations: Vec<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl GameListItem {
    /// Project the stored reference list through the id -> name map,
    /// silently dropping ids that no longer resolve.
    fn project(game: Game, names: &HashMap<String, String>) -> Self {
        let main_characters = game
            .main_characters
            .into_iter()
            .filter_map(|id| {
                names.get(&id).map(|name| CharacterRefResponse {
                    id,
                    name: name.clone(),
                })
            })
            .collect();

        Self {
            id: game.id,
            title: game.title,
            release_year: game.release_year,
            platforms: game.platforms,
            genre: game.genre,
            description: game.description,
            developer: game.developer,
            main_characters,
            enemies: game.enemies,
            locations: game.locations,
            created_at: game.created_at.to_string(),
            updated_at: game.updated_at.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListGamesResponse {
    pub page: u64,
    pub limit: u64,
    pub total_games: u64,
    pub games: Vec<GameListItem>,
}

#[derive(Debug, Serialize)]
pub struct DeleteGameResponse {
    pub message: String,
}

fn validate_create(body: &GameBody) -> Result<(), AppError> {
    ensure_required(&[
        ("title", has_text(&body.title)),
        ("releaseYear", nonzero(&body.release_year)),
        ("platforms", has_list(&body.platforms)),
        ("genre", has_text(&body.genre)),
        ("description", has_text(&body.description)),
        ("developer", has_text(&body.developer)),
    ])
}

// Full update re-validates the create set plus mainCharacters; create does
// not require it. The asymmetry is part of the API contract.
fn validate_replace(body: &GameBody) -> Result<(), AppError> {
    ensure_required(&[
        ("title", has_text(&body.title)),
        ("releaseYear", nonzero(&body.release_year)),
        ("platforms", has_list(&body.platforms)),
        ("genre", has_text(&body.genre)),
        ("description", has_text(&body.description)),
        ("developer", has_text(&body.developer)),
        ("mainCharacters", has_list(&body.main_characters)),
    ])
}

fn game_not_found() -> AppError {
    AppError::not_found(ErrorCode::GameNotFound, "GameID Not Found")
}

/// POST /api/v1/games/create
async fn create_game(
    app_state: web::Data<AppState>,
    body: ValidatedJson<GameBody>,
) -> Result<HttpResponse, AppError> {
    let payload = body.into_inner();
    validate_create(&payload)?;

    let db = require_db(&app_state)?;
    let dto = GameCreate {
        title: payload.title.unwrap_or_default(),
        release_year: payload.release_year.unwrap_or_default(),
        platforms: payload.platforms.unwrap_or_default(),
        genre: payload.genre.unwrap_or_default(),
        description: payload.description.unwrap_or_default(),
        developer: payload.developer.unwrap_or_default(),
        main_characters: payload.main_characters.unwrap_or_default(),
        enemies: payload.enemies.unwrap_or_default(),
        locations: payload.locations.unwrap_or_default(),
    };

    let game = games_repo::create(db, dto).await?;
    Ok(HttpResponse::Created().json(GameResponse::from(game)))
}

/// GET /api/v1/games
///
/// Paginated list with `mainCharacters` resolved to name-only projections.
async fn list_games(
    app_state: web::Data<AppState>,
    query: web::Query<PageQuery>,
) -> Result<HttpResponse, AppError> {
    let params = query.into_inner().resolve()?;
    let db = require_db(&app_state)?;

    let total_games = games_repo::count(db).await?;
    let games = games_repo::list_page(db, params).await?;

    let referenced: Vec<String> = games
        .iter()
        .flat_map(|game| game.main_characters.iter().cloned())
        .collect();
    let names = characters_repo::names_by_ids(db, &referenced).await?;

    let games: Vec<GameListItem> = games
        .into_iter()
        .map(|game| GameListItem::project(game, &names))
        .collect();

    Ok(HttpResponse::Ok().json(ListGamesResponse {
        page: params.page,
        limit: params.limit,
        total_games,
        games,
    }))
}

/// GET /api/v1/games/{game_id}
async fn get_game(
    game_id: GameId,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    let game = games_repo::find_by_id(db, &game_id.0)
        .await?
        .ok_or_else(game_not_found)?;

    Ok(HttpResponse::Ok().json(GameResponse::from(game)))
}

/// PUT /api/v1/games/update/{game_id}
async fn update_game(
    game_id: GameId,
    app_state: web::Data<AppState>,
    body: ValidatedJson<GameBody>,
) -> Result<HttpResponse, AppError> {
    let payload = body.into_inner();
    validate_replace(&payload)?;

    let db = require_db(&app_state)?;
    let dto = GameReplace {
        title: payload.title.unwrap_or_default(),
        release_year: payload.release_year.unwrap_or_default(),
        platforms: payload.platforms.unwrap_or_default(),
        genre: payload.genre.unwrap_or_default(),
        description: payload.description.unwrap_or_default(),
        developer: payload.developer.unwrap_or_default(),
        main_characters: payload.main_characters.unwrap_or_default(),
    };

    let game = games_repo::replace(db, &game_id.0, dto)
        .await?
        .ok_or_else(game_not_found)?;

    Ok(HttpResponse::Ok().json(GameResponse::from(game)))
}

/// PATCH /api/v1/games/update/{game_id}
///
/// Merges whichever of the seven updatable fields arrived present and
/// truthy; everything else is left untouched. A patch with no recognized
/// fields is a no-op that still returns the record.
async fn patch_game(
    game_id: GameId,
    app_state: web::Data<AppState>,
    body: ValidatedJson<GameBody>,
) -> Result<HttpResponse, AppError> {
    let payload = body.into_inner();

    let db = require_db(&app_state)?;
    let dto = GamePatch {
        title: payload.title.filter(|s| !s.is_empty()),
        release_year: payload.release_year.filter(|n| *n != 0),
        platforms: payload.platforms,
        genre: payload.genre.filter(|s| !s.is_empty()),
        description: payload.description.filter(|s| !s.is_empty()),
        developer: payload.developer.filter(|s| !s.is_empty()),
        main_characters: payload.main_characters,
    };

    let game = games_repo::apply_patch(db, &game_id.0, dto)
        .await?
        .ok_or_else(game_not_found)?;

    Ok(HttpResponse::Ok().json(GameResponse::from(game)))
}

/// DELETE /api/v1/games/{game_id}
async fn delete_game(
    game_id: GameId,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    let deleted = games_repo::delete(db, &game_id.0).await?;
    if !deleted {
        return Err(game_not_found());
    }

    Ok(HttpResponse::Ok().json(DeleteGameResponse {
        message: "Game deleted successfully".to_string(),
    }))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/create").route(web::post().to(create_game)));
    cfg.service(
        web::resource("/update/{game_id}")
            .route(web::put().to(update_game))
            .route(web::patch().to(patch_game)),
    );
    cfg.service(
        web::resource("/{game_id}")
            .route(web::get().to(get_game))
            .route(web::delete().to(delete_game)),
    );
    cfg.service(web::resource("").route(web::get().to(list_games)));
}
