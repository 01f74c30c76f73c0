//! DTOs for games_sea adapter.

/// DTO for inserting a new game.
#[derive(Debug, Clone, Default)]
pub struct GameCreate {
    pub title: String,
    pub release_year: i32,
    pub platforms: Vec<String>,
    pub genre: String,
    pub description: String,
    pub developer: String,
    pub main_characters: Vec<String>,
    pub enemies: Vec<String>,
    pub locations: Vec<String>,
}

/// Full replacement of the seven updatable fields (PUT).
///
/// `enemies` and `locations` are create-only and never touched by updates.
#[derive(Debug, Clone)]
pub struct GameReplace {
    pub title: String,
    pub release_year: i32,
    pub platforms: Vec<String>,
    pub genre: String,
    pub description: String,
    pub developer: String,
    pub main_characters: Vec<String>,
}

/// Sparse update carrying only the fields that arrived present and truthy
/// on a PATCH request. Absent fields are left untouched.
#[derive(Debug, Clone, Default)]
pub struct GamePatch {
    pub title: Option<String>,
    pub release_year: Option<i32>,
    pub platforms: Option<Vec<String>>,
    pub genre: Option<String>,
    pub description: Option<String>,
    pub developer: Option<String>,
    pub main_characters: Option<Vec<String>>,
}

impl GamePatch {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.release_year.is_none()
            && self.platforms.is_none()
            && self.genre.is_none()
            && self.description.is_none()
            && self.developer.is_none()
            && self.main_characters.is_none()
    }
}
