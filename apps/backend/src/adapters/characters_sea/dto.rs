//! DTOs for characters_sea adapter.

/// DTO for inserting a new character.
#[derive(Debug, Clone, Default)]
pub struct CharacterCreate {
    pub name: String,
    pub age: i32,
    pub description: String,
    pub nationality: String,
    pub height: String,
    pub weight: String,
    pub occupations: Vec<String>,
    pub games: Vec<String>,
    pub organizations: Vec<String>,
}
