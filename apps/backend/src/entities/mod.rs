pub mod characters;
pub mod games;

use sea_orm::FromJsonQueryResult;
use serde::{Deserialize, Serialize};

pub use characters::Entity as Characters;
pub use characters::Model as Character;
pub use games::Entity as Games;
pub use games::Model as Game;

/// A JSON-backed list column. Both documents store their list-valued fields
/// (platforms, reference id lists, ...) as JSON arrays of strings.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, FromJsonQueryResult)]
pub struct StringList(pub Vec<String>);

impl StringList {
    pub fn into_vec(self) -> Vec<String> {
        self.0
    }
}

impl From<Vec<String>> for StringList {
    fn from(values: Vec<String>) -> Self {
        Self(values)
    }
}
