use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::{character::CharacterDto, planet::PlanetDto};

/// Favorites of the authenticated user, each list in the order they were added.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct FavoritesDto {
    pub characters: Vec<CharacterDto>,
    pub planets: Vec<PlanetDto>,
}
