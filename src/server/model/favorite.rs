//! Favorites domain model.

use crate::{
    model::favorite::FavoritesDto,
    server::model::{character::Character, planet::Planet},
};

/// A user's favorite characters and planets, each in the order they were added.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Favorites {
    pub characters: Vec<Character>,
    pub planets: Vec<Planet>,
}

impl Favorites {
    pub fn into_dto(self) -> FavoritesDto {
        FavoritesDto {
            characters: self.characters.into_iter().map(Character::into_dto).collect(),
            planets: self.planets.into_iter().map(Planet::into_dto).collect(),
        }
    }
}
