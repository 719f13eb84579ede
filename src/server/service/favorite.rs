//! Per-user favorite characters and planets.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{character::CharacterRepository, favorite::FavoriteRepository, planet::PlanetRepository},
    error::AppError,
    model::favorite::Favorites,
    service::conflict_on_duplicate,
};

const ALREADY_EXISTS: &str = "Favorite already exists";

pub struct FavoriteService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FavoriteService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets both favorite lists for a user, each in the order favorites were added
    pub async fn get_for_user(&self, user_id: i32) -> Result<Favorites, AppError> {
        let repo = FavoriteRepository::new(self.db);

        let characters = repo.get_characters(user_id).await?;
        let planets = repo.get_planets(user_id).await?;

        Ok(Favorites {
            characters,
            planets,
        })
    }

    /// Adds a character to the user's favorites.
    ///
    /// # Returns
    /// - `Ok(())` - Favorite stored
    /// - `Err(AppError::NotFound)` - `"Character not found"`
    /// - `Err(AppError::Conflict)` - `"Favorite already exists"`
    pub async fn add_character(&self, user_id: i32, character_id: i32) -> Result<(), AppError> {
        if CharacterRepository::new(self.db)
            .find_by_id(character_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound("Character not found".to_string()));
        }

        let repo = FavoriteRepository::new(self.db);

        if repo.has_character(user_id, character_id).await? {
            return Err(AppError::Conflict(ALREADY_EXISTS.to_string()));
        }

        repo.add_character(user_id, character_id)
            .await
            .map_err(|e| conflict_on_duplicate(e, ALREADY_EXISTS))
    }

    /// Removes a character from the user's favorites.
    ///
    /// # Returns
    /// - `Ok(())` - Favorite deleted
    /// - `Err(AppError::NotFound)` - `"Favorite not found"`, also for an unknown character
    pub async fn remove_character(&self, user_id: i32, character_id: i32) -> Result<(), AppError> {
        let removed = FavoriteRepository::new(self.db)
            .remove_character(user_id, character_id)
            .await?;

        if !removed {
            return Err(AppError::NotFound("Favorite not found".to_string()));
        }

        Ok(())
    }

    /// Adds a planet to the user's favorites.
    ///
    /// # Returns
    /// - `Ok(())` - Favorite stored
    /// - `Err(AppError::NotFound)` - `"Planet not found"`
    /// - `Err(AppError::Conflict)` - `"Favorite already exists"`
    pub async fn add_planet(&self, user_id: i32, planet_id: i32) -> Result<(), AppError> {
        if PlanetRepository::new(self.db)
            .find_by_id(planet_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound("Planet not found".to_string()));
        }

        let repo = FavoriteRepository::new(self.db);

        if repo.has_planet(user_id, planet_id).await? {
            return Err(AppError::Conflict(ALREADY_EXISTS.to_string()));
        }

        repo.add_planet(user_id, planet_id)
            .await
            .map_err(|e| conflict_on_duplicate(e, ALREADY_EXISTS))
    }

    /// Removes a planet from the user's favorites.
    ///
    /// # Returns
    /// - `Ok(())` - Favorite deleted
    /// - `Err(AppError::NotFound)` - `"Favorite not found"`, also for an unknown planet
    pub async fn remove_planet(&self, user_id: i32, planet_id: i32) -> Result<(), AppError> {
        let removed = FavoriteRepository::new(self.db)
            .remove_planet(user_id, planet_id)
            .await?;

        if !removed {
            return Err(AppError::NotFound("Favorite not found".to_string()));
        }

        Ok(())
    }
}
