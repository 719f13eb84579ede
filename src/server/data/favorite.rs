//! Favorites data repository.
//!
//! Favorites live in two join tables, `favorite_character` and `favorite_planet`,
//! each keyed by `(user_id, target_id)`. Every query here is scoped to one user.

use chrono::Utc;
use sea_orm::{
    sea_query::JoinType, ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr,
    EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, RelationTrait,
};

use crate::server::model::{character::Character, planet::Planet};

pub struct FavoriteRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FavoriteRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets the user's favorite characters in the order they were added
    pub async fn get_characters(&self, user_id: i32) -> Result<Vec<Character>, DbErr> {
        let entities = entity::prelude::Character::find()
            .join(
                JoinType::InnerJoin,
                entity::character::Relation::FavoriteCharacter.def(),
            )
            .filter(entity::favorite_character::Column::UserId.eq(user_id))
            .order_by_asc(entity::favorite_character::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Character::from_entity).collect())
    }

    /// Checks whether the character is already one of the user's favorites
    pub async fn has_character(&self, user_id: i32, character_id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::FavoriteCharacter::find()
            .filter(entity::favorite_character::Column::UserId.eq(user_id))
            .filter(entity::favorite_character::Column::CharacterId.eq(character_id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Adds a character to the user's favorites
    pub async fn add_character(&self, user_id: i32, character_id: i32) -> Result<(), DbErr> {
        entity::favorite_character::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            character_id: ActiveValue::Set(character_id),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(())
    }

    /// Removes a character from the user's favorites
    ///
    /// Returns true if a favorite was deleted, false if there was none
    pub async fn remove_character(&self, user_id: i32, character_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::FavoriteCharacter::delete_many()
            .filter(entity::favorite_character::Column::UserId.eq(user_id))
            .filter(entity::favorite_character::Column::CharacterId.eq(character_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Gets the user's favorite planets in the order they were added
    pub async fn get_planets(&self, user_id: i32) -> Result<Vec<Planet>, DbErr> {
        let entities = entity::prelude::Planet::find()
            .join(
                JoinType::InnerJoin,
                entity::planet::Relation::FavoritePlanet.def(),
            )
            .filter(entity::favorite_planet::Column::UserId.eq(user_id))
            .order_by_asc(entity::favorite_planet::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Planet::from_entity).collect())
    }

    /// Checks whether the planet is already one of the user's favorites
    pub async fn has_planet(&self, user_id: i32, planet_id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::FavoritePlanet::find()
            .filter(entity::favorite_planet::Column::UserId.eq(user_id))
            .filter(entity::favorite_planet::Column::PlanetId.eq(planet_id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Adds a planet to the user's favorites
    pub async fn add_planet(&self, user_id: i32, planet_id: i32) -> Result<(), DbErr> {
        entity::favorite_planet::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            planet_id: ActiveValue::Set(planet_id),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(())
    }

    /// Removes a planet from the user's favorites
    ///
    /// Returns true if a favorite was deleted, false if there was none
    pub async fn remove_planet(&self, user_id: i32, planet_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::FavoritePlanet::delete_many()
            .filter(entity::favorite_planet::Column::UserId.eq(user_id))
            .filter(entity::favorite_planet::Column::PlanetId.eq(planet_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
