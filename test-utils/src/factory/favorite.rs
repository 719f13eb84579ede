//! Factories for favorite join rows.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Marks a character as a favorite of a user.
///
/// # Arguments
/// - `db` - Database connection
/// - `user_id` - ID of an existing user
/// - `character_id` - ID of an existing character
pub async fn create_favorite_character(
    db: &DatabaseConnection,
    user_id: i32,
    character_id: i32,
) -> Result<entity::favorite_character::Model, DbErr> {
    entity::favorite_character::ActiveModel {
        user_id: ActiveValue::Set(user_id),
        character_id: ActiveValue::Set(character_id),
        created_at: ActiveValue::Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await
}

/// Marks a planet as a favorite of a user.
pub async fn create_favorite_planet(
    db: &DatabaseConnection,
    user_id: i32,
    planet_id: i32,
) -> Result<entity::favorite_planet::Model, DbErr> {
    entity::favorite_planet::ActiveModel {
        user_id: ActiveValue::Set(user_id),
        planet_id: ActiveValue::Set(planet_id),
        created_at: ActiveValue::Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await
}
