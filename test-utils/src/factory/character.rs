//! Character factory for creating test character entities.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_id;

/// Factory for creating test characters with customizable fields.
///
/// Defaults describe Luke Skywalker with a unique name suffix so several
/// characters can be created in one test.
pub struct CharacterFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    birth_year: String,
    gender: String,
    height: i32,
    skin_color: String,
    hair_color: String,
    eye_color: String,
}

impl<'a> CharacterFactory<'a> {
    /// Creates a new CharacterFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Character {id}"`
    /// - birth_year: `"19BBY"`, gender: `"male"`, height: `172`
    /// - skin_color: `"fair"`, hair_color: `"blond"`, eye_color: `"blue"`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Character {}", id),
            birth_year: "19BBY".to_string(),
            gender: "male".to_string(),
            height: 172,
            skin_color: "fair".to_string(),
            hair_color: "blond".to_string(),
            eye_color: "blue".to_string(),
        }
    }

    /// Sets the character name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the character height.
    pub fn height(mut self, height: i32) -> Self {
        self.height = height;
        self
    }

    /// Builds and inserts the character entity into the database.
    pub async fn build(self) -> Result<entity::character::Model, DbErr> {
        entity::character::ActiveModel {
            name: ActiveValue::Set(self.name),
            birth_year: ActiveValue::Set(self.birth_year),
            gender: ActiveValue::Set(self.gender),
            height: ActiveValue::Set(self.height),
            skin_color: ActiveValue::Set(self.skin_color),
            hair_color: ActiveValue::Set(self.hair_color),
            eye_color: ActiveValue::Set(self.eye_color),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a character with default values.
pub async fn create_character(db: &DatabaseConnection) -> Result<entity::character::Model, DbErr> {
    CharacterFactory::new(db).build().await
}
