use sea_orm::DatabaseConnection;

use crate::server::{
    data::character::CharacterRepository,
    error::AppError,
    model::character::{Character, CreateCharacterParams},
};

pub struct CharacterService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CharacterService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a character, rejecting a name that is already taken
    pub async fn create(&self, params: CreateCharacterParams) -> Result<Character, AppError> {
        let repo = CharacterRepository::new(self.db);

        if repo.find_by_name(&params.name).await?.is_some() {
            return Err(AppError::Conflict("Character already exists".to_string()));
        }

        let character = repo.create(params).await?;

        Ok(character)
    }

    /// Gets every character ordered by ID
    pub async fn get_all(&self) -> Result<Vec<Character>, AppError> {
        let repo = CharacterRepository::new(self.db);

        Ok(repo.get_all().await?)
    }
}
