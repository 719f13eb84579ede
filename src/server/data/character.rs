use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::character::{Character, CreateCharacterParams};

pub struct CharacterRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CharacterRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new character and returns it with its assigned ID
    pub async fn create(&self, params: CreateCharacterParams) -> Result<Character, DbErr> {
        let entity = entity::character::ActiveModel {
            name: ActiveValue::Set(params.name),
            birth_year: ActiveValue::Set(params.birth_year),
            gender: ActiveValue::Set(params.gender),
            height: ActiveValue::Set(params.height),
            skin_color: ActiveValue::Set(params.skin_color),
            hair_color: ActiveValue::Set(params.hair_color),
            eye_color: ActiveValue::Set(params.eye_color),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Character::from_entity(entity))
    }

    /// Gets a character by ID
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Character>, DbErr> {
        let entity = entity::prelude::Character::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(entity.map(Character::from_entity))
    }

    /// Gets a character by exact name match
    pub async fn find_by_name(&self, name: &str) -> Result<Option<Character>, DbErr> {
        let entity = entity::prelude::Character::find()
            .filter(entity::character::Column::Name.eq(name))
            .one(self.db)
            .await?;

        Ok(entity.map(Character::from_entity))
    }

    /// Gets every character ordered by ID
    pub async fn get_all(&self) -> Result<Vec<Character>, DbErr> {
        let entities = entity::prelude::Character::find()
            .order_by_asc(entity::character::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Character::from_entity).collect())
    }
}
