//! Character domain models and parameters.

use crate::{
    model::character::{CharacterDto, CreateCharacterDto},
    server::{error::AppError, util::validate::required},
};

#[derive(Debug, Clone, PartialEq)]
pub struct Character {
    pub id: i32,
    pub name: String,
    pub birth_year: String,
    pub gender: String,
    pub height: i32,
    pub skin_color: String,
    pub hair_color: String,
    pub eye_color: String,
}

impl Character {
    pub fn into_dto(self) -> CharacterDto {
        CharacterDto {
            id: self.id,
            name: self.name,
            birth_year: self.birth_year,
            gender: self.gender,
            height: self.height,
            skin_color: self.skin_color,
            hair_color: self.hair_color,
            eye_color: self.eye_color,
        }
    }

    pub fn from_entity(entity: entity::character::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            birth_year: entity.birth_year,
            gender: entity.gender,
            height: entity.height,
            skin_color: entity.skin_color,
            hair_color: entity.hair_color,
            eye_color: entity.eye_color,
        }
    }
}

/// Fully populated character ready for insertion.
#[derive(Debug, Clone)]
pub struct CreateCharacterParams {
    pub name: String,
    pub birth_year: String,
    pub gender: String,
    pub height: i32,
    pub skin_color: String,
    pub hair_color: String,
    pub eye_color: String,
}

impl CreateCharacterParams {
    /// Validates the request body field by field in declaration order.
    ///
    /// The first absent field is reported, e.g. `"No skin color was provided"`.
    pub fn from_dto(dto: CreateCharacterDto) -> Result<Self, AppError> {
        Ok(Self {
            name: required(dto.name, "name")?,
            birth_year: required(dto.birth_year, "birth year")?,
            gender: required(dto.gender, "gender")?,
            height: required(dto.height, "height")?,
            skin_color: required(dto.skin_color, "skin color")?,
            hair_color: required(dto.hair_color, "hair color")?,
            eye_color: required(dto.eye_color, "eye color")?,
        })
    }
}
