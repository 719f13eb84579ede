use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CharacterDto {
    pub id: i32,
    pub name: String,
    pub birth_year: String,
    pub gender: String,
    pub height: i32,
    pub skin_color: String,
    pub hair_color: String,
    pub eye_color: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct CreateCharacterDto {
    pub name: Option<String>,
    pub birth_year: Option<String>,
    pub gender: Option<String>,
    pub height: Option<i32>,
    pub skin_color: Option<String>,
    pub hair_color: Option<String>,
    pub eye_color: Option<String>,
}
