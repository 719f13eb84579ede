use crate::server::{data::character::CharacterRepository, model::character::CreateCharacterParams};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod get_all;

fn luke() -> CreateCharacterParams {
    CreateCharacterParams {
        name: "Luke Skywalker".to_string(),
        birth_year: "19BBY".to_string(),
        gender: "male".to_string(),
        height: 172,
        skin_color: "fair".to_string(),
        hair_color: "blond".to_string(),
        eye_color: "blue".to_string(),
    }
}
