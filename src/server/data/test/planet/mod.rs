use crate::server::{data::planet::PlanetRepository, model::planet::CreatePlanetParams};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod find_by_id;
mod get_all;
