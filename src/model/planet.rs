use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PlanetDto {
    pub id: i32,
    pub name: String,
    pub climate: String,
    pub population: i64,
    pub orbital_period: i32,
    pub rotation_period: i32,
    pub diameter: i32,
    pub terrain: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct CreatePlanetDto {
    pub name: Option<String>,
    pub climate: Option<String>,
    pub population: Option<i64>,
    pub orbital_period: Option<i32>,
    pub rotation_period: Option<i32>,
    pub diameter: Option<i32>,
    pub terrain: Option<String>,
}
