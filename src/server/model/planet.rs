//! Planet domain models and parameters.

use crate::{
    model::planet::{CreatePlanetDto, PlanetDto},
    server::{error::AppError, util::validate::required},
};

#[derive(Debug, Clone, PartialEq)]
pub struct Planet {
    pub id: i32,
    pub name: String,
    pub climate: String,
    pub population: i64,
    pub orbital_period: i32,
    pub rotation_period: i32,
    pub diameter: i32,
    pub terrain: String,
}

impl Planet {
    pub fn into_dto(self) -> PlanetDto {
        PlanetDto {
            id: self.id,
            name: self.name,
            climate: self.climate,
            population: self.population,
            orbital_period: self.orbital_period,
            rotation_period: self.rotation_period,
            diameter: self.diameter,
            terrain: self.terrain,
        }
    }

    pub fn from_entity(entity: entity::planet::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            climate: entity.climate,
            population: entity.population,
            orbital_period: entity.orbital_period,
            rotation_period: entity.rotation_period,
            diameter: entity.diameter,
            terrain: entity.terrain,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreatePlanetParams {
    pub name: String,
    pub climate: String,
    pub population: i64,
    pub orbital_period: i32,
    pub rotation_period: i32,
    pub diameter: i32,
    pub terrain: String,
}

impl CreatePlanetParams {
    /// Validates the request body field by field in declaration order.
    ///
    /// Planet messages use the raw field name, e.g. `"No orbital_period was provided"`.
    pub fn from_dto(dto: CreatePlanetDto) -> Result<Self, AppError> {
        Ok(Self {
            name: required(dto.name, "name")?,
            climate: required(dto.climate, "climate")?,
            population: required(dto.population, "population")?,
            orbital_period: required(dto.orbital_period, "orbital_period")?,
            rotation_period: required(dto.rotation_period, "rotation_period")?,
            diameter: required(dto.diameter, "diameter")?,
            terrain: required(dto.terrain, "terrain")?,
        })
    }
}
