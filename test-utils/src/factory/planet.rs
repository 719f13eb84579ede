//! Planet factory for creating test planet entities.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_id;

/// Factory for creating test planets with customizable fields.
pub struct PlanetFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    climate: String,
    population: i64,
    orbital_period: i32,
    rotation_period: i32,
    diameter: i32,
    terrain: String,
}

impl<'a> PlanetFactory<'a> {
    /// Creates a new PlanetFactory with default values modelled on Tatooine.
    ///
    /// Defaults:
    /// - name: `"Planet {id}"`
    /// - climate: `"arid"`, population: `200000`, orbital_period: `304`
    /// - rotation_period: `23`, diameter: `10465`, terrain: `"desert"`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Planet {}", id),
            climate: "arid".to_string(),
            population: 200_000,
            orbital_period: 304,
            rotation_period: 23,
            diameter: 10_465,
            terrain: "desert".to_string(),
        }
    }

    /// Sets the planet name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the planet population.
    pub fn population(mut self, population: i64) -> Self {
        self.population = population;
        self
    }

    /// Builds and inserts the planet entity into the database.
    pub async fn build(self) -> Result<entity::planet::Model, DbErr> {
        entity::planet::ActiveModel {
            name: ActiveValue::Set(self.name),
            climate: ActiveValue::Set(self.climate),
            population: ActiveValue::Set(self.population),
            orbital_period: ActiveValue::Set(self.orbital_period),
            rotation_period: ActiveValue::Set(self.rotation_period),
            diameter: ActiveValue::Set(self.diameter),
            terrain: ActiveValue::Set(self.terrain),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a planet with default values.
pub async fn create_planet(db: &DatabaseConnection) -> Result<entity::planet::Model, DbErr> {
    PlanetFactory::new(db).build().await
}
