use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::planet::{CreatePlanetParams, Planet};

pub struct PlanetRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PlanetRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new planet and returns it with its assigned ID
    pub async fn create(&self, params: CreatePlanetParams) -> Result<Planet, DbErr> {
        let entity = entity::planet::ActiveModel {
            name: ActiveValue::Set(params.name),
            climate: ActiveValue::Set(params.climate),
            population: ActiveValue::Set(params.population),
            orbital_period: ActiveValue::Set(params.orbital_period),
            rotation_period: ActiveValue::Set(params.rotation_period),
            diameter: ActiveValue::Set(params.diameter),
            terrain: ActiveValue::Set(params.terrain),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Planet::from_entity(entity))
    }

    /// Gets a planet by ID
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Planet>, DbErr> {
        let entity = entity::prelude::Planet::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Planet::from_entity))
    }

    /// Gets a planet by exact name match
    pub async fn find_by_name(&self, name: &str) -> Result<Option<Planet>, DbErr> {
        let entity = entity::prelude::Planet::find()
            .filter(entity::planet::Column::Name.eq(name))
            .one(self.db)
            .await?;

        Ok(entity.map(Planet::from_entity))
    }

    /// Gets every planet ordered by ID
    pub async fn get_all(&self) -> Result<Vec<Planet>, DbErr> {
        let entities = entity::prelude::Planet::find()
            .order_by_asc(entity::planet::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Planet::from_entity).collect())
    }
}
