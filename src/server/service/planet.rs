use sea_orm::DatabaseConnection;

use crate::server::{
    data::planet::PlanetRepository,
    error::AppError,
    model::planet::{CreatePlanetParams, Planet},
};

pub struct PlanetService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PlanetService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a planet, rejecting a name that is already taken
    pub async fn create(&self, params: CreatePlanetParams) -> Result<Planet, AppError> {
        let repo = PlanetRepository::new(self.db);

        if repo.find_by_name(&params.name).await?.is_some() {
            return Err(AppError::Conflict("Planet already exists".to_string()));
        }

        let planet = repo.create(params).await?;

        Ok(planet)
    }

    /// Gets every planet ordered by ID
    pub async fn get_all(&self) -> Result<Vec<Planet>, AppError> {
        let repo = PlanetRepository::new(self.db);

        Ok(repo.get_all().await?)
    }
}
