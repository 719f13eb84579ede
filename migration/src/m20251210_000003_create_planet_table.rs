use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Planet::Table)
                    .if_not_exists()
                    .col(pk_auto(Planet::Id))
                    .col(string(Planet::Name))
                    .col(string(Planet::Climate))
                    .col(big_integer(Planet::Population))
                    .col(integer(Planet::OrbitalPeriod))
                    .col(integer(Planet::RotationPeriod))
                    .col(integer(Planet::Diameter))
                    .col(string(Planet::Terrain))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_planet_name")
                    .table(Planet::Table)
                    .col(Planet::Name)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Planet::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Planet {
    Table,
    Id,
    Name,
    Climate,
    Population,
    OrbitalPeriod,
    RotationPeriod,
    Diameter,
    Terrain,
}
