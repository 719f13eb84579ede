use sea_orm_migration::{prelude::*, schema::*};

use super::m20251210_000001_create_user_table::User;
use super::m20251210_000003_create_planet_table::Planet;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(FavoritePlanet::Table)
                    .if_not_exists()
                    .col(pk_auto(FavoritePlanet::Id))
                    .col(integer(FavoritePlanet::UserId))
                    .col(integer(FavoritePlanet::PlanetId))
                    .col(timestamp_with_time_zone(FavoritePlanet::CreatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_favorite_planet_user_id")
                            .from(FavoritePlanet::Table, FavoritePlanet::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_favorite_planet_planet_id")
                            .from(FavoritePlanet::Table, FavoritePlanet::PlanetId)
                            .to(Planet::Table, Planet::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .index(
                        Index::create()
                            .unique()
                            .name("idx_favorite_planet_unique")
                            .col(FavoritePlanet::UserId)
                            .col(FavoritePlanet::PlanetId),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(FavoritePlanet::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum FavoritePlanet {
    Table,
    Id,
    UserId,
    PlanetId,
    CreatedAt,
}
