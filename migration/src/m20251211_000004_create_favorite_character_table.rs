use sea_orm_migration::{prelude::*, schema::*};

use super::m20251210_000001_create_user_table::User;
use super::m20251210_000002_create_character_table::Character;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(FavoriteCharacter::Table)
                    .if_not_exists()
                    .col(pk_auto(FavoriteCharacter::Id))
                    .col(integer(FavoriteCharacter::UserId))
                    .col(integer(FavoriteCharacter::CharacterId))
                    .col(timestamp_with_time_zone(FavoriteCharacter::CreatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_favorite_character_user_id")
                            .from(FavoriteCharacter::Table, FavoriteCharacter::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_favorite_character_character_id")
                            .from(FavoriteCharacter::Table, FavoriteCharacter::CharacterId)
                            .to(Character::Table, Character::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .index(
                        Index::create()
                            .unique()
                            .name("idx_favorite_character_unique")
                            .col(FavoriteCharacter::UserId)
                            .col(FavoriteCharacter::CharacterId),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(FavoriteCharacter::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum FavoriteCharacter {
    Table,
    Id,
    UserId,
    CharacterId,
    CreatedAt,
}
