use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Character::Table)
                    .if_not_exists()
                    .col(pk_auto(Character::Id))
                    .col(string(Character::Name))
                    .col(string(Character::BirthYear))
                    .col(string(Character::Gender))
                    .col(integer(Character::Height))
                    .col(string(Character::SkinColor))
                    .col(string(Character::HairColor))
                    .col(string(Character::EyeColor))
                    .to_owned(),
            )
            .await?;

        // Lookups by name back the duplicate check on insert
        manager
            .create_index(
                Index::create()
                    .name("idx_character_name")
                    .table(Character::Table)
                    .col(Character::Name)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Character::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Character {
    Table,
    Id,
    Name,
    BirthYear,
    Gender,
    Height,
    SkinColor,
    HairColor,
    EyeColor,
}
