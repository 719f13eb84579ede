use super::*;

/// Tests adding a favorite character.
///
/// Expected: Ok(())
#[tokio::test]
async fn adds_favorite() -> Result<(), AppError> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let luke = factory::character::create_character(db).await?;

    let service = FavoriteService::new(db);
    service.add_character(user.id, luke.id).await?;

    let favorites = service.get_for_user(user.id).await?;
    assert_eq!(favorites.characters.len(), 1);

    Ok(())
}

/// Tests adding a character that does not exist.
///
/// Expected: Err(AppError::NotFound("Character not found"))
#[tokio::test]
async fn rejects_unknown_character() -> Result<(), AppError> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;

    let service = FavoriteService::new(db);
    let result = service.add_character(user.id, 999).await;

    assert!(matches!(result, Err(AppError::NotFound(msg)) if msg == "Character not found"));

    Ok(())
}

/// Tests adding the same character twice.
///
/// Expected: Err(AppError::Conflict("Favorite already exists"))
#[tokio::test]
async fn rejects_duplicate_favorite() -> Result<(), AppError> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let luke = factory::character::create_character(db).await?;
    factory::favorite::create_favorite_character(db, user.id, luke.id).await?;

    let service = FavoriteService::new(db);
    let result = service.add_character(user.id, luke.id).await;

    assert!(matches!(result, Err(AppError::Conflict(msg)) if msg == "Favorite already exists"));

    Ok(())
}
