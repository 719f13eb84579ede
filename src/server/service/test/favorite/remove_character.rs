use super::*;

/// Tests removing a favorite character.
///
/// Expected: Ok(()) and the list is empty afterwards
#[tokio::test]
async fn removes_favorite() -> Result<(), AppError> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let luke = factory::character::create_character(db).await?;
    factory::favorite::create_favorite_character(db, user.id, luke.id).await?;

    let service = FavoriteService::new(db);
    service.remove_character(user.id, luke.id).await?;

    assert!(service.get_for_user(user.id).await?.characters.is_empty());

    Ok(())
}

/// Tests removing a character that is not a favorite.
///
/// Expected: Err(AppError::NotFound("Favorite not found"))
#[tokio::test]
async fn rejects_missing_favorite() -> Result<(), AppError> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let luke = factory::character::create_character(db).await?;

    let service = FavoriteService::new(db);
    let result = service.remove_character(user.id, luke.id).await;

    assert!(matches!(result, Err(AppError::NotFound(msg)) if msg == "Favorite not found"));

    Ok(())
}
