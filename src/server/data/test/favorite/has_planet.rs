use super::*;

/// Tests membership checks for favorite planets.
///
/// Expected: true only for the user who favorited it
#[tokio::test]
async fn reports_membership_per_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let other = factory::user::create_user(db).await?;
    let endor = factory::planet::create_planet(db).await?;

    factory::favorite::create_favorite_planet(db, user.id, endor.id).await?;

    let repo = FavoriteRepository::new(db);

    assert!(repo.has_planet(user.id, endor.id).await?);
    assert!(!repo.has_planet(other.id, endor.id).await?);

    Ok(())
}
