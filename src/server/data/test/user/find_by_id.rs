use super::*;

/// Tests finding an existing user by ID.
///
/// Expected: Ok(Some(User))
#[tokio::test]
async fn finds_existing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::user::create_user(db).await?;

    let repo = UserRepository::new(db);
    let user = repo.find_by_id(created.id).await?;

    assert!(user.is_some());
    assert_eq!(user.unwrap().email, created.email);

    Ok(())
}

/// Tests looking up an ID with no user.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo.find_by_id(999).await?;

    assert!(user.is_none());

    Ok(())
}
