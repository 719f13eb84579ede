use super::*;
use test_utils::factory::user::DEFAULT_PASSWORD;

/// Tests logging in with correct credentials.
///
/// Verifies that the returned token verifies to the user's ID.
///
/// Expected: Ok(token)
#[tokio::test]
async fn issues_token_for_valid_credentials() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let jwt = keys();

    let user = factory::user::UserFactory::new(db)
        .email("poe@resistance.org")
        .build()
        .await?;

    let service = AuthService::new(db, &jwt);
    let token = service
        .login(credentials("poe@resistance.org", DEFAULT_PASSWORD))
        .await?;

    let claims = jwt.verify(&token).unwrap();
    assert_eq!(claims.sub, user.id.to_string());

    Ok(())
}

/// Tests logging in with a wrong password.
///
/// Expected: Err(AuthError::InvalidCredentials)
#[tokio::test]
async fn rejects_wrong_password() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let jwt = keys();

    factory::user::UserFactory::new(db)
        .email("poe@resistance.org")
        .build()
        .await?;

    let service = AuthService::new(db, &jwt);
    let result = service
        .login(credentials("poe@resistance.org", "wrong-password"))
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidCredentials))
    ));

    Ok(())
}

/// Tests logging in with an email nobody registered.
///
/// Expected: Err(AuthError::InvalidCredentials)
#[tokio::test]
async fn rejects_unknown_email() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let jwt = keys();

    let service = AuthService::new(db, &jwt);
    let result = service
        .login(credentials("ghost@nowhere.test", DEFAULT_PASSWORD))
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidCredentials))
    ));

    Ok(())
}

/// Tests logging in as a user created with a custom password.
///
/// Verifies the stored hash checks against that password and not the default one.
///
/// Expected: Ok(token) for the custom password, Err(AuthError::InvalidCredentials) for the default
#[tokio::test]
async fn checks_against_the_stored_password() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let jwt = keys();

    factory::user::UserFactory::new(db)
        .email("obi-wan@jedi.org")
        .password("high-ground")
        .build()
        .await?;

    let service = AuthService::new(db, &jwt);
    service
        .login(credentials("obi-wan@jedi.org", "high-ground"))
        .await?;

    let result = service
        .login(credentials("obi-wan@jedi.org", DEFAULT_PASSWORD))
        .await;
    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidCredentials))
    ));

    Ok(())
}
