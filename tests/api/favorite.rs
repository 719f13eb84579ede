use super::*;
use test_utils::factory;

#[tokio::test]
async fn add_list_and_remove_favorites() {
    let app = TestApp::new().await;
    let token = app.login_as("rey@jakku.net").await;
    let character = factory::character::create_character(&app.db).await.unwrap();
    let planet = factory::planet::create_planet(&app.db).await.unwrap();

    let uri = format!("/favorites/characters/{}", character.id);
    let (status, body) = app.send(Method::POST, &uri, Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(msg(&body), "Favorite successfully included");

    let planet_uri = format!("/favorites/planets/{}", planet.id);
    let (status, _) = app
        .send(Method::POST, &planet_uri, Some(&token), None)
        .await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = app.send(Method::GET, "/favorites", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["characters"][0]["id"], character.id);
    assert_eq!(body["planets"][0]["id"], planet.id);

    let (status, body) = app.send(Method::DELETE, &uri, Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(msg(&body), "Favorite successfully deleted");

    let (_, body) = app.send(Method::GET, "/favorites", Some(&token), None).await;
    assert!(body["characters"].as_array().unwrap().is_empty());
    assert_eq!(body["planets"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn duplicate_favorite_is_rejected() {
    let app = TestApp::new().await;
    let token = app.login_as("finn@resistance.org").await;
    let planet = factory::planet::create_planet(&app.db).await.unwrap();
    let uri = format!("/favorites/planets/{}", planet.id);

    app.send(Method::POST, &uri, Some(&token), None).await;
    let (status, body) = app.send(Method::POST, &uri, Some(&token), None).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(msg(&body), "Favorite already exists");
}

#[tokio::test]
async fn unknown_targets_are_not_found() {
    let app = TestApp::new().await;
    let token = app.login_as("bb8@resistance.org").await;

    let (status, body) = app
        .send(Method::POST, "/favorites/characters/999", Some(&token), None)
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(msg(&body), "Character not found");

    let (status, body) = app
        .send(Method::POST, "/favorites/planets/999", Some(&token), None)
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(msg(&body), "Planet not found");

    let (status, body) = app
        .send(Method::DELETE, "/favorites/planets/999", Some(&token), None)
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(msg(&body), "Favorite not found");
}

#[tokio::test]
async fn favorites_are_private_to_each_user() {
    let app = TestApp::new().await;
    let owner = app.login_as("padme@naboo.gov").await;
    let other = app.login_as("jarjar@naboo.gov").await;
    let character = factory::character::create_character(&app.db).await.unwrap();
    let uri = format!("/favorites/characters/{}", character.id);

    app.send(Method::POST, &uri, Some(&owner), None).await;

    let (_, body) = app.send(Method::GET, "/favorites", Some(&other), None).await;
    assert!(body["characters"].as_array().unwrap().is_empty());

    let (status, _) = app.send(Method::DELETE, &uri, Some(&other), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, body) = app.send(Method::GET, "/favorites", Some(&owner), None).await;
    assert_eq!(body["characters"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn favorites_require_token() {
    let app = TestApp::new().await;

    let (status, _) = app.get("/favorites").await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, _) = app
        .send(Method::POST, "/favorites/characters/1", None, None)
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}
