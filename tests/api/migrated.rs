//! Flows against the schema the migrations build, including its unique indexes.

use super::*;

#[tokio::test]
async fn catalog_and_favorites_work_on_migrated_schema() {
    let app = TestApp::migrated().await;
    let token = app.login_as("poe@resistance.org").await;

    let (status, _) = app.post("/characters", luke()).await;
    assert_eq!(status, StatusCode::OK);
    let (status, _) = app.post("/planets", tatooine()).await;
    assert_eq!(status, StatusCode::OK);

    let (_, characters) = app.get("/characters").await;
    let id = characters[0]["id"].as_i64().unwrap();
    let uri = format!("/favorites/characters/{}", id);

    let (status, body) = app.send(Method::POST, &uri, Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(msg(&body), "Favorite successfully included");

    let (status, body) = app.send(Method::POST, &uri, Some(&token), None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(msg(&body), "Favorite already exists");

    let (status, body) = app.send(Method::GET, "/favorites", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["characters"].as_array().unwrap().len(), 1);
    assert_eq!(body["characters"][0]["id"], id);
    assert!(body["planets"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn duplicate_register_keeps_one_user_on_migrated_schema() {
    let app = TestApp::migrated().await;
    let credentials = json!({ "email": "kylo@first.order", "password": "ben" });

    let (status, _) = app.post("/register", credentials.clone()).await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = app.post("/register", credentials).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(msg(&body), "User already exists");
    assert_eq!(app.user_count().await, 1);
}
