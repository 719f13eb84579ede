use super::*;

#[tokio::test]
async fn creates_and_lists_characters() {
    let app = TestApp::new().await;

    let (status, body) = app.post("/characters", luke()).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(msg(&body), "Character created successfully");

    let mut leia = luke();
    leia["name"] = json!("Leia Organa");
    leia["height"] = json!(150);
    app.post("/characters", leia.clone()).await;

    let (status, body) = app.get("/characters").await;
    assert_eq!(status, StatusCode::OK);

    let characters = body.as_array().unwrap();
    assert_eq!(characters.len(), 2);

    let luke_id = characters[0]["id"].as_i64().unwrap();
    let leia_id = characters[1]["id"].as_i64().unwrap();
    assert!(luke_id < leia_id);

    let mut expected_luke = luke();
    expected_luke["id"] = json!(luke_id);
    leia["id"] = json!(leia_id);
    assert_eq!(characters[0], expected_luke);
    assert_eq!(characters[1], leia);
}

#[tokio::test]
async fn rejects_duplicate_name_without_second_row() {
    let app = TestApp::new().await;

    app.post("/characters", luke()).await;
    let (status, body) = app.post("/characters", luke()).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(msg(&body), "Character already exists");
    assert_eq!(app.listed("/characters").await, 1);
}

#[tokio::test]
async fn reports_missing_fields_in_order() {
    let app = TestApp::new().await;
    let cases = [
        ("name", "No name was provided"),
        ("birth_year", "No birth year was provided"),
        ("gender", "No gender was provided"),
        ("height", "No height was provided"),
        ("skin_color", "No skin color was provided"),
        ("hair_color", "No hair color was provided"),
        ("eye_color", "No eye color was provided"),
    ];

    for (field, expected) in cases {
        let mut body = luke();
        body.as_object_mut().unwrap().remove(field);

        let (status, response) = app.post("/characters", body).await;

        assert_eq!(status, StatusCode::BAD_REQUEST, "field {}", field);
        assert_eq!(msg(&response), expected);
    }

    let (status, response) = app
        .post("/characters", json!({ "gender": "male", "height": 96 }))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(msg(&response), "No name was provided");

    assert_eq!(app.listed("/characters").await, 0);
}

#[tokio::test]
async fn rejects_wrong_field_type() {
    let app = TestApp::new().await;
    let mut body = luke();
    body["height"] = json!("tall");

    let (status, response) = app.post("/characters", body).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(!msg(&response).is_empty());
    assert_eq!(app.listed("/characters").await, 0);
}
