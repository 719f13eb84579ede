use super::*;

#[tokio::test]
async fn register_then_login_issues_working_token() {
    let app = TestApp::new().await;
    let credentials = json!({ "email": "luke@tatooine.net", "password": "red-five" });

    let (status, body) = app.post("/register", credentials.clone()).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(msg(&body), "User created successfully");

    let (status, body) = app.post("/login", credentials).await;
    assert_eq!(status, StatusCode::OK);
    let token = body["token"].as_str().unwrap();

    let (status, body) = app.send(Method::GET, "/protected", Some(token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["email"], "luke@tatooine.net");
    assert!(body["id"].as_i64().unwrap() > 0);
    assert!(body.get("password_hash").is_none());
}

#[tokio::test]
async fn protected_accepts_post() {
    let app = TestApp::new().await;
    let token = app.login_as("leia@alderaan.gov").await;

    let (status, body) = app.send(Method::POST, "/protected", Some(&token), None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["email"], "leia@alderaan.gov");
}

#[tokio::test]
async fn register_reports_first_missing_field() {
    let app = TestApp::new().await;

    let (status, body) = app.post("/register", json!({})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(msg(&body), "No email was provided");

    let (status, body) = app.post("/register", json!({ "email": "a@b.c" })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(msg(&body), "No password was provided");

    let (status, body) = app
        .post("/register", json!({ "email": null, "password": "x" }))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(msg(&body), "No email was provided");

    assert_eq!(app.user_count().await, 0);
}

#[tokio::test]
async fn register_rejects_existing_email() {
    let app = TestApp::new().await;
    let credentials = json!({ "email": "han@falcon.space", "password": "kessel" });

    app.post("/register", credentials.clone()).await;
    let (status, body) = app.post("/register", credentials).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(msg(&body), "User already exists");
    assert_eq!(app.user_count().await, 1);
}

#[tokio::test]
async fn login_rejects_wrong_password_and_unknown_email() {
    let app = TestApp::new().await;
    app.login_as("chewie@kashyyyk.org").await;

    let (status, body) = app
        .post(
            "/login",
            json!({ "email": "chewie@kashyyyk.org", "password": "wrong" }),
        )
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(msg(&body), "Invalid username or password");

    let (status, body) = app
        .post("/login", json!({ "email": "nobody@x.y", "password": "wrong" }))
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(msg(&body), "Invalid username or password");
}

#[tokio::test]
async fn login_requires_password() {
    let app = TestApp::new().await;

    let (status, body) = app.post("/login", json!({ "email": "a@b.c" })).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(msg(&body), "No password was provided");
}

#[tokio::test]
async fn protected_rejects_bad_tokens() {
    let app = TestApp::new().await;

    let (status, _) = app.get("/protected").await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, body) = app
        .send(Method::GET, "/protected", Some("not-a-jwt"), None)
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(msg(&body), "Invalid token");

    let expired = JwtKeys::new(SECRET, -3600).issue(1).unwrap();
    let (status, body) = app
        .send(Method::GET, "/protected", Some(&expired), None)
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(msg(&body), "Token has expired");
}

#[tokio::test]
async fn protected_rejects_token_for_missing_user() {
    let app = TestApp::new().await;
    let token = app.jwt.issue(4242).unwrap();

    let (status, body) = app.send(Method::GET, "/protected", Some(&token), None).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(msg(&body), "Invalid token");
}

#[tokio::test]
async fn malformed_json_is_bad_request() {
    let app = TestApp::new().await;
    let request = Request::builder()
        .method(Method::POST)
        .uri("/register")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{ not json"))
        .unwrap();

    let (status, body) = app.send_request(request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(!msg(&body).is_empty());
}

#[tokio::test]
async fn user_route_returns_greeting() {
    let app = TestApp::new().await;

    let (status, body) = app.get("/user").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(msg(&body), "Hello, this is your GET /user response ");
}
