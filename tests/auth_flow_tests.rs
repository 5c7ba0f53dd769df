use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use giveboard::{build_router, build_state, config::session::SessionConfig, test_utils::test_helpers};
use sqlx::SqlitePool;
use tower::ServiceExt;
use tower_sessions_sqlx_store::SqliteStore;

async fn test_app() -> (Router, SqlitePool) {
    let pool = test_helpers::create_test_db().await.unwrap();

    let session_store = SqliteStore::new(pool.clone())
        .with_table_name("sessions")
        .expect("valid session table name");
    session_store.migrate().await.expect("session table migration");

    let session_layer = SessionConfig::from_env().create_layer(session_store);
    let app = build_router(build_state(pool.clone()), session_layer);

    (app, pool)
}

fn form_request(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(
            header::CONTENT_TYPE,
            "application/x-www-form-urlencoded",
        )
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn body_string(response: axum::response::Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

#[tokio::test]
async fn profile_without_session_redirects_to_login() {
    let (app, _pool) = test_app().await;

    let response = app
        .oneshot(Request::builder().uri("/profile").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(
        response.headers().get(header::LOCATION).unwrap(),
        "/login"
    );
}

#[tokio::test]
async fn duplicate_registration_returns_conflict_message() {
    let (app, _pool) = test_app().await;

    let body = "name=Ada&phone=0700000000&email=ada%40example.com\
                &password=password123&confirm_password=password123";

    let first = app.clone().oneshot(form_request("/register", body)).await.unwrap();
    assert_eq!(first.status(), StatusCode::SEE_OTHER);
    assert_eq!(first.headers().get(header::LOCATION).unwrap(), "/login");

    let second = app.oneshot(form_request("/register", body)).await.unwrap();
    assert_eq!(second.status(), StatusCode::OK);
    assert_eq!(
        body_string(second).await,
        "Email or referral code already registered"
    );
}

#[tokio::test]
async fn failed_login_does_not_create_session() {
    let (app, pool) = test_app().await;
    test_helpers::insert_test_user(&pool, "Ada", "ada@example.com", "password123")
        .await
        .unwrap();

    let response = app
        .oneshot(form_request(
            "/login",
            "email=ada%40example.com&password=wrong-password",
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers().get(header::SET_COOKIE).is_none());
    assert_eq!(body_string(response).await, "Invalid email or password.");

    let sessions: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM sessions")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(sessions, 0);
}

#[tokio::test]
async fn login_missing_credentials_returns_prompt() {
    let (app, _pool) = test_app().await;

    let response = app
        .oneshot(form_request("/login", "email=&password="))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_string(response).await,
        "Please enter both email and password."
    );
}

#[tokio::test]
async fn login_then_profile_shows_referral_total() {
    let (app, pool) = test_app().await;
    test_helpers::insert_test_user(&pool, "Ada", "ada@example.com", "password123")
        .await
        .unwrap();
    test_helpers::insert_test_donation(&pool, "Donor", "d@example.com", 30.0, "Ada2025")
        .await
        .unwrap();

    let login = app
        .clone()
        .oneshot(form_request(
            "/login",
            "email=ada%40example.com&password=password123",
        ))
        .await
        .unwrap();

    assert_eq!(login.status(), StatusCode::SEE_OTHER);
    assert_eq!(login.headers().get(header::LOCATION).unwrap(), "/profile");

    let set_cookie = login
        .headers()
        .get(header::SET_COOKIE)
        .expect("login sets a session cookie")
        .to_str()
        .unwrap();
    let cookie = set_cookie.split(';').next().unwrap().to_string();

    let profile = app
        .oneshot(
            Request::builder()
                .uri("/profile")
                .header(header::COOKIE, cookie)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(profile.status(), StatusCode::OK);
    let html = body_string(profile).await;
    assert!(html.contains("Ada2025"));
    assert!(html.contains("30"));
}

#[tokio::test]
async fn login_session_deadline_is_fixed_not_rolling() {
    let (app, pool) = test_app().await;
    test_helpers::insert_test_user(&pool, "Ada", "ada@example.com", "password123")
        .await
        .unwrap();

    let login = app
        .clone()
        .oneshot(form_request(
            "/login",
            "email=ada%40example.com&password=password123",
        ))
        .await
        .unwrap();

    // Login stamps the session with an absolute deadline, carried on the
    // cookie as Expires rather than an idle-refresh policy
    let set_cookie = login
        .headers()
        .get(header::SET_COOKIE)
        .expect("login sets a session cookie")
        .to_str()
        .unwrap();
    assert!(set_cookie.contains("Expires="));
    let cookie = set_cookie.split(';').next().unwrap().to_string();

    // Activity within the window must not re-issue the cookie with a
    // later deadline
    let profile = app
        .oneshot(
            Request::builder()
                .uri("/profile")
                .header(header::COOKIE, cookie)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(profile.status(), StatusCode::OK);
    assert!(profile.headers().get(header::SET_COOKIE).is_none());
}

#[tokio::test]
async fn logout_clears_session_and_redirects() {
    let (app, pool) = test_app().await;
    test_helpers::insert_test_user(&pool, "Ada", "ada@example.com", "password123")
        .await
        .unwrap();

    let login = app
        .clone()
        .oneshot(form_request(
            "/login",
            "email=ada%40example.com&password=password123",
        ))
        .await
        .unwrap();
    let cookie = login
        .headers()
        .get(header::SET_COOKIE)
        .unwrap()
        .to_str()
        .unwrap()
        .split(';')
        .next()
        .unwrap()
        .to_string();

    let logout = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/logout")
                .header(header::COOKIE, cookie.clone())
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(logout.status(), StatusCode::SEE_OTHER);
    assert_eq!(logout.headers().get(header::LOCATION).unwrap(), "/login");

    // The old cookie no longer grants access
    let profile = app
        .oneshot(
            Request::builder()
                .uri("/profile")
                .header(header::COOKIE, cookie)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(profile.status(), StatusCode::SEE_OTHER);
    assert_eq!(profile.headers().get(header::LOCATION).unwrap(), "/login");
}

#[tokio::test]
async fn donation_with_unknown_referral_code_returns_error_body() {
    let (app, pool) = test_app().await;

    let response = app
        .oneshot(form_request(
            "/donate",
            "name=Donor&email=donor%40example.com&amount=25&referral_code=Nobody2025",
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_string(response).await, "Referral code does not exist.");

    let donations: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM donations")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(donations, 0);
}

#[tokio::test]
async fn donation_redirects_back_to_donate_page() {
    let (app, pool) = test_app().await;
    test_helpers::insert_test_user(&pool, "Ada", "ada@example.com", "password123")
        .await
        .unwrap();

    let response = app
        .oneshot(form_request(
            "/donate",
            "name=Donor&email=donor%40example.com&amount=25&referral_code=Ada2025",
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers().get(header::LOCATION).unwrap(), "/donate");

    let donations: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM donations")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(donations, 1);
}

#[tokio::test]
async fn leaderboard_is_public_and_lists_zero_donation_users() {
    let (app, pool) = test_app().await;
    test_helpers::insert_test_user(&pool, "Ada", "ada@example.com", "password123")
        .await
        .unwrap();
    test_helpers::insert_test_user(&pool, "Grace", "grace@example.com", "password123")
        .await
        .unwrap();
    test_helpers::insert_test_donation(&pool, "Donor", "d@example.com", 50.0, "Grace2025")
        .await
        .unwrap();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/leaderboard")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let html = body_string(response).await;

    // Anonymous visitors browse as Guest
    assert!(html.contains("Guest"));
    // Top fundraiser listed before the user with no donations
    let grace_pos = html.find("Grace").unwrap();
    let ada_pos = html.find("Ada").unwrap();
    assert!(grace_pos < ada_pos);
}
