pub mod auth;
pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod models;
pub mod repositories;
pub mod services;

// Make test_utils available for both unit tests and integration tests
pub mod test_utils;

use axum::{middleware, routing::get, Router};
use config::session::SessionLayer;
use std::sync::Arc;
use tower_http::{services::ServeDir, trace::TraceLayer};

#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<services::user_service::UserService>,
    pub auth_service: Arc<services::auth_service::AuthService>,
    pub donation_service: Arc<services::donation_service::DonationService>,
    pub pool: sqlx::SqlitePool,
}

/// Assemble the full application router. Shared between `main` and the
/// integration tests.
pub fn build_router(state: AppState, session_layer: SessionLayer) -> Router {
    let protected_routes = Router::new()
        .route("/profile", get(handlers::profile_handler))
        .layer(middleware::from_fn(auth::middleware::require_auth));

    Router::new()
        .route("/", get(handlers::home_page))
        .route(
            "/register",
            get(handlers::register_page).post(handlers::register_handler),
        )
        .route(
            "/login",
            get(handlers::login_page).post(handlers::login_handler),
        )
        .route(
            "/donate",
            get(handlers::donate_page).post(handlers::donate_handler),
        )
        .route("/leaderboard", get(handlers::leaderboard_handler))
        .route("/logout", get(handlers::logout_handler))
        .merge(protected_routes)
        .nest_service("/static", ServeDir::new("static"))
        .layer(session_layer)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Wire repositories and services onto a pool. Shared between `main` and the
/// integration tests.
pub fn build_state(pool: sqlx::SqlitePool) -> AppState {
    let user_repository = Arc::new(repositories::SqliteUserRepository::new(pool.clone()));
    let donation_repository = Arc::new(repositories::SqliteDonationRepository::new(pool.clone()));

    AppState {
        user_service: Arc::new(services::UserService::new(user_repository.clone())),
        auth_service: Arc::new(services::AuthService::new(user_repository)),
        donation_service: Arc::new(services::DonationService::new(donation_repository)),
        pool,
    }
}
