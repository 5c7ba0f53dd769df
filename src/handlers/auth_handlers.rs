use crate::config::session::SESSION_LIFETIME;
use crate::error::{AppError, Result};
use crate::services::auth_service::LoginRequest;
use crate::services::user_service::RegisterRequest;
use crate::AppState;
use axum::{
    extract::State,
    response::{IntoResponse, Redirect, Response},
    Form,
};
use serde::Deserialize;
use time::OffsetDateTime;
use tower_sessions::{Expiry, Session};

#[derive(Deserialize)]
pub struct RegisterForm {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

#[derive(Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

/// POST /register - Create an account and send the user to the login page
pub async fn register_handler(
    State(state): State<AppState>,
    Form(form): Form<RegisterForm>,
) -> Result<Response> {
    let user = state
        .user_service
        .register(RegisterRequest {
            name: form.name,
            phone: form.phone,
            email: form.email,
            password: form.password,
            password_confirm: form.confirm_password,
        })
        .await?;

    tracing::info!(user_id = user.id, referral_code = %user.referral_code, "user registered");

    Ok(Redirect::to("/login").into_response())
}

/// POST /login - Authenticate and store the user in the session
pub async fn login_handler(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<LoginForm>,
) -> Result<Response> {
    let user = state
        .auth_service
        .authenticate(LoginRequest {
            email: form.email,
            password: form.password,
        })
        .await?;

    session
        .insert("user_id", user.id)
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?;
    session
        .insert("name", user.name)
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?;
    session
        .insert("email", user.email)
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?;
    session
        .insert("referral_code", user.referral_code)
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?;

    // Fixed lifetime: the session ends six hours after login regardless of
    // activity, so the deadline is absolute rather than idle-based.
    session.set_expiry(Some(Expiry::AtDateTime(
        OffsetDateTime::now_utc() + SESSION_LIFETIME,
    )));

    Ok(Redirect::to("/profile").into_response())
}

/// GET /logout - Destroy the session
pub async fn logout_handler(session: Session) -> Result<Response> {
    session
        .flush()
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?;

    Ok(Redirect::to("/login").into_response())
}
