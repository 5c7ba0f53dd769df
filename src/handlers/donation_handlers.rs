use crate::error::Result;
use crate::models::donation::LeaderboardEntry;
use crate::services::donation_service::DonateRequest;
use crate::AppState;
use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::State,
    response::{IntoResponse, Redirect, Response},
    Form,
};
use serde::Deserialize;
use tower_sessions::Session;

#[derive(Template, WebTemplate)]
#[template(path = "profile.html")]
struct ProfileTemplate {
    name: String,
    referral_code: String,
    total_raised: f64,
}

#[derive(Template, WebTemplate)]
#[template(path = "leaderboard.html")]
struct LeaderboardTemplate {
    viewer_name: String,
    entries: Vec<LeaderboardEntry>,
}

#[derive(Deserialize)]
pub struct DonateForm {
    pub name: String,
    pub email: String,
    pub amount: f64,
    pub referral_code: String,
}

/// POST /donate - Record a donation attributed to a referral code
pub async fn donate_handler(
    State(state): State<AppState>,
    Form(form): Form<DonateForm>,
) -> Result<Response> {
    let donation = state
        .donation_service
        .record_donation(DonateRequest {
            name: form.name,
            email: form.email,
            amount: form.amount,
            referral_code: form.referral_code,
        })
        .await?;

    tracing::info!(
        donation_id = donation.id,
        referral_code = %donation.referral_code,
        "donation recorded"
    );

    Ok(Redirect::to("/donate").into_response())
}

/// GET /profile - Show the logged-in user's donation total
///
/// Routed behind `require_auth`; the session fallbacks only cover a session
/// that was emptied between the middleware check and here.
pub async fn profile_handler(
    State(state): State<AppState>,
    session: Session,
) -> Result<Response> {
    let name = session
        .get::<String>("name")
        .await
        .ok()
        .flatten()
        .unwrap_or_default();
    let referral_code = match session.get::<String>("referral_code").await.ok().flatten() {
        Some(code) => code,
        None => return Ok(Redirect::to("/login").into_response()),
    };

    let total_raised = state.donation_service.total_raised_by(&referral_code).await?;

    let template = ProfileTemplate {
        name,
        referral_code,
        total_raised,
    };

    Ok(template.into_response())
}

/// GET /leaderboard - Donation totals per user, highest first; open to anyone
pub async fn leaderboard_handler(
    State(state): State<AppState>,
    session: Session,
) -> Result<Response> {
    let viewer_name = session
        .get::<String>("name")
        .await
        .ok()
        .flatten()
        .unwrap_or_else(|| "Guest".to_string());

    let entries = state.donation_service.leaderboard().await?;

    let template = LeaderboardTemplate {
        viewer_name,
        entries,
    };

    Ok(template.into_response())
}
