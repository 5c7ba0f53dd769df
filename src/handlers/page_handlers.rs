use askama::Template;
use askama_web::WebTemplate;
use axum::response::IntoResponse;

#[derive(Template, WebTemplate)]
#[template(path = "index.html")]
struct IndexTemplate;

#[derive(Template, WebTemplate)]
#[template(path = "register.html")]
struct RegisterTemplate;

#[derive(Template, WebTemplate)]
#[template(path = "login.html")]
struct LoginTemplate;

#[derive(Template, WebTemplate)]
#[template(path = "donate.html")]
struct DonateTemplate;

/// GET / - Landing page
pub async fn home_page() -> impl IntoResponse {
    IndexTemplate
}

/// GET /register - Registration form
pub async fn register_page() -> impl IntoResponse {
    RegisterTemplate
}

/// GET /login - Login form
pub async fn login_page() -> impl IntoResponse {
    LoginTemplate
}

/// GET /donate - Donation form
pub async fn donate_page() -> impl IntoResponse {
    DonateTemplate
}
