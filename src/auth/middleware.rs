use axum::{
    extract::Request,
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use tower_sessions::Session;

pub async fn require_auth(session: Session, request: Request, next: Next) -> Response {
    // Check if user is logged in
    if let Ok(Some(_user_id)) = session.get::<i64>("user_id").await {
        next.run(request).await
    } else {
        Redirect::to("/login").into_response()
    }
}
