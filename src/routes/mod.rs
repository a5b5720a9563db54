use std::sync::Arc;

use axum::{Router, http::StatusCode, response::IntoResponse, routing::get};
use playschool_enquiry::{NotificationSender, Recipient};

use crate::template::{NotFoundTemplate, render};

mod admission;
mod health;

#[derive(Clone)]
pub struct AppState {
    pub recipient: Recipient,
    pub sender: Arc<dyn NotificationSender>,
}

pub async fn fallback() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, render(NotFoundTemplate))
}

pub fn router(app_state: AppState) -> Router {
    Router::new()
        // Health check endpoint
        .route("/health", get(health::health))
        .route("/", get(admission::page))
        .route("/admission", get(admission::page).post(admission::action))
        .fallback(fallback)
        .with_state(app_state)
}
