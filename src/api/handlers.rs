//! API handlers

use axum::{
    extract::{RawQuery, State},
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
    Form, Json,
};
use maud::Markup;
use serde::{Deserialize, Serialize};

use crate::activation::{self, ActivationOutcome, ActivationToken};
use crate::api::AppState;
use crate::pages;

/// Health check
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        backend: state.backend_url.clone(),
    })
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub backend: String,
}

/// `GET /`
pub async fn home() -> Markup {
    pages::home_page()
}

/// `GET /activate?token=...`
pub async fn activation_page(RawQuery(query): RawQuery) -> Markup {
    let token = ActivationToken::from_query(query.as_deref());
    pages::activation_page(&token, None)
}

/// `POST /activate`, submitted by the "Click to confirm" button
pub async fn confirm(State(state): State<AppState>, Form(form): Form<ConfirmForm>) -> Response {
    let token = ActivationToken::new(form.token);

    match activation::confirm(state.activation.as_ref(), &token).await {
        ActivationOutcome::Navigate(path) => Redirect::to(path).into_response(),
        ActivationOutcome::Alert(message) => {
            pages::activation_page(&token, Some(message)).into_response()
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ConfirmForm {
    #[serde(default)]
    pub token: String,
}

pub async fn not_found() -> (StatusCode, Markup) {
    (StatusCode::NOT_FOUND, pages::not_found_page())
}
