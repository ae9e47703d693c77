use std::sync::Arc;

use axum::{
    Router,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use campos_contact::Transport;

use crate::template::{NotFoundTemplate, Template};

mod about;
mod contact;
mod cost_guides;
mod health;
mod index;
mod properties;
mod remodeling;
mod theme;

#[derive(Clone)]
pub struct AppState {
    pub config: crate::config::Config,
    pub transport: Arc<dyn Transport>,
}

pub async fn fallback(template: Template) -> impl IntoResponse {
    template.render_with_status(
        StatusCode::NOT_FOUND,
        NotFoundTemplate {
            layout: template.layout(),
        },
    )
}

pub fn router(app_state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health))
        .route("/", get(index::page))
        .route("/about", get(about::page))
        .route("/properties", get(properties::page))
        .route("/properties/{slug}", get(properties::detail))
        .route("/remodeling", get(remodeling::page))
        .route("/cost-guides", get(cost_guides::page))
        .route("/contact", get(contact::page).post(contact::action))
        .route("/theme", post(theme::toggle))
        .fallback(fallback)
        .nest_service("/static", crate::assets::AssetsService::new())
        .with_state(app_state)
}
