//! projdoc-server
//!
//! HTTP shell around the report pipeline: the intake form, a JSON API and
//! the download page.

pub mod config;
pub mod error;
pub mod form;
pub mod middleware;
pub mod pages;
pub mod routes;
pub mod state;

use axum::Router;
use axum::middleware as axum_mw;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};

use state::AppState;

pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(routes::health::health_check))
        .route("/", get(routes::pages::show_form))
        .route("/reports", post(routes::pages::submit_form))
        .route("/api/reports", post(routes::api::create_report))
        .layer(axum_mw::from_fn(middleware::request_log::request_log))
        .layer(cors)
        .with_state(state)
}
