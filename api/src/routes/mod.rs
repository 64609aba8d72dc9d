use axum::Router;
use axum::routing::{get, post};
use common::persistence::PgPool;

pub mod contact_form;
pub mod vehicle;

pub fn external_router() -> Router<PgPool> {
    Router::new()
        .route("/vehicle", get(vehicle::list))
        .route("/vehicle/{id}", get(vehicle::get))
        .route("/contact-form", post(contact_form::create))
}
