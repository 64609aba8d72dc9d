use utoipa::OpenApi;

pub mod domain;
pub mod error;
pub mod response;
pub mod routes;
pub mod validation;

#[derive(OpenApi)]
#[openapi(paths(
    crate::routes::vehicle::list,
    crate::routes::vehicle::get,
    crate::routes::contact_form::create
))]
pub struct Docs;
