use crate::domain::ContactFormCreated;
use crate::error::{ApiError, ErrorResponse};
use crate::response::ApiResponse;
use crate::validation;
use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use common::persistence::error::{StoreError, VEHICLE_NOT_FOUND_SIGNAL};
use common::persistence::{PgPool, catalog};

#[utoipa::path(
    post,
    path = "/external/contact-form",
    tag = "contact forms",
    responses(
        (status = 201, description = "Returns the created contact form identifier", body = ContactFormCreated),
        (status = 400, description = "Returns an error on invalid fields or a rejected business rule", body = ErrorResponse),
        (status = 404, description = "Returns an error when the vehicle does not exist or is unavailable", body = ErrorResponse)
    )
)]
pub async fn create(
    State(pool): State<PgPool>,
    Json(body): Json<serde_json::Value>,
) -> Result<(StatusCode, Json<ApiResponse<ContactFormCreated>>), ApiError> {
    let params = validation::contact_form_params(&body)?;

    let id_contact_form = catalog::contact_form_create(&pool, &params)
        .await
        .map_err(|e| match e {
            StoreError::VehicleNotFound => ApiError::NotFound(VEHICLE_NOT_FOUND_SIGNAL.to_owned()),
            StoreError::BusinessRule(message) => ApiError::BusinessRule(message),
            e => ApiError::Store(e),
        })?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::new(ContactFormCreated { id_contact_form })),
    ))
}
