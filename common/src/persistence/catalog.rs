//! Invocation of the store's callable operations. All filtering, sorting,
//! pagination and existence checks happen inside the `functional` schema;
//! this module only binds parameters and decodes result rows.

use crate::persistence::PgPool;
use crate::persistence::error::StoreError;
use crate::persistence::models::{
    ContactFormParams, ContactFormRow, TotalRow, VehicleDetailRow, VehicleImageRow,
    VehicleListParams, VehicleListRow,
};

const VEHICLE_LIST: &str =
    "SELECT * FROM functional.vehicle_list($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)";
const VEHICLE_LIST_TOTAL: &str =
    "SELECT * FROM functional.vehicle_list_total($1, $2, $3, $4, $5, $6, $7, $8, $9)";
const VEHICLE_GET: &str = "SELECT * FROM functional.vehicle_get($1)";
const VEHICLE_IMAGES: &str = "SELECT * FROM functional.vehicle_images($1)";
const CONTACT_FORM_CREATE: &str =
    "SELECT * FROM functional.contact_form_create($1, $2, $3, $4, $5)";

/// Returns the page rows and the total count of matching vehicles. The two
/// result sets are fetched on the same pooled connection; an empty count
/// result is treated as zero.
pub async fn vehicle_list(
    pool: &PgPool,
    params: &VehicleListParams,
) -> Result<(Vec<VehicleListRow>, i64), StoreError> {
    let mut conn = pool.acquire().await.map_err(StoreError::from_sqlx)?;

    let rows = sqlx::query_as::<_, VehicleListRow>(VEHICLE_LIST)
        .bind(params.id_brand)
        .bind(params.id_fuel_type)
        .bind(params.id_transmission)
        .bind(params.id_color)
        .bind(params.year_min)
        .bind(params.year_max)
        .bind(params.price_min)
        .bind(params.price_max)
        .bind(params.featured_or_default())
        .bind(params.sort_by_or_default().as_param())
        .bind(params.sort_order_or_default().as_param())
        .bind(params.page_or_default())
        .bind(params.page_size_or_default())
        .fetch_all(&mut *conn)
        .await
        .map_err(StoreError::from_sqlx)?;

    let total = sqlx::query_as::<_, TotalRow>(VEHICLE_LIST_TOTAL)
        .bind(params.id_brand)
        .bind(params.id_fuel_type)
        .bind(params.id_transmission)
        .bind(params.id_color)
        .bind(params.year_min)
        .bind(params.year_max)
        .bind(params.price_min)
        .bind(params.price_max)
        .bind(params.featured_or_default())
        .fetch_optional(&mut *conn)
        .await
        .map_err(StoreError::from_sqlx)?
        .map(|row| row.total)
        .unwrap_or(0);

    Ok((rows, total))
}

/// Fetches the detail projection and the image rows. An empty vehicle
/// result set is a not-found condition, never an empty success.
pub async fn vehicle_get(
    pool: &PgPool,
    id_vehicle: i32,
) -> Result<(VehicleDetailRow, Vec<VehicleImageRow>), StoreError> {
    let mut conn = pool.acquire().await.map_err(StoreError::from_sqlx)?;

    let vehicle = sqlx::query_as::<_, VehicleDetailRow>(VEHICLE_GET)
        .bind(id_vehicle)
        .fetch_optional(&mut *conn)
        .await
        .map_err(StoreError::from_sqlx)?
        .ok_or(StoreError::VehicleNotFound)?;

    let images = sqlx::query_as::<_, VehicleImageRow>(VEHICLE_IMAGES)
        .bind(id_vehicle)
        .fetch_all(&mut *conn)
        .await
        .map_err(StoreError::from_sqlx)?;

    Ok((vehicle, images))
}

/// Durable write. The store verifies the vehicle exists and is available
/// and raises the reserved error when it does not.
pub async fn contact_form_create(
    pool: &PgPool,
    params: &ContactFormParams,
) -> Result<i32, StoreError> {
    let row = sqlx::query_as::<_, ContactFormRow>(CONTACT_FORM_CREATE)
        .bind(params.id_vehicle)
        .bind(&params.name)
        .bind(&params.email)
        .bind(&params.phone)
        .bind(&params.message)
        .fetch_one(pool)
        .await
        .map_err(StoreError::from_sqlx)?;

    Ok(row.id_contact_form)
}
