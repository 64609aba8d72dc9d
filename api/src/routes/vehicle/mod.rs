use crate::domain::{VehicleDetailData, VehicleImage, VehicleListData, VehicleListItem};
use crate::error::{ApiError, ErrorResponse};
use crate::response::{ApiResponse, Meta};
use crate::validation;
use axum::Json;
use axum::extract::{Path, Query, State};
use common::persistence::error::{StoreError, VEHICLE_NOT_FOUND_SIGNAL};
use common::persistence::models::{VehicleListParams, VehicleListRow};
use common::persistence::{PgPool, catalog};
use std::collections::HashMap;

#[utoipa::path(
    get,
    path = "/external/vehicle",
    tag = "vehicles",
    params(
        ("idBrand" = Option<i32>, Query, description = "Brand identifier filter"),
        ("idFuelType" = Option<i32>, Query, description = "Fuel type identifier filter"),
        ("idTransmission" = Option<i32>, Query, description = "Transmission identifier filter"),
        ("idColor" = Option<i32>, Query, description = "Color identifier filter"),
        ("yearMin" = Option<i32>, Query, description = "Minimum year filter"),
        ("yearMax" = Option<i32>, Query, description = "Maximum year filter"),
        ("priceMin" = Option<f64>, Query, description = "Minimum price filter"),
        ("priceMax" = Option<f64>, Query, description = "Maximum price filter"),
        ("featuredOnly" = Option<String>, Query, description = "Featured vehicles only; `true` or `1`"),
        ("sortBy" = Option<String>, Query, description = "Sort field: price, year, model, dateCreated, mileage"),
        ("sortOrder" = Option<String>, Query, description = "Sort direction: ASC, DESC"),
        ("page" = Option<i32>, Query, description = "Page number, default 1"),
        ("pageSize" = Option<i32>, Query, description = "Items per page, default 20, max 100"),
    ),
    responses(
        (status = 200, description = "Returns the filtered, paginated vehicle list", body = VehicleListData),
        (status = 400, description = "Returns an error on invalid filters or a rejected business rule", body = ErrorResponse)
    )
)]
pub async fn list(
    State(pool): State<PgPool>,
    Query(query): Query<HashMap<String, String>>,
) -> Result<Json<ApiResponse<VehicleListData>>, ApiError> {
    let params = validation::vehicle_list_params(&query)?;

    let (rows, total) = catalog::vehicle_list(&pool, &params)
        .await
        .map_err(|e| match e {
            StoreError::VehicleNotFound => {
                ApiError::BusinessRule(VEHICLE_NOT_FOUND_SIGNAL.to_owned())
            }
            StoreError::BusinessRule(message) => ApiError::BusinessRule(message),
            e => ApiError::Store(e),
        })?;

    let data = list_data(rows, total, &params);
    let meta = Meta {
        page: data.page,
        page_size: data.page_size,
        total: data.total,
    };
    Ok(Json(ApiResponse::with_meta(data, meta)))
}

#[utoipa::path(
    get,
    path = "/external/vehicle/{id}",
    tag = "vehicles",
    params(
        ("id" = i32, Path, description = "Vehicle identifier")
    ),
    responses(
        (status = 200, description = "Returns the vehicle detail with its images", body = VehicleDetailData),
        (status = 400, description = "Returns an error when the identifier is not a positive integer", body = ErrorResponse),
        (status = 404, description = "Returns an error when the vehicle does not exist or is unavailable", body = ErrorResponse)
    )
)]
pub async fn get(
    State(pool): State<PgPool>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<VehicleDetailData>>, ApiError> {
    let id_vehicle = validation::vehicle_id(&id)
        .map_err(|errors| ApiError::validation("Invalid vehicle ID", errors))?;

    let (vehicle, images) = catalog::vehicle_get(&pool, id_vehicle)
        .await
        .map_err(|e| match e {
            StoreError::VehicleNotFound => ApiError::NotFound(VEHICLE_NOT_FOUND_SIGNAL.to_owned()),
            // the store only signals not-found on this operation
            StoreError::BusinessRule(message) => ApiError::NotFound(message),
            e => ApiError::Store(e),
        })?;

    Ok(Json(ApiResponse::new(VehicleDetailData {
        vehicle: vehicle.into(),
        images: images.into_iter().map(VehicleImage::from).collect(),
    })))
}

fn list_data(rows: Vec<VehicleListRow>, total: i64, params: &VehicleListParams) -> VehicleListData {
    let page = params.page_or_default();
    let page_size = params.page_size_or_default();
    VehicleListData {
        vehicles: rows.into_iter().map(VehicleListItem::from).collect(),
        total,
        page,
        page_size,
        total_pages: total_pages(total, page_size),
    }
}

fn total_pages(total: i64, page_size: i32) -> i64 {
    (total + i64::from(page_size) - 1) / i64::from(page_size)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(id_vehicle: i32) -> VehicleListRow {
        VehicleListRow {
            id_vehicle,
            model: "Corolla".into(),
            year: 2021,
            price: 24000.0,
            mileage: 30000,
            description: "well kept".into(),
            engine_size: Some(1.8),
            doors: Some(4),
            featured: false,
            id_brand: 1,
            brand_name: "Toyota".into(),
            id_fuel_type: 1,
            fuel_type_name: "Gasoline".into(),
            id_transmission: 1,
            transmission_name: "Automatic".into(),
            id_color: 1,
            color_name: "Black".into(),
            color_hex: Some("#000000".into()),
            primary_image_url: None,
        }
    }

    #[test]
    fn total_pages_is_the_ceiling_of_total_over_page_size() {
        assert_eq!(total_pages(0, 20), 0);
        assert_eq!(total_pages(1, 20), 1);
        assert_eq!(total_pages(20, 20), 1);
        assert_eq!(total_pages(21, 20), 2);
        assert_eq!(total_pages(41, 20), 3);
        assert_eq!(total_pages(5, 20), 1);
    }

    #[test]
    fn list_data_echoes_resolved_paging_defaults() {
        let data = list_data(vec![row(1), row(2)], 5, &VehicleListParams::default());
        assert_eq!(data.page, 1);
        assert_eq!(data.page_size, 20);
        assert_eq!(data.total, 5);
        assert_eq!(data.total_pages, 1);
        assert_eq!(data.vehicles.len(), 2);
    }

    #[test]
    fn list_data_uses_requested_paging() {
        let params = VehicleListParams {
            page: Some(3),
            page_size: Some(10),
            ..Default::default()
        };
        let data = list_data(vec![], 35, &params);
        assert_eq!(data.page, 3);
        assert_eq!(data.page_size, 10);
        assert_eq!(data.total_pages, 4);
    }
}
