use common::persistence::models::{VehicleDetailRow, VehicleImageRow, VehicleListRow};
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct VehicleListData {
    pub vehicles: Vec<VehicleListItem>,
    pub total: i64,
    pub page: i32,
    pub page_size: i32,
    pub total_pages: i64,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct VehicleListItem {
    pub id_vehicle: i32,
    pub model: String,
    pub year: i32,
    pub price: f64,
    pub mileage: i32,
    pub description: String,
    pub engine_size: Option<f64>,
    pub doors: Option<i32>,
    pub featured: bool,
    pub id_brand: i32,
    pub brand_name: String,
    pub id_fuel_type: i32,
    pub fuel_type_name: String,
    pub id_transmission: i32,
    pub transmission_name: String,
    pub id_color: i32,
    pub color_name: String,
    pub color_hex: Option<String>,
    pub primary_image_url: Option<String>,
}

impl From<VehicleListRow> for VehicleListItem {
    fn from(value: VehicleListRow) -> Self {
        Self {
            id_vehicle: value.id_vehicle,
            model: value.model,
            year: value.year,
            price: value.price,
            mileage: value.mileage,
            description: value.description,
            engine_size: value.engine_size,
            doors: value.doors,
            featured: value.featured,
            id_brand: value.id_brand,
            brand_name: value.brand_name,
            id_fuel_type: value.id_fuel_type,
            fuel_type_name: value.fuel_type_name,
            id_transmission: value.id_transmission,
            transmission_name: value.transmission_name,
            id_color: value.id_color,
            color_name: value.color_name,
            color_hex: value.color_hex,
            primary_image_url: value.primary_image_url,
        }
    }
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct VehicleDetailData {
    pub vehicle: VehicleDetail,
    pub images: Vec<VehicleImage>,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct VehicleDetail {
    pub id_vehicle: i32,
    pub model: String,
    pub year: i32,
    pub price: f64,
    pub mileage: i32,
    pub description: String,
    pub engine_size: Option<f64>,
    pub doors: Option<i32>,
    pub featured: bool,
    pub id_brand: i32,
    pub brand_name: String,
    pub brand_code: String,
    pub id_fuel_type: i32,
    pub fuel_type_name: String,
    pub fuel_type_code: String,
    pub id_transmission: i32,
    pub transmission_name: String,
    pub transmission_code: String,
    pub id_color: i32,
    pub color_name: String,
    pub color_code: String,
    pub color_hex: Option<String>,
    #[schema(value_type = String, example = "2025-10-13T15:30:00")]
    pub date_created: chrono::NaiveDateTime,
    #[schema(value_type = String, example = "2025-10-13T15:30:00")]
    pub date_modified: chrono::NaiveDateTime,
}

impl From<VehicleDetailRow> for VehicleDetail {
    fn from(value: VehicleDetailRow) -> Self {
        Self {
            id_vehicle: value.id_vehicle,
            model: value.model,
            year: value.year,
            price: value.price,
            mileage: value.mileage,
            description: value.description,
            engine_size: value.engine_size,
            doors: value.doors,
            featured: value.featured,
            id_brand: value.id_brand,
            brand_name: value.brand_name,
            brand_code: value.brand_code,
            id_fuel_type: value.id_fuel_type,
            fuel_type_name: value.fuel_type_name,
            fuel_type_code: value.fuel_type_code,
            id_transmission: value.id_transmission,
            transmission_name: value.transmission_name,
            transmission_code: value.transmission_code,
            id_color: value.id_color,
            color_name: value.color_name,
            color_code: value.color_code,
            color_hex: value.color_hex,
            date_created: value.date_created,
            date_modified: value.date_modified,
        }
    }
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct VehicleImage {
    pub id_vehicle_image: i32,
    pub id_vehicle: i32,
    pub image_url: String,
    pub is_primary: bool,
    pub display_order: i32,
    #[schema(value_type = String, example = "2025-10-13T15:30:00")]
    pub date_created: chrono::NaiveDateTime,
}

impl From<VehicleImageRow> for VehicleImage {
    fn from(value: VehicleImageRow) -> Self {
        Self {
            id_vehicle_image: value.id_vehicle_image,
            id_vehicle: value.id_vehicle,
            image_url: value.image_url,
            is_primary: value.is_primary,
            display_order: value.display_order,
            date_created: value.date_created,
        }
    }
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ContactFormCreated {
    pub id_contact_form: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_fields_are_camel_case() {
        let created = serde_json::to_value(ContactFormCreated { id_contact_form: 7 }).unwrap();
        assert_eq!(created["idContactForm"], 7);

        let data = serde_json::to_value(VehicleListData {
            vehicles: vec![],
            total: 0,
            page: 1,
            page_size: 20,
            total_pages: 0,
        })
        .unwrap();
        assert_eq!(data["totalPages"], 0);
        assert_eq!(data["pageSize"], 20);
        assert!(data.get("total_pages").is_none());
    }
}
