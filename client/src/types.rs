//! Wire shapes of the catalog endpoints as seen from the browser side.

use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Clone, PartialEq)]
pub struct VehicleListQuery {
    pub id_brand: Option<i32>,
    pub id_fuel_type: Option<i32>,
    pub id_transmission: Option<i32>,
    pub id_color: Option<i32>,
    pub year_min: Option<i32>,
    pub year_max: Option<i32>,
    pub price_min: Option<f64>,
    pub price_max: Option<f64>,
    pub featured_only: Option<bool>,
    pub sort_by: Option<String>,
    pub sort_order: Option<String>,
    pub page: Option<i32>,
    pub page_size: Option<i32>,
}

impl VehicleListQuery {
    /// Query pairs with unset filters omitted.
    pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(v) = self.id_brand {
            pairs.push(("idBrand", v.to_string()));
        }
        if let Some(v) = self.id_fuel_type {
            pairs.push(("idFuelType", v.to_string()));
        }
        if let Some(v) = self.id_transmission {
            pairs.push(("idTransmission", v.to_string()));
        }
        if let Some(v) = self.id_color {
            pairs.push(("idColor", v.to_string()));
        }
        if let Some(v) = self.year_min {
            pairs.push(("yearMin", v.to_string()));
        }
        if let Some(v) = self.year_max {
            pairs.push(("yearMax", v.to_string()));
        }
        if let Some(v) = self.price_min {
            pairs.push(("priceMin", v.to_string()));
        }
        if let Some(v) = self.price_max {
            pairs.push(("priceMax", v.to_string()));
        }
        if let Some(v) = self.featured_only {
            pairs.push(("featuredOnly", v.to_string()));
        }
        if let Some(v) = &self.sort_by {
            pairs.push(("sortBy", v.clone()));
        }
        if let Some(v) = &self.sort_order {
            pairs.push(("sortOrder", v.clone()));
        }
        if let Some(v) = self.page {
            pairs.push(("page", v.to_string()));
        }
        if let Some(v) = self.page_size {
            pairs.push(("pageSize", v.to_string()));
        }
        pairs
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleList {
    pub vehicles: Vec<VehicleSummary>,
    pub total: i64,
    pub page: i32,
    pub page_size: i32,
    pub total_pages: i64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleSummary {
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

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleDetailData {
    pub vehicle: VehicleDetail,
    pub images: Vec<VehicleImage>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
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
    pub date_created: String,
    pub date_modified: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleImage {
    pub id_vehicle_image: i32,
    pub id_vehicle: i32,
    pub image_url: String,
    pub is_primary: bool,
    pub display_order: i32,
    pub date_created: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactFormPayload {
    pub id_vehicle: i32,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactFormCreated {
    pub id_contact_form: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_filters_produce_no_pairs() {
        assert!(VehicleListQuery::default().to_pairs().is_empty());
    }

    #[test]
    fn set_filters_serialize_with_wire_names() {
        let query = VehicleListQuery {
            id_brand: Some(1),
            year_min: Some(2020),
            price_max: Some(50000.0),
            featured_only: Some(true),
            sort_by: Some("price".into()),
            page: Some(2),
            page_size: Some(20),
            ..Default::default()
        };
        let pairs = query.to_pairs();
        assert!(pairs.contains(&("idBrand", "1".into())));
        assert!(pairs.contains(&("yearMin", "2020".into())));
        assert!(pairs.contains(&("priceMax", "50000".into())));
        assert!(pairs.contains(&("featuredOnly", "true".into())));
        assert!(pairs.contains(&("sortBy", "price".into())));
        assert!(pairs.contains(&("pageSize", "20".into())));
    }

    #[test]
    fn contact_payload_serializes_camel_case() {
        let body = serde_json::to_value(ContactFormPayload {
            id_vehicle: 123,
            name: "João Silva".into(),
            email: "joao@example.com".into(),
            phone: "(11) 98765-4321".into(),
            message: "Gostaria de mais informações.".into(),
        })
        .unwrap();
        assert_eq!(body["idVehicle"], 123);
        assert!(body.get("id_vehicle").is_none());
    }

    #[test]
    fn list_payload_deserializes() {
        let data: VehicleList = serde_json::from_str(
            r#"{
                "vehicles": [],
                "total": 5,
                "page": 1,
                "pageSize": 20,
                "totalPages": 1
            }"#,
        )
        .unwrap();
        assert_eq!(data.total, 5);
        assert_eq!(data.total_pages, 1);
    }
}
