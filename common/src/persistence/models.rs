use chrono::NaiveDateTime;

/// One row of the list projection returned by `functional.vehicle_list`.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct VehicleListRow {
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

/// Detail projection returned by `functional.vehicle_get`: the list columns
/// plus reference codes and timestamps.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct VehicleDetailRow {
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
    pub date_created: NaiveDateTime,
    pub date_modified: NaiveDateTime,
}

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct VehicleImageRow {
    pub id_vehicle_image: i32,
    pub id_vehicle: i32,
    pub image_url: String,
    pub is_primary: bool,
    pub display_order: i32,
    pub date_created: NaiveDateTime,
}

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct TotalRow {
    pub total: i64,
}

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ContactFormRow {
    pub id_contact_form: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortBy {
    Price,
    Year,
    Model,
    DateCreated,
    Mileage,
}

impl SortBy {
    pub const ACCEPTED: &[&str] = &["price", "year", "model", "dateCreated", "mileage"];

    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "price" => Some(Self::Price),
            "year" => Some(Self::Year),
            "model" => Some(Self::Model),
            "dateCreated" => Some(Self::DateCreated),
            "mileage" => Some(Self::Mileage),
            _ => None,
        }
    }

    /// Token passed to the store operation.
    pub fn as_param(&self) -> &'static str {
        match self {
            Self::Price => "price",
            Self::Year => "year",
            Self::Model => "model",
            Self::DateCreated => "dateCreated",
            Self::Mileage => "mileage",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    pub const ACCEPTED: &[&str] = &["ASC", "DESC"];

    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "ASC" => Some(Self::Asc),
            "DESC" => Some(Self::Desc),
            _ => None,
        }
    }

    pub fn as_param(&self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}

/// Validated list filters. Unset fields are passed to the store as NULL;
/// the accessors resolve the documented defaults.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct VehicleListParams {
    pub id_brand: Option<i32>,
    pub id_fuel_type: Option<i32>,
    pub id_transmission: Option<i32>,
    pub id_color: Option<i32>,
    pub year_min: Option<i32>,
    pub year_max: Option<i32>,
    pub price_min: Option<f64>,
    pub price_max: Option<f64>,
    pub featured_only: Option<bool>,
    pub sort_by: Option<SortBy>,
    pub sort_order: Option<SortOrder>,
    pub page: Option<i32>,
    pub page_size: Option<i32>,
}

impl VehicleListParams {
    pub fn featured_or_default(&self) -> bool {
        self.featured_only.unwrap_or(false)
    }

    pub fn sort_by_or_default(&self) -> SortBy {
        self.sort_by.unwrap_or(SortBy::DateCreated)
    }

    pub fn sort_order_or_default(&self) -> SortOrder {
        self.sort_order.unwrap_or(SortOrder::Desc)
    }

    pub fn page_or_default(&self) -> i32 {
        self.page.unwrap_or(1)
    }

    pub fn page_size_or_default(&self) -> i32 {
        self.page_size.unwrap_or(20)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactFormParams {
    pub id_vehicle: i32,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_list_params_resolve_to_documented_defaults() {
        let params = VehicleListParams::default();
        assert!(!params.featured_or_default());
        assert_eq!(params.sort_by_or_default(), SortBy::DateCreated);
        assert_eq!(params.sort_order_or_default(), SortOrder::Desc);
        assert_eq!(params.page_or_default(), 1);
        assert_eq!(params.page_size_or_default(), 20);
    }

    #[test]
    fn set_list_params_win_over_defaults() {
        let params = VehicleListParams {
            featured_only: Some(true),
            sort_by: Some(SortBy::Price),
            sort_order: Some(SortOrder::Asc),
            page: Some(3),
            page_size: Some(50),
            ..Default::default()
        };
        assert!(params.featured_or_default());
        assert_eq!(params.sort_by_or_default(), SortBy::Price);
        assert_eq!(params.sort_order_or_default(), SortOrder::Asc);
        assert_eq!(params.page_or_default(), 3);
        assert_eq!(params.page_size_or_default(), 50);
    }

    #[test]
    fn sort_tokens_round_trip() {
        for token in SortBy::ACCEPTED {
            assert_eq!(SortBy::parse(token).unwrap().as_param(), *token);
        }
        for token in SortOrder::ACCEPTED {
            assert_eq!(SortOrder::parse(token).unwrap().as_param(), *token);
        }
        assert_eq!(SortBy::parse("color"), None);
        assert_eq!(SortOrder::parse("desc"), None);
    }
}
