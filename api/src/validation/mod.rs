//! Per-endpoint input validation. Every violating field is reported, not
//! just the first one; nothing reaches the store until the whole request
//! parses clean.

use common::persistence::models::{ContactFormParams, SortBy, SortOrder, VehicleListParams};
use serde::Serialize;
use serde_json::Value;
use std::collections::HashMap;

pub const YEAR_MIN: i32 = 1900;
pub const YEAR_MAX: i32 = 2100;
pub const PAGE_SIZE_MAX: i32 = 100;
pub const NAME_MAX: usize = 200;
pub const EMAIL_MAX: usize = 200;
pub const PHONE_MAX: usize = 50;
pub const MESSAGE_MAX: usize = 1000;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ValidationErrors(Vec<FieldError>);

impl ValidationErrors {
    pub(crate) fn push(&mut self, field: &str, message: impl Into<String>) {
        self.0.push(FieldError {
            field: field.to_string(),
            message: message.into(),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn fields(&self) -> Vec<&str> {
        self.0.iter().map(|e| e.field.as_str()).collect()
    }

    pub fn into_details(self) -> Value {
        serde_json::to_value(self.0).unwrap_or(Value::Null)
    }
}

/// List filters arrive as a raw query-string map; unknown keys are ignored.
pub fn vehicle_list_params(
    query: &HashMap<String, String>,
) -> Result<VehicleListParams, ValidationErrors> {
    let mut errors = ValidationErrors::default();

    let params = VehicleListParams {
        id_brand: positive_int(query, "idBrand", &mut errors),
        id_fuel_type: positive_int(query, "idFuelType", &mut errors),
        id_transmission: positive_int(query, "idTransmission", &mut errors),
        id_color: positive_int(query, "idColor", &mut errors),
        year_min: int_in_range(query, "yearMin", YEAR_MIN, YEAR_MAX, &mut errors),
        year_max: int_in_range(query, "yearMax", YEAR_MIN, YEAR_MAX, &mut errors),
        price_min: non_negative_number(query, "priceMin", &mut errors),
        price_max: non_negative_number(query, "priceMax", &mut errors),
        featured_only: query.get("featuredOnly").map(|raw| truthy(raw)),
        sort_by: sort_by(query, &mut errors),
        sort_order: sort_order(query, &mut errors),
        page: int_at_least(query, "page", 1, &mut errors),
        page_size: int_in_range(query, "pageSize", 1, PAGE_SIZE_MAX, &mut errors),
    };

    if errors.is_empty() { Ok(params) } else { Err(errors) }
}

/// Detail lookup path segment.
pub fn vehicle_id(raw: &str) -> Result<i32, ValidationErrors> {
    match raw.parse::<i32>() {
        Ok(id) if id > 0 => Ok(id),
        _ => {
            let mut errors = ValidationErrors::default();
            errors.push("id", "must be a positive integer");
            Err(errors)
        }
    }
}

/// Contact submission body.
pub fn contact_form_params(body: &Value) -> Result<ContactFormParams, ValidationErrors> {
    let mut errors = ValidationErrors::default();

    let id_vehicle = match body.get("idVehicle") {
        None | Some(Value::Null) => {
            errors.push("idVehicle", "is required");
            None
        }
        Some(value) => match value.as_i64() {
            Some(id) if id > 0 && id <= i64::from(i32::MAX) => Some(id as i32),
            _ => {
                errors.push("idVehicle", "must be a positive integer");
                None
            }
        },
    };

    let name = required_string(body, "name", NAME_MAX, &mut errors);
    let email = match required_string(body, "email", EMAIL_MAX, &mut errors) {
        Some(email) if !is_email(&email) => {
            errors.push("email", "must be a valid email address");
            None
        }
        other => other,
    };
    let phone = required_string(body, "phone", PHONE_MAX, &mut errors);
    let message = required_string(body, "message", MESSAGE_MAX, &mut errors);

    match (id_vehicle, name, email, phone, message) {
        (Some(id_vehicle), Some(name), Some(email), Some(phone), Some(message))
            if errors.is_empty() =>
        {
            Ok(ContactFormParams {
                id_vehicle,
                name,
                email,
                phone,
                message,
            })
        }
        _ => Err(errors),
    }
}

/// `"true"` and `"1"` are true; any other value is false, never an error.
fn truthy(raw: &str) -> bool {
    matches!(raw, "true" | "1")
}

fn positive_int(
    query: &HashMap<String, String>,
    field: &str,
    errors: &mut ValidationErrors,
) -> Option<i32> {
    let raw = query.get(field)?;
    match raw.parse::<i32>() {
        Ok(value) if value > 0 => Some(value),
        _ => {
            errors.push(field, "must be a positive integer");
            None
        }
    }
}

fn int_at_least(
    query: &HashMap<String, String>,
    field: &str,
    min: i32,
    errors: &mut ValidationErrors,
) -> Option<i32> {
    let raw = query.get(field)?;
    match raw.parse::<i32>() {
        Ok(value) if value >= min => Some(value),
        _ => {
            errors.push(field, format!("must be an integer of at least {min}"));
            None
        }
    }
}

fn int_in_range(
    query: &HashMap<String, String>,
    field: &str,
    min: i32,
    max: i32,
    errors: &mut ValidationErrors,
) -> Option<i32> {
    let raw = query.get(field)?;
    match raw.parse::<i32>() {
        Ok(value) if (min..=max).contains(&value) => Some(value),
        _ => {
            errors.push(field, format!("must be an integer between {min} and {max}"));
            None
        }
    }
}

fn non_negative_number(
    query: &HashMap<String, String>,
    field: &str,
    errors: &mut ValidationErrors,
) -> Option<f64> {
    let raw = query.get(field)?;
    match raw.parse::<f64>() {
        Ok(value) if value.is_finite() && value >= 0.0 => Some(value),
        _ => {
            errors.push(field, "must be a non-negative number");
            None
        }
    }
}

fn sort_by(query: &HashMap<String, String>, errors: &mut ValidationErrors) -> Option<SortBy> {
    let raw = query.get("sortBy")?;
    match SortBy::parse(raw) {
        Some(sort) => Some(sort),
        None => {
            errors.push(
                "sortBy",
                format!("must be one of: {}", SortBy::ACCEPTED.join(", ")),
            );
            None
        }
    }
}

fn sort_order(query: &HashMap<String, String>, errors: &mut ValidationErrors) -> Option<SortOrder> {
    let raw = query.get("sortOrder")?;
    match SortOrder::parse(raw) {
        Some(order) => Some(order),
        None => {
            errors.push(
                "sortOrder",
                format!("must be one of: {}", SortOrder::ACCEPTED.join(", ")),
            );
            None
        }
    }
}

fn required_string(
    body: &Value,
    field: &str,
    max_chars: usize,
    errors: &mut ValidationErrors,
) -> Option<String> {
    match body.get(field) {
        None | Some(Value::Null) => {
            errors.push(field, "is required");
            None
        }
        Some(Value::String(value)) if value.is_empty() => {
            errors.push(field, "must not be empty");
            None
        }
        Some(Value::String(value)) if value.chars().count() > max_chars => {
            errors.push(field, format!("must be at most {max_chars} characters"));
            None
        }
        Some(Value::String(value)) => Some(value.clone()),
        Some(_) => {
            errors.push(field, "must be a string");
            None
        }
    }
}

fn is_email(value: &str) -> bool {
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !local.contains(char::is_whitespace)
        && !domain.contains(char::is_whitespace)
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn contact_body() -> Value {
        serde_json::json!({
            "idVehicle": 123,
            "name": "João Silva",
            "email": "joao@example.com",
            "phone": "(11) 98765-4321",
            "message": "Gostaria de mais informações sobre este veículo."
        })
    }

    #[test]
    fn empty_query_is_valid_and_fully_unset() {
        let params = vehicle_list_params(&query(&[])).unwrap();
        assert_eq!(params, VehicleListParams::default());
    }

    #[test]
    fn full_query_parses() {
        let params = vehicle_list_params(&query(&[
            ("idBrand", "1"),
            ("yearMin", "2020"),
            ("priceMax", "50000"),
            ("featuredOnly", "true"),
            ("sortBy", "price"),
            ("sortOrder", "ASC"),
            ("page", "1"),
            ("pageSize", "20"),
        ]))
        .unwrap();
        assert_eq!(params.id_brand, Some(1));
        assert_eq!(params.year_min, Some(2020));
        assert_eq!(params.price_max, Some(50000.0));
        assert_eq!(params.featured_only, Some(true));
        assert_eq!(params.sort_by, Some(SortBy::Price));
        assert_eq!(params.sort_order, Some(SortOrder::Asc));
    }

    #[test]
    fn featured_only_accepts_the_two_truthy_literals() {
        for raw in ["true", "1"] {
            let params = vehicle_list_params(&query(&[("featuredOnly", raw)])).unwrap();
            assert_eq!(params.featured_only, Some(true), "raw = {raw}");
        }
    }

    #[test]
    fn featured_only_treats_anything_else_as_falsy_not_an_error() {
        for raw in ["false", "0", "yes", "TRUE", ""] {
            let params = vehicle_list_params(&query(&[("featuredOnly", raw)])).unwrap();
            assert_eq!(params.featured_only, Some(false), "raw = {raw}");
        }
    }

    #[test]
    fn unsupported_sort_field_is_rejected_at_the_boundary() {
        let errors = vehicle_list_params(&query(&[("sortBy", "color")])).unwrap_err();
        assert_eq!(errors.fields(), vec!["sortBy"]);
    }

    #[test]
    fn sort_order_is_case_sensitive() {
        let errors = vehicle_list_params(&query(&[("sortOrder", "asc")])).unwrap_err();
        assert_eq!(errors.fields(), vec!["sortOrder"]);
    }

    #[test]
    fn year_bounds_are_enforced() {
        assert!(vehicle_list_params(&query(&[("yearMin", "1900")])).is_ok());
        assert!(vehicle_list_params(&query(&[("yearMax", "2100")])).is_ok());
        assert!(vehicle_list_params(&query(&[("yearMin", "1899")])).is_err());
        assert!(vehicle_list_params(&query(&[("yearMax", "2101")])).is_err());
    }

    #[test]
    fn prices_must_be_non_negative_numbers() {
        assert!(vehicle_list_params(&query(&[("priceMin", "0")])).is_ok());
        assert!(vehicle_list_params(&query(&[("priceMax", "19999.99")])).is_ok());
        assert!(vehicle_list_params(&query(&[("priceMin", "-1")])).is_err());
        assert!(vehicle_list_params(&query(&[("priceMax", "cheap")])).is_err());
    }

    #[test]
    fn page_and_page_size_bounds() {
        assert!(vehicle_list_params(&query(&[("page", "0")])).is_err());
        assert!(vehicle_list_params(&query(&[("pageSize", "0")])).is_err());
        assert!(vehicle_list_params(&query(&[("pageSize", "101")])).is_err());
        assert!(vehicle_list_params(&query(&[("pageSize", "100")])).is_ok());
    }

    #[test]
    fn every_bad_field_is_reported() {
        let errors = vehicle_list_params(&query(&[
            ("idBrand", "zero"),
            ("yearMin", "1500"),
            ("sortBy", "color"),
        ]))
        .unwrap_err();
        let mut fields = errors.fields();
        fields.sort();
        assert_eq!(fields, vec!["idBrand", "sortBy", "yearMin"]);
    }

    #[test]
    fn vehicle_id_must_be_a_positive_integer() {
        assert_eq!(vehicle_id("42").unwrap(), 42);
        assert!(vehicle_id("abc").is_err());
        assert!(vehicle_id("0").is_err());
        assert!(vehicle_id("-5").is_err());
        assert!(vehicle_id("4.2").is_err());
    }

    #[test]
    fn valid_contact_body_parses() {
        let params = contact_form_params(&contact_body()).unwrap();
        assert_eq!(params.id_vehicle, 123);
        assert_eq!(params.email, "joao@example.com");
    }

    #[test]
    fn message_over_the_limit_is_rejected_before_any_store_call() {
        let mut body = contact_body();
        body["message"] = Value::String("x".repeat(MESSAGE_MAX + 1));
        let errors = contact_form_params(&body).unwrap_err();
        assert_eq!(errors.fields(), vec!["message"]);

        body["message"] = Value::String("x".repeat(MESSAGE_MAX));
        assert!(contact_form_params(&body).is_ok());
    }

    #[test]
    fn missing_contact_fields_are_all_reported() {
        let errors = contact_form_params(&serde_json::json!({})).unwrap_err();
        let mut fields = errors.fields();
        fields.sort();
        assert_eq!(
            fields,
            vec!["email", "idVehicle", "message", "name", "phone"]
        );
    }

    #[test]
    fn contact_id_vehicle_must_be_a_positive_integer() {
        let mut body = contact_body();
        body["idVehicle"] = serde_json::json!(-1);
        assert!(contact_form_params(&body).is_err());
        body["idVehicle"] = serde_json::json!("123");
        assert!(contact_form_params(&body).is_err());
    }

    #[test]
    fn email_syntax_is_checked() {
        for bad in ["not-an-email", "@example.com", "a@b", "a b@example.com"] {
            let mut body = contact_body();
            body["email"] = Value::String(bad.to_string());
            let errors = contact_form_params(&body).unwrap_err();
            assert_eq!(errors.fields(), vec!["email"], "email = {bad}");
        }
    }

    #[test]
    fn empty_strings_are_rejected() {
        let mut body = contact_body();
        body["phone"] = Value::String(String::new());
        let errors = contact_form_params(&body).unwrap_err();
        assert_eq!(errors.fields(), vec!["phone"]);
    }
}
