use thiserror::Error;

/// SQLSTATE reserved by the store for domain signals.
pub const DOMAIN_ERROR_SQLSTATE: &str = "51000";
/// Message the store raises when the referenced vehicle is absent or
/// unavailable. Any other message under the reserved SQLSTATE is a
/// business-rule violation.
pub const VEHICLE_NOT_FOUND_SIGNAL: &str = "vehicleNotFound";

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("vehicle not found")]
    VehicleNotFound,
    #[error("business rule rejected: `{0}`")]
    BusinessRule(String),
    #[error("sqlx error: `{0}`")]
    Sqlx(sqlx::Error),
}

impl StoreError {
    pub fn from_sqlx(e: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db) = &e {
            if let Some(classified) = classify(db.code().as_deref(), db.message()) {
                return classified;
            }
        }
        Self::Sqlx(e)
    }
}

/// Decodes the store's reserved error convention. The SQLSTATE marks a
/// domain signal; the message content is the secondary discriminant between
/// not-found and other rule violations.
pub fn classify(code: Option<&str>, message: &str) -> Option<StoreError> {
    match code {
        Some(DOMAIN_ERROR_SQLSTATE) if message == VEHICLE_NOT_FOUND_SIGNAL => {
            Some(StoreError::VehicleNotFound)
        }
        Some(DOMAIN_ERROR_SQLSTATE) => Some(StoreError::BusinessRule(message.to_owned())),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reserved_code_with_not_found_signal() {
        let classified = classify(Some("51000"), "vehicleNotFound");
        assert!(matches!(classified, Some(StoreError::VehicleNotFound)));
    }

    #[test]
    fn reserved_code_with_any_other_message_is_a_business_rule() {
        let classified = classify(Some("51000"), "vehicleReserved");
        match classified {
            Some(StoreError::BusinessRule(message)) => assert_eq!(message, "vehicleReserved"),
            other => panic!("expected business rule, got {other:?}"),
        }
    }

    #[test]
    fn other_sqlstates_stay_unclassified() {
        assert!(classify(Some("23505"), "vehicleNotFound").is_none());
        assert!(classify(None, "vehicleNotFound").is_none());
    }
}
