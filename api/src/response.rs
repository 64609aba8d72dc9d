//! Success half of the response envelope. The failure half lives in
//! [`crate::error`].

use serde::Serialize;

#[derive(Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: T,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<Meta>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Meta {
    pub page: i32,
    pub page_size: i32,
    pub total: i64,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn new(data: T) -> Self {
        Self {
            success: true,
            data,
            meta: None,
        }
    }

    pub fn with_meta(data: T, meta: Meta) -> Self {
        Self {
            success: true,
            data,
            meta: Some(meta),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn meta_is_skipped_when_absent() {
        let body = serde_json::to_value(ApiResponse::new(1)).unwrap();
        assert_eq!(body["success"], true);
        assert_eq!(body["data"], 1);
        assert!(body.get("meta").is_none());
    }

    #[test]
    fn meta_uses_camel_case() {
        let body = serde_json::to_value(ApiResponse::with_meta(
            1,
            Meta {
                page: 2,
                page_size: 20,
                total: 41,
            },
        ))
        .unwrap();
        assert_eq!(body["meta"]["pageSize"], 20);
        assert_eq!(body["meta"]["page"], 2);
        assert_eq!(body["meta"]["total"], 41);
    }
}
