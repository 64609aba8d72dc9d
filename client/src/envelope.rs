use crate::error::ClientError;
use serde::Deserialize;

/// The uniform wrapper every endpoint returns; `data` is present on
/// success, `error`/`code` on failure.
#[derive(Deserialize)]
pub(crate) struct Envelope<T> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<String>,
    pub code: Option<String>,
}

impl<T> Envelope<T> {
    pub(crate) fn into_result(self) -> Result<T, ClientError> {
        if self.success {
            self.data.ok_or(ClientError::MissingData)
        } else {
            Err(ClientError::Api {
                code: self.code.unwrap_or_else(|| "UNKNOWN".into()),
                message: self.error.unwrap_or_else(|| "unknown error".into()),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ContactFormCreated;

    #[test]
    fn success_envelope_yields_the_data_payload() {
        let envelope: Envelope<ContactFormCreated> =
            serde_json::from_str(r#"{"success":true,"data":{"idContactForm":12}}"#).unwrap();
        assert_eq!(envelope.into_result().unwrap().id_contact_form, 12);
    }

    #[test]
    fn error_envelope_yields_code_and_message() {
        let envelope: Envelope<ContactFormCreated> = serde_json::from_str(
            r#"{"success":false,"error":"vehicleNotFound","code":"NOT_FOUND"}"#,
        )
        .unwrap();
        match envelope.into_result() {
            Err(ClientError::Api { code, message }) => {
                assert_eq!(code, "NOT_FOUND");
                assert_eq!(message, "vehicleNotFound");
            }
            other => panic!("expected api error, got {other:?}"),
        }
    }

    #[test]
    fn success_without_data_is_not_a_panic() {
        let envelope: Envelope<ContactFormCreated> =
            serde_json::from_str(r#"{"success":true}"#).unwrap();
        assert!(matches!(
            envelope.into_result(),
            Err(ClientError::MissingData)
        ));
    }
}
