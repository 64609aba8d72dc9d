//! Typed remote-call layer over the catalog HTTP surface. Each method
//! unwraps the response envelope and surfaces the `data` payload; error
//! envelopes become [`ClientError::Api`].

mod envelope;
pub mod error;
pub mod types;

pub use error::ClientError;

use envelope::Envelope;
use serde::de::DeserializeOwned;
use types::{ContactFormCreated, ContactFormPayload, VehicleDetailData, VehicleList,
    VehicleListQuery};

/// Do not wrap `CatalogClient` in a [`Rc`] or [`Arc`]
/// because [`reqwest::Client`] uses an [`Arc`] internally.
#[derive(Clone)]
pub struct CatalogClient {
    http: reqwest::Client,
    base_url: String,
}

impl CatalogClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_owned(),
        }
    }

    pub async fn vehicle_list(&self, query: &VehicleListQuery) -> Result<VehicleList, ClientError> {
        let response = self
            .http
            .get(format!("{}/vehicle", self.base_url))
            .query(&query.to_pairs())
            .send()
            .await?;
        Self::unwrap(response).await
    }

    pub async fn vehicle_get(&self, id_vehicle: i32) -> Result<VehicleDetailData, ClientError> {
        let response = self
            .http
            .get(format!("{}/vehicle/{id_vehicle}", self.base_url))
            .send()
            .await?;
        Self::unwrap(response).await
    }

    pub async fn contact_form_create(
        &self,
        payload: &ContactFormPayload,
    ) -> Result<ContactFormCreated, ClientError> {
        let response = self
            .http
            .post(format!("{}/contact-form", self.base_url))
            .json(payload)
            .send()
            .await?;
        Self::unwrap(response).await
    }

    async fn unwrap<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ClientError> {
        response.json::<Envelope<T>>().await?.into_result()
    }
}
