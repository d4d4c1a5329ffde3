use super::constants::{self, CREATE_ENDPOINT, LIST_ENDPOINT, USER_AGENT, headers};
use super::error::ApiError;
use crate::inspection::wire::{CreateResponse, ListResponse, WireRecord};
use async_trait::async_trait;
use log::{debug, info, warn};
use serde::de::DeserializeOwned;

/// Operations the inspection backend offers
#[async_trait]
pub trait InspectionApi: Send + Sync {
    /// Create a record, returning what the server stored
    async fn create_inspection(&self, record: &WireRecord) -> Result<WireRecord, ApiError>;

    /// Every stored record in server order
    async fn list_inspections(&self) -> Result<Vec<WireRecord>, ApiError>;
}

/// reqwest-backed client for the inspection REST API
///
/// Each call is a single attempt with no timeout and no retry; retrying is
/// left to the user.
#[derive(Clone)]
pub struct InspectionClient {
    base_url: Option<String>,
    http_client: reqwest::Client,
}

impl InspectionClient {
    /// A blank base URL is treated as missing and reported on the first call
    pub fn new(base_url: Option<String>) -> Self {
        let http_client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .expect("Failed to build HTTP client");

        Self::with_custom_client(base_url, http_client)
    }

    pub fn with_custom_client(base_url: Option<String>, http_client: reqwest::Client) -> Self {
        let base_url = base_url
            .map(|url| url.trim().trim_end_matches('/').to_string())
            .filter(|url| !url.is_empty());

        Self { base_url, http_client }
    }

    pub fn base_url(&self) -> Option<&str> {
        self.base_url.as_deref()
    }

    fn endpoint(&self, endpoint: &str) -> Result<String, ApiError> {
        let base_url = self.base_url.as_deref().ok_or(ApiError::MissingBaseUrl)?;
        Ok(constants::endpoint_url(base_url, endpoint))
    }

    async fn read_json<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ApiError> {
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            let err = ApiError::server(status, &body);
            warn!("Inspection API returned {}: {}", status, err);
            return Err(err);
        }

        serde_json::from_str(&body).map_err(|e| ApiError::InvalidResponse(e.to_string()))
    }
}

#[async_trait]
impl InspectionApi for InspectionClient {
    async fn create_inspection(&self, record: &WireRecord) -> Result<WireRecord, ApiError> {
        let url = self.endpoint(CREATE_ENDPOINT)?;
        debug!("POST {} for plate '{}'", url, record.vehicle.plate_number);

        let response = self
            .http_client
            .post(&url)
            .header("Accept", headers::CONTENT_TYPE_JSON)
            .json(record)
            .send()
            .await?;

        let created = Self::read_json::<CreateResponse>(response).await?.into_record();
        info!("Created inspection {}", created.id().unwrap_or("(no id)"));
        Ok(created)
    }

    async fn list_inspections(&self) -> Result<Vec<WireRecord>, ApiError> {
        let url = self.endpoint(LIST_ENDPOINT)?;
        debug!("GET {}", url);

        let response = self
            .http_client
            .get(&url)
            .header("Accept", headers::CONTENT_TYPE_JSON)
            .send()
            .await?;

        let listed: ListResponse = Self::read_json(response).await?;
        if !listed.success {
            debug!("List response did not set success, using its data anyway");
        }
        info!("Fetched {} inspections", listed.data.len());
        Ok(listed.data)
    }
}
