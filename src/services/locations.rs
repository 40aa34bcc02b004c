use std::sync::Arc;

use serde::Serialize;

use crate::error::GatewayError;
use crate::gateway::Gateway;
use crate::models::common::ListQuery;
use crate::models::location::{
    CreateLocationRequest, LocationListResult, LocationSummary, UpdateLocationRequest,
};

/// Locations of the currently selected client. Creation payloads carry the
/// owning client id explicitly, taken from the tenant context.
pub struct LocationService {
    gateway: Arc<Gateway>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CreateLocationPayload<'a> {
    client_id: &'a str,
    #[serde(flatten)]
    body: &'a CreateLocationRequest,
}

impl LocationService {
    pub fn new(gateway: Arc<Gateway>) -> Self {
        Self { gateway }
    }

    fn selected_client_id(&self) -> Result<String, GatewayError> {
        self.gateway
            .context()
            .selected_client_id()
            .ok_or(GatewayError::NoClientSelected)
    }

    /// Get a paginated list of locations for the current client.
    pub async fn list(&self, query: &ListQuery) -> Result<LocationListResult, GatewayError> {
        self.selected_client_id()?;
        self.gateway
            .get(&format!("/locations?{}", query.to_query_string()))
            .await
    }

    /// Create a new location under the selected client.
    pub async fn create(
        &self,
        data: &CreateLocationRequest,
    ) -> Result<LocationSummary, GatewayError> {
        let client_id = self.selected_client_id()?;
        let payload = CreateLocationPayload {
            client_id: &client_id,
            body: data,
        };
        self.gateway.post("/locations", &payload).await
    }

    pub async fn get(&self, location_id: &str) -> Result<LocationSummary, GatewayError> {
        self.gateway
            .get(&format!("/locations/{}", location_id))
            .await
    }

    pub async fn update(
        &self,
        location_id: &str,
        data: &UpdateLocationRequest,
    ) -> Result<LocationSummary, GatewayError> {
        self.gateway
            .put(&format!("/locations/{}", location_id), data)
            .await
    }
}
