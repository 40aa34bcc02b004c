use std::sync::Arc;

use serde::Serialize;

use crate::error::GatewayError;
use crate::gateway::Gateway;
use crate::models::asset::{
    AssetListResult, AssetSummary, CreateAssetRequest, UpdateAssetRequest,
};
use crate::models::common::ListQuery;

/// Assets of the currently selected client.
pub struct AssetService {
    gateway: Arc<Gateway>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CreateAssetPayload<'a> {
    client_id: &'a str,
    #[serde(flatten)]
    body: &'a CreateAssetRequest,
}

impl AssetService {
    pub fn new(gateway: Arc<Gateway>) -> Self {
        Self { gateway }
    }

    fn selected_client_id(&self) -> Result<String, GatewayError> {
        self.gateway
            .context()
            .selected_client_id()
            .ok_or(GatewayError::NoClientSelected)
    }

    /// Get a paginated list of assets for the current client.
    pub async fn list(&self, query: &ListQuery) -> Result<AssetListResult, GatewayError> {
        self.selected_client_id()?;
        self.gateway
            .get(&format!("/assets?{}", query.to_query_string()))
            .await
    }

    /// Create a new asset under the selected client.
    pub async fn create(&self, data: &CreateAssetRequest) -> Result<AssetSummary, GatewayError> {
        let client_id = self.selected_client_id()?;
        let payload = CreateAssetPayload {
            client_id: &client_id,
            body: data,
        };
        self.gateway.post("/assets", &payload).await
    }

    pub async fn get(&self, id: &str) -> Result<AssetSummary, GatewayError> {
        self.gateway.get(&format!("/assets/{}", id)).await
    }

    pub async fn update(
        &self,
        id: &str,
        data: &UpdateAssetRequest,
    ) -> Result<AssetSummary, GatewayError> {
        self.gateway.put(&format!("/assets/{}", id), data).await
    }
}
