use std::sync::Arc;

use crate::error::GatewayError;
use crate::gateway::Gateway;
use crate::models::asset_group::AssetGroupListResult;
use crate::models::common::ListQuery;

/// Asset groups of the currently selected client.
pub struct AssetGroupService {
    gateway: Arc<Gateway>,
}

impl AssetGroupService {
    pub fn new(gateway: Arc<Gateway>) -> Self {
        Self { gateway }
    }

    /// Get the asset groups for the current client.
    pub async fn list(&self, query: &ListQuery) -> Result<AssetGroupListResult, GatewayError> {
        self.gateway
            .context()
            .selected_client_id()
            .ok_or(GatewayError::NoClientSelected)?;
        self.gateway
            .get(&format!("/asset-groups?{}", query.to_query_string()))
            .await
    }
}
