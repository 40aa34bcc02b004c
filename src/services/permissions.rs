use std::sync::Arc;

use serde::Deserialize;

use crate::error::GatewayError;
use crate::gateway::Gateway;
use crate::models::common::ListQuery;
use crate::models::permission::{PermissionCategory, PermissionListResult};

/// Read-only catalog of system permissions, grouped by category.
pub struct PermissionService {
    gateway: Arc<Gateway>,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct RawPermissionListResponse {
    categories: Vec<PermissionCategory>,
    total_count: i64,
}

impl PermissionService {
    pub fn new(gateway: Arc<Gateway>) -> Self {
        Self { gateway }
    }

    /// Get all system permissions, keeping the categorized tree and adding
    /// a flat view for callers that want a single list.
    pub async fn list(&self, query: &ListQuery) -> Result<PermissionListResult, GatewayError> {
        let raw: RawPermissionListResponse = self
            .gateway
            .get(&format!("/permissions?{}", query.to_query_string()))
            .await?;

        let items = raw
            .categories
            .iter()
            .flat_map(|category| category.permissions.iter().cloned())
            .collect();

        Ok(PermissionListResult {
            categories: raw.categories,
            total_count: raw.total_count,
            items,
        })
    }
}
