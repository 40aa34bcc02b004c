use std::sync::Arc;

use serde::Deserialize;

use crate::error::GatewayError;
use crate::gateway::Gateway;
use crate::models::common::{ListQuery, PaginatedResult};
use crate::models::role::{CreateRoleRequest, RoleItem, RoleListResult, UpdateRoleRequest};

/// Roles and their permission assignments for the selected client.
pub struct RoleService {
    gateway: Arc<Gateway>,
}

/// The listing endpoint returns `roles` rather than the standard `items`
/// page shape; it is normalized here before anything else sees it.
#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct RawRoleListResponse {
    roles: Vec<RoleItem>,
    total_count: i64,
    page: i64,
    page_size: i64,
}

impl RoleService {
    pub fn new(gateway: Arc<Gateway>) -> Self {
        Self { gateway }
    }

    pub async fn list(&self, query: &ListQuery) -> Result<RoleListResult, GatewayError> {
        let raw: RawRoleListResponse = self
            .gateway
            .get(&format!("/roles?{}", query.to_query_string()))
            .await?;
        Ok(PaginatedResult::from_raw(
            raw.roles,
            raw.total_count,
            raw.page,
            raw.page_size,
        ))
    }

    pub async fn get(&self, role_id: &str) -> Result<RoleItem, GatewayError> {
        self.gateway.get(&format!("/roles/{}", role_id)).await
    }

    pub async fn create(&self, data: &CreateRoleRequest) -> Result<RoleItem, GatewayError> {
        self.gateway.post("/roles", data).await
    }

    pub async fn update(
        &self,
        role_id: &str,
        data: &UpdateRoleRequest,
    ) -> Result<RoleItem, GatewayError> {
        self.gateway.put(&format!("/roles/{}", role_id), data).await
    }

    pub async fn delete(&self, role_id: &str) -> Result<(), GatewayError> {
        self.gateway.delete(&format!("/roles/{}", role_id)).await
    }

    pub async fn add_permission(
        &self,
        role_id: &str,
        permission_id: &str,
    ) -> Result<(), GatewayError> {
        self.gateway
            .post_empty::<()>(
                &format!("/roles/{}/permissions/{}", role_id, permission_id),
                None,
            )
            .await
    }

    pub async fn remove_permission(
        &self,
        role_id: &str,
        permission_id: &str,
    ) -> Result<(), GatewayError> {
        self.gateway
            .delete(&format!("/roles/{}/permissions/{}", role_id, permission_id))
            .await
    }
}
