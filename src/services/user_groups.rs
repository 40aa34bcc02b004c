use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::GatewayError;
use crate::gateway::Gateway;
use crate::models::common::{ListQuery, PaginatedResult};
use crate::models::user_group::{
    CreateUserGroupRequest, UpdateUserGroupRequest, UserGroupListResult, UserGroupRole,
    UserGroupSummary,
};

/// User groups of the selected client, including their role and member
/// assignments.
pub struct UserGroupService {
    gateway: Arc<Gateway>,
}

/// The listing endpoint calls the page field `pageNumber`; it is normalized
/// into the standard page shape here.
#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct RawUserGroupListResponse {
    items: Vec<UserGroupSummary>,
    total_count: i64,
    page_number: i64,
    page_size: i64,
}

#[derive(Deserialize, Debug)]
struct GroupRolesResponse {
    roles: Vec<UserGroupRole>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct AssignRolePayload<'a> {
    role_id: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct AddMemberPayload<'a> {
    client_user_id: &'a str,
}

impl UserGroupService {
    pub fn new(gateway: Arc<Gateway>) -> Self {
        Self { gateway }
    }

    fn selected_client_id(&self) -> Result<String, GatewayError> {
        self.gateway
            .context()
            .selected_client_id()
            .ok_or(GatewayError::NoClientSelected)
    }

    pub async fn list(&self, query: &ListQuery) -> Result<UserGroupListResult, GatewayError> {
        let raw: RawUserGroupListResponse = self
            .gateway
            .get(&format!("/usergroups?{}", query.to_query_string()))
            .await?;
        Ok(PaginatedResult::from_raw(
            raw.items,
            raw.total_count,
            raw.page_number,
            raw.page_size,
        ))
    }

    pub async fn get(&self, group_id: &str) -> Result<UserGroupSummary, GatewayError> {
        self.gateway.get(&format!("/usergroups/{}", group_id)).await
    }

    pub async fn create(
        &self,
        data: &CreateUserGroupRequest,
    ) -> Result<UserGroupSummary, GatewayError> {
        self.gateway.post("/usergroups", data).await
    }

    pub async fn update(
        &self,
        group_id: &str,
        data: &UpdateUserGroupRequest,
    ) -> Result<UserGroupSummary, GatewayError> {
        self.gateway
            .put(&format!("/usergroups/{}", group_id), data)
            .await
    }

    pub async fn delete(&self, group_id: &str) -> Result<(), GatewayError> {
        self.gateway
            .delete(&format!("/usergroups/{}", group_id))
            .await
    }

    /// Roles assigned to a group; the route is client-scoped, so a selected
    /// client context is required.
    pub async fn group_roles(&self, group_id: &str) -> Result<Vec<UserGroupRole>, GatewayError> {
        let client_id = self.selected_client_id()?;
        let response: GroupRolesResponse = self
            .gateway
            .get(&format!(
                "/clients/{}/usergroups/{}/roles",
                client_id, group_id
            ))
            .await?;
        Ok(response.roles)
    }

    pub async fn assign_role(&self, group_id: &str, role_id: &str) -> Result<(), GatewayError> {
        let client_id = self.selected_client_id()?;
        self.gateway
            .post_empty(
                &format!("/clients/{}/usergroups/{}/roles", client_id, group_id),
                Some(&AssignRolePayload { role_id }),
            )
            .await
    }

    pub async fn remove_role(&self, group_id: &str, role_id: &str) -> Result<(), GatewayError> {
        let client_id = self.selected_client_id()?;
        self.gateway
            .delete(&format!(
                "/clients/{}/usergroups/{}/roles/{}",
                client_id, group_id, role_id
            ))
            .await
    }

    pub async fn add_member(&self, group_id: &str, user_id: &str) -> Result<(), GatewayError> {
        self.gateway
            .post_empty(
                &format!("/usergroups/{}/users", group_id),
                Some(&AddMemberPayload {
                    client_user_id: user_id,
                }),
            )
            .await
    }

    pub async fn remove_member(&self, group_id: &str, user_id: &str) -> Result<(), GatewayError> {
        self.gateway
            .delete(&format!("/usergroups/{}/users/{}", group_id, user_id))
            .await
    }
}
