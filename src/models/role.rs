use serde::{Deserialize, Serialize};

use super::common::PaginatedResult;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub enum RoleType {
    System,
    Custom,
}

#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct RolePermission {
    pub id: String,
    pub permission_name: String,
    pub description: Option<String>,
}

#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct RoleUser {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct RoleUserGroup {
    pub id: String,
    pub user_group_name: String,
    pub user_group_type: String,
    pub description: Option<String>,
}

/// A role with its optional expanded assignments (present on the detail
/// endpoint, absent on listings).
#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct RoleItem {
    pub id: String,
    pub role_name: String,
    pub role_type: RoleType,
    pub is_active: bool,
    pub description: Option<String>,
    pub user_count: Option<i64>,
    pub permissions: Option<Vec<RolePermission>>,
    pub users: Option<Vec<RoleUser>>,
    pub user_groups: Option<Vec<RoleUserGroup>>,
}

pub type RoleListResult = PaginatedResult<RoleItem>;

#[derive(Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct CreateRoleRequest {
    pub role_name: String,
    pub is_active: bool,
}

#[derive(Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRoleRequest {
    pub role_name: String,
    pub is_active: bool,
}
