use serde::{Deserialize, Serialize};

use super::common::PaginatedResult;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub enum UserGroupType {
    Inspectors,
    Instructors,
}

#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct UserGroupMember {
    pub id: String,
    pub client_user_id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub display_name: String,
    pub is_active: bool,
    pub joined_date: String,
}

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UserGroupRole {
    pub role_id: String,
    pub role_name: String,
    pub role_type: String,
}

/// A user group with its optional expanded membership (present on the
/// detail endpoint, absent on listings).
#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct UserGroupSummary {
    pub id: String,
    pub user_group_name: String,
    pub description: Option<String>,
    pub is_active: bool,
    pub members_count: i64,
    pub user_group_type: String,
    pub members: Option<Vec<UserGroupMember>>,
    pub group_roles: Option<Vec<UserGroupRole>>,
}

pub type UserGroupListResult = PaginatedResult<UserGroupSummary>;

#[derive(Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserGroupRequest {
    pub user_group_name: String,
    pub user_group_type: UserGroupType,
    pub is_active: bool,
    pub member_ids: Vec<String>,
    pub role_ids: Vec<String>,
}

#[derive(Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserGroupRequest {
    pub name: String,
    pub description: Option<String>,
    pub is_active: bool,
}
