use serde::{Deserialize, Serialize};

use super::common::PaginatedResult;

#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct UserSummary {
    pub id: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub display_name: Option<String>,
    pub primary_mobile: Option<String>,
    pub is_active: bool,
    pub last_login_date: Option<String>,
    pub role_count: Option<i64>,
    pub group_count: Option<i64>,
    pub invitation_status: Option<String>,
    pub created_date: Option<String>,
    pub job_title: Option<String>,
}

pub type UserListResult = PaginatedResult<UserSummary>;

#[derive(Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub job_title: Option<String>,
    /// Initial password; omitted when the invite flow assigns one.
    pub password: Option<String>,
    pub is_active: bool,
}

#[derive(Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub job_title: Option<String>,
    pub is_active: bool,
}
