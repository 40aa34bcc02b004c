use serde::{Deserialize, Serialize};

/// A client organization as listed on the platform-admin screen.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ClientSummary {
    pub id: String,
    pub name: String,
    pub domain_name: Option<String>,
    pub industry: Option<String>,
    pub is_active: bool,
    pub user_count: i64,
    pub asset_count: i64,
    pub location_count: i64,
    pub created_date: String,
    pub last_activity_date: Option<String>,
}

/// Full client record, including the onboarding admin contact.
#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ClientDetail {
    pub id: String,
    pub name: String,
    pub domain_name: Option<String>,
    pub industry: Option<String>,
    pub is_active: bool,
    pub admin_email: Option<String>,
    pub admin_name: Option<String>,
    pub user_count: i64,
    pub asset_count: i64,
    pub location_count: i64,
    pub created_date: String,
}

#[derive(Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct CreateClientRequest {
    pub name: String,
    pub domain_name: Option<String>,
    pub admin_email: String,
    pub admin_name: String,
}

#[derive(Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct UpdateClientRequest {
    pub name: String,
    pub domain_name: Option<String>,
    pub industry: Option<String>,
    pub is_active: bool,
}
