use serde::{Deserialize, Serialize};

use super::common::PaginatedResult;

#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct LocationSummary {
    pub id: String,
    pub location_name: String,
    pub location_number: i64,
    pub city: Option<String>,
    pub state: Option<String>,
    pub is_active: bool,
    pub is_main_location: bool,
    pub asset_count: i64,
    pub created_date: String,
}

/// Listing response; the backend echoes which client the page belongs to.
#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct LocationListResult {
    #[serde(flatten)]
    pub page: PaginatedResult<LocationSummary>,
    pub client_id: String,
    pub client_name: String,
}

/// Location creation fields; the owning client id is injected by the
/// service from the selected tenant context.
#[derive(Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct CreateLocationRequest {
    pub location_name: String,
    pub description: Option<String>,
    pub address1: String,
    pub address2: Option<String>,
    pub city: String,
    pub state: String,
    pub postal_code: String,
    pub country: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub time_zone_id: Option<String>,
    pub is_main_location: bool,
    pub is_active: Option<bool>,
}

#[derive(Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct UpdateLocationRequest {
    pub location_name: String,
    pub description: Option<String>,
    pub address1: String,
    pub address2: Option<String>,
    pub city: String,
    pub state: String,
    pub postal_code: String,
    pub country: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub time_zone_id: Option<String>,
    pub is_main_location: bool,
    pub is_active: bool,
}
