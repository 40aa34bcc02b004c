use serde::{Deserialize, Serialize};

use super::common::{IdName, PaginatedResult};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub enum AssetType {
    Vehicle,
    Equipment,
    Site,
    Building,
    Inventory,
    Other,
}

#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct AssetSummary {
    pub id: String,
    pub asset_name: String,
    pub identifying_number: Option<String>,
    pub serial_number: Option<String>,
    /// Numeric enum value as the listing endpoint sends it; the display
    /// name travels separately in `asset_type_name`.
    pub asset_type: Option<i64>,
    pub asset_type_name: Option<String>,
    pub location_id: String,
    pub location_name: String,
    pub asset_group_id: String,
    pub asset_group_name: String,
    pub is_active: bool,
    pub current_status: Option<String>,
    pub last_inspection_date: Option<String>,
}

/// Filter options the listing endpoint returns alongside the page.
#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct AssetFilters {
    pub locations: Vec<IdName>,
    pub asset_groups: Vec<IdName>,
}

#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct AssetListResult {
    #[serde(flatten)]
    pub page: PaginatedResult<AssetSummary>,
    pub client_id: String,
    pub client_name: String,
    pub filters: AssetFilters,
}

/// Asset creation fields; the owning client id is injected by the service
/// from the selected tenant context.
#[derive(Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct CreateAssetRequest {
    pub location_id: String,
    pub asset_group_id: String,
    pub asset_name: String,
    pub identifying_number: Option<String>,
    pub serial_number: Option<String>,
    pub description: Option<String>,
    pub asset_type: Option<AssetType>,
    pub manufacturer_name: Option<String>,
    pub model_number: Option<String>,
    /// Date-only string, `YYYY-MM-DD`.
    pub installation_date: Option<String>,
    pub is_active: Option<bool>,
}

#[derive(Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAssetRequest {
    pub location_id: String,
    pub asset_group_id: String,
    pub asset_name: String,
    pub identifying_number: Option<String>,
    pub serial_number: Option<String>,
    pub description: Option<String>,
    pub asset_type: Option<AssetType>,
    pub manufacturer_name: Option<String>,
    pub model_number: Option<String>,
    pub installation_date: Option<String>,
    pub is_active: bool,
}
