use serde::Deserialize;

#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct AssetGroupSummary {
    pub id: String,
    pub asset_group_name: String,
    pub description: Option<String>,
    pub asset_type: Option<i64>,
    pub asset_type_name: Option<String>,
    pub is_active: bool,
    pub asset_count: i64,
}

/// Asset-group listing; this endpoint returns the full collection with a
/// count rather than a page descriptor.
#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct AssetGroupListResult {
    pub items: Vec<AssetGroupSummary>,
    pub total_count: i64,
    pub client_id: String,
    pub client_name: String,
}
