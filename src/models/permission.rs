use serde::Deserialize;

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PermissionItem {
    pub id: String,
    pub permission_name: String,
    pub description: Option<String>,
    pub display_name: Option<String>,
    pub action: Option<String>,
    pub scope: Option<String>,
}

#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct PermissionCategory {
    pub category_name: String,
    pub display_name: String,
    pub permissions: Vec<PermissionItem>,
}

/// Normalized permission listing: the categorized tree as the backend sends
/// it, plus a flat `items` view derived by the service.
#[derive(Debug, Clone)]
pub struct PermissionListResult {
    pub categories: Vec<PermissionCategory>,
    pub total_count: i64,
    pub items: Vec<PermissionItem>,
}
