use std::sync::Arc;

use crate::error::GatewayError;
use crate::gateway::Gateway;
use crate::models::common::ListQuery;
use crate::models::user::{CreateUserRequest, UpdateUserRequest, UserListResult, UserSummary};

/// Users of the currently selected client; tenant scoping travels in the
/// gateway's tenant header.
pub struct UserService {
    gateway: Arc<Gateway>,
}

impl UserService {
    pub fn new(gateway: Arc<Gateway>) -> Self {
        Self { gateway }
    }

    pub async fn list(&self, query: &ListQuery) -> Result<UserListResult, GatewayError> {
        self.gateway
            .get(&format!("/users?{}", query.to_query_string()))
            .await
    }

    pub async fn get(&self, user_id: &str) -> Result<UserSummary, GatewayError> {
        self.gateway.get(&format!("/users/{}", user_id)).await
    }

    pub async fn create(&self, data: &CreateUserRequest) -> Result<UserSummary, GatewayError> {
        self.gateway.post("/users", data).await
    }

    pub async fn update(
        &self,
        user_id: &str,
        data: &UpdateUserRequest,
    ) -> Result<UserSummary, GatewayError> {
        self.gateway.put(&format!("/users/{}", user_id), data).await
    }
}
