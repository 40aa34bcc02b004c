use std::sync::Arc;

use crate::error::GatewayError;
use crate::gateway::Gateway;
use crate::models::client::{
    ClientDetail, ClientSummary, CreateClientRequest, UpdateClientRequest,
};
use crate::models::common::{ListQuery, PaginatedResult};

/// Platform-level client (tenant) management.
pub struct ClientService {
    gateway: Arc<Gateway>,
}

impl ClientService {
    pub fn new(gateway: Arc<Gateway>) -> Self {
        Self { gateway }
    }

    /// Create a new client tenant.
    pub async fn create(&self, data: &CreateClientRequest) -> Result<ClientSummary, GatewayError> {
        self.gateway.post("/clients", data).await
    }

    /// Get a paginated list of clients.
    pub async fn list(
        &self,
        query: &ListQuery,
    ) -> Result<PaginatedResult<ClientSummary>, GatewayError> {
        self.gateway
            .get(&format!("/clients?{}", query.to_query_string()))
            .await
    }

    /// Get single client details.
    pub async fn get(&self, id: &str) -> Result<ClientDetail, GatewayError> {
        self.gateway.get(&format!("/clients/{}", id)).await
    }

    pub async fn update(
        &self,
        id: &str,
        data: &UpdateClientRequest,
    ) -> Result<ClientSummary, GatewayError> {
        self.gateway.put(&format!("/clients/{}", id), data).await
    }
}
