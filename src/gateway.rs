//! The single chokepoint through which all domain services reach the
//! backend: composes the bearer token, the tenant header, and the JSON
//! envelope handling.

use std::sync::Arc;

use http::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use http::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;
use uuid::Uuid;

use crate::context::ContextStore;
use crate::error::GatewayError;
use crate::models::common::ApiEnvelope;
use crate::session::Session;

/// Header carrying the selected tenant id on scoped requests.
pub const TENANT_HEADER: &str = "X-Tenant-ID";

/// Per-call options. Defaults to a GET with no body, no extra headers, and
/// the gateway's default scope set.
#[derive(Default)]
pub struct RequestOptions {
    pub method: Method,
    pub body: Option<serde_json::Value>,
    pub headers: HeaderMap,
    /// Overrides the gateway's default scopes for this call only.
    pub scopes: Option<Vec<String>>,
}

impl RequestOptions {
    pub fn with_method(method: Method) -> Self {
        RequestOptions {
            method,
            ..Default::default()
        }
    }
}

/// Authenticated request gateway. Holds no per-request state; every call
/// resolves the token and the tenant context afresh. The tenant context is
/// only ever read here, never written.
pub struct Gateway {
    http: reqwest::Client,
    base_url: String,
    default_scopes: Vec<String>,
    session: Arc<Session>,
    context: Arc<ContextStore>,
}

impl Gateway {
    pub fn new(
        base_url: &str,
        default_scopes: Vec<String>,
        session: Arc<Session>,
        context: Arc<ContextStore>,
    ) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            default_scopes,
            session,
            context,
        }
    }

    /// Read access to the tenant context for services that need the
    /// selected client id in a payload or path.
    pub fn context(&self) -> &ContextStore {
        &self.context
    }

    /// Issues one authenticated request and unwraps the response envelope.
    ///
    /// Fails with `NotAuthenticated` before any network I/O when no account
    /// is active; token-acquisition failure kinds pass through unchanged;
    /// non-2xx statuses become `Api` without parsing the body.
    pub async fn request<T: DeserializeOwned>(
        &self,
        path: &str,
        options: RequestOptions,
    ) -> Result<T, GatewayError> {
        let account = self
            .session
            .active_account()
            .ok_or(GatewayError::NotAuthenticated)?;

        let scopes = match options.scopes {
            Some(scopes) => scopes,
            None => self.default_scopes.clone(),
        };
        let token = self.session.access_token(&scopes).await?;

        let context = self.context.state();
        let url = join_url(&self.base_url, path);
        let request_id = Uuid::new_v4();
        debug!(
            request_id = %request_id,
            method = %options.method,
            url = %url,
            tenant = ?context.selected_client_id,
            account = %account.username,
            "Issuing API request"
        );

        // Caller headers first; bearer and tenant headers are set last so a
        // caller can never override them.
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        for (name, value) in options.headers.iter() {
            headers.insert(name, value.clone());
        }

        let mut builder = self
            .http
            .request(options.method, &url)
            .headers(headers)
            .bearer_auth(&token.token);
        if let Some(client_id) = &context.selected_client_id {
            builder = builder.header(TENANT_HEADER, client_id.as_str());
        }
        if let Some(body) = &options.body {
            builder = builder.json(body);
        }

        let response = builder.send().await?;
        let status = response.status();

        if !status.is_success() {
            return Err(GatewayError::Api {
                status: status.as_u16(),
                status_text: status.canonical_reason().unwrap_or("").to_string(),
            });
        }

        // 204 carries no body; unit and optional results deserialize from
        // JSON null without touching the response body.
        if status == http::StatusCode::NO_CONTENT {
            return Ok(serde_json::from_value(serde_json::Value::Null)?);
        }

        let body = response.text().await?;
        let envelope: ApiEnvelope<T> = serde_json::from_str(&body)?;
        Ok(envelope.result)
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, GatewayError> {
        self.request(path, RequestOptions::default()).await
    }

    pub async fn post<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, GatewayError> {
        let mut options = RequestOptions::with_method(Method::POST);
        options.body = Some(serde_json::to_value(body)?);
        self.request(path, options).await
    }

    pub async fn put<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, GatewayError> {
        let mut options = RequestOptions::with_method(Method::PUT);
        options.body = Some(serde_json::to_value(body)?);
        self.request(path, options).await
    }

    pub async fn post_empty<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: Option<&B>,
    ) -> Result<(), GatewayError> {
        let mut options = RequestOptions::with_method(Method::POST);
        if let Some(body) = body {
            options.body = Some(serde_json::to_value(body)?);
        }
        self.request(path, options).await
    }

    pub async fn delete(&self, path: &str) -> Result<(), GatewayError> {
        self.request(path, RequestOptions::with_method(Method::DELETE))
            .await
    }
}

/// Joins the configured base URL (trailing slashes already stripped) with a
/// path, enforcing exactly one slash between them.
fn join_url(base: &str, path: &str) -> String {
    let base = base.trim_end_matches('/');
    if path.starts_with('/') {
        format!("{}{}", base, path)
    } else {
        format!("{}/{}", base, path)
    }
}
