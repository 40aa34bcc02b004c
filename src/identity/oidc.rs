use std::path::PathBuf;
use std::sync::{Mutex, MutexGuard, PoisonError};

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine as _;
#[allow(unused_imports)]
use cached::proc_macro::cached;
use chrono::{Duration, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::error::AuthError;
use crate::identity::base::{AccessToken, Account, IdentityProvider};

/// Config for an OpenID Connect identity provider with a device-local
/// account cache.
#[derive(Deserialize, Serialize, Debug, JsonSchema, Hash, Clone, PartialEq, Eq)]
pub struct OidcConfig {
    /// Base URL of the sign-in authority, e.g. `https://login.example.com/{tenant}`.
    pub authority: String,
    pub client_id: String,
    pub redirect_uri: String,
    /// Path of the serialized account/refresh-token cache on disk.
    pub cache_path: String,
}

impl OidcConfig {
    fn token_endpoint(&self) -> String {
        format!("{}/oauth2/v2.0/token", self.authority.trim_end_matches('/'))
    }

    fn authorize_endpoint(&self) -> String {
        format!("{}/oauth2/v2.0/authorize", self.authority.trim_end_matches('/'))
    }
}

const CACHE_SCHEMA_VERSION: u32 = 1;

/// On-disk layout of the provider cache. Unknown or mismatching content is
/// discarded and replaced with an empty cache.
#[derive(Serialize, Deserialize, Debug, Clone)]
struct CacheFile {
    version: u32,
    accounts: Vec<CachedAccount>,
    active_account_id: Option<String>,
    /// Authorization code captured by an external redirect listener,
    /// exchanged on the next `handle_redirect`.
    pending_authorization_code: Option<String>,
}

impl Default for CacheFile {
    fn default() -> Self {
        CacheFile {
            version: CACHE_SCHEMA_VERSION,
            accounts: Vec::new(),
            active_account_id: None,
            pending_authorization_code: None,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone)]
struct CachedAccount {
    account: Account,
    refresh_token: String,
}

/// An `IdentityProvider` backed by an OpenID Connect authority. Silent
/// acquisition redeems the cached refresh token; sign-in happens out of band
/// through the authorize redirect.
pub struct OidcProvider {
    config: OidcConfig,
    cache: Mutex<CacheFile>,
}

impl OidcProvider {
    pub fn new(config: &OidcConfig) -> Self {
        info!(
            "Creating OidcProvider for authority '{}', client_id='{}'",
            config.authority, config.client_id
        );
        Self {
            config: config.clone(),
            cache: Mutex::new(CacheFile::default()),
        }
    }

    fn cache(&self) -> MutexGuard<'_, CacheFile> {
        self.cache.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn persist(&self, cache: &CacheFile) {
        let path = PathBuf::from(&self.config.cache_path);
        match serde_json::to_string(cache) {
            Ok(serialized) => {
                if let Err(e) = std::fs::write(&path, serialized) {
                    warn!("Failed to write identity cache to {:?}: {}", path, e);
                }
            }
            Err(e) => warn!("Failed to serialize identity cache: {}", e),
        }
    }

    fn load_cache_file(&self) -> CacheFile {
        let path = PathBuf::from(&self.config.cache_path);
        let content = match std::fs::read_to_string(&path) {
            Ok(content) => content,
            Err(_) => {
                debug!("No identity cache at {:?}, starting empty", path);
                return CacheFile::default();
            }
        };
        match serde_json::from_str::<CacheFile>(&content) {
            Ok(cache) if cache.version == CACHE_SCHEMA_VERSION => cache,
            Ok(cache) => {
                warn!(
                    "Discarding identity cache with unsupported version {}",
                    cache.version
                );
                CacheFile::default()
            }
            Err(e) => {
                warn!("Discarding unreadable identity cache: {}", e);
                CacheFile::default()
            }
        }
    }
}

#[async_trait::async_trait]
impl IdentityProvider for OidcProvider {
    async fn initialize(&self) -> Result<(), AuthError> {
        let loaded = self.load_cache_file();
        *self.cache() = loaded;
        Ok(())
    }

    async fn handle_redirect(&self) -> Result<Option<Account>, AuthError> {
        let code = self.cache().pending_authorization_code.take();
        let code = match code {
            Some(code) => code,
            None => return Ok(None),
        };

        let response = exchange_authorization_code(self.config.clone(), code).await?;
        let id_token = response
            .id_token
            .ok_or_else(|| AuthError::Provider("token response is missing id_token".to_string()))?;
        let refresh_token = response.refresh_token.ok_or_else(|| {
            AuthError::Provider("token response is missing refresh_token".to_string())
        })?;

        let claims = decode_id_token_claims(&id_token)?;
        let account = Account {
            id: claims.sub.clone(),
            username: claims.preferred_username.unwrap_or(claims.sub),
            display_name: claims.name,
        };

        let snapshot = {
            let mut cache = self.cache();
            cache.accounts.retain(|c| c.account.id != account.id);
            cache.accounts.push(CachedAccount {
                account: account.clone(),
                refresh_token,
            });
            cache.clone()
        };
        self.persist(&snapshot);

        info!("Redirect sign-in completed for '{}'", account.username);
        Ok(Some(account))
    }

    fn active_account(&self) -> Option<Account> {
        let cache = self.cache();
        let active_id = cache.active_account_id.as_ref()?;
        cache
            .accounts
            .iter()
            .find(|c| &c.account.id == active_id)
            .map(|c| c.account.clone())
    }

    fn all_accounts(&self) -> Vec<Account> {
        self.cache()
            .accounts
            .iter()
            .map(|c| c.account.clone())
            .collect()
    }

    fn set_active_account(&self, account: &Account) {
        let snapshot = {
            let mut cache = self.cache();
            cache.active_account_id = Some(account.id.clone());
            cache.clone()
        };
        self.persist(&snapshot);
    }

    async fn acquire_token_silent(
        &self,
        scopes: &[String],
        account: &Account,
    ) -> Result<AccessToken, AuthError> {
        let refresh_token = self
            .cache()
            .accounts
            .iter()
            .find(|c| c.account.id == account.id)
            .map(|c| c.refresh_token.clone())
            // No cached session for this account, so silent acquisition
            // cannot succeed.
            .ok_or(AuthError::InteractionRequired)?;

        let response =
            redeem_refresh_token(self.config.clone(), refresh_token, scopes.join(" ")).await?;

        // The authority may rotate the refresh token on every redemption.
        if let Some(rotated) = response.refresh_token {
            let snapshot = {
                let mut cache = self.cache();
                for cached in cache.accounts.iter_mut() {
                    if cached.account.id == account.id {
                        cached.refresh_token = rotated.clone();
                    }
                }
                cache.clone()
            };
            self.persist(&snapshot);
        }

        Ok(AccessToken {
            token: response.access_token,
            expires_on: Utc::now() + Duration::seconds(response.expires_in),
        })
    }

    fn login_redirect(&self, scopes: &[String]) -> String {
        let query = serde_urlencoded::to_string([
            ("client_id", self.config.client_id.as_str()),
            ("response_type", "code"),
            ("redirect_uri", self.config.redirect_uri.as_str()),
            ("scope", scopes.join(" ").as_str()),
            ("state", uuid::Uuid::new_v4().to_string().as_str()),
        ])
        .unwrap_or_default();
        format!("{}?{}", self.config.authorize_endpoint(), query)
    }
}

/// Wire shape of a successful token-endpoint response.
#[derive(Deserialize, Debug, Clone)]
struct TokenResponse {
    access_token: String,
    expires_in: i64,
    refresh_token: Option<String>,
    id_token: Option<String>,
}

#[derive(Deserialize, Debug)]
struct OAuthErrorBody {
    error: String,
    error_description: Option<String>,
}

/// Redeems a refresh token for a fresh access token.
#[cfg_attr(not(test), cached(time = 10, result = true, sync_writes = true))]
async fn redeem_refresh_token(
    config: OidcConfig,
    refresh_token: String,
    scope: String,
) -> Result<TokenResponse, AuthError> {
    debug!(
        "Redeeming refresh token against authority '{}'",
        config.authority
    );

    let refresh_data = [
        ("client_id", config.client_id.as_str()),
        ("grant_type", "refresh_token"),
        ("refresh_token", refresh_token.as_str()),
        ("scope", scope.as_str()),
    ];

    request_token(&config.token_endpoint(), &refresh_data).await
}

/// Exchanges a redirect-produced authorization code for the initial token set.
async fn exchange_authorization_code(
    config: OidcConfig,
    code: String,
) -> Result<TokenResponse, AuthError> {
    debug!(
        "Exchanging authorization code against authority '{}'",
        config.authority
    );

    let exchange_data = [
        ("client_id", config.client_id.as_str()),
        ("grant_type", "authorization_code"),
        ("code", code.as_str()),
        ("redirect_uri", config.redirect_uri.as_str()),
    ];

    request_token(&config.token_endpoint(), &exchange_data).await
}

async fn request_token(
    token_endpoint: &str,
    form: &[(&str, &str)],
) -> Result<TokenResponse, AuthError> {
    let client = reqwest::Client::new();
    let response = client
        .post(token_endpoint)
        .form(form)
        .send()
        .await
        .map_err(|e| AuthError::Provider(format!("Failed to call token endpoint: {}", e)))?;

    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| AuthError::Provider(format!("Failed to read token response: {}", e)))?;

    if status.is_success() {
        serde_json::from_str::<TokenResponse>(&body)
            .map_err(|e| AuthError::Provider(format!("Failed to parse token response: {}", e)))
    } else {
        Err(map_oauth_error(status.as_u16(), &body))
    }
}

/// Maps a failed token-endpoint response onto the identity failure kinds.
/// A subset of OAuth error codes means "silent acquisition cannot succeed,
/// the user must sign in interactively".
fn map_oauth_error(status: u16, body: &str) -> AuthError {
    match serde_json::from_str::<OAuthErrorBody>(body) {
        Ok(oauth) => match oauth.error.as_str() {
            "interaction_required" | "invalid_grant" | "login_required" | "consent_required" => {
                AuthError::InteractionRequired
            }
            _ => AuthError::Provider(format!(
                "token endpoint returned {}: {}",
                status,
                oauth.error_description.unwrap_or(oauth.error)
            )),
        },
        Err(_) => AuthError::Provider(format!("token endpoint returned {}: {}", status, body)),
    }
}

#[derive(Deserialize, Debug)]
struct IdTokenClaims {
    sub: String,
    preferred_username: Option<String>,
    name: Option<String>,
}

/// Extracts the display claims from an id_token payload. The token arrived
/// over TLS from the configured authority, so the signature is not
/// re-verified here.
fn decode_id_token_claims(id_token: &str) -> Result<IdTokenClaims, AuthError> {
    let payload = id_token
        .split('.')
        .nth(1)
        .ok_or_else(|| AuthError::Provider("malformed id_token".to_string()))?;
    let decoded = URL_SAFE_NO_PAD
        .decode(payload)
        .map_err(|e| AuthError::Provider(format!("Failed to decode id_token payload: {}", e)))?;
    serde_json::from_slice(&decoded)
        .map_err(|e| AuthError::Provider(format!("Failed to parse id_token claims: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Server;
    use tokio;

    fn test_config(authority: String) -> OidcConfig {
        OidcConfig {
            authority,
            client_id: "test-client".to_string(),
            redirect_uri: "http://localhost:3000/callback".to_string(),
            cache_path: std::env::temp_dir()
                .join(format!("oidc-cache-{}.json", uuid::Uuid::new_v4()))
                .to_string_lossy()
                .into_owned(),
        }
    }

    fn encode_id_token(claims: &serde_json::Value) -> String {
        let header = URL_SAFE_NO_PAD.encode(r#"{"alg":"none"}"#);
        let payload = URL_SAFE_NO_PAD.encode(claims.to_string());
        format!("{}.{}.sig", header, payload)
    }

    /// Test that a refresh-token redemption returns the access token from the
    /// token endpoint.
    #[tokio::test]
    async fn test_redeem_refresh_token_success() {
        let response_body =
            r#"{"access_token": "fresh_token", "expires_in": 3600, "refresh_token": "rotated"}"#;

        let mut server = Server::new_async().await;
        let m = server
            .mock("POST", "/oauth2/v2.0/token")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(response_body)
            .create_async()
            .await;

        let config = test_config(server.url());
        let result =
            redeem_refresh_token(config, "dummy_refresh".to_string(), "api.read".to_string()).await;
        m.assert_async().await;
        let response = result.unwrap();
        assert_eq!(response.access_token, "fresh_token");
        assert_eq!(response.refresh_token.as_deref(), Some("rotated"));
    }

    /// Test that an expired grant maps to the interaction-required failure
    /// kind instead of a generic provider error.
    #[tokio::test]
    async fn test_redeem_refresh_token_interaction_required() {
        let response_body =
            r#"{"error": "invalid_grant", "error_description": "refresh token expired"}"#;

        let mut server = Server::new_async().await;
        let m = server
            .mock("POST", "/oauth2/v2.0/token")
            .with_status(400)
            .with_header("content-type", "application/json")
            .with_body(response_body)
            .create_async()
            .await;

        let config = test_config(server.url());
        let result =
            redeem_refresh_token(config, "stale_refresh".to_string(), "api.read".to_string()).await;
        m.assert_async().await;
        assert_eq!(result.unwrap_err(), AuthError::InteractionRequired);
    }

    /// Test that other OAuth failures keep the provider's message.
    #[tokio::test]
    async fn test_redeem_refresh_token_provider_error() {
        let response_body =
            r#"{"error": "server_error", "error_description": "authority unavailable"}"#;

        let mut server = Server::new_async().await;
        let m = server
            .mock("POST", "/oauth2/v2.0/token")
            .with_status(500)
            .with_body(response_body)
            .create_async()
            .await;

        let config = test_config(server.url());
        let result =
            redeem_refresh_token(config, "any".to_string(), "api.read".to_string()).await;
        m.assert_async().await;
        match result.unwrap_err() {
            AuthError::Provider(message) => assert!(message.contains("authority unavailable")),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    /// Test that a pending authorization code is exchanged and produces a
    /// cached account built from the id_token claims.
    #[tokio::test]
    async fn test_handle_redirect_produces_account() {
        let id_token = encode_id_token(&serde_json::json!({
            "sub": "account-1",
            "preferred_username": "amelia@example.com",
            "name": "Amelia Pond"
        }));
        let response_body = serde_json::json!({
            "access_token": "first_token",
            "expires_in": 3600,
            "refresh_token": "first_refresh",
            "id_token": id_token,
        })
        .to_string();

        let mut server = Server::new_async().await;
        let m = server
            .mock("POST", "/oauth2/v2.0/token")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(response_body)
            .create_async()
            .await;

        let provider = OidcProvider::new(&test_config(server.url()));
        provider.cache().pending_authorization_code = Some("auth-code".to_string());

        let account = provider.handle_redirect().await.unwrap().unwrap();
        m.assert_async().await;
        assert_eq!(account.id, "account-1");
        assert_eq!(account.username, "amelia@example.com");
        assert_eq!(account.display_name.as_deref(), Some("Amelia Pond"));

        // The account is cached but not auto-activated; that policy belongs
        // to the session bootstrap.
        assert!(provider.active_account().is_none());
        assert_eq!(provider.all_accounts(), vec![account]);
    }

    /// Test that silent acquisition without a cached session asks for
    /// interactive sign-in rather than calling the authority.
    #[tokio::test]
    async fn test_acquire_token_silent_without_cached_session() {
        let mut server = Server::new_async().await;
        let m = server
            .mock("POST", "/oauth2/v2.0/token")
            .expect(0)
            .create_async()
            .await;

        let provider = OidcProvider::new(&test_config(server.url()));
        let account = Account {
            id: "unknown".to_string(),
            username: "ghost@example.com".to_string(),
            display_name: None,
        };

        let result = provider
            .acquire_token_silent(&["api.read".to_string()], &account)
            .await;
        m.assert_async().await;
        assert_eq!(result.unwrap_err(), AuthError::InteractionRequired);
    }

    /// Test that a corrupted cache file is discarded instead of failing
    /// initialization.
    #[tokio::test]
    async fn test_initialize_with_corrupted_cache() {
        let config = test_config("https://login.example.com/tenant".to_string());
        std::fs::write(&config.cache_path, "{not json").unwrap();

        let provider = OidcProvider::new(&config);
        provider.initialize().await.unwrap();
        assert!(provider.all_accounts().is_empty());
        assert!(provider.active_account().is_none());
    }

    /// Test the id_token claim extraction against a known payload.
    #[test]
    fn test_decode_id_token_claims() {
        let token = encode_id_token(&serde_json::json!({
            "sub": "abc",
            "name": "Test User"
        }));
        let claims = decode_id_token_claims(&token).unwrap();
        assert_eq!(claims.sub, "abc");
        assert_eq!(claims.preferred_username, None);
        assert_eq!(claims.name.as_deref(), Some("Test User"));

        assert!(decode_id_token_claims("not-a-jwt").is_err());
    }
}
