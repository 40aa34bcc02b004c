use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::AuthError;

/// An identity-provider principal: an opaque id plus display claims.
/// Credentials are never held here; only the provider's own cache knows them.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Account {
    pub id: String,
    pub username: String,
    pub display_name: Option<String>,
}

/// A short-lived bearer credential scoped to a fixed set of OAuth scopes.
#[derive(Clone, Debug)]
pub struct AccessToken {
    pub token: String,
    pub expires_on: DateTime<Utc>,
}

/// The identity-provider capability the rest of the crate depends on.
///
/// This is injected rather than ambient so tests can supply a fake
/// implementation without a real identity backend.
#[async_trait::async_trait]
pub trait IdentityProvider: Send + Sync {
    /// One-time startup initialization (hydrates the provider's account cache).
    async fn initialize(&self) -> Result<(), AuthError>;

    /// Completes a pending redirect sign-in, if one exists, and returns the
    /// account it produced.
    async fn handle_redirect(&self) -> Result<Option<Account>, AuthError>;

    fn active_account(&self) -> Option<Account>;

    fn all_accounts(&self) -> Vec<Account>;

    fn set_active_account(&self, account: &Account);

    /// Acquires a token for the given account without user interaction.
    async fn acquire_token_silent(
        &self,
        scopes: &[String],
        account: &Account,
    ) -> Result<AccessToken, AuthError>;

    /// Builds the URL of the interactive sign-in flow for the given scopes.
    fn login_redirect(&self, scopes: &[String]) -> String;
}
