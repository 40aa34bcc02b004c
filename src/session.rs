//! Session/token provider: owns the active-account policy and hands out
//! currently valid bearer tokens for it.

use std::sync::Arc;

use tracing::{debug, info};

use crate::error::AuthError;
use crate::identity::{AccessToken, Account, IdentityProvider};

/// Wraps the injected identity provider and exposes "get a valid bearer token
/// for the active account, refreshing silently if needed".
pub struct Session {
    provider: Arc<dyn IdentityProvider>,
}

impl Session {
    /// Builds a session without running the startup policy. Useful when the
    /// provider's active account is already established.
    pub fn new(provider: Arc<dyn IdentityProvider>) -> Self {
        Self { provider }
    }

    /// Runs the one-time startup account-selection policy:
    /// if no active account is set but cached accounts exist, the first
    /// cached account becomes active; a redirect-produced account becomes
    /// active and takes priority over that fallback.
    pub async fn bootstrap(provider: Arc<dyn IdentityProvider>) -> Result<Self, AuthError> {
        provider.initialize().await?;
        let redirect_account = provider.handle_redirect().await?;

        if provider.active_account().is_none() {
            let cached = provider.all_accounts();
            if let Some(first) = cached.first() {
                debug!("No active account; falling back to first cached account");
                provider.set_active_account(first);
            }
        }

        if let Some(account) = redirect_account {
            info!("Activating redirect-produced account '{}'", account.username);
            provider.set_active_account(&account);
        }

        Ok(Self { provider })
    }

    pub fn active_account(&self) -> Option<Account> {
        self.provider.active_account()
    }

    /// Acquires a currently valid token for the active account, silently.
    /// Fails with `NoActiveAccount` before sign-in, `InteractionRequired`
    /// when a silent refresh is not enough.
    pub async fn access_token(&self, scopes: &[String]) -> Result<AccessToken, AuthError> {
        let account = self
            .provider
            .active_account()
            .ok_or(AuthError::NoActiveAccount)?;
        self.provider.acquire_token_silent(scopes, &account).await
    }

    /// URL of the interactive sign-in flow; the UI redirects here when a
    /// silent acquisition reported `InteractionRequired`.
    pub fn login_url(&self, scopes: &[String]) -> String {
        self.provider.login_redirect(scopes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    /// In-memory identity provider scripted per test.
    struct FakeProvider {
        accounts: Vec<Account>,
        active: Mutex<Option<String>>,
        redirect_account: Option<Account>,
    }

    impl FakeProvider {
        fn account(id: &str) -> Account {
            Account {
                id: id.to_string(),
                username: format!("{}@example.com", id),
                display_name: None,
            }
        }

        fn new(accounts: Vec<Account>, redirect_account: Option<Account>) -> Self {
            Self {
                accounts,
                active: Mutex::new(None),
                redirect_account,
            }
        }
    }

    #[async_trait::async_trait]
    impl IdentityProvider for FakeProvider {
        async fn initialize(&self) -> Result<(), AuthError> {
            Ok(())
        }

        async fn handle_redirect(&self) -> Result<Option<Account>, AuthError> {
            Ok(self.redirect_account.clone())
        }

        fn active_account(&self) -> Option<Account> {
            let active = self.active.lock().unwrap().clone()?;
            self.accounts.iter().find(|a| a.id == active).cloned().or(
                self.redirect_account
                    .clone()
                    .filter(|a| a.id == active),
            )
        }

        fn all_accounts(&self) -> Vec<Account> {
            self.accounts.clone()
        }

        fn set_active_account(&self, account: &Account) {
            *self.active.lock().unwrap() = Some(account.id.clone());
        }

        async fn acquire_token_silent(
            &self,
            _scopes: &[String],
            account: &Account,
        ) -> Result<AccessToken, AuthError> {
            Ok(AccessToken {
                token: format!("token-for-{}", account.id),
                expires_on: chrono::Utc::now() + chrono::Duration::seconds(3600),
            })
        }

        fn login_redirect(&self, _scopes: &[String]) -> String {
            "https://login.example.com/authorize".to_string()
        }
    }

    /// Test that with no active account, the first cached account is
    /// promoted at startup.
    #[tokio::test]
    async fn test_bootstrap_falls_back_to_first_cached_account() {
        let provider = Arc::new(FakeProvider::new(
            vec![FakeProvider::account("a1"), FakeProvider::account("a2")],
            None,
        ));
        let session = Session::bootstrap(provider).await.unwrap();
        assert_eq!(session.active_account().unwrap().id, "a1");
    }

    /// Test that a redirect-produced account wins over the cached fallback.
    #[tokio::test]
    async fn test_bootstrap_prefers_redirect_account() {
        let redirect = FakeProvider::account("fresh");
        let provider = Arc::new(FakeProvider::new(
            vec![FakeProvider::account("a1")],
            Some(redirect),
        ));
        let session = Session::bootstrap(provider).await.unwrap();
        assert_eq!(session.active_account().unwrap().id, "fresh");
    }

    /// Test that token acquisition without any account fails with
    /// `NoActiveAccount`.
    #[tokio::test]
    async fn test_access_token_without_account() {
        let provider = Arc::new(FakeProvider::new(vec![], None));
        let session = Session::new(provider);
        let result = session.access_token(&["api.read".to_string()]).await;
        assert_eq!(result.unwrap_err(), AuthError::NoActiveAccount);
    }

    /// Test the happy path: the active account's token is returned.
    #[tokio::test]
    async fn test_access_token_for_active_account() {
        let provider = Arc::new(FakeProvider::new(vec![FakeProvider::account("a1")], None));
        let session = Session::bootstrap(provider).await.unwrap();
        let token = session.access_token(&["api.read".to_string()]).await.unwrap();
        assert_eq!(token.token, "token-for-a1");
    }
}
