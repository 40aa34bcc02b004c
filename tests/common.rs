use std::sync::{Arc, Mutex};

use inspect_admin::context::{ContextStore, MemoryBackend};
use inspect_admin::error::AuthError;
use inspect_admin::gateway::Gateway;
use inspect_admin::identity::{AccessToken, Account, IdentityProvider};
use inspect_admin::session::Session;

pub const TEST_TOKEN: &str = "integration-test-token";

/// In-memory identity provider with one signed-in account.
pub struct FakeIdentity {
    account: Account,
    active: Mutex<bool>,
}

impl FakeIdentity {
    pub fn signed_in() -> Self {
        Self {
            account: Account {
                id: "acct-1".to_string(),
                username: "platform-admin@example.com".to_string(),
                display_name: Some("Platform Admin".to_string()),
            },
            active: Mutex::new(true),
        }
    }
}

#[async_trait::async_trait]
impl IdentityProvider for FakeIdentity {
    async fn initialize(&self) -> Result<(), AuthError> {
        Ok(())
    }

    async fn handle_redirect(&self) -> Result<Option<Account>, AuthError> {
        Ok(None)
    }

    fn active_account(&self) -> Option<Account> {
        if *self.active.lock().unwrap() {
            Some(self.account.clone())
        } else {
            None
        }
    }

    fn all_accounts(&self) -> Vec<Account> {
        vec![self.account.clone()]
    }

    fn set_active_account(&self, _account: &Account) {
        *self.active.lock().unwrap() = true;
    }

    async fn acquire_token_silent(
        &self,
        _scopes: &[String],
        _account: &Account,
    ) -> Result<AccessToken, AuthError> {
        Ok(AccessToken {
            token: TEST_TOKEN.to_string(),
            expires_on: chrono::Utc::now() + chrono::Duration::seconds(3600),
        })
    }

    fn login_redirect(&self, _scopes: &[String]) -> String {
        "https://login.example.com/authorize".to_string()
    }
}

/// Builds a gateway over the given mock server URL with a signed-in session
/// and an in-memory tenant context.
pub fn build_gateway(base_url: &str) -> Arc<Gateway> {
    let session = Arc::new(Session::new(Arc::new(FakeIdentity::signed_in())));
    let context = Arc::new(ContextStore::new(Box::new(MemoryBackend)));
    Arc::new(Gateway::new(
        base_url,
        vec!["api://inspect-admin/.default".to_string()],
        session,
        context,
    ))
}
