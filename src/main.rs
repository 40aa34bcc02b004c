use std::sync::Arc;

use tracing::{error, info};

use inspect_admin::config;
use inspect_admin::context::{create_backend, ContextStore};
use inspect_admin::gateway::Gateway;
use inspect_admin::identity::OidcProvider;
use inspect_admin::models::common::ListQuery;
use inspect_admin::services::ClientService;
use inspect_admin::session::Session;
use inspect_admin::utils::logger::init_logging;

/// Connectivity smoke run: bootstraps the session from the cached identity,
/// restores the tenant context, and lists the first page of clients.
/// `inspect-admin schema` prints the config JSON schema instead.
#[tokio::main]
async fn main() {
    if std::env::args().nth(1).as_deref() == Some("schema") {
        config::print_schema();
        return;
    }

    let config = config::load_config();
    init_logging(&config.logging);

    let provider = Arc::new(OidcProvider::new(&config.oidc));
    let session = match Session::bootstrap(provider).await {
        Ok(session) => Arc::new(session),
        Err(e) => {
            error!("Failed to bootstrap session: {}", e);
            std::process::exit(1);
        }
    };

    let account = match session.active_account() {
        Some(account) => account,
        None => {
            info!(
                "No cached session. Sign in at: {}",
                session.login_url(&config.scopes)
            );
            return;
        }
    };
    info!("Signed in as '{}'", account.username);

    let context = Arc::new(ContextStore::new(create_backend(&config.context_store)));
    match context.state().selected_client_name {
        Some(name) => info!("Tenant context: '{}'", name),
        None => info!("Tenant context: platform-global"),
    }

    let gateway = Arc::new(Gateway::new(
        &config.api_base_url,
        config.scopes.clone(),
        session,
        context,
    ));

    let clients = ClientService::new(gateway);
    match clients.list(&ListQuery::default()).await {
        Ok(page) => info!(
            "Fetched {} of {} clients",
            page.items.len(),
            page.total_count
        ),
        Err(e) => {
            error!("Failed to list clients: {}", e);
            std::process::exit(1);
        }
    }
}
