use std::sync::{PoisonError, RwLock};

use tracing::debug;

use crate::context::backend::{ContextBackend, PersistedContext};

/// Which tenant's data the rest of the application should query. Both fields
/// are `None` together (platform-global mode) or `Some` together (scoped to
/// one client); the store never exposes a half-set state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TenantContext {
    pub selected_client_id: Option<String>,
    pub selected_client_name: Option<String>,
}

/// Holds and persists the selected tenant. The gateway only reads this
/// store; writes happen through explicit user-driven actions.
pub struct ContextStore {
    state: RwLock<TenantContext>,
    backend: Box<dyn ContextBackend>,
}

impl ContextStore {
    /// Creates the store, restoring any persisted context. Missing or
    /// unreadable persisted content yields the default global context.
    pub fn new(backend: Box<dyn ContextBackend>) -> Self {
        let state = match backend.load() {
            Some(persisted) => TenantContext {
                selected_client_id: persisted.selected_client_id,
                selected_client_name: persisted.selected_client_name,
            },
            None => TenantContext::default(),
        };
        Self {
            state: RwLock::new(state),
            backend,
        }
    }

    /// Scopes the application to one client. No validation of id or name
    /// happens here; that is the caller's responsibility.
    pub fn select_client(&self, id: impl Into<String>, name: impl Into<String>) {
        let id = id.into();
        let name = name.into();
        debug!("Selecting client context '{}' ({})", name, id);
        let snapshot = {
            let mut state = self
                .state
                .write()
                .unwrap_or_else(PoisonError::into_inner);
            state.selected_client_id = Some(id);
            state.selected_client_name = Some(name);
            state.clone()
        };
        self.persist(&snapshot);
    }

    /// Returns the application to platform-global scope. Idempotent.
    pub fn clear_client_context(&self) {
        debug!("Clearing client context");
        let snapshot = {
            let mut state = self
                .state
                .write()
                .unwrap_or_else(PoisonError::into_inner);
            state.selected_client_id = None;
            state.selected_client_name = None;
            state.clone()
        };
        self.persist(&snapshot);
    }

    /// Synchronous read of the current context, usable from the gateway.
    pub fn state(&self) -> TenantContext {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn selected_client_id(&self) -> Option<String> {
        self.state().selected_client_id
    }

    fn persist(&self, state: &TenantContext) {
        self.backend.save(&PersistedContext::new(
            state.selected_client_id.clone(),
            state.selected_client_name.clone(),
        ));
    }
}
