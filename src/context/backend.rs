use std::path::PathBuf;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

/// Settings for tenant-context persistence. When disabled, the context lives
/// in memory only and resets on restart.
#[derive(Deserialize, Serialize, Debug, JsonSchema, Clone)]
pub struct ContextStoreConfig {
    pub enabled: bool,
    pub path: Option<String>,
}

const CONTEXT_SCHEMA_VERSION: u32 = 1;

/// On-disk layout of the persisted tenant context. Both id and name are
/// written together so a reload can never observe a half-set context.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct PersistedContext {
    pub version: u32,
    pub selected_client_id: Option<String>,
    pub selected_client_name: Option<String>,
}

impl PersistedContext {
    pub fn new(selected_client_id: Option<String>, selected_client_name: Option<String>) -> Self {
        PersistedContext {
            version: CONTEXT_SCHEMA_VERSION,
            selected_client_id,
            selected_client_name,
        }
    }
}

/// Durable storage for the tenant context. The store is a UI convenience:
/// a failed load falls back to the default context and a failed save is
/// logged, never surfaced.
pub trait ContextBackend: Send + Sync {
    fn load(&self) -> Option<PersistedContext>;
    fn save(&self, context: &PersistedContext);
}

/// Creates a concrete backend based on the config. If persistence is
/// disabled or no path is given, returns the in-memory backend.
pub fn create_backend(config: &ContextStoreConfig) -> Box<dyn ContextBackend> {
    if !config.enabled {
        info!("Context persistence is disabled. Using MemoryBackend.");
        return Box::new(MemoryBackend);
    }
    match &config.path {
        Some(path) => Box::new(FileBackend::new(PathBuf::from(path))),
        None => {
            warn!("Context persistence enabled without a path. Using MemoryBackend.");
            Box::new(MemoryBackend)
        }
    }
}

/// Persists the context as a single versioned JSON document on disk.
pub struct FileBackend {
    path: PathBuf,
}

impl FileBackend {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl ContextBackend for FileBackend {
    fn load(&self) -> Option<PersistedContext> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(_) => {
                debug!("No persisted context at {:?}", self.path);
                return None;
            }
        };
        match serde_json::from_str::<PersistedContext>(&content) {
            Ok(context) if context.version == CONTEXT_SCHEMA_VERSION => Some(context),
            Ok(context) => {
                warn!(
                    "Discarding persisted context with unsupported version {}",
                    context.version
                );
                None
            }
            Err(e) => {
                warn!("Discarding unreadable persisted context: {}", e);
                None
            }
        }
    }

    fn save(&self, context: &PersistedContext) {
        match serde_json::to_string(context) {
            Ok(serialized) => {
                if let Err(e) = std::fs::write(&self.path, serialized) {
                    warn!("Failed to persist context to {:?}: {}", self.path, e);
                }
            }
            Err(e) => warn!("Failed to serialize context: {}", e),
        }
    }
}

/// A backend that persists nothing.
pub struct MemoryBackend;

impl ContextBackend for MemoryBackend {
    fn load(&self) -> Option<PersistedContext> {
        None
    }

    fn save(&self, _context: &PersistedContext) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path() -> PathBuf {
        std::env::temp_dir().join(format!("context-{}.json", uuid::Uuid::new_v4()))
    }

    /// Test that a saved context is loaded back unchanged.
    #[test]
    fn test_file_backend_round_trip() {
        let backend = FileBackend::new(temp_path());
        let context = PersistedContext::new(Some("c1".to_string()), Some("Acme".to_string()));
        backend.save(&context);
        assert_eq!(backend.load(), Some(context));
    }

    /// Test that a missing file loads as "nothing persisted".
    #[test]
    fn test_file_backend_missing_file() {
        let backend = FileBackend::new(temp_path());
        assert_eq!(backend.load(), None);
    }

    /// Test that corrupted JSON is discarded instead of raised.
    #[test]
    fn test_file_backend_corrupted_content() {
        let path = temp_path();
        std::fs::write(&path, "{definitely not json").unwrap();
        let backend = FileBackend::new(path);
        assert_eq!(backend.load(), None);
    }

    /// Test that an unknown schema version is discarded.
    #[test]
    fn test_file_backend_unsupported_version() {
        let path = temp_path();
        std::fs::write(
            &path,
            r#"{"version": 99, "selected_client_id": "c1", "selected_client_name": "Acme"}"#,
        )
        .unwrap();
        let backend = FileBackend::new(path);
        assert_eq!(backend.load(), None);
    }
}
