pub mod backend;
pub mod store;

pub use backend::{create_backend, ContextBackend, ContextStoreConfig, FileBackend, MemoryBackend};
pub use store::{ContextStore, TenantContext};
