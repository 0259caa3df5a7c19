//! Auto-detect the best available storage backend.
//!
//! Priority: localStorage → Memory (fallback)

use std::rc::Rc;
use pynico_core::ports::StoragePort;
use pynico_types::config::StorageBackendType;
use super::{LocalStorage, MemoryStorage};

/// Open the configured backend, falling back to memory.
/// Returns a trait object so callers are backend-agnostic.
pub fn open_storage(backend: &StorageBackendType) -> Rc<dyn StoragePort> {
    match backend {
        StorageBackendType::Memory => {
            log::info!("Storage backend: memory (configured)");
            Rc::new(MemoryStorage::new())
        }
        StorageBackendType::LocalStorage | StorageBackendType::Auto => auto_detect_storage(),
    }
}

pub fn auto_detect_storage() -> Rc<dyn StoragePort> {
    match LocalStorage::open() {
        Ok(storage) => {
            log::info!("Storage backend: localStorage");
            Rc::new(storage)
        }
        Err(e) => {
            log::warn!("localStorage unavailable ({}), falling back to memory", e);
            Rc::new(MemoryStorage::new())
        }
    }
}
