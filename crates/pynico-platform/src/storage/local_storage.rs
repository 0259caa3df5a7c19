//! `window.localStorage` backend.
//! Persistent across page reloads; values are stored as UTF-8 strings.

use async_trait::async_trait;
use pynico_core::ports::StoragePort;
use pynico_types::{ChatError, Result};

pub struct LocalStorage {
    storage: web_sys::Storage,
}

impl LocalStorage {
    /// Fails when there is no window or storage is disabled (e.g. sandboxed frames).
    pub fn open() -> Result<Self> {
        let window = web_sys::window()
            .ok_or_else(|| ChatError::Storage("No window object".to_string()))?;

        let storage = window
            .local_storage()
            .map_err(|e| ChatError::JsInterop(format!("{:?}", e)))?
            .ok_or_else(|| ChatError::Storage("localStorage not available".to_string()))?;

        Ok(Self { storage })
    }
}

#[async_trait(?Send)]
impl StoragePort for LocalStorage {
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        let value = self
            .storage
            .get_item(key)
            .map_err(|e| ChatError::JsInterop(format!("{:?}", e)))?;
        Ok(value.map(String::into_bytes))
    }

    async fn set(&self, key: &str, value: &[u8]) -> Result<()> {
        let text = std::str::from_utf8(value)
            .map_err(|e| ChatError::Storage(format!("value is not UTF-8: {}", e)))?;
        // Throws QuotaExceededError when the origin's quota is used up
        self.storage
            .set_item(key, text)
            .map_err(|e| ChatError::JsInterop(format!("{:?}", e)))
    }

    fn backend_name(&self) -> &str {
        "localstorage"
    }
}
