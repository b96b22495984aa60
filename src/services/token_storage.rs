use web_sys::{window, Storage};

use crate::error::StorageError;
use crate::utils::constants::TOKEN_STORAGE_KEY;

/// Persistencia del token de sesión
pub trait TokenStorage {
    fn load(&self) -> Option<String>;
    fn save(&self, token: &str) -> Result<(), StorageError>;
    fn remove(&self) -> Result<(), StorageError>;
}

/// Token en `localStorage`, guardado como texto plano bajo `key`
pub struct LocalTokenStorage {
    key: String,
}

impl LocalTokenStorage {
    pub fn new() -> Self {
        Self::with_key(TOKEN_STORAGE_KEY)
    }

    pub fn with_key(key: &str) -> Self {
        Self { key: key.to_string() }
    }

    fn storage() -> Result<Storage, StorageError> {
        window()
            .and_then(|w| w.local_storage().ok())
            .flatten()
            .ok_or(StorageError::Unavailable)
    }
}

impl Default for LocalTokenStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl TokenStorage for LocalTokenStorage {
    fn load(&self) -> Option<String> {
        let storage = Self::storage().ok()?;
        storage
            .get_item(&self.key)
            .ok()
            .flatten()
            .filter(|t| !t.is_empty())
    }

    fn save(&self, token: &str) -> Result<(), StorageError> {
        Self::storage()?
            .set_item(&self.key, token)
            .map_err(|_| StorageError::Write(self.key.clone()))
    }

    fn remove(&self) -> Result<(), StorageError> {
        Self::storage()?
            .remove_item(&self.key)
            .map_err(|_| StorageError::Remove(self.key.clone()))
    }
}
