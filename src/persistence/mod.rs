//! Key-value persistence
//!
//! The game only stores two things: the best score and the settings blob.
//! Both go through `KeyValueStore`, backed by LocalStorage on web and by an
//! in-memory map elsewhere.

use std::collections::HashMap;

use crate::error::Result;

/// String-keyed storage of string values
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
    fn remove(&mut self, key: &str) -> Result<()>;
}

/// In-memory store for native runs and tests
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    items: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.items.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.items.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.items.remove(key);
        Ok(())
    }
}

#[cfg(target_arch = "wasm32")]
pub use local::LocalStore;

#[cfg(target_arch = "wasm32")]
mod local {
    use super::KeyValueStore;
    use crate::error::{Result, SnakeError};

    /// Browser LocalStorage
    pub struct LocalStore {
        storage: web_sys::Storage,
    }

    fn js_error(err: wasm_bindgen::JsValue) -> SnakeError {
        SnakeError::Storage(format!("{err:?}"))
    }

    impl LocalStore {
        /// `None` when storage is unavailable (private mode, sandboxed iframe)
        pub fn open() -> Option<Self> {
            let storage = web_sys::window()?.local_storage().ok()??;
            Some(Self { storage })
        }
    }

    impl KeyValueStore for LocalStore {
        fn get(&self, key: &str) -> Result<Option<String>> {
            self.storage.get_item(key).map_err(js_error)
        }

        fn set(&mut self, key: &str, value: &str) -> Result<()> {
            self.storage.set_item(key, value).map_err(js_error)
        }

        fn remove(&mut self, key: &str) -> Result<()> {
            self.storage.remove_item(key).map_err(js_error)
        }
    }
}
