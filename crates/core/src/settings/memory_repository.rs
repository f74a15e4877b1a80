//! In-memory option storage.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::Value;

use crate::errors::{Error, Result};

use super::SettingsRepositoryTrait;

/// Option storage backed by a map, used for embedding and tests.
#[derive(Default)]
pub struct InMemorySettingsRepository {
    options: Mutex<HashMap<String, Value>>,
}

impl InMemorySettingsRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_option(self, name: &str, value: Value) -> Self {
        if let Ok(mut options) = self.options.lock() {
            options.insert(name.to_string(), value);
        }
        self
    }
}

#[async_trait]
impl SettingsRepositoryTrait for InMemorySettingsRepository {
    fn get_option(&self, name: &str) -> Result<Option<Value>> {
        let options = self
            .options
            .lock()
            .map_err(|e| Error::Settings(e.to_string()))?;
        Ok(options.get(name).cloned())
    }

    async fn update_option(&self, name: &str, value: Value) -> Result<()> {
        let mut options = self
            .options
            .lock()
            .map_err(|e| Error::Settings(e.to_string()))?;
        options.insert(name.to_string(), value);
        Ok(())
    }
}
