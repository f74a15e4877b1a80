//! Repository traits for settings.

use async_trait::async_trait;
use serde_json::Value;

use crate::errors::Result;

/// Host option storage.
#[async_trait]
pub trait SettingsRepositoryTrait: Send + Sync {
    /// Get a stored option, `None` if it was never saved.
    fn get_option(&self, name: &str) -> Result<Option<Value>>;

    /// Replace a stored option.
    async fn update_option(&self, name: &str, value: Value) -> Result<()>;
}
