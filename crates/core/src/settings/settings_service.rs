use std::collections::HashSet;
use std::sync::Arc;

use async_trait::async_trait;
use log::{debug, warn};
use serde_json::Value;

use super::{SettingsRepositoryTrait, SplitCategorySettings, SplitCategorySettingsUpdate};
use crate::constants::SETTINGS_OPTION_NAME;
use crate::errors::Result;
use crate::terms::CategoryId;

#[async_trait]
pub trait SplitCategorySettingsServiceTrait: Send + Sync {
    /// Current settings; a missing or malformed option reads as defaults.
    fn get_settings(&self) -> Result<SplitCategorySettings>;

    fn should_show_default_panel(&self) -> Result<bool>;

    async fn update_settings(
        &self,
        update: &SplitCategorySettingsUpdate,
    ) -> Result<SplitCategorySettings>;
}

pub struct SplitCategorySettingsService {
    settings_repository: Arc<dyn SettingsRepositoryTrait>,
}

impl SplitCategorySettingsService {
    pub fn new(settings_repository: Arc<dyn SettingsRepositoryTrait>) -> Self {
        SplitCategorySettingsService {
            settings_repository,
        }
    }
}

#[async_trait]
impl SplitCategorySettingsServiceTrait for SplitCategorySettingsService {
    fn get_settings(&self) -> Result<SplitCategorySettings> {
        let Some(value) = self.settings_repository.get_option(SETTINGS_OPTION_NAME)? else {
            return Ok(SplitCategorySettings::default());
        };

        if !value.is_object() {
            warn!(
                "Option {} is not an object, using defaults",
                SETTINGS_OPTION_NAME
            );
            return Ok(SplitCategorySettings::default());
        }

        match serde_json::from_value(value) {
            Ok(settings) => Ok(settings),
            Err(e) => {
                warn!(
                    "Failed to decode option {}: {}. Using defaults.",
                    SETTINGS_OPTION_NAME, e
                );
                Ok(SplitCategorySettings::default())
            }
        }
    }

    fn should_show_default_panel(&self) -> Result<bool> {
        Ok(self.get_settings()?.should_show_default_panel())
    }

    async fn update_settings(
        &self,
        update: &SplitCategorySettingsUpdate,
    ) -> Result<SplitCategorySettings> {
        let mut settings = self.get_settings()?;

        if let Some(ref raw_ids) = update.categories {
            let mut seen = HashSet::new();
            let mut categories = Vec::with_capacity(raw_ids.len());
            for raw in raw_ids {
                let id: CategoryId = raw.parse()?;
                if seen.insert(id) {
                    categories.push(id);
                }
            }
            settings.categories = categories;
        }

        if let Some(display) = update.display_category_metabox {
            settings.display_category_metabox = Some(display);
        }

        let value: Value = serde_json::to_value(&settings)?;
        self.settings_repository
            .update_option(SETTINGS_OPTION_NAME, value)
            .await?;

        debug!(
            "Saved split category settings: {} categories, display_category_metabox={:?}",
            settings.categories.len(),
            settings.display_category_metabox
        );

        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::Error;
    use crate::settings::InMemorySettingsRepository;
    use serde_json::json;

    fn service_with(value: Option<Value>) -> SplitCategorySettingsService {
        let mut repository = InMemorySettingsRepository::new();
        if let Some(value) = value {
            repository = repository.with_option(SETTINGS_OPTION_NAME, value);
        }
        SplitCategorySettingsService::new(Arc::new(repository))
    }

    #[test]
    fn test_missing_option_reads_as_defaults() {
        let service = service_with(None);
        assert_eq!(service.get_settings().unwrap(), SplitCategorySettings::default());
        assert!(service.should_show_default_panel().unwrap());
    }

    #[test]
    fn test_non_object_option_reads_as_defaults() {
        let service = service_with(Some(json!("garbage")));
        assert_eq!(service.get_settings().unwrap(), SplitCategorySettings::default());
    }

    #[test]
    fn test_reads_stored_settings() {
        let service = service_with(Some(json!({
            "categories": ["10", "20"],
            "display_category_metabox": "0",
        })));

        let settings = service.get_settings().unwrap();
        assert_eq!(settings.categories, vec![CategoryId::new(10), CategoryId::new(20)]);
        assert!(!service.should_show_default_panel().unwrap());
    }

    #[tokio::test]
    async fn test_update_deduplicates_keeping_first_occurrence() {
        let service = service_with(None);

        let saved = service
            .update_settings(&SplitCategorySettingsUpdate {
                categories: Some(vec!["20".into(), "10".into(), "20".into()]),
                display_category_metabox: None,
            })
            .await
            .unwrap();

        assert_eq!(saved.categories, vec![CategoryId::new(20), CategoryId::new(10)]);
        assert_eq!(service.get_settings().unwrap(), saved);
    }

    #[tokio::test]
    async fn test_update_keeps_untouched_fields() {
        let service = service_with(Some(json!({ "categories": [5] })));

        service
            .update_settings(&SplitCategorySettingsUpdate {
                categories: None,
                display_category_metabox: Some(false),
            })
            .await
            .unwrap();

        let settings = service.get_settings().unwrap();
        assert_eq!(settings.categories, vec![CategoryId::new(5)]);
        assert_eq!(settings.display_category_metabox, Some(false));
    }

    #[tokio::test]
    async fn test_update_rejects_invalid_id() {
        let service = service_with(None);

        let result = service
            .update_settings(&SplitCategorySettingsUpdate {
                categories: Some(vec!["10".into(), "food".into()]),
                display_category_metabox: None,
            })
            .await;

        assert!(matches!(result, Err(Error::Validation(_))));
        assert!(service.get_settings().unwrap().categories.is_empty());
    }
}
