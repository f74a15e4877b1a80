//! Settings module - the persisted split category configuration.

mod memory_repository;
mod settings_model;
mod settings_schema;
mod settings_service;
mod settings_traits;

pub use memory_repository::InMemorySettingsRepository;
pub use settings_model::{SplitCategorySettings, SplitCategorySettingsUpdate};
pub use settings_schema::{
    register_settings_fields, register_settings_sections, render_category_select_field,
    SettingsField, SettingsSection,
};
pub use settings_service::{SplitCategorySettingsService, SplitCategorySettingsServiceTrait};
pub use settings_traits::SettingsRepositoryTrait;
