//! The extension as seen by the host: every host event maps to one method
//! here, which resolves the split categories afresh and applies the policy.

use std::sync::Arc;

use log::{debug, warn};

use crate::constants::HOST_MISSING_NOTICE;
use crate::errors::Result;
use crate::host::{
    AdminNotice, CategoryImageProviderTrait, EntryOutputTrait, RequestContext, TemplateHostTrait,
};
use crate::policy::{
    apply_admin_panels, build_content_block_registry, exclude_split_trees, extend_export_fields,
    generic_panel_pages, is_excluded, render_category_checklist_field,
    sanitize_category_checklist, BlockKey, CategoryExclusionFilter, CategorySelectOptions,
    ContentBlockRegistry, ExportFieldSpec, PanelFieldSpec, PanelFieldType, PanelRegistry,
    SelectionLimit,
};
use crate::resolver::{SplitCategoryResolver, SplitCategorySet};
use crate::settings::{
    register_settings_fields, register_settings_sections, render_category_select_field,
    SettingsField, SettingsSection, SplitCategorySettings, SplitCategorySettingsServiceTrait,
    SplitCategorySettingsUpdate,
};
use crate::terms::{CategoryId, EntryId, TermRepositoryTrait};

use super::ExtensionConfig;

/// Host capabilities the extension is wired to.
pub struct ExtensionServices {
    pub settings_service: Arc<dyn SplitCategorySettingsServiceTrait>,
    pub terms: Arc<dyn TermRepositoryTrait>,
    pub templates: Arc<dyn TemplateHostTrait>,
    /// Image companion, when installed.
    pub images: Option<Arc<dyn CategoryImageProviderTrait>>,
}

pub struct SplitCategoriesExtension {
    settings_service: Arc<dyn SplitCategorySettingsServiceTrait>,
    terms: Arc<dyn TermRepositoryTrait>,
    templates: Arc<dyn TemplateHostTrait>,
    images: Option<Arc<dyn CategoryImageProviderTrait>>,
    resolver: SplitCategoryResolver,
    config: ExtensionConfig,
}

impl SplitCategoriesExtension {
    pub fn new(services: ExtensionServices, config: ExtensionConfig) -> Self {
        let resolver = SplitCategoryResolver::new(Arc::clone(&services.terms));
        Self {
            settings_service: services.settings_service,
            terms: services.terms,
            templates: services.templates,
            images: services.images,
            resolver,
            config,
        }
    }

    /// Starts the extension, or yields the notice to show when the host
    /// directory is not active.
    pub fn bootstrap(
        directory_active: bool,
        services: ExtensionServices,
        config: ExtensionConfig,
    ) -> std::result::Result<Self, AdminNotice> {
        if !directory_active {
            warn!("Host directory is not active, split categories disabled");
            return Err(AdminNotice::error(HOST_MISSING_NOTICE));
        }

        Ok(Self::new(services, config))
    }

    pub fn has_image_companion(&self) -> bool {
        self.images.is_some()
    }

    pub fn selection_limit(&self) -> SelectionLimit {
        self.config.selection_limit
    }

    pub fn settings(&self) -> Result<SplitCategorySettings> {
        self.settings_service.get_settings()
    }

    pub async fn update_settings(
        &self,
        update: &SplitCategorySettingsUpdate,
    ) -> Result<SplitCategorySettings> {
        self.settings_service.update_settings(update).await
    }

    /// The split categories of the current configuration and taxonomy state.
    pub fn split_categories(&self) -> Result<SplitCategorySet> {
        self.resolver.resolve(&self.settings()?)
    }

    pub fn should_show_default_panel(&self) -> Result<bool> {
        self.settings_service.should_show_default_panel()
    }

    pub fn is_category_excluded(&self, category: CategoryId) -> Result<bool> {
        is_excluded(category, &self.split_categories()?, self.terms.as_ref())
    }

    // Settings page

    pub fn settings_sections(&self, sections: Vec<SettingsSection>) -> Vec<SettingsSection> {
        register_settings_sections(sections)
    }

    pub fn settings_fields(&self, fields: Vec<SettingsField>) -> Vec<SettingsField> {
        register_settings_fields(fields)
    }

    pub fn render_settings_field(&self, name: &str, field: &SettingsField) -> Result<String> {
        let settings = self.settings()?;
        render_category_select_field(name, &settings.categories, field, self.templates.as_ref())
    }

    // Entry edit screens

    pub fn register_panels(
        &self,
        registry: &mut PanelRegistry,
        context: RequestContext,
    ) -> Result<()> {
        let split_set = self.split_categories()?;
        let show_default = self.should_show_default_panel()?;
        let pages = generic_panel_pages(context, &self.config.admin_page_hooks);

        apply_admin_panels(registry, &split_set, show_default, pages);
        Ok(())
    }

    /// Renders a dedicated panel's checklist. The generic checklist belongs
    /// to the host and yields `None`.
    pub fn render_checklist_field(
        &self,
        field: &PanelFieldSpec,
        entry_id: EntryId,
    ) -> Result<Option<String>> {
        match field.field_type {
            PanelFieldType::CategoryChecklist { category } => {
                render_category_checklist_field(
                    category,
                    entry_id,
                    self.terms.as_ref(),
                    self.templates.as_ref(),
                )
                .map(Some)
            }
            PanelFieldType::DefaultCategoryChecklist { .. } => Ok(None),
        }
    }

    pub fn sanitize_checklist<T>(&self, value: T) -> T {
        sanitize_category_checklist(value)
    }

    pub fn form_category_options(
        &self,
        options: CategorySelectOptions,
    ) -> Result<CategorySelectOptions> {
        Ok(exclude_split_trees(options, &self.split_categories()?))
    }

    // CSV export

    pub fn csv_export_fields(&self, fields: Vec<ExportFieldSpec>) -> Result<Vec<ExportFieldSpec>> {
        Ok(extend_export_fields(fields, &self.split_categories()?))
    }

    // Public output

    /// Filter for the host's generic category block, valid for one request.
    pub fn exclusion_filter(&self) -> Result<CategoryExclusionFilter> {
        Ok(CategoryExclusionFilter::new(
            self.split_categories()?,
            Arc::clone(&self.terms),
        ))
    }

    pub fn content_blocks(&self, context: RequestContext) -> Result<ContentBlockRegistry> {
        Ok(build_content_block_registry(
            &self.split_categories()?,
            self.images.clone(),
            Arc::clone(&self.terms),
            context,
        ))
    }

    /// Adds the split category blocks to the host's content block options.
    pub fn content_block_options(
        &self,
        options: Vec<(String, String)>,
        context: RequestContext,
    ) -> Result<Vec<(String, String)>> {
        Ok(self.content_blocks(context)?.extend_options(options))
    }

    /// Renders the block behind a host block key. Keys that do not name a
    /// registered split category block render nothing.
    pub fn render_content_block(
        &self,
        blocks: &ContentBlockRegistry,
        key: &str,
        entry: &mut dyn EntryOutputTrait,
        exclusion: &CategoryExclusionFilter,
    ) -> Result<Option<String>> {
        let Some(block_key) = BlockKey::from_block_key(key) else {
            debug!("Ignoring content block {}", key);
            return Ok(None);
        };

        blocks.render(&block_key, entry, exclusion)
    }
}
