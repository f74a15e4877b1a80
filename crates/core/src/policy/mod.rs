//! Content Filtering Policy.
//!
//! Decides which categories leave the generic panel, block and export column,
//! and builds the dedicated replacements for each split category.

mod blocks;
mod exclusion;
mod export;
mod image_grid;
mod panels;
mod selection_limit;

pub use blocks::{
    build_content_block_registry, match_category_id_from_block_key, BlockKey, BlockRenderer,
    BlockVariant, ContentBlockRegistry, RegisteredBlock,
};
pub use exclusion::{
    exclude_split_trees, is_excluded, CategoryExclusionFilter, CategorySelectOptions,
    ExclusionOverride,
};
pub use export::{build_export_columns, extend_export_fields, ExportFieldSpec};
pub use image_grid::ImageGridItemFilter;
pub use panels::{
    apply_admin_panels, build_admin_panels, generic_panel_pages, render_category_checklist_field,
    sanitize_category_checklist, PanelContext, PanelFieldSpec, PanelFieldType, PanelPriority,
    PanelRegistry, PanelSpec,
};
pub use selection_limit::{ChecklistItemState, SelectionLimit};
