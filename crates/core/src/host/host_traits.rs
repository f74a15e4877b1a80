//! Traits implemented by the host adapter.

use crate::errors::Result;
use crate::terms::{CategoryId, DirectoryHome};

use super::{CategoryBlockAtts, CategoryItemContext, TermChecklistArgs, TermSelectArgs};

/// Template parts provided by the host.
pub trait TemplateHostTrait: Send + Sync {
    fn term_checklist(&self, args: &TermChecklistArgs) -> Result<String>;

    fn term_select(&self, args: &TermSelectArgs) -> Result<String>;
}

/// Filters applied to each item while the host renders a category block.
///
/// Request-scoped; implementations may hold non-`Sync` state.
pub trait CategoryItemFilter {
    /// Returns the HTML for one item. An empty string drops the item.
    fn filter_item(&self, html: String, item: &CategoryItemContext<'_>) -> Result<String>;

    /// Class list of the items container.
    fn filter_items_class(&self, classes: Vec<String>) -> Vec<String> {
        classes
    }
}

/// The entry whose public output is being rendered.
pub trait EntryOutputTrait {
    /// Renders the entry's category block, passing every item through `filter`.
    fn render_category_block(
        &mut self,
        atts: &CategoryBlockAtts,
        filter: &dyn CategoryItemFilter,
    ) -> Result<String>;

    fn directory_home(&self) -> DirectoryHome;
}

/// Optional companion capability providing category images.
pub trait CategoryImageProviderTrait: Send + Sync {
    /// Image markup for a category, empty when it has none.
    fn image_html(&self, category_id: CategoryId) -> Result<String>;
}
