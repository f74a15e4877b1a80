//! Item markup for the "as image grid" content block variant.

use crate::errors::Result;
use crate::host::{CategoryImageProviderTrait, CategoryItemContext, CategoryItemFilter};
use crate::terms::{DirectoryHome, TermRepositoryTrait};

const IMAGE_CONTAINER_CLASS: &str = "cn-category-image-container";
const FALLBACK_ITEM_TAG: &str = "span";

/// Replaces each category item with an image, the term name and, when the
/// block links its items, an anchor to the category permalink.
pub struct ImageGridItemFilter<'a> {
    images: &'a dyn CategoryImageProviderTrait,
    terms: &'a dyn TermRepositoryTrait,
    home: DirectoryHome,
}

impl<'a> ImageGridItemFilter<'a> {
    pub fn new(
        images: &'a dyn CategoryImageProviderTrait,
        terms: &'a dyn TermRepositoryTrait,
        home: DirectoryHome,
    ) -> Self {
        Self {
            images,
            terms,
            home,
        }
    }
}

impl CategoryItemFilter for ImageGridItemFilter<'_> {
    fn filter_item(&self, _html: String, item: &CategoryItemContext<'_>) -> Result<String> {
        let term = item.term;
        let name = format!(
            r#"<span class="cn-term-name">{}</span>"#,
            html_escape::encode_text(&term.name)
        );
        let image = self.images.image_html(term.id)?;

        let text = if item.block.link {
            let rel = if self.terms.using_permalinks() {
                "category tag"
            } else {
                "category"
            };
            let url = self.terms.permalink(term, &self.home)?;
            format!(
                r#"<a href="{}" rel="{rel}">{image}{name}</a>"#,
                html_escape::encode_double_quoted_attribute(&url)
            )
        } else {
            format!("{image}{name}")
        };

        // `cn_category` keeps its underscore for older stylesheets.
        let classes = class_names(&format!(
            "cn-category-name cn_category cn-category-{} cn-category-{} cn-category-image-block",
            term.id, term.slug
        ));

        let tag = match tag_name(&item.block.item_tag) {
            tag if tag.is_empty() => FALLBACK_ITEM_TAG.to_string(),
            tag => tag,
        };

        Ok(format!(r#"<{tag} class="{classes}">{text}</{tag}>"#))
    }

    fn filter_items_class(&self, mut classes: Vec<String>) -> Vec<String> {
        classes.push(IMAGE_CONTAINER_CLASS.to_string());
        classes
    }
}

/// Keeps ASCII alphanumerics only.
fn tag_name(tag: &str) -> String {
    tag.chars().filter(char::is_ascii_alphanumeric).collect()
}

/// Strips characters outside `[A-Za-z0-9_-]` from each class and drops empties.
fn class_names(classes: &str) -> String {
    classes
        .split_whitespace()
        .map(|class| {
            class
                .chars()
                .filter(|c| c.is_ascii_alphanumeric() || *c == '-' || *c == '_')
                .collect::<String>()
        })
        .filter(|class| !class.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
