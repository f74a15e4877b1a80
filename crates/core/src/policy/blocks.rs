//! Content blocks: one dedicated block per split category, rendered on the
//! public entry output.

use std::fmt;
use std::sync::Arc;

use lazy_static::lazy_static;
use log::debug;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::constants::{CATEGORY_ID_PREFIX, IMAGE_GRID_SUFFIX};
use crate::errors::Result;
use crate::host::{
    CategoryBlockAtts, CategoryImageProviderTrait, EntryOutputTrait, RequestContext,
};
use crate::resolver::SplitCategorySet;
use crate::terms::{CategoryId, TermRepositoryTrait};

use super::{CategoryExclusionFilter, ImageGridItemFilter};

lazy_static! {
    static ref TRAILING_ID_REGEX: Regex = Regex::new(r"(\d+)$").expect("Invalid regex pattern");
    static ref IMAGE_GRID_ID_REGEX: Regex =
        Regex::new(r"(\d+)-as-image-grid$").expect("Invalid regex pattern");
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlockVariant {
    List,
    ImageGrid,
}

impl BlockVariant {
    pub fn suffix(&self) -> &'static str {
        match self {
            BlockVariant::List => "",
            BlockVariant::ImageGrid => IMAGE_GRID_SUFFIX,
        }
    }
}

/// Typed content block key: `category-id-{id}[-as-image-grid]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BlockKey {
    pub category_id: CategoryId,
    pub variant: BlockVariant,
}

impl BlockKey {
    pub fn new(category_id: CategoryId, variant: BlockVariant) -> Self {
        Self {
            category_id,
            variant,
        }
    }

    /// Reads a key coming from the host's string-keyed block events.
    ///
    /// Only the exact names this crate registers are accepted, so the key
    /// must carry the `category-id-` prefix and an id without leading zeros.
    pub fn from_block_key(key: &str) -> Option<Self> {
        let variant = if key.ends_with(IMAGE_GRID_SUFFIX) {
            BlockVariant::ImageGrid
        } else {
            BlockVariant::List
        };

        let block_key = Self::new(match_category_id_from_block_key(key, variant)?, variant);
        (block_key.to_string() == key).then_some(block_key)
    }
}

impl fmt::Display for BlockKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}{}",
            CATEGORY_ID_PREFIX,
            self.category_id,
            self.variant.suffix()
        )
    }
}

/// Extracts the trailing category id of a block key, before the variant's
/// suffix. `None` means the key is not one of ours and must not be rendered.
pub fn match_category_id_from_block_key(key: &str, variant: BlockVariant) -> Option<CategoryId> {
    let regex = match variant {
        BlockVariant::List => &*TRAILING_ID_REGEX,
        BlockVariant::ImageGrid => &*IMAGE_GRID_ID_REGEX,
    };

    let digits = regex.captures(key)?.get(1)?.as_str();
    digits.parse().ok()
}

pub enum BlockRenderer {
    CategoryList,
    ImageGrid {
        images: Arc<dyn CategoryImageProviderTrait>,
    },
}

impl fmt::Debug for BlockRenderer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BlockRenderer::CategoryList => f.write_str("CategoryList"),
            BlockRenderer::ImageGrid { .. } => f.write_str("ImageGrid"),
        }
    }
}

#[derive(Debug)]
pub struct RegisteredBlock {
    pub key: BlockKey,
    /// Shown in the content block settings.
    pub label: String,
    pub renderer: BlockRenderer,
}

/// Blocks registered for the current request, in configuration order.
pub struct ContentBlockRegistry {
    blocks: Vec<RegisteredBlock>,
    terms: Arc<dyn TermRepositoryTrait>,
}

impl ContentBlockRegistry {
    pub fn new(terms: Arc<dyn TermRepositoryTrait>) -> Self {
        Self {
            blocks: Vec::new(),
            terms,
        }
    }

    /// Registers a block; a block with the same key is replaced.
    pub fn register(&mut self, block: RegisteredBlock) {
        match self.blocks.iter_mut().find(|b| b.key == block.key) {
            Some(existing) => *existing = block,
            None => self.blocks.push(block),
        }
    }

    pub fn get(&self, key: &BlockKey) -> Option<&RegisteredBlock> {
        self.blocks.iter().find(|b| b.key == *key)
    }

    pub fn contains(&self, key: &BlockKey) -> bool {
        self.get(key).is_some()
    }

    pub fn blocks(&self) -> &[RegisteredBlock] {
        &self.blocks
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Adds the registered blocks to the host's `key => label` block options,
    /// overwriting labels of keys already present.
    pub fn extend_options(&self, mut options: Vec<(String, String)>) -> Vec<(String, String)> {
        for block in &self.blocks {
            let key = block.key.to_string();
            match options.iter_mut().find(|(k, _)| *k == key) {
                Some(option) => option.1 = block.label.clone(),
                None => options.push((key, block.label.clone())),
            }
        }
        options
    }

    /// Renders a registered block. Unregistered keys render nothing.
    ///
    /// The exclusion filter is suspended for the duration of the render so the
    /// block can show its own subtree; the override is released on every exit
    /// path.
    pub fn render(
        &self,
        key: &BlockKey,
        entry: &mut dyn EntryOutputTrait,
        exclusion: &CategoryExclusionFilter,
    ) -> Result<Option<String>> {
        let Some(block) = self.get(key) else {
            return Ok(None);
        };

        let atts = CategoryBlockAtts::subtree_list(key.category_id);
        let _override = exclusion.suspend();

        let html = match &block.renderer {
            BlockRenderer::CategoryList => entry.render_category_block(&atts, exclusion)?,
            BlockRenderer::ImageGrid { images } => {
                let grid = ImageGridItemFilter::new(
                    images.as_ref(),
                    self.terms.as_ref(),
                    entry.directory_home(),
                );
                entry.render_category_block(&atts, &grid)?
            }
        };

        Ok(Some(html))
    }
}

/// Registers `category-id-{id}` for every split category and, when the image
/// companion is available, `category-id-{id}-as-image-grid`.
pub fn build_content_block_registry(
    split_set: &SplitCategorySet,
    image_provider: Option<Arc<dyn CategoryImageProviderTrait>>,
    terms: Arc<dyn TermRepositoryTrait>,
    context: RequestContext,
) -> ContentBlockRegistry {
    let mut registry = ContentBlockRegistry::new(terms);

    for term in split_set {
        registry.register(RegisteredBlock {
            key: BlockKey::new(term.id, BlockVariant::List),
            label: term.name.clone(),
            renderer: BlockRenderer::CategoryList,
        });

        if let Some(images) = &image_provider {
            let label = if context.is_admin() {
                format!("{} as Image Grid", term.name)
            } else {
                term.name.clone()
            };

            registry.register(RegisteredBlock {
                key: BlockKey::new(term.id, BlockVariant::ImageGrid),
                label,
                renderer: BlockRenderer::ImageGrid {
                    images: Arc::clone(images),
                },
            });
        }
    }

    debug!("Registered {} split category content blocks", registry.len());

    registry
}
